use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use env_logger::Env;

mod autocomplete;
mod config;
mod decode;
mod export;
mod reference;
mod render;
mod session;
mod wizard;

use config::Config;

#[derive(Parser)]
#[command(name = "bandcode")]
#[command(about = "Decode capacitor and resistor color bands", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short = 'd', long = "debug", global = true, hide = true)]
    debug: bool,

    /// Config file (defaults to ~/.bandcode/config.toml)
    #[arg(long = "config", global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive decoding session (the default)
    #[command(alias = "w")]
    Wizard,

    /// Decode a set of color bands without prompts
    #[command(alias = "d")]
    Decode(decode::DecodeArgs),

    /// Show the color code reference table
    Colors,

    /// Show capacitor types and their voltage codes
    Types,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "Error:".red());
        for cause in e.chain().skip(1) {
            eprintln!("  {cause}");
        }
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Default level depends on --debug, overridden by RUST_LOG
    let env = if cli.debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("error")
    };
    env_logger::Builder::from_env(env).init();

    let config = Config::load(cli.config.as_deref())?;
    log::debug!("Using {config:?}");

    match cli.command.unwrap_or(Commands::Wizard) {
        Commands::Wizard => wizard::execute(&config),
        Commands::Decode(args) => decode::execute(args, &config),
        Commands::Colors => Ok(reference::write_colors(io::stdout().lock())?),
        Commands::Types => Ok(reference::write_types(io::stdout().lock())?),
    }
}
