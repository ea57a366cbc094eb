use std::io::{self, Write};

use anyhow::Result;
use bandcode_core::{
    CapacitorReading, CapacitorType, Color, DecodedComponent, ResistorReading, decode_capacitor,
    decode_resistor,
};
use clap::{Args, Subcommand, ValueEnum};

use crate::config::Config;
use crate::render;

#[derive(ValueEnum, Debug, Clone, Default)]
pub enum DecodeFormat {
    #[default]
    Text,
    Json,
}

impl std::fmt::Display for DecodeFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeFormat::Text => write!(f, "text"),
            DecodeFormat::Json => write!(f, "json"),
        }
    }
}

fn color_arg(s: &str) -> Result<Color, String> {
    s.parse().map_err(|e: bandcode_core::DecodeError| e.to_string())
}

fn capacitor_type_arg(s: &str) -> Result<CapacitorType, String> {
    s.parse().map_err(|e: bandcode_core::DecodeError| e.to_string())
}

#[derive(Args, Debug)]
#[command(about = "Decode a set of color bands without prompts")]
pub struct DecodeArgs {
    #[command(subcommand)]
    pub component: DecodeCommand,

    /// Output format
    #[arg(short, long, global = true, default_value_t = DecodeFormat::Text)]
    pub format: DecodeFormat,
}

#[derive(Subcommand, Debug)]
pub enum DecodeCommand {
    /// Decode a 3, 4 or 5-band capacitor
    #[command(alias = "c")]
    Capacitor {
        /// Capacitor type (J, K, L, M or N), defaults to the configured type
        #[arg(short = 't', long = "type", value_parser = capacitor_type_arg)]
        capacitor_type: Option<CapacitorType>,

        /// Band colors in order, separated by spaces or commas
        #[arg(
            value_name = "COLOR",
            required = true,
            value_delimiter = ',',
            value_parser = color_arg
        )]
        colors: Vec<Color>,
    },

    /// Decode a 4, 5 or 6-band resistor
    #[command(alias = "r")]
    Resistor {
        /// Band colors in order, separated by spaces or commas
        #[arg(
            value_name = "COLOR",
            required = true,
            value_delimiter = ',',
            value_parser = color_arg
        )]
        colors: Vec<Color>,
    },
}

pub fn execute(args: DecodeArgs, config: &Config) -> Result<()> {
    let component: DecodedComponent = match args.component {
        DecodeCommand::Capacitor {
            capacitor_type,
            colors,
        } => {
            let capacitor_type = capacitor_type.unwrap_or(config.capacitor_type);
            let reading = CapacitorReading::from_bands(capacitor_type, &colors)?;
            for advisory in reading.validate()? {
                render::warn_advisory(&advisory);
            }
            decode_capacitor(&reading)?.into()
        }
        DecodeCommand::Resistor { colors } => {
            let reading = ResistorReading::from_bands(&colors)?;
            reading.validate()?;
            decode_resistor(&reading)?.into()
        }
    };
    log::debug!("Decoded {}", component.kind());

    let mut writer = io::stdout().lock();
    match args.format {
        DecodeFormat::Json => writeln!(writer, "{}", serde_json::to_string_pretty(&component)?)?,
        DecodeFormat::Text => render::write_component(&mut writer, &component)?,
    };

    Ok(())
}
