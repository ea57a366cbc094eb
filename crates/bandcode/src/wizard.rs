use std::fmt;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use bandcode_core::{
    BandRole, CapacitorBandCount, CapacitorReading, CapacitorType, Color, ComponentKind,
    DecodeError, DecodedComponent, NOTE_LIMIT, ResistorBandCount, ResistorReading,
    capacitor_band_colors, capacitor_band_role, capacitor_tolerance_advisory, decode_capacitor,
    decode_resistor, parse_color, resistor_band_colors, resistor_band_role,
    validate_capacitor_band, validate_resistor_band,
};
use colored::Colorize;
use inquire::validator::Validation;
use inquire::{Confirm, CustomUserError, InquireError, Select, Text};

use crate::autocomplete::ColorCompleter;
use crate::config::Config;
use crate::export::{ExportError, export_to_path};
use crate::render;
use crate::session::Session;

/// A labelled option in a `Select` prompt.
struct Choice<T> {
    value: T,
    label: String,
}

impl<T> Choice<T> {
    fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

impl<T> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Review {
    Decode,
    Edit,
    StartOver,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Action {
    Note,
    Edit,
    Another,
    Export,
    Quit,
}

fn cancelled(e: InquireError) -> anyhow::Error {
    anyhow!("Prompt cancelled: {}", e)
}

/// Prompt for one of `choices`, starting on the entry at `start`.
fn select<T>(message: &str, choices: Vec<Choice<T>>, start: usize) -> Result<T> {
    let choice = Select::new(message, choices)
        .with_starting_cursor(start)
        .with_page_size(12)
        .prompt()
        .map_err(cancelled)?;
    Ok(choice.value)
}

/// Prompts need a terminal on both ends.
fn is_interactive() -> bool {
    io::stdin().is_terminal() && io::stdout().is_terminal()
}

pub fn execute(config: &Config) -> Result<()> {
    if !is_interactive() {
        anyhow::bail!(
            "The wizard needs an interactive terminal. Use `bandcode decode` for one-shot decoding."
        );
    }
    Wizard::new(config)?.run()
}

struct Wizard {
    capacitor_type: CapacitorType,
    capacitor_bands: CapacitorBandCount,
    resistor_bands: ResistorBandCount,
    export_path: PathBuf,
    session: Session,
}

impl Wizard {
    fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            capacitor_type: config.capacitor_type,
            capacitor_bands: config.capacitor_band_count()?,
            resistor_bands: config.resistor_band_count()?,
            export_path: config.export_path.clone(),
            session: Session::new(),
        })
    }

    fn run(mut self) -> Result<()> {
        println!("{}", "Color band decoder".bold());
        println!("{}", "Type a color name for each band. Tab completes.".dimmed());

        loop {
            let component = select(
                "Component:",
                vec![
                    Choice::new(ComponentKind::Capacitor, ComponentKind::Capacitor.label()),
                    Choice::new(ComponentKind::Resistor, ComponentKind::Resistor.label()),
                ],
                0,
            )?;

            let decoded = match component {
                ComponentKind::Capacitor => self.capacitor()?,
                ComponentKind::Resistor => self.resistor()?,
            };
            let Some(decoded) = decoded else {
                log::debug!("Starting over");
                continue;
            };
            self.show(decoded)?;

            if !self.menu()? {
                return Ok(());
            }
        }
    }

    fn show(&mut self, component: DecodedComponent) -> Result<()> {
        println!();
        render::write_component(&mut io::stdout().lock(), &component)?;
        println!();
        self.session.show(component);
        Ok(())
    }

    /// Returns false when the user quits.
    fn menu(&mut self) -> Result<bool> {
        loop {
            let action = select(
                "What next?",
                vec![
                    Choice::new(Action::Note, "Add or edit a note on this component"),
                    Choice::new(Action::Edit, "Edit a band of this component"),
                    Choice::new(Action::Another, "Decode another component"),
                    Choice::new(
                        Action::Export,
                        format!(
                            "Export history to CSV ({} recorded)",
                            self.session.history().len()
                        ),
                    ),
                    Choice::new(Action::Quit, "Quit"),
                ],
                0,
            )?;

            match action {
                Action::Note => self.edit_note()?,
                Action::Edit => self.edit_current()?,
                Action::Another => return Ok(true),
                Action::Export => self.export()?,
                Action::Quit => {
                    if self.confirm_quit()? {
                        return Ok(false);
                    }
                }
            }
        }
    }

    fn edit_note(&mut self) -> Result<()> {
        let current = self
            .session
            .current_entry()
            .map(|entry| entry.note().to_string())
            .unwrap_or_default();
        let note = Text::new("Note:")
            .with_initial_value(&current)
            .with_help_message("Up to 200 characters")
            .with_validator(
                |input: &str| -> Result<Validation, CustomUserError> {
                    let len = input.trim().chars().count();
                    if len > NOTE_LIMIT {
                        Ok(Validation::Invalid(
                            format!("Note is {len} characters long (limit is {NOTE_LIMIT})")
                                .into(),
                        ))
                    } else {
                        Ok(Validation::Valid)
                    }
                },
            )
            .prompt()
            .map_err(cancelled)?;
        self.session.set_note(&note)?;
        println!("{} Note saved", "✓".green());
        Ok(())
    }

    /// Re-enter one band of the result on screen and decode it again.
    ///
    /// The edited part replaces the current result. A copy already kept in the history
    /// stays as it was.
    fn edit_current(&mut self) -> Result<()> {
        let Some(component) = self.session.current().cloned() else {
            return Ok(());
        };
        let edited = match component {
            DecodedComponent::Capacitor(result) => {
                let mut reading = result.reading;
                let band = pick_band(reading.band_count.get(), |b| reading.band(b))?;
                enter_capacitor_band(&mut reading, band)?;
                review_capacitor(reading)?
            }
            DecodedComponent::Resistor(result) => {
                let mut reading = ResistorReading::from_bands(&result.layout.bands())?;
                let band = pick_band(reading.band_count.get(), |b| reading.band(b))?;
                enter_resistor_band(&mut reading, band)?;
                review_resistor(reading)?
            }
        };
        match edited {
            Some(component) => self.show(component),
            None => Ok(()),
        }
    }

    fn export(&mut self) -> Result<()> {
        let default = self.export_path.display().to_string();
        let path = Text::new("Export to:")
            .with_default(&default)
            .prompt()
            .map_err(cancelled)?;
        let path = PathBuf::from(path.trim());

        self.session.record_current();
        let history = self.session.history();
        match export_to_path(history, &path) {
            Ok(()) => {
                log::debug!("Exported {} entries to {}", history.len(), path.display());
                println!(
                    "{} Exported {} component(s) to {}",
                    "✓".green(),
                    history.len(),
                    path.display()
                );
                self.export_path = path;
                self.session.mark_exported();
            }
            Err(ExportError::Empty) => println!("{}", "Nothing to export yet".yellow()),
            Err(e) => eprintln!("{} {e}", "Error:".red()),
        }
        Ok(())
    }

    fn confirm_quit(&self) -> Result<bool> {
        if !self.session.has_unexported() {
            return Ok(true);
        }
        Confirm::new("Quit? Unexported results will be lost.")
            .with_default(true)
            .prompt()
            .map_err(cancelled)
    }

    fn capacitor(&mut self) -> Result<Option<DecodedComponent>> {
        let start = CapacitorType::ALL
            .iter()
            .position(|t| *t == self.capacitor_type)
            .unwrap_or(0);
        let capacitor_type = select(
            "Capacitor type:",
            CapacitorType::ALL
                .into_iter()
                .map(|t| Choice::new(t, t.to_string()))
                .collect(),
            start,
        )?;
        self.capacitor_type = capacitor_type;

        let start = CapacitorBandCount::ALL
            .iter()
            .position(|c| *c == self.capacitor_bands)
            .unwrap_or(0);
        let count = select(
            "Number of bands:",
            vec![
                Choice::new(CapacitorBandCount::Three, "3 bands (value only, ±20%)"),
                Choice::new(CapacitorBandCount::Four, "4 bands (value and tolerance)"),
                Choice::new(
                    CapacitorBandCount::Five,
                    "5 bands (value, tolerance, voltage and temperature coefficient)",
                ),
            ],
            start,
        )?;

        let mut reading = CapacitorReading::new(capacitor_type, count);
        while let Some(band) = reading.next_band() {
            enter_capacitor_band(&mut reading, band)?;
        }
        review_capacitor(reading)
    }

    fn resistor(&mut self) -> Result<Option<DecodedComponent>> {
        let start = ResistorBandCount::ALL
            .iter()
            .position(|c| *c == self.resistor_bands)
            .unwrap_or(0);
        let count = select(
            "Number of bands:",
            vec![
                Choice::new(ResistorBandCount::Four, "4 bands (2 digits)"),
                Choice::new(ResistorBandCount::Five, "5 bands (3 digits)"),
                Choice::new(
                    ResistorBandCount::Six,
                    "6 bands (3 digits and temperature coefficient)",
                ),
            ],
            start,
        )?;

        let mut reading = ResistorReading::new(count);
        while let Some(band) = reading.next_band() {
            enter_resistor_band(&mut reading, band)?;
        }
        review_resistor(reading)
    }
}

/// Review loop for a filled-in capacitor. `None` means start over.
fn review_capacitor(mut reading: CapacitorReading) -> Result<Option<DecodedComponent>> {
    let count = reading.band_count;
    loop {
        print_review(
            reading
                .bands()
                .map(|(band, color)| (band, capacitor_band_role(band, count), color)),
        );
        match review()? {
            Review::Decode => break,
            Review::StartOver => return Ok(None),
            Review::Edit => {
                let band = pick_band(count.get(), |b| reading.band(b))?;
                enter_capacitor_band(&mut reading, band)?;
            }
        }
    }
    Ok(Some(decode_capacitor(&reading)?.into()))
}

/// Review loop for a filled-in resistor. `None` means start over.
fn review_resistor(mut reading: ResistorReading) -> Result<Option<DecodedComponent>> {
    let count = reading.band_count;
    loop {
        print_review(
            reading
                .bands()
                .map(|(band, color)| (band, resistor_band_role(band, count), color)),
        );
        match review()? {
            Review::Decode => break,
            Review::StartOver => return Ok(None),
            Review::Edit => {
                let band = pick_band(count.get(), |b| reading.band(b))?;
                enter_resistor_band(&mut reading, band)?;
            }
        }
    }
    Ok(Some(decode_resistor(&reading)?.into()))
}

fn enter_capacitor_band(reading: &mut CapacitorReading, band: u8) -> Result<()> {
    let capacitor_type = reading.capacitor_type;
    let count = reading.band_count;
    let role = capacitor_band_role(band, count)
        .ok_or_else(|| anyhow!("Band {band} is not printed on a {count}-band capacitor"))?;
    let color = prompt_band(
        band,
        count.get(),
        role,
        capacitor_band_colors(band, capacitor_type, count),
        move |color| validate_capacitor_band(band, color, capacitor_type, count),
    )?;
    reading.set_band(band, color)?;

    if band <= 4
        && let Some(tolerance) = reading.band(4)
        && let Ok(pf) = reading.capacitance_pf()
        && let Some(advisory) = capacitor_tolerance_advisory(tolerance, pf)
    {
        render::warn_advisory(&advisory);
    }
    Ok(())
}

fn enter_resistor_band(reading: &mut ResistorReading, band: u8) -> Result<()> {
    let count = reading.band_count;
    let role = resistor_band_role(band, count)
        .ok_or_else(|| anyhow!("Band {band} is not printed on a {count}-band resistor"))?;
    let color = prompt_band(
        band,
        count.get(),
        role,
        resistor_band_colors(band, count),
        move |color| validate_resistor_band(band, color, count),
    )?;
    reading.set_band(band, color)?;
    Ok(())
}

/// Ask for one band color, re-prompting until `check` accepts it.
fn prompt_band<F>(
    band: u8,
    count: u8,
    role: BandRole,
    candidates: Vec<Color>,
    check: F,
) -> Result<Color>
where
    F: Fn(Color) -> Result<(), DecodeError> + Clone + 'static,
{
    let message = format!("Band {band} of {count} ({}):", role.name());
    let input = Text::new(&message)
        .with_help_message(role.description())
        .with_autocomplete(ColorCompleter::new(candidates))
        .with_validator(
            move |input: &str| -> Result<Validation, CustomUserError> {
                let Some(color) = parse_color(input) else {
                    return Ok(Validation::Invalid(
                        format!("Unknown color '{}'", input.trim()).into(),
                    ));
                };
                Ok(match check(color) {
                    Ok(()) => Validation::Valid,
                    Err(e) => Validation::Invalid(e.to_string().into()),
                })
            },
        )
        .prompt()
        .map_err(cancelled)?;

    let color = parse_color(&input).ok_or_else(|| anyhow!("Unknown color '{}'", input.trim()))?;
    log::debug!("Band {band}: {color}");
    Ok(color)
}

fn print_review(bands: impl Iterator<Item = (u8, Option<BandRole>, Option<Color>)>) {
    println!();
    println!("{}", "Review".bold());
    for (band, role, color) in bands {
        let role = role.map(BandRole::name).unwrap_or_default();
        let color = match color {
            Some(c) => format!("{} {}", render::swatch(c), c.name()),
            None => "-".to_string(),
        };
        println!("  Band {band}  {role:<24} {color}");
    }
    println!();
}

fn review() -> Result<Review> {
    select(
        "Decode these bands?",
        vec![
            Choice::new(Review::Decode, "Decode"),
            Choice::new(Review::Edit, "Edit a band"),
            Choice::new(Review::StartOver, "Start over"),
        ],
        0,
    )
}

fn pick_band(count: u8, current: impl Fn(u8) -> Option<Color>) -> Result<u8> {
    let choices = (1..=count)
        .map(|band| {
            let color = current(band).map(Color::name).unwrap_or("-");
            Choice::new(band, format!("Band {band}: {color}"))
        })
        .collect();
    select("Which band?", choices, 0)
}
