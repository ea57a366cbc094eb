use std::io::{self, Write};

use bandcode_core::format::{
    format_capacitor_temp_coefficient, format_capacitor_tolerance, format_range,
    format_resistor_temp_coefficient, format_resistor_tolerance, format_voltage,
    format_with_base,
};
use bandcode_core::{Advisory, CapacitorResult, Color, DecodedComponent, ResistorResult};
use colored::{ColoredString, Colorize};

/// A small block of the band's own color.
pub fn swatch(color: Color) -> ColoredString {
    let (r, g, b) = color.info().swatch;
    "   ".on_truecolor(r, g, b)
}

pub fn band_list(bands: impl IntoIterator<Item = Color>) -> String {
    bands
        .into_iter()
        .map(|c| format!("{} {}", swatch(c), c.name()))
        .collect::<Vec<_>>()
        .join("  ")
}

fn field<W: Write>(w: &mut W, label: &str, value: impl std::fmt::Display) -> io::Result<()> {
    writeln!(w, "  {:<13} {}", format!("{label}:").bold(), value)
}

pub fn write_capacitor_result<W: Write>(w: &mut W, result: &CapacitorResult) -> io::Result<()> {
    let reading = &result.reading;
    writeln!(
        w,
        "{} {}",
        "Capacitor".green().bold(),
        format!("({}, {}-band)", reading.capacitor_type, reading.band_count).dimmed()
    )?;
    field(
        w,
        "Bands",
        band_list(reading.bands().filter_map(|(_, color)| color)),
    )?;
    field(
        w,
        "Capacitance",
        format_with_base(&result.capacitance).cyan().bold(),
    )?;
    let mut tolerance = format_capacitor_tolerance(result);
    if result.tolerance.is_absolute() {
        tolerance = format!("{tolerance} {}", "(absolute, 10 pF or less)".dimmed());
    }
    field(w, "Tolerance", tolerance)?;
    field(w, "Range", format_range(&result.min, &result.max))?;
    if result.voltage.is_some() {
        field(w, "Voltage", format_voltage(result.voltage))?;
    }
    if result.temp_coefficient.is_some() {
        field(
            w,
            "Temp coeff",
            format_capacitor_temp_coefficient(result.temp_coefficient),
        )?;
    }
    Ok(())
}

pub fn write_resistor_result<W: Write>(w: &mut W, result: &ResistorResult) -> io::Result<()> {
    writeln!(
        w,
        "{} {}",
        "Resistor".green().bold(),
        format!("({}-band)", result.band_count()).dimmed()
    )?;
    field(w, "Bands", band_list(result.layout.bands()))?;
    field(
        w,
        "Resistance",
        format_with_base(&result.resistance).cyan().bold(),
    )?;
    field(w, "Tolerance", format_resistor_tolerance(result))?;
    field(w, "Range", format_range(&result.min, &result.max))?;
    if result.layout.temp_coefficient().is_some() {
        field(
            w,
            "Temp coeff",
            format_resistor_temp_coefficient(result.temp_coefficient),
        )?;
    }
    Ok(())
}

pub fn write_component<W: Write>(w: &mut W, component: &DecodedComponent) -> io::Result<()> {
    match component {
        DecodedComponent::Capacitor(result) => write_capacitor_result(w, result),
        DecodedComponent::Resistor(result) => write_resistor_result(w, result),
    }
}

pub fn warn_advisory(advisory: &Advisory) {
    eprintln!("{} {advisory}", "Warning:".yellow());
}

#[cfg(test)]
mod tests {
    use super::*;
    use bandcode_core::{CapacitorReading, CapacitorType, decode_capacitor};

    #[test]
    fn capacitor_block_lists_every_field() {
        colored::control::set_override(false);
        let reading = CapacitorReading::from_bands(
            CapacitorType::K,
            &[
                Color::Red,
                Color::Violet,
                Color::Orange,
                Color::Brown,
                Color::Orange,
            ],
        )
        .unwrap();
        let result = decode_capacitor(&reading).unwrap();

        let mut out = Vec::new();
        write_capacitor_result(&mut out, &result).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("Capacitor (Type K (Mica), 5-band)"), "{out}");
        assert!(out.contains("27 nF (27000 pF)"), "{out}");
        assert!(out.contains("26.73 nF – 27.27 nF"), "{out}");
        assert!(out.contains("400 V"), "{out}");
        assert!(out.contains("-150 × 10⁻⁶ /°C"), "{out}");
        assert!(out.contains("Red  "), "{out}");
    }

    #[test]
    fn small_capacitor_shows_absolute_tolerance() {
        colored::control::set_override(false);
        let reading = CapacitorReading::from_bands(
            CapacitorType::J,
            &[Color::Brown, Color::Black, Color::Black, Color::Brown],
        )
        .unwrap();
        let result = decode_capacitor(&reading).unwrap();

        let mut out = Vec::new();
        write_capacitor_result(&mut out, &result).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("±0.1 pF (absolute, 10 pF or less)"), "{out}");
        assert!(out.contains("9.9 pF – 10.1 pF"), "{out}");
    }
}
