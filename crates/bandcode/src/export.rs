use std::fs::File;
use std::io::Write;
use std::path::Path;

use bandcode_core::units::fmt_significant;
use bandcode_core::{
    CapacitorResult, Color, ComponentEntry, DecodedComponent, ResistorResult, Tolerance,
};

const HEADER: [&str; 18] = [
    "Timestamp",
    "Component Type",
    "Cap Type",
    "Band Count",
    "Band 1",
    "Band 2",
    "Band 3",
    "Band 4",
    "Band 5",
    "Band 6",
    "Value",
    "Unit",
    "Tolerance (%)",
    "Min Value",
    "Max Value",
    "Voltage (V)",
    "Temp Coefficient",
    "Note",
];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Errors that can occur while exporting the session history
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("No components to export")]
    Empty,

    #[error("Failed to write CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Write a header and one row per entry.
pub fn export_history<W: Write>(entries: &[ComponentEntry], writer: W) -> Result<(), ExportError> {
    if entries.is_empty() {
        return Err(ExportError::Empty);
    }

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;
    for entry in entries {
        csv_writer.write_record(record(entry))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Create or overwrite `path` with the exported history.
pub fn export_to_path(entries: &[ComponentEntry], path: &Path) -> Result<(), ExportError> {
    if entries.is_empty() {
        return Err(ExportError::Empty);
    }
    let file = File::create(path)?;
    export_history(entries, file)
}

fn record(entry: &ComponentEntry) -> Vec<String> {
    let timestamp = entry.recorded_at.format(TIMESTAMP_FORMAT).to_string();
    let mut row = match &entry.component {
        DecodedComponent::Capacitor(result) => capacitor_record(result),
        DecodedComponent::Resistor(result) => resistor_record(result),
    };
    row.insert(0, timestamp);
    row.push(entry.note().to_string());
    row
}

fn band_names(bands: impl IntoIterator<Item = Option<Color>>) -> Vec<String> {
    let mut names: Vec<String> = bands
        .into_iter()
        .map(|band| band.map(|c| c.name().to_string()).unwrap_or_default())
        .collect();
    names.resize(6, String::new());
    names
}

fn capacitor_record(result: &CapacitorResult) -> Vec<String> {
    let reading = &result.reading;
    let tolerance = match result.tolerance {
        Tolerance::Percentage { high, low } if high == low => fmt_significant(high),
        Tolerance::Percentage { high, low } => {
            format!("+{}/-{}", fmt_significant(high), fmt_significant(low))
        }
        Tolerance::Absolute { .. } => String::new(),
    };

    let mut row = vec![
        "Capacitor".to_string(),
        reading.capacitor_type.code().to_string(),
        reading.band_count.to_string(),
    ];
    row.extend(band_names((1..=5).map(|band| reading.band(band))));
    row.extend([
        fmt_significant(result.capacitance.value),
        result.capacitance.unit.to_string(),
        tolerance,
        result.min.to_string(),
        result.max.to_string(),
        result.voltage.map(fmt_significant).unwrap_or_default(),
        result
            .temp_coefficient
            .map(|tc| tc.to_string())
            .unwrap_or_default(),
    ]);
    row
}

fn resistor_record(result: &ResistorResult) -> Vec<String> {
    let mut row = vec![
        "Resistor".to_string(),
        String::new(),
        result.band_count().to_string(),
    ];
    row.extend(band_names(result.layout.bands().into_iter().map(Some)));
    row.extend([
        fmt_significant(result.resistance.value),
        result.resistance.unit.to_string(),
        fmt_significant(result.tolerance_percent),
        result.min.to_string(),
        result.max.to_string(),
        String::new(),
        result
            .temp_coefficient
            .map(|tc| format!("{tc} ppm/°C"))
            .unwrap_or_default(),
    ]);
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use bandcode_core::{
        CapacitorReading, CapacitorType, ResistorReading, decode_capacitor, decode_resistor,
    };
    use chrono::{Local, TimeZone};

    fn timestamp() -> chrono::DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
    }

    fn capacitor_entry(capacitor_type: CapacitorType, bands: &[Color]) -> ComponentEntry {
        let reading = CapacitorReading::from_bands(capacitor_type, bands).unwrap();
        ComponentEntry::with_timestamp(decode_capacitor(&reading).unwrap(), timestamp())
    }

    fn resistor_entry(bands: &[Color]) -> ComponentEntry {
        let reading = ResistorReading::from_bands(bands).unwrap();
        ComponentEntry::with_timestamp(decode_resistor(&reading).unwrap(), timestamp())
    }

    fn export(entries: &[ComponentEntry]) -> Vec<csv::StringRecord> {
        let mut out = Vec::new();
        export_history(entries, &mut out).unwrap();
        let mut reader = csv::Reader::from_reader(out.as_slice());
        assert_eq!(
            reader.headers().unwrap().iter().collect::<Vec<_>>(),
            HEADER.to_vec()
        );
        reader.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn empty_history_is_an_error() {
        assert!(matches!(
            export_history(&[], Vec::new()),
            Err(ExportError::Empty)
        ));
    }

    #[test]
    fn capacitor_row() {
        use Color::*;
        let mut entry = capacitor_entry(CapacitorType::K, &[Red, Violet, Orange, Brown, Orange]);
        entry.set_note("C4, bypass").unwrap();
        let rows = export(&[entry]);
        assert_eq!(
            rows[0].iter().collect::<Vec<_>>(),
            vec![
                "2024-03-09 14:05:07",
                "Capacitor",
                "K",
                "5",
                "Red",
                "Violet",
                "Orange",
                "Brown",
                "Orange",
                "",
                "27",
                "nF",
                "1",
                "26.73 nF",
                "27.27 nF",
                "400",
                "-150",
                "C4, bypass",
            ]
        );
    }

    #[test]
    fn small_capacitor_leaves_tolerance_empty() {
        use Color::*;
        let rows = export(&[capacitor_entry(CapacitorType::J, &[Brown, Black, Black])]);
        // 3-band parts default to ±20%
        assert_eq!(&rows[0][12], "20");
        assert_eq!(&rows[0][7], "");
        assert_eq!(&rows[0][8], "");

        let rows = export(&[capacitor_entry(CapacitorType::J, &[Brown, Black, Black, Red])]);
        assert_eq!(&rows[0][12], "");
        assert_eq!(&rows[0][13], "9.75 pF");
    }

    #[test]
    fn resistor_row() {
        use Color::*;
        let rows = export(&[
            resistor_entry(&[Yellow, Violet, Black, Gold]),
            resistor_entry(&[Brown, Black, Black, Red, Brown, Brown]),
        ]);
        assert_eq!(rows.len(), 2);

        let four = &rows[0];
        assert_eq!(&four[1], "Resistor");
        assert_eq!(&four[2], "");
        assert_eq!(&four[3], "4");
        assert_eq!(&four[7], "Gold");
        assert_eq!(&four[8], "");
        assert_eq!(&four[10], "47");
        assert_eq!(&four[11], "Ω");
        assert_eq!(&four[12], "5");
        assert_eq!(&four[15], "");
        assert_eq!(&four[16], "");

        let six = &rows[1];
        assert_eq!(&six[9], "Brown");
        assert_eq!(&six[10], "10");
        assert_eq!(&six[11], "kΩ");
        assert_eq!(&six[16], "100 ppm/°C");
    }

    #[test]
    fn export_to_path_overwrites() {
        use Color::*;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        std::fs::write(&path, "stale").unwrap();

        export_to_path(&[resistor_entry(&[Brown, Black, Red, Gold])], &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Timestamp,Component Type,"));
        assert!(!contents.contains("stale"));
        assert_eq!(contents.lines().count(), 2);
    }
}
