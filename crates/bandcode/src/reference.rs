use std::io::{self, Write};

use bandcode_core::units::fmt_significant;
use bandcode_core::{
    CapacitorType, Color, capacitor_temp_coefficient, capacitor_tolerance, resistor_multiplier,
    resistor_temp_coefficient, resistor_tolerance,
};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, Color as CellColor, ContentArrangement, Table};
use rust_decimal::Decimal;

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn multiplier(value: Decimal) -> String {
    format!("×{}", fmt_significant(value))
}

pub fn color_table() -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Color",
        "Digit",
        "Cap multiplier",
        "Cap tolerance",
        "Cap TC (ppm/°C)",
        "Res multiplier",
        "Res tolerance",
        "Res TC (ppm/°C)",
    ]);

    for color in Color::ALL {
        let info = color.info();
        let (r, g, b) = info.swatch;
        let cap_tolerance = capacitor_tolerance(color).map(|t| {
            let percent = if t.percent_high == t.percent_low {
                format!("±{}%", fmt_significant(t.percent_high))
            } else {
                format!(
                    "+{}% / -{}%",
                    fmt_significant(t.percent_high),
                    fmt_significant(t.percent_low)
                )
            };
            match t.absolute_pf {
                Some(abs) => format!("{percent} (±{} pF)", fmt_significant(abs)),
                None => percent,
            }
        });
        let res_tolerance = resistor_tolerance(color)
            .map(|t| format!("±{}% ({})", fmt_significant(t.percent), t.class));

        table.add_row(vec![
            Cell::new(info.name).fg(CellColor::Rgb { r, g, b }),
            Cell::new(opt(info.digit)),
            Cell::new(multiplier(info.multiplier)),
            Cell::new(opt(cap_tolerance)),
            Cell::new(opt(capacitor_temp_coefficient(color))),
            Cell::new(opt(resistor_multiplier(color).map(multiplier))),
            Cell::new(opt(res_tolerance)),
            Cell::new(opt(resistor_temp_coefficient(color))),
        ]);
    }
    table
}

pub fn type_table() -> Table {
    let mut table = new_table();
    let mut header = vec!["Type".to_string(), "Name".to_string()];
    header.extend(Color::ALL[..10].iter().map(|c| c.name().to_string()));
    table.set_header(header);

    for capacitor_type in CapacitorType::ALL {
        let info = capacitor_type.info();
        let mut row = vec![capacitor_type.code().to_string(), info.name.to_string()];
        row.extend(Color::ALL[..10].iter().map(|color| {
            info.voltage(*color)
                .map(|v| format!("{} V", fmt_significant(v)))
                .unwrap_or_else(|| "-".to_string())
        }));
        table.add_row(row);
    }
    table
}

pub fn write_colors<W: Write>(mut writer: W) -> io::Result<()> {
    writeln!(writer, "{}", color_table())
}

pub fn write_types<W: Write>(mut writer: W) -> io::Result<()> {
    writeln!(writer, "{}", type_table())?;
    writeln!(
        writer,
        "Voltage codes apply to band 5 of 5-band capacitors. A Black band 5 is read as unrated."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_table_has_a_row_per_color() {
        let mut table = color_table();
        table.set_content_arrangement(ContentArrangement::Disabled);
        assert_eq!(table.row_iter().count(), 12);
        let rendered = table.to_string();
        assert!(rendered.contains("+80% / -20%"));
        assert!(rendered.contains("±1% (±0.1 pF)"));
        assert!(rendered.contains("ultra precision"));
    }

    #[test]
    fn type_table_shows_fractional_voltages() {
        let mut table = type_table();
        table.set_content_arrangement(ContentArrangement::Disabled);
        assert_eq!(table.row_iter().count(), 5);
        let rendered = table.to_string();
        assert!(rendered.contains("Dipped Tantalum"));
        assert!(rendered.contains("1.6 V"));
        assert!(rendered.contains("6.3 V"));
    }
}
