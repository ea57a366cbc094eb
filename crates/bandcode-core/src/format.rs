//! Human-readable renderings of decoded values.

use rust_decimal::Decimal;

use crate::capacitor::Tolerance;
use crate::units::{Quantity, ScaledUnit, fmt_significant};
use crate::{CapacitorResult, ResistorResult};

pub fn format_tolerance(tolerance: &Tolerance) -> String {
    match tolerance {
        Tolerance::Absolute { picofarads } => format!("±{} pF", fmt_significant(*picofarads)),
        Tolerance::Percentage { high, low } if high == low => {
            format!("±{}%", fmt_significant(*high))
        }
        Tolerance::Percentage { high, low } => format!(
            "+{}% / -{}%",
            fmt_significant(*high),
            fmt_significant(*low)
        ),
    }
}

/// "min – max", each bound in its own unit.
pub fn format_range<U: ScaledUnit>(min: &Quantity<U>, max: &Quantity<U>) -> String {
    format!("{min} – {max}")
}

pub fn format_voltage(voltage: Option<Decimal>) -> String {
    match voltage {
        Some(v) => format!("{} V", fmt_significant(v)),
        None => "N/A".to_string(),
    }
}

pub fn format_capacitor_temp_coefficient(ppm: Option<i32>) -> String {
    match ppm {
        Some(ppm) => format!("{ppm} × 10⁻⁶ /°C"),
        None => "N/A".to_string(),
    }
}

pub fn format_resistor_temp_coefficient(ppm: Option<u32>) -> String {
    match ppm {
        Some(ppm) => format!("{ppm} ppm/°C"),
        None => "N/A".to_string(),
    }
}

/// Value with its base-unit companion, e.g. "27 nF (27000 pF)".
///
/// Values already in the base unit are shown once.
pub fn format_with_base<U: ScaledUnit>(quantity: &Quantity<U>) -> String {
    if quantity.unit == U::BASE {
        return quantity.to_string();
    }
    format!(
        "{quantity} ({} {})",
        fmt_significant(quantity.base_value()),
        U::BASE.symbol()
    )
}

pub fn format_capacitor_tolerance(result: &CapacitorResult) -> String {
    format_tolerance(&result.tolerance)
}

pub fn format_resistor_tolerance(result: &ResistorResult) -> String {
    format!(
        "±{}% ({})",
        fmt_significant(result.tolerance_percent),
        result.tolerance_class
    )
}
