//! Per-band admissibility rules.
//!
//! These run as each band is entered so a bad color can be rejected before the
//! reading is complete. The calculation engines repeat the checks they depend on.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::band::check_band;
use crate::capacitor::{SMALL_CAPACITANCE_PF, capacitor_tolerance};
use crate::resistor::{resistor_multiplier, resistor_temp_coefficient, resistor_tolerance};
use crate::{
    BandRole, CapacitorBandCount, CapacitorType, Color, ComponentKind, DecodeError,
    ResistorBandCount, capacitor_band_role, resistor_band_role,
};

/// A non-fatal remark about an otherwise valid band.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Advisory {
    pub band: u8,
    pub color: Color,
    pub message: String,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Band {}: {}", self.band, self.message)
    }
}

/// Digit value of a color on a digit band.
pub fn validate_digit(band: u8, color: Color) -> Result<u8, DecodeError> {
    color.digit().ok_or(DecodeError::InvalidDigit { band, color })
}

/// Check a capacitor band color against its role.
///
/// Band 5 must map to a voltage for `capacitor_type`. A missing temperature
/// coefficient is not an error.
pub fn validate_capacitor_band(
    band: u8,
    color: Color,
    capacitor_type: CapacitorType,
    count: CapacitorBandCount,
) -> Result<(), DecodeError> {
    check_band(ComponentKind::Capacitor, band, count.get())?;
    let Some(role) = capacitor_band_role(band, count) else {
        return Ok(());
    };
    match role {
        BandRole::FirstDigit | BandRole::SecondDigit | BandRole::ThirdDigit => {
            validate_digit(band, color)?;
        }
        BandRole::Multiplier => {
            if !color.info().valid_multiplier {
                return Err(DecodeError::InvalidMultiplier { band, color });
            }
        }
        BandRole::Tolerance => {
            if capacitor_tolerance(color).is_none() {
                return Err(DecodeError::InvalidTolerance {
                    component: ComponentKind::Capacitor,
                    band,
                    color,
                });
            }
        }
        BandRole::VoltageAndTempCoefficient | BandRole::TempCoefficient => {
            if capacitor_type.voltage(color).is_none() {
                return Err(DecodeError::InvalidVoltageCode {
                    color,
                    capacitor_type,
                });
            }
        }
    }
    Ok(())
}

/// Check a resistor band color against its role for the given band count.
pub fn validate_resistor_band(
    band: u8,
    color: Color,
    count: ResistorBandCount,
) -> Result<(), DecodeError> {
    check_band(ComponentKind::Resistor, band, count.get())?;
    let Some(role) = resistor_band_role(band, count) else {
        return Ok(());
    };
    match role {
        BandRole::FirstDigit | BandRole::SecondDigit | BandRole::ThirdDigit => {
            validate_digit(band, color)?;
        }
        BandRole::Multiplier => {
            if resistor_multiplier(color).is_none() {
                return Err(DecodeError::InvalidMultiplier { band, color });
            }
        }
        BandRole::Tolerance => {
            if resistor_tolerance(color).is_none() {
                return Err(DecodeError::InvalidTolerance {
                    component: ComponentKind::Resistor,
                    band,
                    color,
                });
            }
        }
        BandRole::TempCoefficient | BandRole::VoltageAndTempCoefficient => {
            if resistor_temp_coefficient(color).is_none() {
                return Err(DecodeError::InvalidTempCoefficient { band, color });
            }
        }
    }
    Ok(())
}

/// Warn when a small capacitor is marked with a tolerance color that has no
/// absolute value. The value still decodes, as a percentage.
pub fn capacitor_tolerance_advisory(color: Color, capacitance_pf: Decimal) -> Option<Advisory> {
    let rating = capacitor_tolerance(color)?;
    if capacitance_pf > SMALL_CAPACITANCE_PF || rating.absolute_pf.is_some() {
        return None;
    }
    Some(Advisory {
        band: 4,
        color,
        message: format!(
            "{color} tolerance not typically used for capacitors ≤10pF \
             (use Brown, Red, Green, or White for absolute tolerance)"
        ),
    })
}

/// Colors legal for a capacitor band, in table order.
pub fn capacitor_band_colors(
    band: u8,
    capacitor_type: CapacitorType,
    count: CapacitorBandCount,
) -> Vec<Color> {
    Color::ALL
        .into_iter()
        .filter(|c| validate_capacitor_band(band, *c, capacitor_type, count).is_ok())
        .collect()
}

/// Colors legal for a resistor band, in table order.
pub fn resistor_band_colors(band: u8, count: ResistorBandCount) -> Vec<Color> {
    Color::ALL
        .into_iter()
        .filter(|c| validate_resistor_band(band, *c, count).is_ok())
        .collect()
}
