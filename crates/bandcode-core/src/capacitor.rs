//! Capacitor color-code tables and the capacitor calculation engine.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::band::check_band;
use crate::units::Capacitance;
use crate::validate::{self, Advisory};
use crate::{CapacitorBandCount, CapacitorType, Color, ComponentKind, DecodeError};

/// Capacitances at or below this many picofarads use absolute tolerances when
/// the tolerance color defines one.
pub const SMALL_CAPACITANCE_PF: Decimal = dec!(10);

const ONE_HUNDRED: Decimal = dec!(100);

/// Tolerance band entry for capacitors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ToleranceRating {
    pub color: Color,
    /// Upper deviation in percent.
    pub percent_high: Decimal,
    /// Lower deviation in percent. Equal to `percent_high` except for Grey.
    pub percent_low: Decimal,
    /// Absolute deviation used for small capacitances.
    pub absolute_pf: Option<Decimal>,
}

const fn rating(color: Color, percent: Decimal, absolute_pf: Option<Decimal>) -> ToleranceRating {
    ToleranceRating {
        color,
        percent_high: percent,
        percent_low: percent,
        absolute_pf,
    }
}

const CAPACITOR_TOLERANCES: [Option<ToleranceRating>; 12] = [
    Some(rating(Color::Black, dec!(20), None)),
    Some(rating(Color::Brown, dec!(1), Some(dec!(0.1)))),
    Some(rating(Color::Red, dec!(2), Some(dec!(0.25)))),
    Some(rating(Color::Orange, dec!(3), None)),
    Some(rating(Color::Yellow, dec!(4), None)),
    Some(rating(Color::Green, dec!(5), Some(dec!(0.5)))),
    None,
    None,
    Some(ToleranceRating {
        color: Color::Grey,
        percent_high: dec!(80),
        percent_low: dec!(20),
        absolute_pf: None,
    }),
    Some(rating(Color::White, dec!(10), Some(dec!(1.0)))),
    Some(rating(Color::Gold, dec!(5), None)),
    Some(rating(Color::Silver, dec!(10), None)),
];

/// Temperature coefficients in parts per million per °C, band 5 of 5-band parts.
const CAPACITOR_TEMP_COEFFICIENTS: [Option<i32>; 12] = [
    None,
    Some(-33),
    Some(-75),
    Some(-150),
    Some(-220),
    Some(-330),
    Some(-470),
    Some(-750),
    None,
    None,
    None,
    None,
];

pub fn capacitor_tolerance(color: Color) -> Option<&'static ToleranceRating> {
    CAPACITOR_TOLERANCES[color.index()].as_ref()
}

pub fn capacitor_temp_coefficient(color: Color) -> Option<i32> {
    CAPACITOR_TEMP_COEFFICIENTS[color.index()]
}

/// How the tolerance of a decoded capacitor was expressed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Tolerance {
    Percentage { high: Decimal, low: Decimal },
    Absolute { picofarads: Decimal },
}

impl Tolerance {
    pub fn is_symmetric(&self) -> bool {
        match self {
            Tolerance::Percentage { high, low } => high == low,
            Tolerance::Absolute { .. } => true,
        }
    }

    pub fn is_absolute(&self) -> bool {
        matches!(self, Tolerance::Absolute { .. })
    }

    /// The symmetric percentage, if this is one.
    pub fn percent(&self) -> Option<Decimal> {
        match self {
            Tolerance::Percentage { high, low } if high == low => Some(*high),
            _ => None,
        }
    }
}

/// Apply a tolerance color to a raw capacitance, returning the tolerance and
/// the (min, max) bounds in picofarads.
pub fn capacitor_tolerance_bounds(
    raw_pf: Decimal,
    color: Color,
) -> Result<(Tolerance, Decimal, Decimal), DecodeError> {
    let rating = capacitor_tolerance(color).ok_or(DecodeError::InvalidTolerance {
        component: ComponentKind::Capacitor,
        band: 4,
        color,
    })?;

    if raw_pf <= SMALL_CAPACITANCE_PF
        && let Some(abs) = rating.absolute_pf
    {
        let min = (raw_pf - abs).max(Decimal::ZERO);
        return Ok((Tolerance::Absolute { picofarads: abs }, min, raw_pf + abs));
    }

    let min = raw_pf * (Decimal::ONE - rating.percent_low / ONE_HUNDRED);
    let max = raw_pf * (Decimal::ONE + rating.percent_high / ONE_HUNDRED);
    Ok((
        Tolerance::Percentage {
            high: rating.percent_high,
            low: rating.percent_low,
        },
        min,
        max,
    ))
}

/// Band selections for one capacitor, filled in one band at a time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CapacitorReading {
    pub capacitor_type: CapacitorType,
    pub band_count: CapacitorBandCount,
    bands: [Option<Color>; 5],
}

impl CapacitorReading {
    pub fn new(capacitor_type: CapacitorType, band_count: CapacitorBandCount) -> Self {
        Self {
            capacitor_type,
            band_count,
            bands: [None; 5],
        }
    }

    /// Build a complete reading from the printed bands, in order.
    pub fn from_bands(capacitor_type: CapacitorType, bands: &[Color]) -> Result<Self, DecodeError> {
        let band_count = CapacitorBandCount::try_from(bands.len())?;
        let mut reading = Self::new(capacitor_type, band_count);
        for (band, color) in (1u8..).zip(bands) {
            reading.set_band(band, *color)?;
        }
        Ok(reading)
    }

    /// Store a color for a 1-based band. Only the band position is checked.
    pub fn set_band(&mut self, band: u8, color: Color) -> Result<(), DecodeError> {
        check_band(ComponentKind::Capacitor, band, self.band_count.get())?;
        self.bands[usize::from(band - 1)] = Some(color);
        Ok(())
    }

    pub fn band(&self, band: u8) -> Option<Color> {
        match band {
            1..=5 => self.bands[usize::from(band - 1)],
            _ => None,
        }
    }

    /// Printed bands that have been entered so far, in order.
    pub fn bands(&self) -> impl Iterator<Item = (u8, Option<Color>)> + '_ {
        (1..=self.band_count.get()).map(|band| (band, self.band(band)))
    }

    /// First printed band still missing a color.
    pub fn next_band(&self) -> Option<u8> {
        self.bands()
            .find(|(_, color)| color.is_none())
            .map(|(band, _)| band)
    }

    pub fn is_complete(&self) -> bool {
        self.next_band().is_none()
    }

    fn required(&self, band: u8) -> Result<Color, DecodeError> {
        self.band(band).ok_or(DecodeError::MissingBand { band })
    }

    /// Tolerance color, Black (±20%) when the part has no tolerance band.
    pub fn tolerance_color(&self) -> Result<Color, DecodeError> {
        match self.band_count {
            CapacitorBandCount::Three => Ok(Color::Black),
            _ => self.required(4),
        }
    }

    /// Raw capacitance from bands 1-3, once they are entered and valid.
    pub fn capacitance_pf(&self) -> Result<Decimal, DecodeError> {
        let d1 = validate::validate_digit(1, self.required(1)?)?;
        let d2 = validate::validate_digit(2, self.required(2)?)?;
        let multiplier = self.required(3)?;
        if !multiplier.info().valid_multiplier {
            return Err(DecodeError::InvalidMultiplier {
                band: 3,
                color: multiplier,
            });
        }
        let base = Decimal::from(u32::from(d1) * 10 + u32::from(d2));
        Ok(base * multiplier.info().multiplier)
    }

    /// Check every printed band in order, returning the first error or the
    /// advisories raised along the way.
    pub fn validate(&self) -> Result<Vec<Advisory>, DecodeError> {
        let mut advisories = Vec::new();
        for (band, color) in self.bands() {
            let color = color.ok_or(DecodeError::MissingBand { band })?;
            validate::validate_capacitor_band(band, color, self.capacitor_type, self.band_count)?;
        }
        if self.band_count > CapacitorBandCount::Three {
            let pf = self.capacitance_pf()?;
            advisories.extend(validate::capacitor_tolerance_advisory(
                self.required(4)?,
                pf,
            ));
        }
        Ok(advisories)
    }
}

/// Decoded capacitor value and ratings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CapacitorResult {
    pub reading: CapacitorReading,
    pub capacitance_pf: Decimal,
    pub capacitance: Capacitance,
    pub tolerance: Tolerance,
    pub min_pf: Decimal,
    pub max_pf: Decimal,
    pub min: Capacitance,
    pub max: Capacitance,
    /// Rated voltage in volts.
    pub voltage: Option<Decimal>,
    /// Temperature coefficient in ppm/°C.
    pub temp_coefficient: Option<i32>,
}

pub fn decode_capacitor(reading: &CapacitorReading) -> Result<CapacitorResult, DecodeError> {
    if let Some(band) = reading.next_band() {
        return Err(DecodeError::MissingBand { band });
    }
    let capacitance_pf = reading.capacitance_pf()?;
    let (tolerance, min_pf, max_pf) =
        capacitor_tolerance_bounds(capacitance_pf, reading.tolerance_color()?)?;

    let band5 = match reading.band_count {
        CapacitorBandCount::Five => reading.band(5),
        _ => None,
    };
    let voltage = band5
        .filter(|color| *color != Color::Black)
        .and_then(|color| reading.capacitor_type.voltage(color));
    let temp_coefficient = band5.and_then(capacitor_temp_coefficient);

    Ok(CapacitorResult {
        reading: reading.clone(),
        capacitance_pf,
        capacitance: Capacitance::scale(capacitance_pf),
        tolerance,
        min_pf,
        max_pf,
        min: Capacitance::scale(min_pf),
        max: Capacitance::scale(max_pf),
        voltage,
        temp_coefficient,
    })
}
