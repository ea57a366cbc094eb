//! Resistor color-code tables and the resistor calculation engine.
//!
//! Resistors share the digit colors with capacitors but use their own
//! multiplier range (up to ×10⁹), tolerance percentages and temperature
//! coefficients.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::band::check_band;
use crate::units::Resistance;
use crate::validate;
use crate::{Color, ComponentKind, DecodeError, ResistorBandCount};

const ONE_HUNDRED: Decimal = dec!(100);

const RESISTOR_MULTIPLIERS: [Option<Decimal>; 12] = [
    Some(dec!(1)),
    Some(dec!(10)),
    Some(dec!(100)),
    Some(dec!(1000)),
    Some(dec!(10000)),
    Some(dec!(100000)),
    Some(dec!(1000000)),
    Some(dec!(10000000)),
    Some(dec!(100000000)),
    Some(dec!(1000000000)),
    Some(dec!(0.1)),
    Some(dec!(0.01)),
];

/// Precision grade attached to a resistor tolerance color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToleranceClass {
    Standard,
    Precision,
    HighPrecision,
    UltraPrecision,
}

impl ToleranceClass {
    pub const fn label(self) -> &'static str {
        match self {
            ToleranceClass::Standard => "standard",
            ToleranceClass::Precision => "precision",
            ToleranceClass::HighPrecision => "high precision",
            ToleranceClass::UltraPrecision => "ultra precision",
        }
    }
}

impl std::fmt::Display for ToleranceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ResistorTolerance {
    pub percent: Decimal,
    pub class: ToleranceClass,
}

const fn tol(percent: Decimal, class: ToleranceClass) -> Option<ResistorTolerance> {
    Some(ResistorTolerance { percent, class })
}

const RESISTOR_TOLERANCES: [Option<ResistorTolerance>; 12] = [
    None,
    tol(dec!(1), ToleranceClass::Precision),
    tol(dec!(2), ToleranceClass::Precision),
    None,
    None,
    tol(dec!(0.5), ToleranceClass::HighPrecision),
    tol(dec!(0.25), ToleranceClass::HighPrecision),
    tol(dec!(0.1), ToleranceClass::UltraPrecision),
    tol(dec!(0.05), ToleranceClass::UltraPrecision),
    None,
    tol(dec!(5), ToleranceClass::Standard),
    tol(dec!(10), ToleranceClass::Standard),
];

/// ppm/°C, band 6 of 6-band parts.
const RESISTOR_TEMP_COEFFICIENTS: [Option<u32>; 12] = [
    Some(250),
    Some(100),
    Some(50),
    Some(15),
    Some(25),
    Some(20),
    Some(10),
    Some(5),
    Some(1),
    None,
    None,
    None,
];

pub fn resistor_multiplier(color: Color) -> Option<Decimal> {
    RESISTOR_MULTIPLIERS[color.index()]
}

pub fn resistor_tolerance(color: Color) -> Option<&'static ResistorTolerance> {
    RESISTOR_TOLERANCES[color.index()].as_ref()
}

pub fn resistor_temp_coefficient(color: Color) -> Option<u32> {
    RESISTOR_TEMP_COEFFICIENTS[color.index()]
}

/// A complete set of resistor bands, shaped by band count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum ResistorLayout {
    FourBand {
        digits: [Color; 2],
        multiplier: Color,
        tolerance: Color,
    },
    FiveBand {
        digits: [Color; 3],
        multiplier: Color,
        tolerance: Color,
    },
    SixBand {
        digits: [Color; 3],
        multiplier: Color,
        tolerance: Color,
        temp_coefficient: Color,
    },
}

impl ResistorLayout {
    pub fn band_count(&self) -> ResistorBandCount {
        match self {
            ResistorLayout::FourBand { .. } => ResistorBandCount::Four,
            ResistorLayout::FiveBand { .. } => ResistorBandCount::Five,
            ResistorLayout::SixBand { .. } => ResistorBandCount::Six,
        }
    }

    pub fn digits(&self) -> &[Color] {
        match self {
            ResistorLayout::FourBand { digits, .. } => &digits[..],
            ResistorLayout::FiveBand { digits, .. } | ResistorLayout::SixBand { digits, .. } => {
                &digits[..]
            }
        }
    }

    pub fn multiplier(&self) -> Color {
        match *self {
            ResistorLayout::FourBand { multiplier, .. }
            | ResistorLayout::FiveBand { multiplier, .. }
            | ResistorLayout::SixBand { multiplier, .. } => multiplier,
        }
    }

    pub fn tolerance(&self) -> Color {
        match *self {
            ResistorLayout::FourBand { tolerance, .. }
            | ResistorLayout::FiveBand { tolerance, .. }
            | ResistorLayout::SixBand { tolerance, .. } => tolerance,
        }
    }

    pub fn temp_coefficient(&self) -> Option<Color> {
        match *self {
            ResistorLayout::SixBand {
                temp_coefficient, ..
            } => Some(temp_coefficient),
            _ => None,
        }
    }

    /// The bands as printed, in order.
    pub fn bands(&self) -> Vec<Color> {
        let mut bands = self.digits().to_vec();
        bands.push(self.multiplier());
        bands.push(self.tolerance());
        bands.extend(self.temp_coefficient());
        bands
    }
}

/// Band selections for one resistor, filled in one band at a time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResistorReading {
    pub band_count: ResistorBandCount,
    bands: [Option<Color>; 6],
}

impl ResistorReading {
    pub fn new(band_count: ResistorBandCount) -> Self {
        Self {
            band_count,
            bands: [None; 6],
        }
    }

    pub fn from_bands(bands: &[Color]) -> Result<Self, DecodeError> {
        let mut reading = Self::new(ResistorBandCount::try_from(bands.len())?);
        for (band, color) in (1u8..).zip(bands) {
            reading.set_band(band, *color)?;
        }
        Ok(reading)
    }

    /// Store a color for a 1-based band. Only the band position is checked.
    pub fn set_band(&mut self, band: u8, color: Color) -> Result<(), DecodeError> {
        check_band(ComponentKind::Resistor, band, self.band_count.get())?;
        self.bands[usize::from(band - 1)] = Some(color);
        Ok(())
    }

    pub fn band(&self, band: u8) -> Option<Color> {
        match band {
            1..=6 => self.bands[usize::from(band - 1)],
            _ => None,
        }
    }

    pub fn bands(&self) -> impl Iterator<Item = (u8, Option<Color>)> + '_ {
        (1..=self.band_count.get()).map(|band| (band, self.band(band)))
    }

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

    /// Arrange the entered bands into their layout. Fails on the first unset band.
    pub fn layout(&self) -> Result<ResistorLayout, DecodeError> {
        let b = |band: u8| self.required(band);
        Ok(match self.band_count {
            ResistorBandCount::Four => ResistorLayout::FourBand {
                digits: [b(1)?, b(2)?],
                multiplier: b(3)?,
                tolerance: b(4)?,
            },
            ResistorBandCount::Five => ResistorLayout::FiveBand {
                digits: [b(1)?, b(2)?, b(3)?],
                multiplier: b(4)?,
                tolerance: b(5)?,
            },
            ResistorBandCount::Six => ResistorLayout::SixBand {
                digits: [b(1)?, b(2)?, b(3)?],
                multiplier: b(4)?,
                tolerance: b(5)?,
                temp_coefficient: b(6)?,
            },
        })
    }

    /// Check every printed band in order, returning the first error.
    pub fn validate(&self) -> Result<(), DecodeError> {
        for (band, color) in self.bands() {
            let color = color.ok_or(DecodeError::MissingBand { band })?;
            validate::validate_resistor_band(band, color, self.band_count)?;
        }
        Ok(())
    }
}

/// Decoded resistor value and ratings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResistorResult {
    pub layout: ResistorLayout,
    pub resistance_ohms: Decimal,
    pub resistance: Resistance,
    pub tolerance_percent: Decimal,
    pub tolerance_class: ToleranceClass,
    pub min_ohms: Decimal,
    pub max_ohms: Decimal,
    pub min: Resistance,
    pub max: Resistance,
    /// ppm/°C, 6-band parts only.
    pub temp_coefficient: Option<u32>,
}

impl ResistorResult {
    pub fn band_count(&self) -> ResistorBandCount {
        self.layout.band_count()
    }
}

pub fn decode_resistor(reading: &ResistorReading) -> Result<ResistorResult, DecodeError> {
    decode_resistor_layout(&reading.layout()?)
}

pub fn decode_resistor_layout(layout: &ResistorLayout) -> Result<ResistorResult, DecodeError> {
    let mut base = 0u32;
    for (band, color) in (1u8..).zip(layout.digits()) {
        base = base * 10 + u32::from(validate::validate_digit(band, *color)?);
    }

    let digit_bands = layout.digits().len() as u8;
    let multiplier_band = digit_bands + 1;
    let tolerance_band = digit_bands + 2;

    let multiplier =
        resistor_multiplier(layout.multiplier()).ok_or(DecodeError::InvalidMultiplier {
            band: multiplier_band,
            color: layout.multiplier(),
        })?;
    let tolerance = resistor_tolerance(layout.tolerance()).ok_or(DecodeError::InvalidTolerance {
        component: ComponentKind::Resistor,
        band: tolerance_band,
        color: layout.tolerance(),
    })?;

    let resistance_ohms = Decimal::from(base) * multiplier;
    let min_ohms = resistance_ohms * (Decimal::ONE - tolerance.percent / ONE_HUNDRED);
    let max_ohms = resistance_ohms * (Decimal::ONE + tolerance.percent / ONE_HUNDRED);

    Ok(ResistorResult {
        layout: *layout,
        resistance_ohms,
        resistance: Resistance::scale(resistance_ohms),
        tolerance_percent: tolerance.percent,
        tolerance_class: tolerance.class,
        min_ohms,
        max_ohms,
        min: Resistance::scale(min_ohms),
        max: Resistance::scale(max_ohms),
        temp_coefficient: layout.temp_coefficient().and_then(resistor_temp_coefficient),
    })
}
