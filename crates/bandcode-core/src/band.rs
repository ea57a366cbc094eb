use std::fmt;

use serde::Serialize;

use crate::{ComponentKind, DecodeError};

/// Number of printed bands on a capacitor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CapacitorBandCount {
    Three = 3,
    Four = 4,
    Five = 5,
}

/// Number of printed bands on a resistor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResistorBandCount {
    Four = 4,
    Five = 5,
    Six = 6,
}

impl CapacitorBandCount {
    pub const ALL: [CapacitorBandCount; 3] = [
        CapacitorBandCount::Three,
        CapacitorBandCount::Four,
        CapacitorBandCount::Five,
    ];

    pub const fn get(self) -> u8 {
        self as u8
    }
}

impl ResistorBandCount {
    pub const ALL: [ResistorBandCount; 3] = [
        ResistorBandCount::Four,
        ResistorBandCount::Five,
        ResistorBandCount::Six,
    ];

    pub const fn get(self) -> u8 {
        self as u8
    }
}

impl TryFrom<usize> for CapacitorBandCount {
    type Error = DecodeError;

    fn try_from(count: usize) -> Result<Self, Self::Error> {
        match count {
            3 => Ok(CapacitorBandCount::Three),
            4 => Ok(CapacitorBandCount::Four),
            5 => Ok(CapacitorBandCount::Five),
            _ => Err(DecodeError::InvalidBandCount {
                component: ComponentKind::Capacitor,
                count,
            }),
        }
    }
}

impl TryFrom<usize> for ResistorBandCount {
    type Error = DecodeError;

    fn try_from(count: usize) -> Result<Self, Self::Error> {
        match count {
            4 => Ok(ResistorBandCount::Four),
            5 => Ok(ResistorBandCount::Five),
            6 => Ok(ResistorBandCount::Six),
            _ => Err(DecodeError::InvalidBandCount {
                component: ComponentKind::Resistor,
                count,
            }),
        }
    }
}

impl fmt::Display for CapacitorBandCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl fmt::Display for ResistorBandCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl Serialize for CapacitorBandCount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.get())
    }
}

impl Serialize for ResistorBandCount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.get())
    }
}

/// What a band position means for a given component and band count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BandRole {
    FirstDigit,
    SecondDigit,
    ThirdDigit,
    Multiplier,
    Tolerance,
    /// Capacitor band 5: voltage code, and temperature coefficient on 5-band parts.
    VoltageAndTempCoefficient,
    /// Resistor band 6.
    TempCoefficient,
}

impl BandRole {
    pub const fn name(self) -> &'static str {
        match self {
            BandRole::FirstDigit => "First Digit",
            BandRole::SecondDigit => "Second Digit",
            BandRole::ThirdDigit => "Third Digit",
            BandRole::Multiplier => "Multiplier",
            BandRole::Tolerance => "Tolerance",
            BandRole::VoltageAndTempCoefficient => "Voltage / Temp Coeff",
            BandRole::TempCoefficient => "Temperature Coefficient",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            BandRole::FirstDigit => "First significant digit (0-9)",
            BandRole::SecondDigit => "Second significant digit (0-9)",
            BandRole::ThirdDigit => "Third significant digit (0-9)",
            BandRole::Multiplier => "Multiplier (×1, ×10, ×100, etc.)",
            BandRole::Tolerance => "Tolerance (±%)",
            BandRole::VoltageAndTempCoefficient => "Voltage rating and/or temperature coefficient",
            BandRole::TempCoefficient => "Temperature coefficient (ppm/°C)",
        }
    }
}

impl fmt::Display for BandRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Role of capacitor band `band` (1-based), `None` past the printed bands.
pub fn capacitor_band_role(band: u8, count: CapacitorBandCount) -> Option<BandRole> {
    if band == 0 || band > count.get() {
        return None;
    }
    Some(match band {
        1 => BandRole::FirstDigit,
        2 => BandRole::SecondDigit,
        3 => BandRole::Multiplier,
        4 => BandRole::Tolerance,
        _ => BandRole::VoltageAndTempCoefficient,
    })
}

/// Role of resistor band `band` (1-based), `None` past the printed bands.
pub fn resistor_band_role(band: u8, count: ResistorBandCount) -> Option<BandRole> {
    if band == 0 || band > count.get() {
        return None;
    }
    let role = match (count, band) {
        (_, 1) => BandRole::FirstDigit,
        (_, 2) => BandRole::SecondDigit,
        (ResistorBandCount::Four, 3) => BandRole::Multiplier,
        (ResistorBandCount::Four, _) => BandRole::Tolerance,
        (_, 3) => BandRole::ThirdDigit,
        (_, 4) => BandRole::Multiplier,
        (_, 5) => BandRole::Tolerance,
        _ => BandRole::TempCoefficient,
    };
    Some(role)
}

pub(crate) fn check_band(component: ComponentKind, band: u8, count: u8) -> Result<(), DecodeError> {
    if band == 0 || band > count {
        return Err(DecodeError::BandOutOfRange {
            component,
            band,
            count,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_counts() {
        assert_eq!(
            CapacitorBandCount::try_from(3usize),
            Ok(CapacitorBandCount::Three)
        );
        assert_eq!(ResistorBandCount::try_from(6usize), Ok(ResistorBandCount::Six));
        for bad in [0usize, 2, 6] {
            assert_eq!(
                CapacitorBandCount::try_from(bad),
                Err(DecodeError::InvalidBandCount {
                    component: ComponentKind::Capacitor,
                    count: bad
                })
            );
        }
        for bad in [3usize, 7] {
            assert!(ResistorBandCount::try_from(bad).is_err());
        }
    }

    #[test]
    fn capacitor_roles() {
        use BandRole::*;
        let five: Vec<_> = (1..=5)
            .map(|b| capacitor_band_role(b, CapacitorBandCount::Five))
            .collect();
        assert_eq!(
            five,
            [
                Some(FirstDigit),
                Some(SecondDigit),
                Some(Multiplier),
                Some(Tolerance),
                Some(VoltageAndTempCoefficient)
            ]
        );
        assert_eq!(capacitor_band_role(5, CapacitorBandCount::Four), None);
        assert_eq!(capacitor_band_role(4, CapacitorBandCount::Three), None);
        assert_eq!(capacitor_band_role(0, CapacitorBandCount::Five), None);
    }

    #[test]
    fn resistor_roles_shift_with_count() {
        use BandRole::*;
        for (count, band, expected) in [
            (ResistorBandCount::Four, 3, Some(Multiplier)),
            (ResistorBandCount::Four, 4, Some(Tolerance)),
            (ResistorBandCount::Four, 5, None),
            (ResistorBandCount::Five, 3, Some(ThirdDigit)),
            (ResistorBandCount::Five, 4, Some(Multiplier)),
            (ResistorBandCount::Five, 5, Some(Tolerance)),
            (ResistorBandCount::Five, 6, None),
            (ResistorBandCount::Six, 6, Some(TempCoefficient)),
        ] {
            assert_eq!(
                resistor_band_role(band, count),
                expected,
                "{count}-band, band {band}"
            );
        }
    }

    #[test]
    fn role_labels() {
        assert_eq!(BandRole::VoltageAndTempCoefficient.name(), "Voltage / Temp Coeff");
        assert_eq!(BandRole::Tolerance.description(), "Tolerance (±%)");
    }
}
