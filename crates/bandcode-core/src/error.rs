use std::fmt;

use serde::Serialize;

use crate::capacitor_type::CapacitorType;
use crate::color::Color;

/// The two families of banded components the decoder understands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Capacitor,
    Resistor,
}

impl ComponentKind {
    pub const fn allowed_band_counts(&self) -> &'static str {
        match self {
            ComponentKind::Capacitor => "3, 4, or 5",
            ComponentKind::Resistor => "4, 5, or 6",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            ComponentKind::Capacitor => "Capacitor",
            ComponentKind::Resistor => "Resistor",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentKind::Capacitor => write!(f, "capacitor"),
            ComponentKind::Resistor => write!(f, "resistor"),
        }
    }
}

/// Errors produced while validating or decoding a set of color bands.
///
/// Every variant is a user-correctable input problem. The band number is
/// 1-based, matching the way bands are read off a part.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("Band {band}: {color} is not valid for a digit band (must be Black-White, 0-9)")]
    InvalidDigit { band: u8, color: Color },

    #[error("Band {band}: {color} is not valid for the multiplier band")]
    InvalidMultiplier { band: u8, color: Color },

    #[error("Band {band}: {color} is not valid for the {component} tolerance band")]
    InvalidTolerance {
        component: ComponentKind,
        band: u8,
        color: Color,
    },

    #[error("Band {band}: {color} is not valid for the temperature coefficient band")]
    InvalidTempCoefficient { band: u8, color: Color },

    #[error("Band 5: {color} is not a valid voltage code for {capacitor_type} capacitors")]
    InvalidVoltageCode {
        color: Color,
        capacitor_type: CapacitorType,
    },

    #[error(
        "Invalid {component} band count {count} (must be {})",
        .component.allowed_band_counts()
    )]
    InvalidBandCount { component: ComponentKind, count: usize },

    #[error("Band {band} does not exist on a {count}-band {component}")]
    BandOutOfRange {
        component: ComponentKind,
        band: u8,
        count: u8,
    },

    #[error("Band {band} has not been entered")]
    MissingBand { band: u8 },

    #[error("Unknown color '{input}'")]
    UnknownColor { input: String },

    #[error("Unknown capacitor type '{input}' (must be J, K, L, M, or N)")]
    UnknownCapacitorType { input: String },

    #[error("Note is {len} characters long (limit is {limit})")]
    NoteTooLong { len: usize, limit: usize },
}
