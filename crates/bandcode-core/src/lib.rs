//! Decoding of IEC 60062 / EIA color bands on capacitors and resistors.
//!
//! A [`CapacitorReading`] or [`ResistorReading`] collects band colors one at a
//! time. The `validate_*` functions check each band as it is entered, and
//! [`decode_capacitor`] / [`decode_resistor`] turn a complete reading into a
//! value, tolerance range and ratings. All quantities are exact decimals.

pub mod band;
pub mod capacitor;
pub mod capacitor_type;
pub mod color;
pub mod error;
pub mod format;
pub mod history;
pub mod resistor;
pub mod units;
pub mod validate;

pub use band::{
    BandRole, CapacitorBandCount, ResistorBandCount, capacitor_band_role, resistor_band_role,
};
pub use capacitor::{
    CapacitorReading, CapacitorResult, Tolerance, ToleranceRating, capacitor_temp_coefficient,
    capacitor_tolerance, capacitor_tolerance_bounds, decode_capacitor,
};
pub use capacitor_type::{
    CapacitorType, CapacitorTypeInfo, capacitor_type_info, parse_capacitor_type,
};
pub use color::{Color, ColorInfo, all_color_names, color_info, parse_color};
pub use error::{ComponentKind, DecodeError};
pub use history::{ComponentEntry, DecodedComponent, NOTE_LIMIT};
pub use resistor::{
    ResistorLayout, ResistorReading, ResistorResult, ResistorTolerance, ToleranceClass,
    decode_resistor, decode_resistor_layout, resistor_multiplier, resistor_temp_coefficient,
    resistor_tolerance,
};
pub use units::{Capacitance, CapacitanceUnit, Quantity, Resistance, ResistanceUnit, ScaledUnit};
pub use validate::{
    Advisory, capacitor_band_colors, capacitor_tolerance_advisory, resistor_band_colors,
    validate_capacitor_band, validate_digit, validate_resistor_band,
};
