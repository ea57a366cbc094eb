use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::DecodeError;

/// One of the twelve colors used on IEC 60062 marked parts.
///
/// The declaration order is the order of the color code (Black = 0 through
/// White = 9, then Gold and Silver) and is used to index the static tables.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Black,
    Brown,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Violet,
    Grey,
    White,
    Gold,
    Silver,
}

/// Static properties of a color as used on capacitor bands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ColorInfo {
    pub color: Color,
    pub name: &'static str,
    /// Significant digit, `None` for Gold and Silver.
    pub digit: Option<u8>,
    /// Capacitor multiplier in picofarads.
    pub multiplier: Decimal,
    /// Display swatch as RGB.
    pub swatch: (u8, u8, u8),
    pub valid_digit: bool,
    pub valid_multiplier: bool,
    pub valid_tolerance: bool,
}

const fn info(
    color: Color,
    name: &'static str,
    digit: Option<u8>,
    multiplier: Decimal,
    swatch: (u8, u8, u8),
    valid_tolerance: bool,
) -> ColorInfo {
    ColorInfo {
        color,
        name,
        digit,
        multiplier,
        swatch,
        valid_digit: digit.is_some(),
        valid_multiplier: true,
        valid_tolerance,
    }
}

const COLOR_TABLE: [ColorInfo; 12] = [
    info(Color::Black, "Black", Some(0), dec!(1), (0x00, 0x00, 0x00), true),
    info(Color::Brown, "Brown", Some(1), dec!(10), (0x8B, 0x45, 0x13), true),
    info(Color::Red, "Red", Some(2), dec!(100), (0xFF, 0x00, 0x00), true),
    info(Color::Orange, "Orange", Some(3), dec!(1000), (0xFF, 0x8C, 0x00), true),
    info(Color::Yellow, "Yellow", Some(4), dec!(10000), (0xFF, 0xFF, 0x00), true),
    info(Color::Green, "Green", Some(5), dec!(100000), (0x00, 0xFF, 0x00), true),
    info(Color::Blue, "Blue", Some(6), dec!(1000000), (0x00, 0x00, 0xFF), false),
    info(Color::Violet, "Violet", Some(7), dec!(10000000), (0x94, 0x00, 0xD3), false),
    info(Color::Grey, "Grey", Some(8), dec!(0.01), (0x80, 0x80, 0x80), true),
    info(Color::White, "White", Some(9), dec!(0.1), (0xFF, 0xFF, 0xFF), true),
    info(Color::Gold, "Gold", None, dec!(0.1), (0xFF, 0xD7, 0x00), true),
    info(Color::Silver, "Silver", None, dec!(0.01), (0xC0, 0xC0, 0xC0), true),
];

impl Color {
    pub const ALL: [Color; 12] = [
        Color::Black,
        Color::Brown,
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Violet,
        Color::Grey,
        Color::White,
        Color::Gold,
        Color::Silver,
    ];

    pub fn info(self) -> &'static ColorInfo {
        &COLOR_TABLE[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    pub fn digit(self) -> Option<u8> {
        self.info().digit
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s).ok_or_else(|| DecodeError::UnknownColor {
            input: s.trim().to_string(),
        })
    }
}

/// Look up the static record for a color.
pub fn color_info(color: Color) -> &'static ColorInfo {
    color.info()
}

/// Parse a color name, ignoring case and surrounding whitespace.
///
/// "gray" is accepted as a synonym for Grey.
pub fn parse_color(input: &str) -> Option<Color> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("gray") {
        return Some(Color::Grey);
    }
    Color::ALL
        .into_iter()
        .find(|color| color.name().eq_ignore_ascii_case(input))
}

/// Display names of every color in code order.
pub fn all_color_names() -> [&'static str; 12] {
    Color::ALL.map(Color::name)
}
