use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::{Color, DecodeError};

/// Capacitor construction family, selecting which voltage code table band 5 uses.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CapacitorType {
    J,
    K,
    L,
    M,
    N,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CapacitorTypeInfo {
    pub code: CapacitorType,
    pub name: &'static str,
    pub description: &'static str,
    /// Voltage rating indexed by the digit of band 5. `None` marks a digit
    /// that is inside the list but carries no rating.
    pub voltages: &'static [Option<Decimal>],
}

impl CapacitorTypeInfo {
    /// Voltage rating for a band 5 color, `None` when the digit has no mapping.
    pub fn voltage(&self, color: Color) -> Option<Decimal> {
        let idx = color.digit()? as usize;
        self.voltages.get(idx).copied().flatten()
    }
}

const J_VOLTAGES: &[Option<Decimal>] = &[
    Some(dec!(3)),
    Some(dec!(4)),
    Some(dec!(6)),
    Some(dec!(10)),
    Some(dec!(15)),
    Some(dec!(20)),
    Some(dec!(25)),
    Some(dec!(35)),
    Some(dec!(50)),
];

const K_VOLTAGES: &[Option<Decimal>] = &[
    Some(dec!(100)),
    Some(dec!(200)),
    Some(dec!(300)),
    Some(dec!(400)),
    Some(dec!(500)),
    Some(dec!(600)),
    Some(dec!(700)),
    Some(dec!(800)),
    Some(dec!(900)),
    Some(dec!(1000)),
];

const L_VOLTAGES: &[Option<Decimal>] = &[
    Some(dec!(100)),
    Some(dec!(250)),
    Some(dec!(400)),
    Some(dec!(630)),
];

const M_VOLTAGES: &[Option<Decimal>] = &[
    None,
    Some(dec!(1.6)),
    Some(dec!(2.5)),
    Some(dec!(4)),
    Some(dec!(6.3)),
    Some(dec!(10)),
    Some(dec!(16)),
    Some(dec!(25)),
    Some(dec!(40)),
];

const N_VOLTAGES: &[Option<Decimal>] = &[
    Some(dec!(3)),
    Some(dec!(6)),
    Some(dec!(6.3)),
    Some(dec!(10)),
    Some(dec!(15)),
    Some(dec!(20)),
    Some(dec!(25)),
    Some(dec!(35)),
];

const TYPE_TABLE: [CapacitorTypeInfo; 5] = [
    CapacitorTypeInfo {
        code: CapacitorType::J,
        name: "Dipped Tantalum",
        description: "Type J (Dipped Tantalum)",
        voltages: J_VOLTAGES,
    },
    CapacitorTypeInfo {
        code: CapacitorType::K,
        name: "Mica",
        description: "Type K (Mica)",
        voltages: K_VOLTAGES,
    },
    CapacitorTypeInfo {
        code: CapacitorType::L,
        name: "Polyester / Polystyrene",
        description: "Type L (Polyester / Polystyrene)",
        voltages: L_VOLTAGES,
    },
    CapacitorTypeInfo {
        code: CapacitorType::M,
        name: "Electrolytic (4-band style)",
        description: "Type M (Electrolytic 4-Band)",
        voltages: M_VOLTAGES,
    },
    CapacitorTypeInfo {
        code: CapacitorType::N,
        name: "Electrolytic (3-band style)",
        description: "Type N (Electrolytic 3-Band)",
        voltages: N_VOLTAGES,
    },
];

impl CapacitorType {
    pub const ALL: [CapacitorType; 5] = [
        CapacitorType::J,
        CapacitorType::K,
        CapacitorType::L,
        CapacitorType::M,
        CapacitorType::N,
    ];

    pub fn info(self) -> &'static CapacitorTypeInfo {
        &TYPE_TABLE[self as usize]
    }

    pub fn code(self) -> &'static str {
        match self {
            CapacitorType::J => "J",
            CapacitorType::K => "K",
            CapacitorType::L => "L",
            CapacitorType::M => "M",
            CapacitorType::N => "N",
        }
    }

    pub fn voltage(self, color: Color) -> Option<Decimal> {
        self.info().voltage(color)
    }
}

impl fmt::Display for CapacitorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().description)
    }
}

impl FromStr for CapacitorType {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_capacitor_type(s).ok_or_else(|| DecodeError::UnknownCapacitorType {
            input: s.trim().to_string(),
        })
    }
}

pub fn capacitor_type_info(capacitor_type: CapacitorType) -> &'static CapacitorTypeInfo {
    capacitor_type.info()
}

/// Parse a single-letter type code, case-insensitive.
pub fn parse_capacitor_type(input: &str) -> Option<CapacitorType> {
    let input = input.trim();
    CapacitorType::ALL
        .into_iter()
        .find(|t| t.code().eq_ignore_ascii_case(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractional_voltages_are_exact() {
        for (capacitor_type, color, expected) in [
            (CapacitorType::M, Color::Brown, Some(dec!(1.6))),
            (CapacitorType::M, Color::Red, Some(dec!(2.5))),
            (CapacitorType::M, Color::Yellow, Some(dec!(6.3))),
            (CapacitorType::N, Color::Red, Some(dec!(6.3))),
            (CapacitorType::L, Color::Orange, Some(dec!(630))),
            (CapacitorType::K, Color::White, Some(dec!(1000))),
            (CapacitorType::J, Color::Grey, Some(dec!(50))),
        ] {
            assert_eq!(
                capacitor_type.voltage(color),
                expected,
                "{capacitor_type:?} {color}"
            );
        }
    }

    #[test]
    fn missing_voltages() {
        // Placeholder slot
        assert_eq!(CapacitorType::M.voltage(Color::Black), None);
        // Past the end of the list
        assert_eq!(CapacitorType::L.voltage(Color::Yellow), None);
        assert_eq!(CapacitorType::J.voltage(Color::White), None);
        assert_eq!(CapacitorType::N.voltage(Color::Grey), None);
        // No digit
        assert_eq!(CapacitorType::K.voltage(Color::Gold), None);
        assert_eq!(CapacitorType::K.voltage(Color::Silver), None);
    }

    #[test]
    fn table_is_indexed_by_ordinal() {
        for t in CapacitorType::ALL {
            assert_eq!(t.info().code, t);
            assert_eq!(capacitor_type_info(t).name, t.info().name);
        }
    }

    #[test]
    fn parse_type_codes() {
        assert_eq!(parse_capacitor_type("k"), Some(CapacitorType::K));
        assert_eq!(parse_capacitor_type(" M "), Some(CapacitorType::M));
        assert_eq!(parse_capacitor_type("X"), None);
        assert_eq!(parse_capacitor_type("KK"), None);
        assert!(matches!(
            "Q".parse::<CapacitorType>(),
            Err(DecodeError::UnknownCapacitorType { .. })
        ));
    }

    #[test]
    fn display_uses_description() {
        assert_eq!(CapacitorType::K.to_string(), "Type K (Mica)");
        assert_eq!(
            CapacitorType::L.to_string(),
            "Type L (Polyester / Polystyrene)"
        );
    }
}
