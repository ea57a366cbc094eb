use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// A unit family that can be auto-scaled by powers of 1000.
pub trait ScaledUnit: Copy + PartialEq + fmt::Debug + 'static {
    /// Units with their size in base units, largest first.
    const LADDER: &'static [(Decimal, Self)];
    const BASE: Self;

    fn symbol(self) -> &'static str;

    fn factor(self) -> Decimal {
        Self::LADDER
            .iter()
            .find(|(_, unit)| *unit == self)
            .map(|(factor, _)| *factor)
            .unwrap_or(Decimal::ONE)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CapacitanceUnit {
    Picofarads,
    Nanofarads,
    Microfarads,
    Millifarads,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResistanceUnit {
    Ohms,
    Kiloohms,
    Megaohms,
    Gigaohms,
}

impl ScaledUnit for CapacitanceUnit {
    const LADDER: &'static [(Decimal, Self)] = &[
        (dec!(1000000000), CapacitanceUnit::Millifarads),
        (dec!(1000000), CapacitanceUnit::Microfarads),
        (dec!(1000), CapacitanceUnit::Nanofarads),
        (dec!(1), CapacitanceUnit::Picofarads),
    ];
    const BASE: Self = CapacitanceUnit::Picofarads;

    fn symbol(self) -> &'static str {
        match self {
            CapacitanceUnit::Picofarads => "pF",
            CapacitanceUnit::Nanofarads => "nF",
            CapacitanceUnit::Microfarads => "µF",
            CapacitanceUnit::Millifarads => "mF",
        }
    }
}

impl ScaledUnit for ResistanceUnit {
    const LADDER: &'static [(Decimal, Self)] = &[
        (dec!(1000000000), ResistanceUnit::Gigaohms),
        (dec!(1000000), ResistanceUnit::Megaohms),
        (dec!(1000), ResistanceUnit::Kiloohms),
        (dec!(1), ResistanceUnit::Ohms),
    ];
    const BASE: Self = ResistanceUnit::Ohms;

    fn symbol(self) -> &'static str {
        match self {
            ResistanceUnit::Ohms => "Ω",
            ResistanceUnit::Kiloohms => "kΩ",
            ResistanceUnit::Megaohms => "MΩ",
            ResistanceUnit::Gigaohms => "GΩ",
        }
    }
}

macro_rules! unit_traits {
    ($($unit:ty),*) => {
        $(
            impl fmt::Display for $unit {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.symbol())
                }
            }

            impl Serialize for $unit {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    serializer.serialize_str(self.symbol())
                }
            }
        )*
    };
}

unit_traits!(CapacitanceUnit, ResistanceUnit);

/// A value expressed in a scaled unit, e.g. 27 nF.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Quantity<U: ScaledUnit> {
    pub value: Decimal,
    pub unit: U,
}

pub type Capacitance = Quantity<CapacitanceUnit>;
pub type Resistance = Quantity<ResistanceUnit>;

impl<U: ScaledUnit> Quantity<U> {
    /// Pick the largest unit whose size does not exceed `base`.
    ///
    /// Lower bounds are inclusive, so 1000 pF is 1 nF. Anything below one base
    /// unit (including zero) stays in the base unit.
    pub fn scale(base: Decimal) -> Self {
        for &(factor, unit) in U::LADDER {
            if base.abs() >= factor {
                return Quantity {
                    value: base / factor,
                    unit,
                };
            }
        }
        Quantity {
            value: base,
            unit: U::BASE,
        }
    }

    /// The same quantity in base units (pF or Ω).
    pub fn base_value(&self) -> Decimal {
        self.value * self.unit.factor()
    }
}

impl<U: ScaledUnit> fmt::Display for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", fmt_significant(self.value), self.unit.symbol())
    }
}

/// Render a decimal without trailing fractional zeros.
pub fn fmt_significant(x: Decimal) -> String {
    let formatted = format!("{}", x.normalize());

    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacitance_boundaries() {
        for (pf, value, unit) in [
            (dec!(0), dec!(0), CapacitanceUnit::Picofarads),
            (dec!(0.1), dec!(0.1), CapacitanceUnit::Picofarads),
            (dec!(999), dec!(999), CapacitanceUnit::Picofarads),
            (dec!(1000), dec!(1), CapacitanceUnit::Nanofarads),
            (dec!(999999), dec!(999.999), CapacitanceUnit::Nanofarads),
            (dec!(1000000), dec!(1), CapacitanceUnit::Microfarads),
            (dec!(999999999), dec!(999.999999), CapacitanceUnit::Microfarads),
            (dec!(1000000000), dec!(1), CapacitanceUnit::Millifarads),
            (dec!(990000000000), dec!(990), CapacitanceUnit::Millifarads),
        ] {
            let q = Capacitance::scale(pf);
            assert_eq!((q.value, q.unit), (value, unit), "{pf} pF");
            assert_eq!(q.base_value(), pf);
        }
    }

    #[test]
    fn resistance_boundaries() {
        for (ohms, unit) in [
            (dec!(0.47), ResistanceUnit::Ohms),
            (dec!(999), ResistanceUnit::Ohms),
            (dec!(1000), ResistanceUnit::Kiloohms),
            (dec!(999999), ResistanceUnit::Kiloohms),
            (dec!(1000000), ResistanceUnit::Megaohms),
            (dec!(1000000000), ResistanceUnit::Gigaohms),
        ] {
            assert_eq!(Resistance::scale(ohms).unit, unit, "{ohms} Ω");
        }
    }

    #[test]
    fn display_trims_zeros() {
        assert_eq!(Capacitance::scale(dec!(27000)).to_string(), "27 nF");
        assert_eq!(Capacitance::scale(dec!(26730.00)).to_string(), "26.73 nF");
        assert_eq!(Resistance::scale(dec!(4700)).to_string(), "4.7 kΩ");
        assert_eq!(Resistance::scale(dec!(100)).to_string(), "100 Ω");
        assert_eq!(fmt_significant(dec!(44.6500)), "44.65");
        assert_eq!(fmt_significant(dec!(1000)), "1000");
    }

    #[test]
    fn units_serialize_as_symbols() {
        assert_eq!(
            serde_json::to_string(&CapacitanceUnit::Microfarads).unwrap(),
            "\"µF\""
        );
        assert_eq!(
            serde_json::to_string(&ResistanceUnit::Kiloohms).unwrap(),
            "\"kΩ\""
        );
    }
}
