use std::fmt;

use serde_derive::{Deserialize, Serialize};

/// The broad convertibility class of a unit. Units can only be
/// converted to other units of the same kind.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum UnitKind {
    Length,
    Weight,
    Temperature,
}

impl UnitKind {
    /// The capitalized word used in user-facing messages, like
    /// `Weight shouldn't be negative.`
    pub fn as_str(self) -> &'static str {
        match self {
            UnitKind::Length => "Length",
            UnitKind::Weight => "Weight",
            UnitKind::Temperature => "Temperature",
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(self.as_str())
    }
}

/// The closed set of supported units.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Unit {
    Meter,
    Kilometer,
    Millimeter,
    Centimeter,
    Mile,
    Yard,
    Foot,
    Inch,
    Gram,
    Kilogram,
    Milligram,
    Pound,
    Ounce,
    Celsius,
    Fahrenheit,
    Kelvin,
}

/// Static definition of a single unit.
///
/// `factor` converts a value in this unit to the kind's reference unit
/// (meters for length, grams for weight). Temperature units don't use
/// it; they convert through the pairwise formulas in [crate::convert].
///
/// Name slots are positional: `[abbreviation, singular, plural]` for
/// length and weight. Celsius and Fahrenheit additionally carry the
/// spelled-out degree phrases, `[abbr, short-abbr, bare-name,
/// "degree X", "degrees X"]`.
#[derive(Debug)]
pub struct UnitDef {
    pub unit: Unit,
    pub kind: UnitKind,
    pub factor: f64,
    pub names: &'static [&'static str],
}

pub(crate) static DEFS: &[UnitDef] = &[
    UnitDef {
        unit: Unit::Meter,
        kind: UnitKind::Length,
        factor: 1.0,
        names: &["m", "meter", "meters"],
    },
    UnitDef {
        unit: Unit::Kilometer,
        kind: UnitKind::Length,
        factor: 1000.0,
        names: &["km", "kilometer", "kilometers"],
    },
    UnitDef {
        unit: Unit::Millimeter,
        kind: UnitKind::Length,
        factor: 0.001,
        names: &["mm", "millimeter", "millimeters"],
    },
    UnitDef {
        unit: Unit::Centimeter,
        kind: UnitKind::Length,
        factor: 0.01,
        names: &["cm", "centimeter", "centimeters"],
    },
    UnitDef {
        unit: Unit::Mile,
        kind: UnitKind::Length,
        factor: 1609.35,
        names: &["mi", "mile", "miles"],
    },
    UnitDef {
        unit: Unit::Yard,
        kind: UnitKind::Length,
        factor: 0.9144,
        names: &["yd", "yard", "yards"],
    },
    UnitDef {
        unit: Unit::Foot,
        kind: UnitKind::Length,
        factor: 0.3048,
        names: &["ft", "foot", "feet"],
    },
    UnitDef {
        unit: Unit::Inch,
        kind: UnitKind::Length,
        factor: 0.0254,
        names: &["in", "inch", "inches"],
    },
    UnitDef {
        unit: Unit::Gram,
        kind: UnitKind::Weight,
        factor: 1.0,
        names: &["g", "gram", "grams"],
    },
    UnitDef {
        unit: Unit::Kilogram,
        kind: UnitKind::Weight,
        factor: 1000.0,
        names: &["kg", "kilogram", "kilograms"],
    },
    UnitDef {
        unit: Unit::Milligram,
        kind: UnitKind::Weight,
        factor: 0.001,
        names: &["mg", "milligram", "milligrams"],
    },
    UnitDef {
        unit: Unit::Pound,
        kind: UnitKind::Weight,
        factor: 453.592,
        names: &["lb", "pound", "pounds"],
    },
    UnitDef {
        unit: Unit::Ounce,
        kind: UnitKind::Weight,
        factor: 28.3495,
        names: &["oz", "ounce", "ounces"],
    },
    UnitDef {
        unit: Unit::Celsius,
        kind: UnitKind::Temperature,
        factor: 0.0,
        names: &["c", "dc", "celsius", "degree Celsius", "degrees Celsius"],
    },
    UnitDef {
        unit: Unit::Fahrenheit,
        kind: UnitKind::Temperature,
        factor: 0.0,
        names: &["f", "df", "fahrenheit", "degree Fahrenheit", "degrees Fahrenheit"],
    },
    UnitDef {
        unit: Unit::Kelvin,
        kind: UnitKind::Temperature,
        factor: 0.0,
        names: &["k", "kelvin", "kelvins"],
    },
];
