// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::types::{Unit, UnitDef, UnitKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertError {
    /// The two units belong to different kinds.
    Incompatible,
    /// Negative quantities are rejected for lengths and weights.
    Negative(UnitKind),
}

/// Converts `quantity` from one unit to another.
///
/// Lengths and weights go through the reference unit: multiply by the
/// source factor, divide by the target factor. Temperatures use the
/// direct formula for each ordered pair; converting K to F does not
/// round-trip through Celsius, so results match the usual textbook
/// formulas bit for bit.
pub fn convert(quantity: f64, from: &UnitDef, to: &UnitDef) -> Result<f64, ConvertError> {
    if from.kind != to.kind {
        return Err(ConvertError::Incompatible);
    }
    if quantity < 0.0 && from.kind != UnitKind::Temperature {
        return Err(ConvertError::Negative(from.kind));
    }
    let result = match from.kind {
        UnitKind::Temperature => convert_temperature(quantity, from.unit, to.unit),
        UnitKind::Length | UnitKind::Weight => quantity * from.factor / to.factor,
    };
    Ok(result)
}

fn convert_temperature(value: f64, from: Unit, to: Unit) -> f64 {
    use crate::types::Unit::{Celsius, Fahrenheit, Kelvin};

    match (from, to) {
        (Celsius, Fahrenheit) => value * 9.0 / 5.0 + 32.0,
        (Fahrenheit, Celsius) => (value - 32.0) * 5.0 / 9.0,
        (Celsius, Kelvin) => value + 273.15,
        (Kelvin, Celsius) => value - 273.15,
        (Fahrenheit, Kelvin) => (value + 459.67) * 5.0 / 9.0,
        (Kelvin, Fahrenheit) => value * 9.0 / 5.0 - 459.67,
        // Identity covers from == to.
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::{convert, ConvertError};
    use crate::types::{UnitKind, DEFS};

    #[test]
    fn identity_conversion() {
        for def in DEFS {
            assert_eq!(convert(5.0, def, def).unwrap(), 5.0);
            assert_eq!(convert(0.0, def, def).unwrap(), 0.0);
        }
    }

    #[test]
    fn linear_round_trip() {
        for a in DEFS.iter().filter(|d| d.kind != UnitKind::Temperature) {
            for b in DEFS.iter().filter(|d| d.kind == a.kind) {
                let there = convert(3.5, a, b).unwrap();
                let back = convert(there, b, a).unwrap();
                assert!(
                    (back - 3.5).abs() < 1e-9,
                    "{:?} -> {:?} -> back gave {}",
                    a.unit,
                    b.unit,
                    back
                );
            }
        }
    }

    #[test]
    fn length_conversions() {
        let catalog = crate::Catalog::new();
        let km = catalog.lookup("km").unwrap();
        let mi = catalog.lookup("mi").unwrap();
        let ft = catalog.lookup("ft").unwrap();
        let inch = catalog.lookup("inch").unwrap();

        assert_eq!(convert(5.0, km, mi).unwrap(), 5.0 * 1000.0 / 1609.35);
        assert_eq!(convert(1.0, ft, inch).unwrap(), 0.3048 / 0.0254);
    }

    #[test]
    fn temperature_formulas() {
        let catalog = crate::Catalog::new();
        let c = catalog.lookup("c").unwrap();
        let f = catalog.lookup("f").unwrap();
        let k = catalog.lookup("k").unwrap();

        assert_eq!(convert(10.0, c, f).unwrap(), 50.0);
        assert_eq!(convert(100.0, f, c).unwrap(), 37.77777777777778);
        assert_eq!(convert(100.0, c, k).unwrap(), 373.15);
        assert_eq!(convert(0.0, k, c).unwrap(), -273.15);
        assert_eq!(convert(32.0, f, k).unwrap(), 273.15);
        assert_eq!(convert(300.0, k, f).unwrap(), 80.32999999999998);
    }

    #[test]
    fn celsius_fahrenheit_round_trip_is_exact() {
        let catalog = crate::Catalog::new();
        let c = catalog.lookup("c").unwrap();
        let f = catalog.lookup("f").unwrap();

        let there = convert(10.0, c, f).unwrap();
        assert_eq!(convert(there, f, c).unwrap(), 10.0);
    }

    #[test]
    fn negative_temperatures_are_fine() {
        let catalog = crate::Catalog::new();
        let f = catalog.lookup("f").unwrap();
        let c = catalog.lookup("c").unwrap();

        assert_eq!(convert(-40.0, f, c).unwrap(), -40.0);
    }

    #[test]
    fn negative_length_and_weight_are_rejected() {
        let catalog = crate::Catalog::new();
        let m = catalog.lookup("m").unwrap();
        let km = catalog.lookup("km").unwrap();
        let kg = catalog.lookup("kg").unwrap();
        let g = catalog.lookup("g").unwrap();

        assert_eq!(
            convert(-5.0, m, km),
            Err(ConvertError::Negative(UnitKind::Length))
        );
        assert_eq!(
            convert(-5.0, kg, g),
            Err(ConvertError::Negative(UnitKind::Weight))
        );
    }

    #[test]
    fn kind_mismatch_is_rejected() {
        let catalog = crate::Catalog::new();
        let m = catalog.lookup("m").unwrap();
        let kg = catalog.lookup("kg").unwrap();
        let c = catalog.lookup("c").unwrap();

        assert_eq!(convert(1.0, m, kg), Err(ConvertError::Incompatible));
        assert_eq!(convert(1.0, kg, c), Err(ConvertError::Incompatible));
    }
}
