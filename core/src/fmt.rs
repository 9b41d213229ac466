// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Turns units and numbers into the words used in output lines.

use crate::types::{Unit, UnitDef, UnitKind};

/// Picks the display name for a unit given the value shown next to it.
///
/// Exactly 1.0 is singular, everything else is plural; the comparison
/// is deliberately exact rather than epsilon-tolerant, so `1.0000001
/// meters` keeps the plural. Kelvin has no degree phrase, and Celsius
/// and Fahrenheit always render as `degree(s) X`. Falls back to the
/// abbreviation if a definition is missing the requested slot.
pub fn display_name(def: &UnitDef, value: f64) -> &'static str {
    let singular = value == 1.0;
    let slot = match (def.kind, def.unit) {
        (UnitKind::Temperature, Unit::Kelvin) => {
            if singular {
                1
            } else {
                2
            }
        }
        (UnitKind::Temperature, _) => {
            if singular {
                3
            } else {
                4
            }
        }
        _ => {
            if singular {
                1
            } else {
                2
            }
        }
    };
    def.names.get(slot).copied().unwrap_or(def.names[0])
}

/// Renders a value the way it appears in output lines: shortest
/// round-trip form, keeping a trailing `.0` on integral values, so `5`
/// comes back out as `5.0`.
pub fn to_string(value: f64) -> String {
    format!("{:?}", value)
}
