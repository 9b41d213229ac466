use std::collections::BTreeMap;

use crate::types::{UnitDef, DEFS};

/// The static set of recognized units, indexed by lower-cased alias.
///
/// Built once at startup and read-only afterwards; construction panics
/// if two definitions claim the same alias, since a silent
/// first-registered-wins shadow would be a defect.
#[derive(Debug)]
pub struct Catalog {
    units: BTreeMap<String, &'static UnitDef>,
}

impl Catalog {
    pub fn new() -> Catalog {
        let mut units = BTreeMap::new();
        for def in DEFS {
            for name in def.names {
                let prev = units.insert(name.to_lowercase(), def);
                assert!(prev.is_none(), "duplicate unit alias {:?}", name);
            }
        }
        Catalog { units }
    }

    /// Case-insensitive, exact-match lookup. Returns None for unknown
    /// tokens so callers can render the `???` placeholder instead of
    /// treating this as a parse failure.
    pub fn lookup(&self, name: &str) -> Option<&'static UnitDef> {
        self.units.get(&name.to_lowercase()).copied()
    }

    /// All recognized aliases, lower-cased. Used for completion.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.units.keys().map(|k| &k[..])
    }
}

impl Default for Catalog {
    fn default() -> Catalog {
        Catalog::new()
    }
}
