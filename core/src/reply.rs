// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde_derive::{Deserialize, Serialize};

use crate::fmt;
use crate::types::UnitKind;

/// A successful conversion, with the display names already chosen for
/// each side's value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionReply {
    pub quantity: f64,
    pub from_name: String,
    pub result: f64,
    pub to_name: String,
}

/// Everything that can go wrong with one input line. Each variant
/// renders to a single user-facing message; nothing here aborts the
/// session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum QueryError {
    /// Malformed separator, non-numeric quantity, or anything else the
    /// parser couldn't make sense of.
    Parse,
    /// Unknown unit on either side, or a kind mismatch. Names hold the
    /// plural display name of whichever side resolved, `???` otherwise.
    Impossible { from: String, to: String },
    /// Negative quantity for a length or weight.
    Negative(UnitKind),
}

impl Display for ConversionReply {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{} {} is {} {}",
            fmt::to_string(self.quantity),
            self.from_name,
            fmt::to_string(self.result),
            self.to_name
        )
    }
}

impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match *self {
            QueryError::Parse => write!(f, "Parse error"),
            QueryError::Impossible { ref from, ref to } => {
                write!(f, "Conversion from {} to {} is impossible", from, to)
            }
            QueryError::Negative(kind) => write!(f, "{} shouldn't be negative.", kind),
        }
    }
}
