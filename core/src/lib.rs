// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Unitconv converts lengths, weights, and temperatures between the
//! everyday metric and imperial units, from queries written the way
//! people type them: `5 km to miles`, `1 degree Celsius in f`.
//! `unitconv_core` is the library behind the CLI.
//!
//! Queries are processed one line at a time against a [Catalog] built
//! once at startup; nothing else carries over between lines.
//!
//! ## Example
//!
//! ```rust
//! let catalog = unitconv_core::Catalog::new();
//! let line = unitconv_core::one_line(&catalog, "5 km to miles").unwrap();
//! println!("{}", line);
//! // Prints: 5.0 kilometers is 3.106844378165098 miles
//! ```

pub mod catalog;
pub mod convert;
pub mod fmt;
mod helpers;
pub mod parsing;
pub mod reply;
pub mod types;

pub use crate::catalog::Catalog;
pub use crate::helpers::{eval, one_line};
pub use crate::reply::{ConversionReply, QueryError};
pub use crate::types::{Unit, UnitDef, UnitKind};
