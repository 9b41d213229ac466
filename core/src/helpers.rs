// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::catalog::Catalog;
use crate::convert::{convert, ConvertError};
use crate::fmt::display_name;
use crate::parsing::parse_query;
use crate::reply::{ConversionReply, QueryError};
use crate::types::UnitDef;

/// Parses a line, resolves both unit phrases, and runs the conversion.
///
/// Each line is independent; the catalog is the only state involved.
pub fn eval(catalog: &Catalog, line: &str) -> Result<ConversionReply, QueryError> {
    let query = parse_query(line)?;

    let from = catalog.lookup(&query.from);
    let to = catalog.lookup(&query.to);
    let (from, to) = match (from, to) {
        (Some(from), Some(to)) if from.kind == to.kind => (from, to),
        (from, to) => {
            // The impossible-conversion message always uses the plural
            // form, even though no quantity is being shown.
            let name = |def: Option<&'static UnitDef>| match def {
                Some(def) => display_name(def, 2.0).to_owned(),
                None => "???".to_owned(),
            };
            return Err(QueryError::Impossible {
                from: name(from),
                to: name(to),
            });
        }
    };

    let result = convert(query.quantity, from, to).map_err(|err| match err {
        ConvertError::Negative(kind) => QueryError::Negative(kind),
        ConvertError::Incompatible => QueryError::Impossible {
            from: display_name(from, 2.0).to_owned(),
            to: display_name(to, 2.0).to_owned(),
        },
    })?;

    Ok(ConversionReply {
        quantity: query.quantity,
        from_name: display_name(from, query.quantity).to_owned(),
        result,
        to_name: display_name(to, result).to_owned(),
    })
}

/// A version of eval() that converts results and errors into plain-text strings.
pub fn one_line(catalog: &Catalog, line: &str) -> Result<String, String> {
    eval(catalog, line)
        .as_ref()
        .map(ToString::to_string)
        .map_err(ToString::to_string)
}
