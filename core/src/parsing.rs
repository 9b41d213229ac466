// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parser for conversion queries of the form
//! `<number> <from-unit...> (to|in) <to-unit...>`.

use crate::reply::QueryError;

/// A parsed but not yet resolved query. Unit phrases are kept as raw
/// text; the resolver decides whether they mean anything.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub quantity: f64,
    pub from: String,
    pub to: String,
}

/// Splits a line into quantity, source phrase, and target phrase.
///
/// The separator is the first token that is literally `to` or `in`; it
/// must leave at least two tokens (number + unit) before it and one
/// after. Unit phrases may span several tokens (`degree Celsius`).
///
/// A line containing the substring `convertTo` (any case) is rejected
/// as an impossible conversion before anything else happens, even when
/// the rest of the line would parse. Long-standing quirk, kept for
/// compatibility.
pub fn parse_query(line: &str) -> Result<Query, QueryError> {
    let line = line.trim();

    if line.to_lowercase().contains("convertto") {
        return Err(QueryError::Impossible {
            from: "???".to_owned(),
            to: "???".to_owned(),
        });
    }

    let parts: Vec<&str> = line.split(' ').collect();
    let separator = match parts.iter().position(|&part| part == "to" || part == "in") {
        Some(index) if index >= 2 && index + 1 < parts.len() => index,
        _ => return Err(QueryError::Parse),
    };

    let quantity: f64 = parts[0].parse().map_err(|_| QueryError::Parse)?;

    Ok(Query {
        quantity,
        from: parts[1..separator].join(" "),
        to: parts[separator + 1..].join(" "),
    })
}
