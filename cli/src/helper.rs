// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::sync::Arc;

use rustyline::{
    completion::{extract_word, Completer, Pair},
    highlight::Highlighter,
    hint::Hinter,
    validate::Validator,
    Helper,
};
use rustyline::{Context as LineContext, Result};

use unitconv_core::Catalog;

pub struct ConvHelper {
    catalog: Arc<Catalog>,
}

impl ConvHelper {
    pub fn new(catalog: Arc<Catalog>) -> ConvHelper {
        ConvHelper { catalog }
    }
}

impl Completer for ConvHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &LineContext) -> Result<(usize, Vec<Pair>)> {
        let (res_pos, name) = extract_word(line, pos, None, &[b' ']);
        if name.is_empty() {
            return Ok((res_pos, vec![]));
        }

        let name = name.to_lowercase();
        let results = self
            .catalog
            .names()
            .filter(|alias| alias.starts_with(&name))
            .take(10)
            .map(|alias| Pair {
                display: alias.to_owned(),
                replacement: alias.to_owned(),
            })
            .collect();

        Ok((res_pos, results))
    }
}

impl Helper for ConvHelper {}

impl Validator for ConvHelper {}

impl Highlighter for ConvHelper {}

impl Hinter for ConvHelper {
    type Hint = String;
}
