// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::model::Proposition;

pub const HEADERS: [&str; 2] = ["Titel", "Datum"];

/// Static text of the score column. Nothing computes a score.
pub const SCORE_PLACEHOLDER: &str = "Score";

/// One rendered proposition.
#[derive(Debug, PartialEq, Eq)]
pub struct Row<'a> {
    pub proposition: &'a Proposition,
    pub href: String,
}

/// Header row followed by one row per proposition, in the order received.
#[derive(Debug)]
pub struct Table<'a> {
    pub rows: Vec<Row<'a>>,
}

impl<'a> Table<'a> {
    pub fn new(propositions: &'a [Proposition], scheme: &str) -> Self {
        let rows = propositions
            .iter()
            .map(|proposition| Row {
                proposition,
                href: proposition.link(scheme),
            })
            .collect();

        Table { rows }
    }

    /// Number of `<tr>` elements, header included.
    pub fn row_count(&self) -> usize {
        self.rows.len() + 1
    }
}
