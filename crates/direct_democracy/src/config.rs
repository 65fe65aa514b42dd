// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use log::Level;

/// Where the backend lives and how documents are linked.
///
/// The defaults talk to the origin the page was served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub propositions_path: String,
    pub vote_path: String,
    /// Prepended to the scheme-relative document paths sent by the backend.
    pub document_scheme: String,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: String::new(),
            propositions_path: "/propositions".to_owned(),
            vote_path: "/vote".to_owned(),
            document_scheme: "http:".to_owned(),
            log_level: if cfg!(debug_assertions) {
                Level::Debug
            } else {
                Level::Info
            },
        }
    }
}

impl Config {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_document_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.document_scheme = scheme.into();
        self
    }

    pub fn with_log_level(mut self, level: Level) -> Self {
        self.log_level = level;
        self
    }

    pub fn propositions_url(&self) -> String {
        self.url(&self.propositions_path)
    }

    pub fn vote_url(&self) -> String {
        self.url(&self.vote_path)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}
