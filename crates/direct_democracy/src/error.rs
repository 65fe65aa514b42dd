// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced a response: network unreachable, CORS, aborted.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: gloo_net::Error,
    },

    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },

    #[error("malformed response from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode request payload: {0}")]
    Encode(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn transport(url: &str, source: gloo_net::Error) -> Self {
        Error::Transport {
            url: url.to_owned(),
            source,
        }
    }

    pub(crate) fn parse(url: &str, source: serde_json::Error) -> Self {
        Error::Parse {
            url: url.to_owned(),
            source,
        }
    }
}
