// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Direct Democracy
//!
//! Browser frontend listing the latest government propositions, with an
//! upvote and a downvote for each of them.
//!
//! On mount the [`Propositions`](components::Propositions) component fetches
//! `GET /propositions` once and renders it as a table. Clicking a vote cell
//! posts `{"document_id": .., "vote": 1 | -1}` to `/vote` without waiting for
//! the outcome.
//!
//! ```no_run
//! use direct_democracy::{Config, DirectDemocracy, HttpBackend};
//! use kobold::prelude::*;
//!
//! let backend = HttpBackend::shared(Config::default());
//!
//! kobold::start(view! {
//!     <DirectDemocracy {backend} />
//! });
//! ```

mod backend;
mod components;
mod config;
mod error;
mod model;

pub mod http;
pub mod listing;
pub mod table;

#[cfg(feature = "debug-hooks")]
pub mod debug;

pub use backend::{Backend, HttpBackend, SharedBackend};
pub use components::{DirectDemocracy, Propositions};
pub use config::Config;
pub use error::{Error, Result};
pub use model::{Direction, DocumentId, Proposition, Vote};
