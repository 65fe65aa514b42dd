// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};

use crate::config::Config;
use crate::error::Result;
use crate::http;
use crate::model::{OneOrMany, Proposition, Vote};

/// The two calls the frontend makes. Returned futures own everything they
/// need so they can be handed straight to `spawn_local`.
///
/// Views hold the backend as a [`SharedBackend`].
pub trait Backend: 'static {
    fn config(&self) -> &Config;

    fn propositions(&self) -> LocalBoxFuture<'static, Result<Vec<Proposition>>>;

    /// Resolves once the vote was delivered. A non-2xx status is an error.
    fn vote(&self, vote: Vote) -> LocalBoxFuture<'static, Result<()>>;
}

pub type SharedBackend = Rc<dyn Backend>;

impl<B: Backend + ?Sized> Backend for Rc<B> {
    fn config(&self) -> &Config {
        (**self).config()
    }

    fn propositions(&self) -> LocalBoxFuture<'static, Result<Vec<Proposition>>> {
        (**self).propositions()
    }

    fn vote(&self, vote: Vote) -> LocalBoxFuture<'static, Result<()>> {
        (**self).vote(vote)
    }
}

/// [`Backend`] talking JSON over `fetch`. Cloning is cheap.
#[derive(Debug, Clone, Default)]
pub struct HttpBackend {
    config: Rc<Config>,
}

impl HttpBackend {
    pub fn new(config: Config) -> Self {
        HttpBackend {
            config: Rc::new(config),
        }
    }

    /// Type-erased handle for the views.
    pub fn shared(config: Config) -> SharedBackend {
        Rc::new(HttpBackend::new(config))
    }
}

impl Backend for HttpBackend {
    fn config(&self) -> &Config {
        &self.config
    }

    fn propositions(&self) -> LocalBoxFuture<'static, Result<Vec<Proposition>>> {
        let url = self.config.propositions_url();

        async move {
            let list: OneOrMany<Proposition> = http::fetch_json(&url).await?;

            Ok(list.into())
        }
        .boxed_local()
    }

    fn vote(&self, vote: Vote) -> LocalBoxFuture<'static, Result<()>> {
        let url = self.config.vote_url();

        async move {
            let res = http::post(&url, &vote).await?;

            http::check_status(&url, &res)
        }
        .boxed_local()
    }
}
