// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State of the proposition list and the two actions that touch the backend.

use log::{debug, error, warn};

use crate::backend::Backend;
use crate::model::{DocumentId, Direction, Proposition, Vote};

/// Either nothing has arrived yet, or the most recent complete list.
#[derive(Debug, Default, PartialEq, Eq)]
pub enum Listing {
    #[default]
    Loading,
    Loaded(Vec<Proposition>),
}

impl Listing {
    /// Swap in a freshly fetched list. Previous rows are dropped, never merged.
    pub fn replace(&mut self, propositions: Vec<Proposition>) {
        *self = Listing::Loaded(propositions);
    }
}

/// Fetch the list once. Failures are logged and reported as `None`, leaving
/// whatever is currently shown in place.
pub async fn fetch<B: Backend>(backend: &B) -> Option<Vec<Proposition>> {
    match backend.propositions().await {
        Ok(propositions) => {
            if let Some(first) = propositions.first() {
                debug!("loaded {} propositions, first: {first:?}", propositions.len());
            }
            Some(propositions)
        }
        Err(err) => {
            error!("failed to load propositions: {err}");
            None
        }
    }
}

/// Fetch and hand a successful result to `apply`.
pub async fn refresh<B, F>(backend: &B, apply: F)
where
    B: Backend,
    F: FnOnce(Vec<Proposition>),
{
    if let Some(propositions) = fetch(backend).await {
        apply(propositions);
    }
}

/// A vote bound to one row. Casting does not wait for, or report, the outcome.
#[derive(Clone)]
pub struct VoteAction<B> {
    backend: B,
    document_id: DocumentId,
    direction: Direction,
}

impl<B: Backend + Clone> VoteAction<B> {
    pub fn new(backend: &B, document_id: &DocumentId, direction: Direction) -> Self {
        VoteAction {
            backend: backend.clone(),
            document_id: document_id.clone(),
            direction,
        }
    }

    /// Send the vote and log a failure. Never errors.
    pub async fn send(&self) {
        let vote = Vote::new(self.document_id.clone(), self.direction);

        if let Err(err) = self.backend.vote(vote).await {
            warn!("vote on {} was not recorded: {err}", self.document_id);
        }
    }

    /// Fire-and-forget [`send`](VoteAction::send) on the browser event loop.
    pub fn cast(&self) {
        let action = self.clone();

        wasm_bindgen_futures::spawn_local(async move { action.send().await });
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;
    use futures::FutureExt;

    use super::*;
    use crate::backend::mock::{proposition, MockBackend};
    use crate::error::Error;

    #[test]
    fn loading_until_first_list() {
        let listing = Listing::default();

        assert_eq!(listing, Listing::Loading);
    }

    #[test]
    fn pending_fetch_keeps_loading() {
        let backend = MockBackend::default();
        let listing = RefCell::new(Listing::default());

        let done = refresh(&backend, |list| listing.borrow_mut().replace(list))
            .now_or_never()
            .is_some();

        assert!(!done);
        assert_eq!(*listing.borrow(), Listing::Loading);
        assert_eq!(backend.fetches(), 1);
    }

    #[test]
    fn failed_fetch_keeps_loading() {
        let backend = MockBackend::default();
        let listing = RefCell::new(Listing::default());

        backend.serve(Err(Error::Status {
            url: "/propositions".to_owned(),
            status: 502,
        }));

        block_on(refresh(&backend, |list| listing.borrow_mut().replace(list)));

        assert_eq!(*listing.borrow(), Listing::Loading);
    }

    #[test]
    fn parse_failure_is_handled() {
        let backend = MockBackend::default();
        let source = serde_json::from_str::<Vec<Proposition>>("<html>").unwrap_err();

        backend.serve(Err(Error::Parse {
            url: "/propositions".to_owned(),
            source,
        }));

        assert_eq!(block_on(fetch(&backend)), None);
    }

    #[test]
    fn refresh_replaces_rows() {
        let backend = MockBackend::default();
        let mut listing = Listing::default();

        backend
            .serve(Ok(vec![proposition("A1", "First"), proposition("A2", "Second")]))
            .serve(Ok(vec![proposition("B1", "Third")]));

        if let Some(list) = block_on(fetch(&backend)) {
            listing.replace(list);
        }
        assert_eq!(backend.fetches(), 1);

        if let Some(list) = block_on(fetch(&backend)) {
            listing.replace(list);
        }
        assert_eq!(backend.fetches(), 2);
        assert_eq!(listing, Listing::Loaded(vec![proposition("B1", "Third")]));
    }

    #[test]
    fn empty_list_is_loaded() {
        let backend = MockBackend::default();
        let mut listing = Listing::default();

        backend.serve(Ok(Vec::new()));

        block_on(refresh(&backend, |list| listing.replace(list)));

        assert_eq!(listing, Listing::Loaded(Vec::new()));
    }

    #[test]
    fn upvote_posts_once() {
        let backend = MockBackend::default();
        let item = proposition("H501123", "Budget");

        block_on(VoteAction::new(&backend, &item.id, Direction::Up).send());

        assert_eq!(
            backend.votes(),
            vec![Vote::new("H501123".into(), Direction::Up)]
        );
    }

    #[test]
    fn downvote_posts_once() {
        let backend = MockBackend::default();
        let item = proposition("H501123", "Budget");

        block_on(VoteAction::new(&backend, &item.id, Direction::Down).send());

        let votes = backend.votes();

        assert_eq!(votes.len(), 1);
        assert_eq!(
            serde_json::to_value(&votes[0]).unwrap(),
            serde_json::json!({ "document_id": "H501123", "vote": -1 })
        );
    }

    #[test]
    fn failed_vote_is_swallowed() {
        let backend = MockBackend::default();

        backend.fail_votes();

        block_on(VoteAction::new(&backend, &"A1".into(), Direction::Up).send());

        assert_eq!(backend.votes().len(), 1);
    }
}
