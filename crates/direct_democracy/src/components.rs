// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use kobold::branching::Branch2;
use kobold::prelude::*;

use crate::backend::{Backend, SharedBackend};
use crate::listing::{self, Listing, VoteAction};
use crate::model::Direction;
use crate::table::{self, Row, Table};

// Root of the app: a heading and the list of propositions.
#[component]
pub fn DirectDemocracy(backend: SharedBackend) -> impl View {
    view! {
        <div>
            <h2>"Propositioner"</h2>
            <Propositions {backend} />
        </div>
    }
}

#[component]
pub fn Propositions(backend: SharedBackend) -> impl View {
    let loader = backend.clone();

    stateful(Listing::default, move |listing| {
        view! { <ListingView {listing} backend={backend.clone()} /> }
    })
    .once(move |signal| {
        load(&loader, signal.clone());

        #[cfg(feature = "debug-hooks")]
        crate::debug::register_reload(move || load(&loader, signal.clone()));
    })
}

fn load(backend: &SharedBackend, signal: Signal<Listing>) {
    let backend = backend.clone();

    wasm_bindgen_futures::spawn_local(async move {
        listing::refresh(&backend, |propositions| {
            signal.update(move |listing| listing.replace(propositions))
        })
        .await
    });
}

#[component]
fn ListingView<'a>(listing: &'a Hook<Listing>, backend: SharedBackend) -> impl View + 'a {
    match &**listing {
        Listing::Loading => Branch2::A(view! { <div>"Loading..."</div> }),
        Listing::Loaded(propositions) => {
            let table = Table::new(propositions, &backend.config().document_scheme);

            Branch2::B(view! {
                <div>
                    <table>
                        <tr>
                            <td>{ static table::HEADERS[0] }</td>
                            <td>{ static table::HEADERS[1] }</td>
                        </tr>
                        {
                            for table.rows.into_iter().map(move |row| view! {
                                <PropositionRow {row} backend={backend.clone()} />
                            })
                        }
                    </table>
                </div>
            })
        }
    }
}

#[component]
fn PropositionRow<'a>(row: Row<'a>, backend: SharedBackend) -> impl View + 'a {
    let Row { proposition, href } = row;

    let upvote = VoteAction::new(&backend, &proposition.id, Direction::Up);
    let downvote = VoteAction::new(&backend, &proposition.id, Direction::Down);

    view! {
        <tr.proposition_row>
            <td colspan="5">
                <a {href}>{ ref proposition.title }</a>
            </td>
            <td>{ ref proposition.date }</td>
            <td.upvote onclick={move |_| upvote.cast()}>{ static Direction::Up.label() }</td>
            <td.downvote onclick={move |_| downvote.cast()}>{ static Direction::Down.label() }</td>
            <td>{ static table::SCORE_PLACEHOLDER }</td>
        </tr>
    }
}
