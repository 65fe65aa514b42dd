// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Records exchanged with the backend.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque document identifier. The backend may hand out either strings or
/// numbers, and whatever it sent is echoed back verbatim in votes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentId {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DocumentId::Text(text) => f.write_str(text),
            DocumentId::Number(number) => fmt::Display::fmt(number, f),
        }
    }
}

impl From<&str> for DocumentId {
    fn from(text: &str) -> Self {
        DocumentId::Text(text.to_owned())
    }
}

impl From<u64> for DocumentId {
    fn from(number: u64) -> Self {
        DocumentId::Number(number.into())
    }
}

/// A single legislative proposition, as listed by `GET /propositions`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Proposition {
    #[serde(rename = "dok_id")]
    pub id: DocumentId,
    #[serde(rename = "titel")]
    pub title: String,
    #[serde(rename = "datum")]
    pub date: String,
    /// Scheme-relative path to the HTML rendition of the document.
    #[serde(rename = "dokument_url_html")]
    pub document_url_html: String,
}

impl Proposition {
    /// Absolute link to the document, `scheme` is prepended verbatim.
    pub fn link(&self, scheme: &str) -> String {
        let mut link = String::with_capacity(scheme.len() + self.document_url_html.len());

        link.push_str(scheme);
        link.push_str(&self.document_url_html);
        link
    }
}

/// The list endpoint collapses a single result into a bare object.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::Many(list) => list,
            OneOrMany::One(item) => vec![item],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn value(self) -> i8 {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }

    /// Text of the table cell casting this vote.
    pub fn label(self) -> &'static str {
        match self {
            Direction::Up => "Upvote",
            Direction::Down => "Downvote",
        }
    }
}

impl Serialize for Direction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i8(self.value())
    }
}

/// Body of `POST /vote`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vote {
    pub document_id: DocumentId,
    pub vote: Direction,
}

impl Vote {
    pub fn new(document_id: DocumentId, vote: Direction) -> Self {
        Vote { document_id, vote }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"[
        {
            "dok_id": "H501123",
            "titel": "Extra ändringsbudget för 2024",
            "datum": "2024-09-19",
            "dokument_url_html": "//data.riksdagen.se/dokument/H501123.html",
            "organ": "Finansdepartementet"
        },
        {
            "dok_id": 42,
            "titel": "Skattefrågor",
            "datum": "2024-09-20",
            "dokument_url_html": "//data.riksdagen.se/dokument/42.html"
        }
    ]"#;

    #[test]
    fn parses_listing_and_ignores_extra_fields() {
        let list: Vec<Proposition> = serde_json::from_str(LISTING).unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, DocumentId::from("H501123"));
        assert_eq!(list[0].title, "Extra ändringsbudget för 2024");
        assert_eq!(list[1].id, DocumentId::from(42));
        assert_eq!(list[1].id.to_string(), "42");
        assert_eq!(list[1].document_url_html, "//data.riksdagen.se/dokument/42.html");
    }

    #[test]
    fn missing_field_is_rejected() {
        let res = serde_json::from_str::<Vec<Proposition>>(r#"[{ "dok_id": "A1", "titel": "x" }]"#);

        assert!(res.is_err());
    }

    #[test]
    fn single_object_becomes_one_element_list() {
        let single = r#"{
            "dok_id": "A1",
            "titel": "Title",
            "datum": "2024-01-01",
            "dokument_url_html": "//example.org/A1.html"
        }"#;

        let list: Vec<Proposition> = serde_json::from_str::<OneOrMany<Proposition>>(single)
            .unwrap()
            .into();

        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, DocumentId::from("A1"));
    }

    #[test]
    fn link_prepends_scheme() {
        let list: Vec<Proposition> = serde_json::from_str(LISTING).unwrap();

        assert_eq!(
            list[0].link("http:"),
            "http://data.riksdagen.se/dokument/H501123.html"
        );
    }

    #[test]
    fn direction_labels() {
        assert_eq!(Direction::Up.label(), "Upvote");
        assert_eq!(Direction::Down.label(), "Downvote");
    }

    #[test]
    fn vote_body_matches_backend() {
        let up = Vote::new("H501123".into(), Direction::Up);
        let down = Vote::new(42.into(), Direction::Down);

        assert_eq!(
            serde_json::to_value(&up).unwrap(),
            serde_json::json!({ "document_id": "H501123", "vote": 1 })
        );
        assert_eq!(
            serde_json::to_value(&down).unwrap(),
            serde_json::json!({ "document_id": 42, "vote": -1 })
        );
    }
}
