//! Zettel model and wire shapes
//!
//! The store owns every zettel; the client only ever holds transient copies
//! of the last response. Ids are assigned by the store, never locally.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A store-assigned zettel identifier.
///
/// "No zettel selected" is `Option::<ZettelId>::None`; there is no in-band
/// sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZettelId(i64);

impl ZettelId {
    /// Wrap a raw store id.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw store id.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ZettelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ZettelId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// One row of the zettel list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZettelSummary {
    /// Store-assigned identifier
    pub id: ZettelId,
    /// First line of the body, as chosen by the store
    pub title: String,
    /// Last-modified date, preformatted by the store
    pub date: String,
    /// Space-joined tag names
    pub tags: String,
}

impl ZettelSummary {
    /// Row heading in the list, e.g. `Groceries (#42)`.
    #[must_use]
    pub fn row_title(&self) -> String {
        format!("{} (#{})", self.title, self.id)
    }
}

/// Response of a single-zettel fetch: editable source plus display form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZettelContent {
    /// Raw editable body
    pub text: String,
    /// Server-rendered HTML of the body
    pub markdown: String,
}

/// Response of a save: refreshed metadata plus authoritative content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedZettel {
    pub title: String,
    pub date: String,
    pub tags: String,
    pub text: String,
    pub markdown: String,
}

impl SavedZettel {
    /// The list row matching this save result.
    #[must_use]
    pub fn into_summary(self, id: ZettelId) -> ZettelSummary {
        ZettelSummary {
            id,
            title: self.title,
            date: self.date,
            tags: self.tags,
        }
    }
}

/// Response of a create: the store picks the id and all initial fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedZettel {
    pub id: ZettelId,
    pub title: String,
    pub date: String,
    pub tags: String,
    pub text: String,
    pub markdown: String,
}

impl CreatedZettel {
    /// The list row for the freshly created zettel.
    #[must_use]
    pub fn summary(&self) -> ZettelSummary {
        ZettelSummary {
            id: self.id,
            title: self.title.clone(),
            date: self.date.clone(),
            tags: self.tags.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn zettel_id_parses_and_displays() {
        let id: ZettelId = "42".parse().unwrap();
        assert_eq!(id, ZettelId::new(42));
        assert_eq!(id.to_string(), "42");
        assert!("abc".parse::<ZettelId>().is_err());
    }

    #[test]
    fn zettel_id_serializes_as_plain_number() {
        let json = serde_json::to_string(&ZettelId::new(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn row_title_includes_id() {
        let summary = ZettelSummary {
            id: ZettelId::new(42),
            title: "T".to_string(),
            date: "2026-08-01".to_string(),
            tags: "a b".to_string(),
        };
        assert_eq!(summary.row_title(), "T (#42)");
    }

    #[test]
    fn saved_zettel_becomes_summary() {
        let saved = SavedZettel {
            title: "T".to_string(),
            date: "D".to_string(),
            tags: "a b".to_string(),
            text: "world".to_string(),
            markdown: "<p>world</p>".to_string(),
        };
        let summary = saved.into_summary(ZettelId::new(42));
        assert_eq!(summary.row_title(), "T (#42)");
        assert_eq!(summary.tags, "a b");
    }
}
