//! Tag filter encoding (search + tag filtering).
//!
//! Tag selections round-trip between the tags input field and the filter
//! modal's checkbox list through a space-joined string, the same encoding
//! the store expects in the `tags` query parameter.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One entry of the store's tag catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    /// Tag name (no whitespace)
    pub name: String,
    /// Number of zettels carrying the tag
    pub count: u64,
}

/// Decode a space-joined tag string into a set of tag names.
#[must_use]
pub fn decode_tag_filter(raw: &str) -> BTreeSet<String> {
    raw.split_whitespace().map(ToString::to_string).collect()
}

/// Encode a set of tag names into the space-joined string form.
#[must_use]
pub fn encode_tag_filter(tags: &BTreeSet<String>) -> String {
    tags.iter().cloned().collect::<Vec<_>>().join(" ")
}

/// Free-text query plus encoded tag filter, the input to a list reload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    /// Free-text query matched against zettel bodies
    pub query: String,
    /// Space-joined tag names
    pub tags: String,
}

impl SearchFilter {
    /// Build a filter from raw input field values.
    #[must_use]
    pub fn new(query: impl Into<String>, tags: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            tags: tags.into(),
        }
    }

    /// The tag selection as a set.
    #[must_use]
    pub fn tag_set(&self) -> BTreeSet<String> {
        decode_tag_filter(&self.tags)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn set(tags: &[&str]) -> BTreeSet<String> {
        tags.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn decode_splits_on_any_whitespace() {
        assert_eq!(decode_tag_filter("  a   b\tc "), set(&["a", "b", "c"]));
        assert!(decode_tag_filter("   ").is_empty());
    }

    #[test]
    fn encode_decode_round_trips_as_a_set() {
        let tags = set(&["work", "urgent", "personal"]);
        assert_eq!(decode_tag_filter(&encode_tag_filter(&tags)), tags);
    }

    #[test]
    fn decode_encode_is_order_independent() {
        let encoded = encode_tag_filter(&decode_tag_filter("b a c"));
        assert_eq!(encoded, "a b c");
        assert_eq!(decode_tag_filter(&encoded), set(&["a", "b", "c"]));
    }

    #[test]
    fn filter_exposes_tag_set() {
        let filter = SearchFilter::new("groceries", "food weekly");
        assert_eq!(filter.tag_set(), set(&["food", "weekly"]));
    }
}
