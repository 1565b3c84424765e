//! Data models shared across the client

mod tags;
mod zettel;

pub use tags::{decode_tag_filter, encode_tag_filter, SearchFilter, TagCount};
pub use zettel::{CreatedZettel, SavedZettel, ZettelContent, ZettelId, ZettelSummary};
