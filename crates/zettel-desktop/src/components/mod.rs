//! UI Components
//!
//! Components for the zettel client window.

mod action_bar;
mod editor_pane;
mod search_bar;
mod tag_filter;
mod zettel_list;
mod zettel_row;

pub use action_bar::ActionBar;
pub use editor_pane::EditorPane;
pub use search_bar::SearchBar;
pub use tag_filter::TagFilterModal;
pub use zettel_list::ZettelList;
pub use zettel_row::ZettelRow;
