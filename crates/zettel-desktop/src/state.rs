//! Application state management
//!
//! Global state accessible via Dioxus context providers. The editor session
//! is the single source of truth for selection and mode; components render
//! from it and never store either themselves.

use std::collections::BTreeSet;
use std::sync::Arc;

use dioxus::prelude::*;

use zettel_core::models::TagCount;
use zettel_core::{EditorSession, ZettelId, ZettelStoreClient, ZettelSummary};

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Store client, once configuration resolved
    pub client: Signal<Option<Arc<ZettelStoreClient>>>,
    /// Zettel list as last fetched from the store
    pub items: Signal<Vec<ZettelSummary>>,
    /// Selection, edit mode, and in-flight request generation
    pub session: Signal<EditorSession>,
    /// View pane content: store-rendered HTML, or an inline error
    pub view_html: Signal<String>,
    /// Edit pane buffer: raw zettel source being edited
    pub edit_buffer: Signal<String>,
    /// Free-text search input
    pub search_query: Signal<String>,
    /// Space-joined tag filter input
    pub tags_input: Signal<String>,
    /// Error shown in place of the list when a reload failed
    pub list_error: Signal<Option<String>>,
    /// Whether the tag filter modal is open
    pub tag_picker_open: Signal<bool>,
    /// Tag catalog for the modal; `None` until the fetch lands
    pub tag_catalog: Signal<Option<Vec<TagCount>>>,
    /// Checkbox state inside the modal
    pub checked_tags: Signal<BTreeSet<String>>,
    /// Error shown inside the modal when the catalog fetch failed
    pub tag_picker_error: Signal<Option<String>>,
}

impl AppState {
    /// The id the action buttons are currently bound to, if any.
    #[must_use]
    pub fn selected_id(&self) -> Option<ZettelId> {
        (self.session)().selected()
    }
}
