//! Main application component

use std::collections::BTreeSet;
use std::sync::Arc;

use dioxus::prelude::*;

use zettel_core::config::ClientConfig;
use zettel_core::models::TagCount;
use zettel_core::{EditorSession, ZettelStoreClient};

use crate::actions;
use crate::components::TagFilterModal;
use crate::state::AppState;
use crate::views::Home;

/// Root application component
#[component]
pub fn App() -> Element {
    // State signals
    let client: Signal<Option<Arc<ZettelStoreClient>>> = use_signal(|| None);
    let items = use_signal(Vec::new);
    let session = use_signal(EditorSession::new);
    let view_html = use_signal(String::new);
    let edit_buffer = use_signal(String::new);
    let search_query = use_signal(String::new);
    let tags_input = use_signal(String::new);
    let list_error: Signal<Option<String>> = use_signal(|| None);
    let tag_picker_open = use_signal(|| false);
    let tag_catalog: Signal<Option<Vec<TagCount>>> = use_signal(|| None);
    let checked_tags: Signal<BTreeSet<String>> = use_signal(BTreeSet::new);
    let tag_picker_error: Signal<Option<String>> = use_signal(|| None);

    let state = AppState {
        client,
        items,
        session,
        view_html,
        edit_buffer,
        search_query,
        tags_input,
        list_error,
        tag_picker_open,
        tag_catalog,
        checked_tags,
        tag_picker_error,
    };
    use_context_provider(|| state);

    // Resolve configuration and load the initial list (only once)
    let mut initialized = use_signal(|| false);
    use_effect(move || {
        if initialized() {
            return;
        }
        initialized.set(true);

        let mut state = state;
        let store = ClientConfig::from_env()
            .and_then(|config| ZettelStoreClient::new(config.server_url));
        match store {
            Ok(store) => {
                tracing::info!("Using zettel store at {}", store.base_url());
                state.client.set(Some(Arc::new(store)));
                actions::load_items(state);
            }
            Err(error) => {
                tracing::error!("Failed to configure store client: {error}");
                state
                    .list_error
                    .set(Some(format!("Failed to configure store client: {error}")));
            }
        }
    });

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 14px;
                background: #ffffff;
                color: #111827;
            ",
            Home {}

            // Tag filter modal overlay
            if tag_picker_open() {
                TagFilterModal {}
            }
        }
    }
}
