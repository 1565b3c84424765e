//! Controller operations shared by UI components.
//!
//! Each operation is a synchronous session transition plus a spawned
//! request against the store. Responses carry the [`RequestToken`] issued
//! at dispatch time and are applied only while the session still accepts
//! it, so a response overtaken by a newer request is dropped instead of
//! clobbering shared state.
//!
//! [`RequestToken`]: zettel_core::RequestToken

use std::collections::BTreeSet;
use std::sync::Arc;

use dioxus::prelude::*;

use zettel_core::models::{decode_tag_filter, encode_tag_filter, SearchFilter};
use zettel_core::{ZettelId, ZettelStoreClient};

use crate::state::AppState;

fn store_client(state: &AppState) -> Option<Arc<ZettelStoreClient>> {
    (state.client)()
}

/// Reload the zettel list for the current search/tag inputs.
///
/// The whole list is re-fetched through `/index?q=..&tags=..` and the
/// session returns to its initial state (sentinel selection, viewing).
pub fn load_items(mut state: AppState) {
    let Some(client) = store_client(&state) else {
        return;
    };
    let filter = SearchFilter::new((state.search_query)(), (state.tags_input)());

    state.session.write().reset();
    state.view_html.set(String::new());
    state.edit_buffer.set(String::new());

    spawn(async move {
        match client.list_zettels(&filter).await {
            Ok(items) => {
                tracing::debug!("Loaded {} items from the store", items.len());
                state.list_error.set(None);
                state.items.set(items);
            }
            Err(error) => {
                tracing::error!("Failed to reload item list: {error}");
                state.list_error.set(Some(format!("Failed to load items: {error}")));
            }
        }
    });
}

/// Select a zettel from the list and fetch its content.
///
/// A failed fetch leaves the previous selection bound and writes the error
/// into the view pane.
pub fn select_zettel(mut state: AppState, id: ZettelId) {
    let Some(client) = store_client(&state) else {
        return;
    };
    let token = state.session.write().begin_select(id);

    spawn(async move {
        match client.fetch_zettel(id).await {
            Ok(content) => {
                if state.session.write().commit_select(id, token) {
                    state.view_html.set(content.markdown);
                    state.edit_buffer.set(content.text);
                }
            }
            Err(error) => {
                tracing::warn!("Failed to load item {id}: {error}");
                if state.session.read().accepts(token) {
                    state.view_html.set(format!("Failed to load data for item {id}: {error}"));
                }
            }
        }
    });
}

/// The primary button: enter edit mode while viewing, save while editing.
///
/// Does nothing when no zettel is selected.
pub fn toggle_edit_or_save(mut state: AppState) {
    if !(state.session)().is_editing() {
        state.session.write().begin_edit();
        return;
    }

    let Some(client) = store_client(&state) else {
        return;
    };
    let Some((id, token)) = state.session.write().begin_save() else {
        return;
    };
    let body = (state.edit_buffer)();

    spawn(async move {
        match client.save_zettel(id, &body).await {
            Ok(saved) => {
                tracing::debug!("Saved item {id}");
                if state.session.read().accepts(token) {
                    state.view_html.set(saved.markdown.clone());
                    state.edit_buffer.set(saved.text.clone());
                    let row = saved.into_summary(id);
                    let mut items = state.items.write();
                    if let Some(item) = items.iter_mut().find(|item| item.id == id) {
                        *item = row;
                    }
                }
            }
            Err(error) => {
                tracing::error!("Failed to save item {id}: {error}");
                if state.session.read().accepts(token) {
                    state.edit_buffer.set(format!("Failed to save data for item {id}: {error}"));
                }
            }
        }
    });
}

/// Drop local edits and re-fetch the store's copy of the active zettel.
pub fn discard_edits(mut state: AppState) {
    let Some(client) = store_client(&state) else {
        return;
    };
    let Some((id, token)) = state.session.write().begin_discard() else {
        return;
    };

    spawn(async move {
        match client.fetch_zettel(id).await {
            Ok(content) => {
                if state.session.read().accepts(token) {
                    state.view_html.set(content.markdown);
                    state.edit_buffer.set(content.text);
                }
            }
            Err(error) => {
                tracing::warn!("Failed to reload item {id}: {error}");
                if state.session.read().accepts(token) {
                    state.view_html.set(format!("Failed to load data for item {id}: {error}"));
                }
            }
        }
    });
}

/// Delete the active zettel. No-op when the selection is the sentinel.
///
/// On success the row is removed and both panes cleared; on failure the
/// row stays and the error is shown in the view pane. Either way the
/// session leaves edit mode.
pub fn delete_selected(mut state: AppState) {
    let Some(client) = store_client(&state) else {
        return;
    };
    let Some((id, token)) = state.session.write().begin_delete() else {
        return;
    };

    spawn(async move {
        match client.delete_zettel(id).await {
            Ok(()) => {
                tracing::info!("Deleted item {id}");
                if state.session.write().complete_delete(token, true) {
                    state.items.write().retain(|item| item.id != id);
                    state.view_html.set(String::new());
                    state.edit_buffer.set(String::new());
                }
            }
            Err(error) => {
                tracing::error!("Failed to delete item {id}: {error}");
                if state.session.write().complete_delete(token, false) {
                    state.view_html.set(format!("Failed to delete item {id}: {error}"));
                }
            }
        }
    });
}

/// Create a blank zettel on the store, append its row, and start editing it.
pub fn create_zettel(mut state: AppState) {
    let Some(client) = store_client(&state) else {
        return;
    };
    let token = state.session.write().begin_create();

    spawn(async move {
        match client.create_zettel().await {
            Ok(created) => {
                tracing::info!("Created item {}", created.id);
                if state.session.write().commit_create(created.id, token) {
                    state.items.write().push(created.summary());
                    state.view_html.set(created.markdown);
                    state.edit_buffer.set(created.text);
                }
            }
            Err(error) => {
                tracing::error!("Failed to create item: {error}");
                if state.session.read().accepts(token) {
                    state.view_html.set(format!("Failed to create item: {error}"));
                }
            }
        }
    });
}

/// Open the tag filter modal and fetch the catalog, pre-checking whatever
/// the tags input currently holds.
pub fn open_tag_picker(mut state: AppState) {
    let Some(client) = store_client(&state) else {
        return;
    };
    state.tag_picker_open.set(true);
    state.tag_picker_error.set(None);
    state.tag_catalog.set(None);
    state.checked_tags.set(decode_tag_filter(&(state.tags_input)()));

    spawn(async move {
        match client.list_tags().await {
            Ok(catalog) => {
                state.tag_catalog.set(Some(catalog));
            }
            Err(error) => {
                tracing::warn!("Failed to load tag catalog: {error}");
                state.tag_picker_error.set(Some(format!("Failed to load tags data: {error}")));
            }
        }
    });
}

/// Accept the modal's checkbox selection and reload the list with it.
pub fn apply_tag_filter(mut state: AppState) {
    let checked: BTreeSet<String> = (state.checked_tags)();
    state.tags_input.set(encode_tag_filter(&checked));
    state.tag_picker_open.set(false);
    load_items(state);
}

/// Clear both filter inputs and reload the unfiltered list.
pub fn clear_filter(mut state: AppState) {
    state.search_query.set(String::new());
    state.tags_input.set(String::new());
    load_items(state);
}
