//! Action bar with the zettel CRUD buttons

use dioxus::prelude::*;

use crate::actions;
use crate::state::AppState;

const BUTTON_STYLE: &str = "
    padding: 6px 14px;
    border: 1px solid #d1d5db;
    border-radius: 6px;
    background: #ffffff;
    cursor: pointer;
";

/// Buttons acting on the currently selected zettel
#[component]
pub fn ActionBar() -> Element {
    let state = use_context::<AppState>();
    let is_editing = (state.session)().is_editing();
    let has_selection = state.selected_id().is_some();
    let primary_label = if is_editing { "Save" } else { "Edit" };

    rsx! {
        div {
            class: "action-bar",
            style: "
                display: flex;
                gap: 8px;
                padding: 10px 16px;
                border-bottom: 1px solid #e5e7eb;
                background: #f9fafb;
            ",

            button {
                class: "save-btn",
                style: BUTTON_STYLE,
                onclick: move |_| actions::toggle_edit_or_save(state),
                "{primary_label}"
            }

            if is_editing {
                button {
                    class: "discard-btn",
                    style: BUTTON_STYLE,
                    onclick: move |_| actions::discard_edits(state),
                    "Discard"
                }
            }

            if has_selection {
                button {
                    class: "delete-btn",
                    style: BUTTON_STYLE,
                    onclick: move |_| actions::delete_selected(state),
                    "Delete"
                }
            }

            // Spacer
            div { style: "flex: 1;" }

            button {
                class: "new-btn",
                style: BUTTON_STYLE,
                onclick: move |_| actions::create_zettel(state),
                "New"
            }
        }
    }
}
