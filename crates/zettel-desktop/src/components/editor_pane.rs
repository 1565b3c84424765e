//! View/edit pane component
//!
//! Exactly one of the two panes is visible at a time, driven by the
//! session's edit mode: the rendered view pane while viewing, the raw-text
//! editor while editing.

use dioxus::prelude::*;

use crate::state::AppState;

/// The right-hand pane: rendered zettel or edit buffer
#[component]
pub fn EditorPane() -> Element {
    let mut state = use_context::<AppState>();
    let session = (state.session)();
    let view_html = (state.view_html)();

    rsx! {
        div {
            class: "editor-pane",
            style: "
                flex: 1;
                display: flex;
                flex-direction: column;
                padding: 16px;
                overflow-y: auto;
            ",

            if session.is_editing() {
                textarea {
                    id: "text-area",
                    class: "edit-pane",
                    style: "
                        flex: 1;
                        width: 100%;
                        border: 1px solid #e5e7eb;
                        border-radius: 6px;
                        padding: 12px;
                        outline: none;
                        resize: none;
                        font-family: inherit;
                        font-size: inherit;
                        line-height: 1.6;
                    ",
                    value: "{state.edit_buffer}",
                    oninput: move |evt: Event<FormData>| {
                        state.edit_buffer.set(evt.value());
                    },
                }
            } else if session.selected().is_none() && view_html.is_empty() {
                div {
                    class: "editor-placeholder",
                    style: "
                        flex: 1;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #6b7280;
                    ",
                    "Select an item or create a new one"
                }
            } else {
                // The store's rendering is the only HTML ever injected here.
                div {
                    class: "view-pane",
                    style: "flex: 1; line-height: 1.6;",
                    dangerous_inner_html: "{view_html}",
                }
            }
        }
    }
}
