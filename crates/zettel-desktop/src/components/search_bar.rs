//! Search bar component

use dioxus::prelude::*;

use crate::actions;
use crate::state::AppState;

const INPUT_STYLE: &str = "
    padding: 8px 12px;
    border: 1px solid #d1d5db;
    border-radius: 6px;
    font-size: 14px;
    outline: none;
";

/// Free-text search plus the space-joined tag filter input.
///
/// Enter in either input reloads the list, as does the Browse modal's OK.
#[component]
pub fn SearchBar() -> Element {
    let mut state = use_context::<AppState>();

    let on_enter = move |evt: Event<KeyboardData>| {
        if evt.key() == Key::Enter {
            actions::load_items(state);
        }
    };

    rsx! {
        div {
            class: "search-bar",
            style: "
                display: flex;
                gap: 8px;
                padding: 12px 16px;
                border-bottom: 1px solid #e5e7eb;
                background: #f3f4f6;
            ",

            input {
                id: "search",
                r#type: "text",
                placeholder: "Search...",
                style: "{INPUT_STYLE} flex: 2;",
                value: "{state.search_query}",
                oninput: move |evt| state.search_query.set(evt.value()),
                onkeydown: on_enter,
            }

            input {
                id: "tags",
                r#type: "text",
                placeholder: "Tags...",
                style: "{INPUT_STYLE} flex: 1;",
                value: "{state.tags_input}",
                oninput: move |evt| state.tags_input.set(evt.value()),
                onkeydown: on_enter,
            }

            button {
                class: "browse-btn",
                style: "padding: 6px 14px; border: 1px solid #d1d5db; border-radius: 6px; background: #ffffff; cursor: pointer;",
                onclick: move |_| actions::open_tag_picker(state),
                "Browse"
            }

            button {
                class: "clear-search-btn",
                style: "padding: 6px 14px; border: 1px solid #d1d5db; border-radius: 6px; background: #ffffff; cursor: pointer;",
                onclick: move |_| actions::clear_filter(state),
                "Clear"
            }
        }
    }
}
