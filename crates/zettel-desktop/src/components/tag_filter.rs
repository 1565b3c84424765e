//! Tag filter modal
//!
//! Shows the store's tag catalog as a checkbox list, pre-checked from the
//! current tags input. OK writes the selection back (space-joined) and
//! reloads the list; Cancel and a backdrop click close without applying.

use dioxus::prelude::*;

use zettel_core::models::TagCount;

use crate::actions;
use crate::state::AppState;

const MODAL_BUTTON_STYLE: &str = "
    padding: 6px 14px;
    border: 1px solid #d1d5db;
    border-radius: 6px;
    background: #ffffff;
    cursor: pointer;
";

/// Placeholder shown instead of the checkbox list: a pending fetch and a
/// store with no tags are different states.
fn catalog_message(catalog: Option<&[TagCount]>) -> Option<&'static str> {
    match catalog {
        None => Some("Loading tags..."),
        Some([]) => Some("No tags in use"),
        Some(_) => None,
    }
}

/// Modal for picking the tag filter from the catalog
#[component]
pub fn TagFilterModal() -> Element {
    let mut state = use_context::<AppState>();
    let catalog = (state.tag_catalog)();
    let checked_tags = (state.checked_tags)();
    let error = (state.tag_picker_error)();

    rsx! {
        div {
            id: "modal",
            style: "
                position: fixed;
                inset: 0;
                background: rgba(17, 24, 39, 0.55);
                display: flex;
                align-items: center;
                justify-content: center;
                padding: 16px;
            ",
            // Clicking outside the dialog cancels
            onclick: move |_| state.tag_picker_open.set(false),

            div {
                style: "
                    width: 100%;
                    max-width: 420px;
                    max-height: 70vh;
                    background: #ffffff;
                    border: 1px solid #e5e7eb;
                    border-radius: 12px;
                    display: flex;
                    flex-direction: column;
                ",
                onclick: move |evt| evt.stop_propagation(),

                div {
                    style: "padding: 12px 16px; border-bottom: 1px solid #e5e7eb; font-weight: 600;",
                    "Filter by tags"
                }

                div {
                    id: "modal-text",
                    style: "padding: 12px 16px; overflow-y: auto; display: flex; flex-direction: column; gap: 6px;",

                    if let Some(error) = error {
                        p { style: "margin: 0; color: #b91c1c;", "{error}" }
                    } else if let Some(message) = catalog_message(catalog.as_deref()) {
                        p { style: "margin: 0; color: #6b7280;", "{message}" }
                    } else {
                        for tag in catalog.unwrap_or_default() {
                            {
                                let name = tag.name.clone();
                                let is_checked = checked_tags.contains(&name);

                                rsx! {
                                    label {
                                        key: "{name}",
                                        style: "display: flex; align-items: center; gap: 8px; cursor: pointer;",
                                        input {
                                            r#type: "checkbox",
                                            name: "selectedtags",
                                            value: "{name}",
                                            checked: is_checked,
                                            oninput: move |_| {
                                                let mut checked = state.checked_tags.write();
                                                if !checked.remove(&name) {
                                                    checked.insert(name.clone());
                                                }
                                            },
                                        }
                                        span { "{tag.name}" }
                                        span { style: "color: #6b7280;", "({tag.count})" }
                                    }
                                }
                            }
                        }
                    }
                }

                div {
                    style: "
                        display: flex;
                        gap: 8px;
                        justify-content: flex-end;
                        padding: 12px 16px;
                        border-top: 1px solid #e5e7eb;
                    ",

                    button {
                        class: "clear-btn",
                        style: MODAL_BUTTON_STYLE,
                        onclick: move |_| state.checked_tags.write().clear(),
                        "Clear"
                    }
                    button {
                        class: "cancel-btn",
                        style: MODAL_BUTTON_STYLE,
                        onclick: move |_| state.tag_picker_open.set(false),
                        "Cancel"
                    }
                    button {
                        class: "ok-btn",
                        style: MODAL_BUTTON_STYLE,
                        onclick: move |_| actions::apply_tag_filter(state),
                        "OK"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(name: &str, count: u64) -> TagCount {
        TagCount {
            name: name.to_string(),
            count,
        }
    }

    #[test]
    fn pending_fetch_and_empty_catalog_are_distinct() {
        assert_eq!(catalog_message(None), Some("Loading tags..."));
        assert_eq!(catalog_message(Some(&[])), Some("No tags in use"));
        assert_eq!(catalog_message(Some(&[tag("work", 3)])), None);
    }
}
