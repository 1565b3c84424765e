//! Zettel list component

use dioxus::prelude::*;

use crate::actions;
use crate::components::ZettelRow;
use crate::state::AppState;

/// List of zettels matching the current filter
#[component]
pub fn ZettelList() -> Element {
    let state = use_context::<AppState>();
    let items = (state.items)();
    let selected = (state.session)().selected();
    let list_error = (state.list_error)();

    rsx! {
        div {
            class: "item-list",
            style: "
                width: 300px;
                border-right: 1px solid #e5e7eb;
                overflow-y: auto;
                background: #f9fafb;
            ",

            if let Some(error) = list_error {
                div {
                    style: "padding: 20px; color: #b91c1c;",
                    "{error}"
                }
            } else if items.is_empty() {
                div {
                    style: "padding: 20px; text-align: center; color: #6b7280;",
                    "No items"
                }
            } else {
                for item in items {
                    {
                        let item_id = item.id;
                        let is_selected = selected == Some(item_id);

                        rsx! {
                            ZettelRow {
                                key: "{item_id}",
                                title: item.row_title(),
                                date: item.date.clone(),
                                tags: item.tags.clone(),
                                is_selected,
                                onclick: move |_| {
                                    actions::select_zettel(state, item_id);
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}
