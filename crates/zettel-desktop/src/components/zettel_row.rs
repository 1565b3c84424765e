//! Zettel row component

use dioxus::prelude::*;

/// A single zettel row rendered in the list.
#[component]
pub fn ZettelRow(
    title: String,
    date: String,
    tags: String,
    is_selected: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let bg = if is_selected { "#e5e7eb" } else { "transparent" };
    let border_left = if is_selected {
        "3px solid #2563eb"
    } else {
        "3px solid transparent"
    };

    rsx! {
        div {
            class: if is_selected { "item selected" } else { "item" },
            style: "
                padding: 12px 16px;
                border-bottom: 1px solid #e5e7eb;
                border-left: {border_left};
                cursor: pointer;
                background: {bg};
            ",
            onclick: move |evt| onclick.call(evt),

            div {
                class: "item-title",
                style: "
                    font-weight: 500;
                    margin-bottom: 4px;
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                ",
                "{title}"
            }

            div {
                class: "item-details",
                style: "
                    display: flex;
                    justify-content: space-between;
                    gap: 8px;
                    font-size: 12px;
                    color: #6b7280;
                ",
                span { class: "date", "{date}" }
                span {
                    class: "description",
                    style: "overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                    "{tags}"
                }
            }
        }
    }
}
