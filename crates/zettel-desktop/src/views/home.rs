//! Home view - main application screen

use dioxus::prelude::*;

use crate::components::{ActionBar, EditorPane, SearchBar, ZettelList};

/// Home view component - list on the left, panes on the right
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "home-container",
            style: "display: flex; flex-direction: column; height: 100vh;",

            SearchBar {}

            div {
                class: "content-area",
                style: "flex: 1; display: flex; overflow: hidden;",

                ZettelList {}

                div {
                    class: "main-content",
                    style: "flex: 1; display: flex; flex-direction: column;",

                    ActionBar {}
                    EditorPane {}
                }
            }
        }
    }
}
