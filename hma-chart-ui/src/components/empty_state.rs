//! Placeholder for a dataset with nothing to draw.

use dioxus::prelude::*;

#[component]
pub fn EmptyState(#[props(default = "No data available".to_string())] message: String) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #999; font-style: italic;",
            "{message}"
        }
    }
}
