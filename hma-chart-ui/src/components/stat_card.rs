//! Headline number card.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct StatCardProps {
    pub label: String,
    pub value: String,
    /// Left border colour
    #[props(default = "#1565C0".to_string())]
    pub accent: String,
}

#[component]
pub fn StatCard(props: StatCardProps) -> Element {
    rsx! {
        div {
            style: "flex: 1; min-width: 160px; padding: 12px 16px; background: #fff; border: 1px solid #E0E0E0; border-left: 4px solid {props.accent}; border-radius: 4px;",
            div {
                style: "font-size: 12px; color: #666; text-transform: uppercase; letter-spacing: 0.04em;",
                "{props.label}"
            }
            div {
                style: "font-size: 24px; font-weight: bold; margin-top: 4px;",
                "{props.value}"
            }
        }
    }
}
