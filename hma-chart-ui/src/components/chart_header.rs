//! Chart header component with title and interaction hint.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Chart title
    pub title: String,
    /// What a gesture on the chart does (e.g., "Drag across bars to filter by price")
    #[props(default = String::new())]
    pub hint: String,
    /// Whether this chart produced the current filter
    #[props(default = false)]
    pub is_source: bool,
    /// Shown next to the source badge; lets the chart give up its exemption
    #[props(default)]
    pub on_release: Option<EventHandler<()>>,
}

/// Header for chart sections showing title, optional hint and a source badge.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            div {
                style: "display: flex; align-items: center; gap: 8px;",
                h3 {
                    style: "margin: 0 0 4px 0; font-size: 16px;",
                    "{props.title}"
                }
                if props.is_source {
                    span {
                        style: "font-size: 11px; padding: 1px 6px; border-radius: 8px; background: #E3F2FD; color: #1565C0;",
                        "filter source"
                    }
                    if let Some(on_release) = props.on_release {
                        button {
                            style: "font-size: 11px; padding: 1px 6px; border: 1px solid #90CAF9; background: #fff; color: #1565C0; border-radius: 8px; cursor: pointer;",
                            onclick: move |_| on_release.call(()),
                            "apply here too"
                        }
                    }
                }
            }
            if !props.hint.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{props.hint}"
                }
            }
        }
    }
}
