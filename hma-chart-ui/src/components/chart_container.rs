//! Card wrapper shared by every chart.

use super::ChartHeader;
use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id of the card, the chart's cross-filter id
    pub id: String,
    pub title: String,
    #[props(default = String::new())]
    pub hint: String,
    #[props(default = false)]
    pub is_source: bool,
    #[props(default)]
    pub on_release: Option<EventHandler<()>>,
    /// Optional minimum height in pixels
    #[props(default = 320)]
    pub min_height: u32,
    pub children: Element,
}

/// A titled card around one chart.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; background: #fff; border: 1px solid #E0E0E0; border-radius: 6px; padding: 12px 16px; overflow-x: auto;",
        props.min_height
    );

    rsx! {
        section {
            id: "{props.id}",
            style: "{style}",
            ChartHeader {
                title: props.title.clone(),
                hint: props.hint.clone(),
                is_source: props.is_source,
                on_release: props.on_release,
            }
            {props.children}
        }
    }
}
