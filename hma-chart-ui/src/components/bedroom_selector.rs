//! Bedroom category buttons for the filter panel.

use super::FILTER_PANEL;
use crate::cross_filter::use_cross_filter;
use dioxus::prelude::*;
use hma_housing::BedroomCategory;
use hma_store::FilterUpdate;

fn button_style(active: bool) -> &'static str {
    if active {
        "padding: 4px 12px; border: 1px solid #1565C0; background: #1565C0; color: #fff; border-radius: 4px; cursor: pointer;"
    } else {
        "padding: 4px 12px; border: 1px solid #BDBDBD; background: #fff; color: #333; border-radius: 4px; cursor: pointer;"
    }
}

/// "All" clears the category filter; the others select one category.
#[component]
pub fn BedroomSelector() -> Element {
    let mut cross = use_cross_filter(FILTER_PANEL);
    let current = cross.filters().bedroom_category();

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 8px; align-items: center;",
            span {
                style: "font-weight: bold; font-size: 13px;",
                "Bedrooms: "
            }
            button {
                style: button_style(current.is_none()),
                onclick: move |_| cross.update_chart_filters(FilterUpdate::new().bedroom_category(None)),
                "All"
            }
            for category in BedroomCategory::ALL {
                button {
                    key: "{category}",
                    style: button_style(current == Some(category)),
                    onclick: move |_| {
                        cross.update_chart_filters(FilterUpdate::new().bedroom_category(Some(category)))
                    },
                    "{category.label()}"
                }
            }
        }
    }
}
