//! Headline numbers with an explicit server-side refetch.

use dioxus::prelude::*;
use hma_chart_ui::components::{ErrorDisplay, LoadingSpinner, StatCard};
use hma_chart_ui::cross_filter::use_cross_filter;
use hma_chart_ui::fetch::use_dataset;
use hma_chart_ui::state::AppState;
use hma_store::{ChartId, DatasetView};
use hma_utils::format::{compact, currency, sqft};

pub const SUMMARY_CARDS: ChartId = ChartId::new("summary-cards");

#[component]
pub fn SummaryCards() -> Element {
    let state = use_context::<AppState>();
    let handle = use_dataset(state.summary);
    let cross = use_cross_filter(SUMMARY_CARDS);

    let query = cross.filters().to_query();
    let action = if query.is_empty() { "Refresh" } else { "Apply filters" };
    let dataset = state.summary.read();
    let refreshing = dataset.is_loading() && dataset.data().is_some();

    let body = match dataset.view() {
        DatasetView::Loading => rsx! { LoadingSpinner {} },
        DatasetView::Failed(message) => rsx! {
            ErrorDisplay {
                message: message.to_string(),
                on_retry: move |_| handle.retry(),
            }
        },
        DatasetView::Ready(summary) => rsx! {
            div {
                style: "display: flex; gap: 12px; flex-wrap: wrap;",
                StatCard {
                    label: "Average price",
                    value: currency(summary.average_price),
                }
                StatCard {
                    label: "Median living area",
                    value: sqft(summary.median_sqft),
                    accent: "#2E7D32",
                }
                StatCard {
                    label: "Total sales",
                    value: compact(summary.total_sales as f64),
                    accent: "#EF6C00",
                }
            }
        },
    };

    rsx! {
        div {
            id: "{SUMMARY_CARDS}",
            div {
                style: "display: flex; align-items: center; gap: 8px; margin-bottom: 8px;",
                h2 { style: "margin: 0; font-size: 16px;", "Market summary" }
                button {
                    style: "padding: 2px 10px; border: 1px solid #BDBDBD; background: #fff; border-radius: 4px; cursor: pointer;",
                    disabled: refreshing,
                    onclick: move |_| handle.refresh_with(query),
                    "{action}"
                }
                if refreshing {
                    span { style: "font-size: 12px; color: #666;", "Updating..." }
                }
            }
            {body}
        }
    }
}
