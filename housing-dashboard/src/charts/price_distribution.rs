//! Sale price histogram; brushing buckets sets the price range.

use dioxus::prelude::*;
use hma_chart_ui::components::{ChartContainer, EmptyState, ErrorDisplay, HistogramChart, LoadingSpinner};
use hma_chart_ui::cross_filter::use_cross_filter;
use hma_chart_ui::fetch::use_dataset;
use hma_chart_ui::state::AppState;
use hma_data::histogram::{histogram, BucketLabel};
use hma_store::predicates::price_matches;
use hma_store::{ChartId, DatasetView, FilterUpdate, NumericRange};

pub const PRICE_CHART: ChartId = ChartId::new("price-distribution-chart");

#[component]
pub fn PriceDistributionChart() -> Element {
    let state = use_context::<AppState>();
    let handle = use_dataset(state.price_distribution);
    let mut cross = use_cross_filter(PRICE_CHART);
    let bins = state.config.read().price_bins;
    let is_source = cross.is_source_chart();

    let dataset = state.price_distribution.read();
    let body = match dataset.view() {
        DatasetView::Loading => rsx! { LoadingSpinner {} },
        DatasetView::Failed(message) => rsx! {
            ErrorDisplay {
                message: message.to_string(),
                on_retry: move |_| handle.retry(),
            }
        },
        DatasetView::Ready(prices) => {
            let visible = cross
                .filtered_view(Some(prices.values()), price_matches)
                .unwrap_or_default();
            let buckets = histogram(&visible, bins, BucketLabel::Price);
            if buckets.is_empty() {
                rsx! { EmptyState {} }
            } else {
                rsx! {
                    HistogramChart {
                        buckets,
                        show_selection: is_source,
                        on_select: move |(low, high): (f64, f64)| {
                            cross.update_chart_filters(
                                FilterUpdate::new().price_range(NumericRange::new(low, high)),
                            )
                        },
                    }
                }
            }
        }
    };

    rsx! {
        ChartContainer {
            id: PRICE_CHART.to_string(),
            title: "Price distribution",
            hint: "Drag across bars to filter by price",
            is_source,
            on_release: move |_| cross.release(),
            {body}
        }
    }
}
