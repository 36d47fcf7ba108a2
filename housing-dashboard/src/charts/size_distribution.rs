//! Living-area histogram with a cumulative share line; brushing sets the sqft range.

use dioxus::prelude::*;
use hma_chart_ui::components::{ChartContainer, EmptyState, ErrorDisplay, HistogramChart, LoadingSpinner};
use hma_chart_ui::cross_filter::use_cross_filter;
use hma_chart_ui::fetch::use_dataset;
use hma_chart_ui::state::AppState;
use hma_data::histogram::{cumulative_histogram, BucketLabel};
use hma_store::predicates::sqft_matches;
use hma_store::{ChartId, DatasetView, FilterUpdate, NumericRange};

pub const SIZE_CHART: ChartId = ChartId::new("size-distribution-chart");

#[component]
pub fn SizeDistributionChart() -> Element {
    let state = use_context::<AppState>();
    let handle = use_dataset(state.size_distribution);
    let mut cross = use_cross_filter(SIZE_CHART);
    let bins = state.config.read().size_bins;
    let is_source = cross.is_source_chart();

    let dataset = state.size_distribution.read();
    let body = match dataset.view() {
        DatasetView::Loading => rsx! { LoadingSpinner {} },
        DatasetView::Failed(message) => rsx! {
            ErrorDisplay {
                message: message.to_string(),
                on_retry: move |_| handle.retry(),
            }
        },
        DatasetView::Ready(sizes) => {
            let visible = cross
                .filtered_view(Some(sizes.values()), sqft_matches)
                .unwrap_or_default();
            let (buckets, percents): (Vec<_>, Vec<_>) =
                cumulative_histogram(&visible, bins, BucketLabel::Sqft)
                    .into_iter()
                    .map(|c| (c.bucket, c.cumulative_percent))
                    .unzip();
            if buckets.is_empty() {
                rsx! { EmptyState {} }
            } else {
                rsx! {
                    HistogramChart {
                        buckets,
                        cumulative: percents,
                        color: "#59A14F",
                        show_selection: is_source,
                        on_select: move |(low, high): (f64, f64)| {
                            cross.update_chart_filters(
                                FilterUpdate::new().sqft_range(NumericRange::new(low, high)),
                            )
                        },
                    }
                }
            }
        }
    };

    rsx! {
        ChartContainer {
            id: SIZE_CHART.to_string(),
            title: "Living area distribution",
            hint: "Drag across bars to filter by square footage",
            is_source,
            on_release: move |_| cross.release(),
            {body}
        }
    }
}
