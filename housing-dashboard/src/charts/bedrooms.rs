//! Bedroom category bars.
//!
//! Clicking a bar toggles the category filter. Non-selected categories are
//! dimmed rather than removed, including on this chart itself.

use dioxus::prelude::*;
use hma_chart_ui::components::{ChartContainer, EmptyState, ErrorDisplay, LoadingSpinner};
use hma_chart_ui::cross_filter::use_cross_filter;
use hma_chart_ui::fetch::use_dataset;
use hma_chart_ui::state::AppState;
use hma_data::scale::LinearScale;
use hma_housing::BedroomCategory;
use hma_store::predicates::bedroom_emphasis;
use hma_store::{ChartId, DatasetView, FilterUpdate};
use hma_utils::format::{group_thousands, percent};

pub const BEDROOM_CHART: ChartId = ChartId::new("bedroom-chart");

const WIDTH: f64 = 560.0;
const ROW_HEIGHT: f64 = 44.0;
const LABEL_WIDTH: f64 = 150.0;
const VALUE_WIDTH: f64 = 110.0;

fn category_color(category: BedroomCategory) -> &'static str {
    match category {
        BedroomCategory::Small => "#4E79A7",
        BedroomCategory::Medium => "#F28E2B",
        BedroomCategory::Large => "#59A14F",
    }
}

/// Selecting the active category again clears it.
fn toggled(current: Option<BedroomCategory>, clicked: BedroomCategory) -> Option<BedroomCategory> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[component]
pub fn BedroomChart() -> Element {
    let state = use_context::<AppState>();
    let handle = use_dataset(state.bedrooms);
    let mut cross = use_cross_filter(BEDROOM_CHART);
    let mut hovered = use_signal(|| None::<BedroomCategory>);
    let filters = cross.filters();
    let is_source = cross.is_source_chart();

    let dataset = state.bedrooms.read();
    let body = match dataset.view() {
        DatasetView::Loading => rsx! { LoadingSpinner {} },
        DatasetView::Failed(message) => rsx! {
            ErrorDisplay {
                message: message.to_string(),
                on_retry: move |_| handle.retry(),
            }
        },
        DatasetView::Ready(counts) if counts.total == 0 => rsx! { EmptyState {} },
        DatasetView::Ready(counts) => {
            let max = BedroomCategory::ALL
                .iter()
                .map(|c| counts.count(*c))
                .max()
                .unwrap_or(0);
            let x_scale = LinearScale::new((0.0, max as f64), (0.0, WIDTH - LABEL_WIDTH - VALUE_WIDTH));
            let height = ROW_HEIGHT * BedroomCategory::ALL.len() as f64;
            let current = filters.bedroom_category();

            rsx! {
                svg {
                    width: "{WIDTH}",
                    height: "{height}",
                    view_box: "0 0 {WIDTH} {height}",
                    for (row, category) in BedroomCategory::ALL.into_iter().enumerate() {
                        {
                            let y = ROW_HEIGHT * row as f64;
                            let count = counts.count(category);
                            let bar = if max == 0 { 0.0 } else { x_scale.map(count as f64) };
                            let opacity = bedroom_emphasis(&filters, category).opacity();
                            let outline = if hovered() == Some(category) { "#333" } else { "none" };
                            rsx! {
                                g {
                                    key: "{category}",
                                    style: "cursor: pointer;",
                                    onclick: move |_| {
                                        cross.update_chart_filters(
                                            FilterUpdate::new().bedroom_category(toggled(current, category)),
                                        )
                                    },
                                    onmouseenter: move |_| hovered.set(Some(category)),
                                    onmouseleave: move |_| hovered.set(None),
                                    text {
                                        x: "0",
                                        y: "{y + ROW_HEIGHT / 2.0 + 4.0}",
                                        "font-size": "13",
                                        fill: "#333",
                                        "{category.label()}"
                                    }
                                    rect {
                                        x: "{LABEL_WIDTH}",
                                        y: "{y + 8.0}",
                                        width: "{bar.max(1.0)}",
                                        height: "{ROW_HEIGHT - 16.0}",
                                        rx: "3",
                                        fill: category_color(category),
                                        opacity: "{opacity}",
                                        stroke: outline,
                                        "stroke-width": "1.5",
                                    }
                                    text {
                                        x: "{LABEL_WIDTH + bar + 8.0}",
                                        y: "{y + ROW_HEIGHT / 2.0 + 4.0}",
                                        "font-size": "12",
                                        fill: "#555",
                                        "{group_thousands(count as f64)} ({percent(counts.share(category))})"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        ChartContainer {
            id: BEDROOM_CHART.to_string(),
            title: "Bedroom categories",
            hint: "Click a bar to filter by bedroom category",
            is_source,
            min_height: 200,
            on_release: move |_| cross.release(),
            {body}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_category() {
        assert_eq!(toggled(None, BedroomCategory::Small), Some(BedroomCategory::Small));
        assert_eq!(
            toggled(Some(BedroomCategory::Small), BedroomCategory::Large),
            Some(BedroomCategory::Large)
        );
        assert_eq!(toggled(Some(BedroomCategory::Medium), BedroomCategory::Medium), None);
    }
}
