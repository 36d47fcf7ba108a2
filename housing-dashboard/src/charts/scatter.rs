//! Price against living area, one dot per sale.
//!
//! Dragging a rectangle sets the sqft and price ranges together. When another
//! chart is the filter source, sales outside the filter are removed.

use dioxus::prelude::*;
use hma_chart_ui::components::{ChartContainer, EmptyState, ErrorDisplay, LoadingSpinner};
use hma_chart_ui::cross_filter::use_cross_filter;
use hma_chart_ui::fetch::use_dataset;
use hma_chart_ui::state::AppState;
use hma_data::brush::{DragSelection, SelectionRect};
use hma_data::scale::LinearScale;
use hma_housing::{BedroomCategory, ScatterPoint};
use hma_store::predicates::scatter_point_matches;
use hma_store::{ChartId, DatasetView, FilterUpdate, NumericRange};
use hma_utils::format::{compact, currency, group_thousands, sqft};

pub const SCATTER_CHART: ChartId = ChartId::new("scatter-chart");

const WIDTH: f64 = 560.0;
const HEIGHT: f64 = 320.0;
const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 24.0;
const MARGIN_BOTTOM: f64 = 36.0;

fn category_color(category: Option<BedroomCategory>) -> &'static str {
    match category {
        Some(BedroomCategory::Small) => "#4E79A7",
        Some(BedroomCategory::Medium) => "#F28E2B",
        Some(BedroomCategory::Large) => "#59A14F",
        None => "#9E9E9E",
    }
}

/// Filter update for a finished drag: x is living area, y is price.
fn selection_update(rect: SelectionRect) -> FilterUpdate {
    FilterUpdate::new()
        .sqft_range(NumericRange::new(rect.min_x, rect.max_x))
        .price_range(NumericRange::new(rect.min_y, rect.max_y))
}

#[component]
pub fn ScatterChart() -> Element {
    let state = use_context::<AppState>();
    let handle = use_dataset(state.scatter);
    let mut cross = use_cross_filter(SCATTER_CHART);
    let is_source = cross.is_source_chart();

    let dataset = state.scatter.read();
    let body = match dataset.view() {
        DatasetView::Loading => rsx! { LoadingSpinner {} },
        DatasetView::Failed(message) => rsx! {
            ErrorDisplay {
                message: message.to_string(),
                on_retry: move |_| handle.retry(),
            }
        },
        DatasetView::Ready(sales) => {
            let visible = cross
                .filtered_view(Some(sales.points()), scatter_point_matches)
                .unwrap_or_default();
            if visible.is_empty() {
                rsx! { EmptyState {} }
            } else {
                rsx! {
                    ScatterPlot {
                        points: visible.into_owned(),
                        on_select: move |rect: SelectionRect| {
                            cross.update_chart_filters(selection_update(rect))
                        },
                    }
                }
            }
        }
    };

    rsx! {
        ChartContainer {
            id: SCATTER_CHART.to_string(),
            title: "Price vs living area",
            hint: "Drag a rectangle to filter by price and square footage",
            is_source,
            on_release: move |_| cross.release(),
            {body}
        }
    }
}

#[component]
fn ScatterPlot(points: Vec<ScatterPoint>, on_select: EventHandler<SelectionRect>) -> Element {
    let mut dragging = use_signal(|| None::<DragSelection>);
    let mut hovered = use_signal(|| None::<usize>);

    let plot_bottom = HEIGHT - MARGIN_BOTTOM;
    let plot_right = WIDTH - MARGIN_RIGHT;
    let x_scale = LinearScale::fit(points.iter().map(|p| p.sqft_living), (MARGIN_LEFT, plot_right));
    let y_scale = LinearScale::fit(points.iter().map(|p| p.price), (plot_bottom, MARGIN_TOP));

    // Drag rectangle in pixels.
    let drag_box = dragging().map(|drag| {
        let rect = drag.rect();
        let (x0, x1) = (x_scale.map(rect.min_x), x_scale.map(rect.max_x));
        let (y0, y1) = (y_scale.map(rect.max_y), y_scale.map(rect.min_y));
        (x0, y0, x1 - x0, y1 - y0)
    });

    let tooltip = hovered().and_then(|i| points.get(i)).map(|p| {
        format!(
            "{} · {} · {}",
            currency(p.price),
            sqft(p.sqft_living),
            p.bedroom_category
        )
    });

    let hover_points = points.clone();

    rsx! {
        div {
            style: "position: relative; width: {WIDTH}px; height: {HEIGHT}px; cursor: crosshair; user-select: none;",
            onmousedown: move |e: MouseEvent| {
                let p = e.data().element_coordinates();
                dragging.set(Some(DragSelection::start(x_scale.invert(p.x), y_scale.invert(p.y))));
            },
            onmousemove: move |e: MouseEvent| {
                let p = e.data().element_coordinates();
                let (x, y) = (x_scale.invert(p.x), y_scale.invert(p.y));
                if let Some(mut drag) = dragging() {
                    drag.move_to(x, y);
                    dragging.set(Some(drag));
                } else {
                    // nearest sale within 6px
                    let nearest = hover_points
                        .iter()
                        .enumerate()
                        .map(|(i, s)| {
                            let dx = x_scale.map(s.sqft_living) - p.x;
                            let dy = y_scale.map(s.price) - p.y;
                            (i, dx * dx + dy * dy)
                        })
                        .filter(|(_, d)| *d <= 36.0)
                        .min_by(|a, b| a.1.total_cmp(&b.1))
                        .map(|(i, _)| i);
                    hovered.set(nearest);
                }
            },
            onmouseup: move |_| {
                if let Some(rect) = dragging.take().and_then(DragSelection::finish) {
                    on_select.call(rect);
                }
            },
            onmouseleave: move |_| {
                dragging.set(None);
                hovered.set(None);
            },

            svg {
                width: "{WIDTH}",
                height: "{HEIGHT}",
                view_box: "0 0 {WIDTH} {HEIGHT}",
                style: "pointer-events: none;",

                for tick in y_scale.ticks(5) {
                    text {
                        x: "{MARGIN_LEFT - 6.0}",
                        y: "{y_scale.map(tick) + 4.0}",
                        fill: "#666",
                        "font-size": "11",
                        "text-anchor": "end",
                        "${compact(tick)}"
                    }
                }
                for tick in x_scale.ticks(5) {
                    text {
                        x: "{x_scale.map(tick)}",
                        y: "{plot_bottom + 18.0}",
                        fill: "#666",
                        "font-size": "11",
                        "text-anchor": "middle",
                        "{group_thousands(tick)}"
                    }
                }
                line {
                    x1: "{MARGIN_LEFT}",
                    y1: "{plot_bottom}",
                    x2: "{plot_right}",
                    y2: "{plot_bottom}",
                    stroke: "#999",
                    "stroke-width": "1",
                }

                for point in points.iter() {
                    circle {
                        cx: "{x_scale.map(point.sqft_living)}",
                        cy: "{y_scale.map(point.price)}",
                        r: "2.5",
                        fill: category_color(point.category()),
                        opacity: "0.6",
                    }
                }

                if let Some(i) = hovered() {
                    if let Some(p) = points.get(i) {
                        circle {
                            cx: "{x_scale.map(p.sqft_living)}",
                            cy: "{y_scale.map(p.price)}",
                            r: "5",
                            fill: "none",
                            stroke: "#333",
                            "stroke-width": "1.5",
                        }
                    }
                }

                if let Some((x, y, w, h)) = drag_box {
                    rect {
                        x: "{x}",
                        y: "{y}",
                        width: "{w}",
                        height: "{h}",
                        fill: "#1565C0",
                        "fill-opacity": "0.1",
                        stroke: "#1565C0",
                        "stroke-dasharray": "4,3",
                    }
                }

                if let Some(caption) = tooltip {
                    text {
                        x: "{MARGIN_LEFT}",
                        y: "14",
                        fill: "#333",
                        "font-size": "12",
                        "{caption}"
                    }
                }

                for (i, category) in BedroomCategory::ALL.into_iter().enumerate() {
                    circle {
                        cx: "{plot_right - 200.0 + 70.0 * i as f64}",
                        cy: "{HEIGHT - 8.0}",
                        r: "4",
                        fill: category_color(Some(category)),
                    }
                    text {
                        x: "{plot_right - 192.0 + 70.0 * i as f64}",
                        y: "{HEIGHT - 4.0}",
                        fill: "#555",
                        "font-size": "11",
                        "{category}"
                    }
                }
            }
        }
    }
}
