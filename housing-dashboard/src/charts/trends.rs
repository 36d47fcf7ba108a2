//! Monthly average price line; brushing points sets the date range.

use dioxus::prelude::*;
use hma_chart_ui::components::{ChartContainer, EmptyState, ErrorDisplay, LoadingSpinner};
use hma_chart_ui::cross_filter::use_cross_filter;
use hma_chart_ui::fetch::use_dataset;
use hma_chart_ui::state::AppState;
use hma_data::brush::resolve_point_span;
use hma_data::scale::{BandScale, LinearScale};
use hma_housing::TrendPoint;
use hma_store::predicates::trend_matches;
use hma_store::{ChartId, DatasetView, FilterUpdate, MonthRange};
use hma_utils::format::{compact, currency, group_thousands};

pub const TRENDS_CHART: ChartId = ChartId::new("trends-chart");

const WIDTH: f64 = 560.0;
const HEIGHT: f64 = 260.0;
const MARGIN_LEFT: f64 = 56.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 24.0;
const MARGIN_BOTTOM: f64 = 32.0;
const LINE_COLOR: &str = "#4E79A7";

/// Month span covering points `a..=b`, or `None` when either end has an
/// unusable month.
fn selected_months(points: &[TrendPoint], a: usize, b: usize) -> Option<MonthRange> {
    match resolve_point_span(points, a, b, TrendPoint::year_month)? {
        (Some(first), Some(last)) => Some(MonthRange::new(first.min(last), first.max(last))),
        _ => None,
    }
}

#[component]
pub fn TrendsChart() -> Element {
    let state = use_context::<AppState>();
    let handle = use_dataset(state.trends);
    let mut cross = use_cross_filter(TRENDS_CHART);
    let is_source = cross.is_source_chart();

    let dataset = state.trends.read();
    let body = match dataset.view() {
        DatasetView::Loading => rsx! { LoadingSpinner {} },
        DatasetView::Failed(message) => rsx! {
            ErrorDisplay {
                message: message.to_string(),
                on_retry: move |_| handle.retry(),
            }
        },
        DatasetView::Ready(trends) => {
            let visible = cross
                .filtered_view(Some(trends.points()), trend_matches)
                .unwrap_or_default();
            if visible.is_empty() {
                rsx! { EmptyState {} }
            } else {
                rsx! {
                    TrendLine {
                        points: visible.into_owned(),
                        show_selection: is_source,
                        on_select: move |range: MonthRange| {
                            cross.update_chart_filters(FilterUpdate::new().date_range(range))
                        },
                    }
                }
            }
        }
    };

    rsx! {
        ChartContainer {
            id: TRENDS_CHART.to_string(),
            title: "Average price by month",
            hint: "Drag along the line to filter by sale date",
            is_source,
            on_release: move |_| cross.release(),
            {body}
        }
    }
}

#[component]
fn TrendLine(
    points: Vec<TrendPoint>,
    show_selection: bool,
    on_select: EventHandler<MonthRange>,
) -> Element {
    let mut hovered = use_signal(|| None::<usize>);
    let mut dragging = use_signal(|| None::<(usize, usize)>);
    let mut selected = use_signal(|| None::<(usize, usize)>);

    let plot_bottom = HEIGHT - MARGIN_BOTTOM;
    let plot_right = WIDTH - MARGIN_RIGHT;
    let bands = BandScale::new(points.len(), MARGIN_LEFT, plot_right);
    let y_scale = LinearScale::fit(
        points.iter().map(|p| p.average_price),
        (plot_bottom, MARGIN_TOP),
    );

    let line_path = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let cmd = if i == 0 { "M" } else { "L" };
            format!("{}{:.1},{:.1}", cmd, bands.center(i), y_scale.map(p.average_price))
        })
        .collect::<Vec<_>>()
        .join(" ");

    let brush = dragging().or(if show_selection { selected() } else { None });
    let brush_rect = brush.map(|(a, b)| {
        let x = bands.position(a.min(b));
        let width = bands.position(a.max(b) + 1) - x;
        (x, width)
    });

    let step = (points.len() / 6).max(1);
    let x_ticks: Vec<(f64, String)> = points
        .iter()
        .enumerate()
        .step_by(step)
        .filter_map(|(i, p)| Some((bands.center(i), p.year_month()?.short_label())))
        .collect();

    let tooltip = hovered().and_then(|i| points.get(i)).map(|p| {
        format!(
            "{}-{:02}: {} avg, {} sales, {}/sqft",
            p.year,
            p.month,
            currency(p.average_price),
            group_thousands(p.total_sales as f64),
            currency(p.average_price_per_sqft)
        )
    });

    let select_points = points.clone();

    rsx! {
        div {
            style: "position: relative; width: {WIDTH}px; height: {HEIGHT}px; cursor: crosshair; user-select: none;",
            onmousedown: move |e: MouseEvent| {
                if let Some(i) = bands.index_at(e.data().element_coordinates().x) {
                    dragging.set(Some((i, i)));
                }
            },
            onmousemove: move |e: MouseEvent| {
                let index = bands.index_at(e.data().element_coordinates().x);
                hovered.set(index);
                if let (Some((start, _)), Some(i)) = (dragging(), index) {
                    dragging.set(Some((start, i)));
                }
            },
            onmouseup: move |_| {
                if let Some((start, end)) = dragging.take() {
                    selected.set(Some((start, end)));
                    if let Some(range) = selected_months(&select_points, start, end) {
                        on_select.call(range);
                    }
                }
            },
            onmouseleave: move |_| {
                hovered.set(None);
                dragging.set(None);
            },

            svg {
                width: "{WIDTH}",
                height: "{HEIGHT}",
                view_box: "0 0 {WIDTH} {HEIGHT}",
                style: "pointer-events: none;",

                if let Some((x, width)) = brush_rect {
                    rect {
                        x: "{x}",
                        y: "{MARGIN_TOP}",
                        width: "{width}",
                        height: "{plot_bottom - MARGIN_TOP}",
                        fill: LINE_COLOR,
                        opacity: "0.12",
                    }
                }

                for tick in y_scale.ticks(5) {
                    line {
                        x1: "{MARGIN_LEFT}",
                        y1: "{y_scale.map(tick)}",
                        x2: "{plot_right}",
                        y2: "{y_scale.map(tick)}",
                        stroke: "#EEEEEE",
                        "stroke-width": "1",
                    }
                    text {
                        x: "{MARGIN_LEFT - 6.0}",
                        y: "{y_scale.map(tick) + 4.0}",
                        fill: "#666",
                        "font-size": "11",
                        "text-anchor": "end",
                        "${compact(tick)}"
                    }
                }

                path {
                    d: "{line_path}",
                    fill: "none",
                    stroke: LINE_COLOR,
                    "stroke-width": "2",
                }

                if let Some(i) = hovered() {
                    if let Some(p) = points.get(i) {
                        circle {
                            cx: "{bands.center(i)}",
                            cy: "{y_scale.map(p.average_price)}",
                            r: "4",
                            fill: LINE_COLOR,
                        }
                    }
                }

                for (x, label) in x_ticks {
                    text {
                        x: "{x}",
                        y: "{plot_bottom + 18.0}",
                        fill: "#666",
                        "font-size": "11",
                        "text-anchor": "middle",
                        "{label}"
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
            }
        }
    }
}
