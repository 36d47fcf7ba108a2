//! SVG histogram with a brush over bucket indices.
//!
//! The SVG has a fixed pixel size and ignores pointer events, so the element
//! coordinates reported by the wrapping `div` are SVG coordinates.

use dioxus::prelude::*;
use hma_data::brush::resolve_bucket_range;
use hma_data::histogram::Bucket;
use hma_data::scale::{BandScale, LinearScale};
use hma_utils::format::{compact, percent};

pub const HISTOGRAM_WIDTH: f64 = 560.0;
pub const HISTOGRAM_HEIGHT: f64 = 260.0;

const MARGIN_LEFT: f64 = 48.0;
const MARGIN_RIGHT: f64 = 44.0;
const MARGIN_TOP: f64 = 24.0;
const MARGIN_BOTTOM: f64 = 32.0;

const CUMULATIVE_COLOR: &str = "#E15759";

#[derive(Props, Clone, PartialEq)]
pub struct HistogramChartProps {
    pub buckets: Vec<Bucket>,
    /// Running percentage per bucket, drawn against a 0-100% right axis
    #[props(default)]
    pub cumulative: Option<Vec<f64>>,
    #[props(default = "#4E79A7".to_string())]
    pub color: String,
    /// Keep the last brushed band highlighted
    #[props(default = false)]
    pub show_selection: bool,
    /// Receives `(lower, upper)` of the brushed buckets on release
    pub on_select: EventHandler<(f64, f64)>,
}

fn in_band(index: usize, band: Option<(usize, usize)>) -> bool {
    band.is_some_and(|(a, b)| index >= a.min(b) && index <= a.max(b))
}

#[component]
pub fn HistogramChart(props: HistogramChartProps) -> Element {
    let mut hovered = use_signal(|| None::<usize>);
    let mut dragging = use_signal(|| None::<(usize, usize)>);
    let mut selected = use_signal(|| None::<(usize, usize)>);

    let count = props.buckets.len();
    let plot_bottom = HISTOGRAM_HEIGHT - MARGIN_BOTTOM;
    let plot_right = HISTOGRAM_WIDTH - MARGIN_RIGHT;
    let bands = BandScale::new(count, MARGIN_LEFT, plot_right);
    let max_count = props.buckets.iter().map(|b| b.count).max().unwrap_or(0).max(1);
    let y_scale = LinearScale::new((0.0, max_count as f64), (plot_bottom, MARGIN_TOP));
    let pct_scale = LinearScale::new((0.0, 100.0), (plot_bottom, MARGIN_TOP));

    let brush = dragging().or(if props.show_selection { selected() } else { None });

    let cumulative_path = props.cumulative.as_ref().map(|percents| {
        percents
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let cmd = if i == 0 { "M" } else { "L" };
                format!("{}{:.1},{:.1}", cmd, bands.center(i), pct_scale.map(*p))
            })
            .collect::<Vec<_>>()
            .join(" ")
    });

    let tooltip = hovered().and_then(|i| {
        let bucket = props.buckets.get(i)?;
        let share = props
            .cumulative
            .as_ref()
            .and_then(|c| c.get(i))
            .map(|p| format!(" ({} cumulative)", percent(*p)))
            .unwrap_or_default();
        Some(format!("{}: {} sales{}", bucket.label, bucket.count, share))
    });

    let x_ticks: Vec<(f64, String)> = match (props.buckets.first(), props.buckets.last()) {
        (Some(first), Some(last)) => vec![
            (MARGIN_LEFT, compact(first.lower)),
            (
                (MARGIN_LEFT + plot_right) / 2.0,
                compact((first.lower + last.upper) / 2.0),
            ),
            (plot_right, compact(last.upper)),
        ],
        _ => Vec::new(),
    };

    let select_buckets = props.buckets.clone();
    let on_select = props.on_select;

    rsx! {
        div {
            style: "position: relative; width: {HISTOGRAM_WIDTH}px; height: {HISTOGRAM_HEIGHT}px; cursor: crosshair; user-select: none;",
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
                    if let Some(range) = resolve_bucket_range(&select_buckets, start, end) {
                        on_select.call(range);
                    }
                }
            },
            onmouseleave: move |_| {
                hovered.set(None);
                dragging.set(None);
            },

            svg {
                width: "{HISTOGRAM_WIDTH}",
                height: "{HISTOGRAM_HEIGHT}",
                view_box: "0 0 {HISTOGRAM_WIDTH} {HISTOGRAM_HEIGHT}",
                style: "pointer-events: none;",

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
                        "{tick.round()}"
                    }
                }

                for (i, bucket) in props.buckets.iter().enumerate() {
                    rect {
                        key: "{i}",
                        x: "{bands.position(i) + 1.0}",
                        y: "{y_scale.map(bucket.count as f64)}",
                        width: "{(bands.band_width() - 2.0).max(1.0)}",
                        height: "{plot_bottom - y_scale.map(bucket.count as f64)}",
                        fill: "{props.color}",
                        opacity: if brush.is_none() || in_band(i, brush) { "1" } else { "0.35" },
                        stroke: if hovered() == Some(i) { "#333" } else { "none" },
                    }
                }

                if let Some(d) = cumulative_path {
                    path {
                        d: "{d}",
                        fill: "none",
                        stroke: CUMULATIVE_COLOR,
                        "stroke-width": "2",
                    }
                    for p in [0.0, 50.0, 100.0] {
                        text {
                            x: "{plot_right + 6.0}",
                            y: "{pct_scale.map(p) + 4.0}",
                            fill: CUMULATIVE_COLOR,
                            "font-size": "11",
                            "{p}%"
                        }
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
