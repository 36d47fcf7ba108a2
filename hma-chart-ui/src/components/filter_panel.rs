//! Explicit filter controls.
//!
//! The panel takes part in cross-filtering like any chart: its updates are
//! tagged with [`FILTER_PANEL`].

use super::{BedroomSelector, MonthRangePicker, RangeSlider};
use crate::cross_filter::use_cross_filter;
use dioxus::prelude::*;
use hma_store::filter::{DEFAULT_PRICE_RANGE, DEFAULT_SQFT_RANGE};
use hma_store::{ChartId, FilterUpdate, NumericRange};
use hma_utils::format::{currency, sqft};

pub const FILTER_PANEL: ChartId = ChartId::new("filter-panel");

const PRICE_STEP: f64 = 10_000.0;
const SQFT_STEP: f64 = 100.0;

#[component]
pub fn FilterPanel() -> Element {
    let mut cross = use_cross_filter(FILTER_PANEL);
    let filters = cross.filters();
    let price = filters.price_range();
    let size = filters.sqft_range();
    let description = filters.describe();

    rsx! {
        aside {
            style: "padding: 12px 16px; background: #FAFAFA; border: 1px solid #E0E0E0; border-radius: 6px;",
            div {
                style: "display: flex; align-items: center; justify-content: space-between;",
                h3 { style: "margin: 0; font-size: 16px;", "Filters" }
                if filters.is_filtering() {
                    button {
                        style: "padding: 4px 12px; border: 1px solid #C62828; background: #fff; color: #C62828; border-radius: 4px; cursor: pointer;",
                        onclick: move |_| cross.clear_all_filters(),
                        "Reset"
                    }
                }
            }
            p {
                style: "margin: 4px 0 8px 0; font-size: 12px; color: #666;",
                "{description}"
            }
            RangeSlider {
                label: "Price",
                min: DEFAULT_PRICE_RANGE.low,
                max: DEFAULT_PRICE_RANGE.high,
                step: PRICE_STEP,
                value: price,
                low_label: currency(price.low),
                high_label: currency(price.high),
                on_change: move |range: NumericRange| {
                    cross.update_chart_filters(FilterUpdate::new().price_range(range))
                },
            }
            RangeSlider {
                label: "Living area",
                min: DEFAULT_SQFT_RANGE.low,
                max: DEFAULT_SQFT_RANGE.high,
                step: SQFT_STEP,
                value: size,
                low_label: sqft(size.low),
                high_label: sqft(size.high),
                on_change: move |range: NumericRange| {
                    cross.update_chart_filters(FilterUpdate::new().sqft_range(range))
                },
            }
            BedroomSelector {}
            MonthRangePicker {}
        }
    }
}
