//! Month range picker with start and end month inputs.

use super::FILTER_PANEL;
use crate::cross_filter::use_cross_filter;
use dioxus::prelude::*;
use hma_store::{FilterUpdate, MonthRange};
use hma_utils::months::YearMonth;

/// Keeps `start <= end` by swapping the bounds when they cross.
fn ordered(a: YearMonth, b: YearMonth) -> MonthRange {
    if a <= b {
        MonthRange::new(a, b)
    } else {
        MonthRange::new(b, a)
    }
}

/// Month range picker for the sale-date filter.
#[component]
pub fn MonthRangePicker() -> Element {
    let mut cross = use_cross_filter(FILTER_PANEL);
    let range = cross.filters().date_range();
    let start = range.start.to_string();
    let end = range.end.to_string();

    let on_start_change = move |evt: Event<FormData>| match evt.value().parse::<YearMonth>() {
        Ok(month) => cross.update_chart_filters(FilterUpdate::new().date_range(ordered(month, range.end))),
        Err(e) => log::debug!("ignoring start month: {}", e),
    };

    let on_end_change = move |evt: Event<FormData>| match evt.value().parse::<YearMonth>() {
        Ok(month) => cross.update_chart_filters(FilterUpdate::new().date_range(ordered(range.start, month))),
        Err(e) => log::debug!("ignoring end month: {}", e),
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold; font-size: 13px;",
                "From: "
                input {
                    r#type: "month",
                    value: "{start}",
                    onchange: on_start_change,
                }
            }
            label {
                style: "font-weight: bold; font-size: 13px;",
                "To: "
                input {
                    r#type: "month",
                    value: "{end}",
                    onchange: on_end_change,
                }
            }
        }
    }
}
