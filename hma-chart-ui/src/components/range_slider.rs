//! Two-thumb numeric range input built from a pair of range sliders.

use dioxus::prelude::*;
use hma_store::NumericRange;

#[derive(Props, Clone, PartialEq)]
pub struct RangeSliderProps {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub value: NumericRange,
    /// Formatted bounds shown next to the label
    pub low_label: String,
    pub high_label: String,
    pub on_change: EventHandler<NumericRange>,
}

/// Moving one thumb past the other pins it to the other's value.
#[component]
pub fn RangeSlider(props: RangeSliderProps) -> Element {
    let value = props.value;
    let on_change = props.on_change;

    let on_low = move |evt: Event<FormData>| {
        if let Ok(low) = evt.value().parse::<f64>() {
            on_change.call(NumericRange::new(low.min(value.high), value.high));
        }
    };
    let on_high = move |evt: Event<FormData>| {
        if let Ok(high) = evt.value().parse::<f64>() {
            on_change.call(NumericRange::new(value.low, high.max(value.low)));
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            div {
                style: "font-weight: bold; font-size: 13px; margin-bottom: 4px;",
                "{props.label}: "
                span {
                    style: "font-weight: normal; color: #444;",
                    "{props.low_label} - {props.high_label}"
                }
            }
            div {
                style: "display: flex; gap: 8px;",
                input {
                    r#type: "range",
                    min: "{props.min}",
                    max: "{props.max}",
                    step: "{props.step}",
                    value: "{value.low}",
                    style: "flex: 1;",
                    oninput: on_low,
                }
                input {
                    r#type: "range",
                    min: "{props.min}",
                    max: "{props.max}",
                    step: "{props.step}",
                    value: "{value.high}",
                    style: "flex: 1;",
                    oninput: on_high,
                }
            }
        }
    }
}
