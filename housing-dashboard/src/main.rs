//! Housing Market Dashboard
//!
//! Six linked charts over one housing sales population. Brushing a histogram,
//! dragging a rectangle on the scatter plot, brushing the trend line or
//! clicking a bedroom bar narrows every other chart; the chart that made the
//! selection keeps showing its full data.
//!
//! Data flow:
//! 1. `AppState` is provided once with an idle store per dataset.
//! 2. Each chart calls `use_dataset` on mount, which fetches its endpoint once.
//! 3. Gestures go through `use_cross_filter`, tagging the update with the chart id.
//! 4. Every chart re-derives its view from the shared `FilterState`.

mod charts;

use charts::{
    BedroomChart, PriceDistributionChart, ScatterChart, SizeDistributionChart, SummaryCards,
    TrendsChart,
};
use dioxus::prelude::*;
use hma_chart_ui::components::FilterPanel;
use hma_chart_ui::config::DashboardConfig;
use hma_chart_ui::state::AppState;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("housing-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| {
        let config = DashboardConfig::from_env();
        log::info!("housing API at {}", config.api_base_url);
        AppState::new(config)
    });

    rsx! {
        Dashboard {}
    }
}

#[component]
fn Dashboard() -> Element {
    let state = use_context::<AppState>();
    let mut filters = state.filters;
    let (is_filtering, description) = filters.with(|f| (f.is_filtering(), f.describe()));

    rsx! {
        div {
            style: "font-family: system-ui, sans-serif; background: #F5F5F5; min-height: 100vh; padding: 16px 24px; color: #212121;",
            header {
                style: "display: flex; align-items: baseline; gap: 16px; margin-bottom: 16px;",
                h1 { style: "margin: 0; font-size: 22px;", "Housing Market Analytics" }
                span { style: "font-size: 13px; color: #666;", "{description}" }
                if is_filtering {
                    button {
                        style: "margin-left: auto; padding: 4px 12px; border: 1px solid #BDBDBD; background: #fff; border-radius: 4px; cursor: pointer;",
                        onclick: move |_| filters.clear_filters(),
                        "Clear all filters"
                    }
                }
            }
            SummaryCards {}
            div {
                style: "display: grid; grid-template-columns: 300px 1fr; gap: 16px; margin-top: 16px; align-items: start;",
                FilterPanel {}
                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(600px, 1fr)); gap: 16px;",
                    TrendsChart {}
                    ScatterChart {}
                    PriceDistributionChart {}
                    SizeDistributionChart {}
                    BedroomChart {}
                }
            }
        }
    }
}
