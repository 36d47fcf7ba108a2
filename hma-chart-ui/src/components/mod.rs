//! Reusable Dioxus RSX components for the housing dashboard.

mod bedroom_selector;
mod chart_container;
mod chart_header;
mod empty_state;
mod error_display;
mod filter_panel;
mod histogram;
mod loading_spinner;
mod month_range_picker;
mod range_slider;
mod stat_card;

pub use bedroom_selector::BedroomSelector;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use empty_state::EmptyState;
pub use error_display::ErrorDisplay;
pub use filter_panel::{FilterPanel, FILTER_PANEL};
pub use histogram::{HistogramChart, HISTOGRAM_HEIGHT, HISTOGRAM_WIDTH};
pub use loading_spinner::LoadingSpinner;
pub use month_range_picker::MonthRangePicker;
pub use range_slider::RangeSlider;
pub use stat_card::StatCard;
