//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use crate::config::DashboardConfig;
use dioxus::prelude::*;
use hma_housing::client::HousingClient;
use hma_housing::{
    BedroomCounts, PriceDistribution, ScatterPoints, SizeDistribution, Summary, Trends,
};
use hma_store::{ChartId, DatasetState, FilterState, FilterUpdate};

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Cross-filter selection shared by every chart
    pub filters: FilterStore,
    pub summary: Signal<DatasetState<Summary>>,
    pub trends: Signal<DatasetState<Trends>>,
    pub scatter: Signal<DatasetState<ScatterPoints>>,
    pub size_distribution: Signal<DatasetState<SizeDistribution>>,
    pub price_distribution: Signal<DatasetState<PriceDistribution>>,
    pub bedrooms: Signal<DatasetState<BedroomCounts>>,
    /// HTTP client pointed at `config.api_base_url`
    pub client: Signal<HousingClient>,
    pub config: Signal<DashboardConfig>,
}

impl AppState {
    /// Create a new AppState with every dataset idle and default filters.
    pub fn new(config: DashboardConfig) -> Self {
        let client = HousingClient::new(config.api_base_url.clone());
        Self {
            filters: FilterStore::new(),
            summary: Signal::new(DatasetState::new()),
            trends: Signal::new(DatasetState::new()),
            scatter: Signal::new(DatasetState::new()),
            size_distribution: Signal::new(DatasetState::new()),
            price_distribution: Signal::new(DatasetState::new()),
            bedrooms: Signal::new(DatasetState::new()),
            client: Signal::new(client),
            config: Signal::new(config),
        }
    }
}

/// The single owner of the [`FilterState`].
///
/// Reads subscribe the calling component; each mutation runs under one write
/// guard so readers only ever see a complete transition.
#[derive(Clone, Copy, PartialEq)]
pub struct FilterStore {
    state: Signal<FilterState>,
}

impl FilterStore {
    pub fn new() -> Self {
        Self {
            state: Signal::new(FilterState::default()),
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&FilterState) -> R) -> R {
        self.state.with(f)
    }

    pub fn snapshot(&self) -> FilterState {
        self.state.cloned()
    }

    pub fn update_filters(&mut self, update: FilterUpdate, source: ChartId) {
        self.state.with_mut(|state| state.update_filters(update, source));
    }

    pub fn clear_filters(&mut self) {
        self.state.with_mut(FilterState::clear_filters);
    }

    pub fn clear_source_chart(&mut self) {
        self.state.with_mut(FilterState::clear_source_chart);
    }
}

impl Default for FilterStore {
    fn default() -> Self {
        Self::new()
    }
}
