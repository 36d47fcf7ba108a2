//! Per-chart access to the shared filter store.

use crate::state::{AppState, FilterStore};
use dioxus::prelude::*;
use hma_store::{filtered_view, ChartId, FilterState, FilterUpdate};
use std::borrow::Cow;

/// The filter store as seen by one chart.
///
/// Every update made through it is tagged with the chart's id.
#[derive(Clone, Copy, PartialEq)]
pub struct CrossFilter {
    chart: ChartId,
    store: FilterStore,
}

/// Bind `chart` to the filter store in context. Call at the top of a component.
pub fn use_cross_filter(chart: ChartId) -> CrossFilter {
    let state = use_context::<AppState>();
    CrossFilter {
        chart,
        store: state.filters,
    }
}

impl CrossFilter {
    pub fn chart_id(&self) -> ChartId {
        self.chart
    }

    pub fn filters(&self) -> FilterState {
        self.store.snapshot()
    }

    pub fn is_source_chart(&self) -> bool {
        self.store.with(|state| state.is_source(self.chart))
    }

    pub fn is_filtering(&self) -> bool {
        self.store.with(FilterState::is_filtering)
    }

    pub fn update_chart_filters(&mut self, update: FilterUpdate) {
        self.store.update_filters(update, self.chart);
    }

    pub fn clear_all_filters(&mut self) {
        self.store.clear_filters();
    }

    /// Give up the source role while keeping the current bounds.
    pub fn release(&mut self) {
        self.store.clear_source_chart();
    }

    /// [`hma_store::filtered_view`] against the current filters.
    pub fn filtered_view<'a, T, P>(&self, data: Option<&'a [T]>, predicate: P) -> Option<Cow<'a, [T]>>
    where
        T: Clone,
        P: Fn(&T, &FilterState) -> bool,
    {
        self.store
            .with(|state| filtered_view(state, self.chart, data, predicate))
    }
}
