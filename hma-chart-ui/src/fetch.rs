//! Mount-time fetching of backend datasets into their stores.

use crate::state::AppState;
use dioxus::prelude::*;
use hma_housing::client::HousingClient;
use hma_housing::{Endpoint, FilterQuery, Resource};
use hma_store::{DatasetState, FetchStatus, RequestGeneration};
use std::fmt;

/// Fetch controls for one dataset store.
pub struct DatasetHandle<R: Resource> {
    store: Signal<DatasetState<R>>,
    client: Signal<HousingClient>,
    last_query: Signal<FilterQuery>,
}

// Manual impls: deriving would require `R: Copy`.
impl<R: Resource> Clone for DatasetHandle<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for DatasetHandle<R> {}

impl<R: Resource> PartialEq for DatasetHandle<R> {
    fn eq(&self, other: &Self) -> bool {
        self.store == other.store
    }
}

/// Start the initial fetch for `store` unless it already left the idle state,
/// so remounting a chart never fetches twice.
pub fn use_dataset<R: Resource>(store: Signal<DatasetState<R>>) -> DatasetHandle<R> {
    let state = use_context::<AppState>();
    let last_query = use_signal(FilterQuery::default);
    let handle = DatasetHandle {
        store,
        client: state.client,
        last_query,
    };

    use_effect(move || {
        handle.load_if_idle();
    });

    handle
}

impl<R: Resource> DatasetHandle<R> {
    pub fn store(&self) -> Signal<DatasetState<R>> {
        self.store
    }

    fn load_if_idle(mut self) {
        if self.store.peek().status() != FetchStatus::Idle {
            return;
        }
        let generation = self.store.write().start_if_idle();
        if let Some(generation) = generation {
            self.launch(generation, FilterQuery::default());
        }
    }

    /// Repeat the last request of a failed dataset.
    pub fn retry(mut self) {
        let generation = self.store.write().retry();
        if let Some(generation) = generation {
            let query = *self.last_query.peek();
            self.launch(generation, query);
        }
    }

    /// Refetch with server-side filters. Earlier requests still in flight are
    /// discarded when they complete.
    pub fn refresh_with(mut self, query: FilterQuery) {
        self.last_query.set(query);
        let generation = self.store.write().begin_fetch();
        self.launch(generation, query);
    }

    fn launch(self, generation: RequestGeneration, query: FilterQuery) {
        let client = HousingClient::clone(&self.client.peek());
        let mut store = self.store;
        spawn(async move {
            let result = client
                .fetch_filtered::<R>(&query)
                .await
                .map_err(|e| failure_message(e, R::ENDPOINT));
            let applied = store.write().resolve(generation, result);
            if !applied {
                log::debug!("ignored stale {} response", R::ENDPOINT.name());
            }
        });
    }
}

/// Full error chain of a failed fetch, or the endpoint's fallback text when
/// the error carries none.
pub fn failure_message(error: impl fmt::Display, endpoint: Endpoint) -> String {
    let message = format!("{:#}", error);
    if message.trim().is_empty() {
        endpoint.fallback_error()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_fallback() {
        assert_eq!(
            failure_message("", Endpoint::Bedrooms),
            "Error fetching bedroom data"
        );
        assert_eq!(
            failure_message("  ", Endpoint::SizeDistribution),
            "Error fetching size distribution data"
        );
        assert_eq!(
            failure_message("/housing/trends responded with 500", Endpoint::Trends),
            "/housing/trends responded with 500"
        );
    }
}
