//! Per-dataset fetch lifecycle.
//!
//! Each dataset moves through `Idle -> Loading -> Succeeded | Failed`. Every
//! fetch is tagged with a [`RequestGeneration`]; only the most recently issued
//! one may settle the state, so a slow response for an older request can never
//! overwrite a newer one.

use log::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Tag handed out when a fetch starts; pass it back to [`DatasetState::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestGeneration(u64);

/// What a chart should draw for a dataset right now.
#[derive(Debug, PartialEq)]
pub enum DatasetView<'a, T> {
    Loading,
    Failed(&'a str),
    Ready(&'a T),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatasetState<T> {
    data: Option<T>,
    status: FetchStatus,
    error: Option<String>,
    issued: u64,
}

impl<T> Default for DatasetState<T> {
    fn default() -> Self {
        Self {
            data: None,
            status: FetchStatus::Idle,
            error: None,
            issued: 0,
        }
    }
}

impl<T> DatasetState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    /// Generation of the most recently issued fetch, if any.
    pub fn latest_generation(&self) -> Option<RequestGeneration> {
        (self.issued > 0).then_some(RequestGeneration(self.issued))
    }

    /// Start the initial fetch. Does nothing unless the dataset is still idle,
    /// which keeps a chart that remounts from refetching.
    pub fn start_if_idle(&mut self) -> Option<RequestGeneration> {
        match self.status {
            FetchStatus::Idle => Some(self.begin_fetch()),
            _ => None,
        }
    }

    /// Re-issue a fetch after a failure.
    pub fn retry(&mut self) -> Option<RequestGeneration> {
        match self.status {
            FetchStatus::Failed => Some(self.begin_fetch()),
            _ => None,
        }
    }

    /// Unconditionally issue a new fetch. Previously fetched data stays
    /// available until the new request settles.
    pub fn begin_fetch(&mut self) -> RequestGeneration {
        self.issued += 1;
        self.status = FetchStatus::Loading;
        self.error = None;
        debug!("fetch #{} started", self.issued);
        RequestGeneration(self.issued)
    }

    /// Settle the fetch tagged `generation`.
    ///
    /// Returns `false` and leaves the state untouched when `generation` is not
    /// the latest request or the dataset is no longer loading. A failure keeps
    /// any previously fetched data; an empty error message becomes `"Error"`.
    pub fn resolve(&mut self, generation: RequestGeneration, result: Result<T, String>) -> bool {
        if generation.0 != self.issued || self.status != FetchStatus::Loading {
            debug!(
                "discarding response #{} (latest is #{})",
                generation.0, self.issued
            );
            return false;
        }
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.status = FetchStatus::Succeeded;
                self.error = None;
            }
            Err(message) => {
                let message = if message.trim().is_empty() {
                    "Error".to_string()
                } else {
                    message
                };
                warn!("fetch #{} failed: {}", generation.0, message);
                self.status = FetchStatus::Failed;
                self.error = Some(message);
            }
        }
        true
    }

    /// Data from an earlier fetch stays visible while a refresh is in flight.
    /// A failure shows its message even when older data is still held.
    pub fn view(&self) -> DatasetView<'_, T> {
        match (self.status, &self.data) {
            (FetchStatus::Failed, _) => {
                DatasetView::Failed(self.error.as_deref().unwrap_or("Error"))
            }
            (FetchStatus::Succeeded | FetchStatus::Loading, Some(data)) => {
                DatasetView::Ready(data)
            }
            _ => DatasetView::Loading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state() {
        let state: DatasetState<Vec<f64>> = DatasetState::new();
        assert_eq!(state.status(), FetchStatus::Idle);
        assert!(state.data().is_none());
        assert!(state.error().is_none());
        assert!(state.latest_generation().is_none());
        assert_eq!(state.view(), DatasetView::Loading);
    }

    #[test]
    fn test_failure_then_retry_succeeds() {
        let mut state: DatasetState<Vec<u32>> = DatasetState::new();

        let first = state.start_if_idle().unwrap();
        assert_eq!(state.status(), FetchStatus::Loading);
        assert!(state.resolve(first, Err("Error fetching bedroom data".into())));
        assert_eq!(state.status(), FetchStatus::Failed);
        assert_eq!(state.error(), Some("Error fetching bedroom data"));
        assert!(state.data().is_none());
        assert_eq!(state.view(), DatasetView::Failed("Error fetching bedroom data"));

        let second = state.retry().unwrap();
        assert_eq!(state.status(), FetchStatus::Loading);
        assert!(state.error().is_none());
        assert!(state.resolve(second, Ok(vec![1, 2, 3])));
        assert_eq!(state.status(), FetchStatus::Succeeded);
        assert_eq!(state.data(), Some(&vec![1, 2, 3]));
        assert!(state.error().is_none());
    }

    #[test]
    fn test_start_if_idle_only_once() {
        let mut state: DatasetState<u32> = DatasetState::new();
        assert!(state.start_if_idle().is_some());
        assert!(state.start_if_idle().is_none());
        assert!(state.retry().is_none());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state: DatasetState<&str> = DatasetState::new();
        let old = state.begin_fetch();
        let new = state.begin_fetch();
        assert!(old < new);

        assert!(state.resolve(new, Ok("fresh")));
        assert!(!state.resolve(old, Ok("stale")));
        assert_eq!(state.data(), Some(&"fresh"));

        let later = state.begin_fetch();
        assert!(!state.resolve(old, Err("late failure".into())));
        assert_eq!(state.status(), FetchStatus::Loading);
        assert!(state.resolve(later, Ok("latest")));
        assert_eq!(state.data(), Some(&"latest"));
    }

    #[test]
    fn test_settled_request_cannot_resolve_twice() {
        let mut state: DatasetState<u8> = DatasetState::new();
        let generation = state.begin_fetch();
        assert!(state.resolve(generation, Ok(1)));
        assert!(!state.resolve(generation, Err("boom".into())));
        assert_eq!(state.status(), FetchStatus::Succeeded);
    }

    #[test]
    fn test_failure_keeps_previous_data() {
        let mut state: DatasetState<u8> = DatasetState::new();
        let first = state.begin_fetch();
        state.resolve(first, Ok(7));
        let refresh = state.begin_fetch();
        assert_eq!(state.data(), Some(&7));
        assert_eq!(state.view(), DatasetView::Ready(&7));
        state.resolve(refresh, Err(String::new()));
        assert_eq!(state.error(), Some("Error"));
        assert_eq!(state.data(), Some(&7));
        assert_eq!(state.view(), DatasetView::Failed("Error"));
    }
}
