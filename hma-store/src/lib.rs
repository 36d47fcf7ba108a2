//! UI-independent state for the housing dashboard.
//!
//! - `filter`: the shared cross-filter state and its typed partial update
//! - `cross_filter`: the visibility rule every chart applies to its data
//! - `predicates`: per-dataset membership checks against the filter state
//! - `dataset`: the fetch lifecycle of one backend dataset
//!
//! Nothing here depends on Dioxus; the UI crate wraps these values in signals.

pub mod cross_filter;
pub mod dataset;
mod describe;
pub mod filter;
pub mod predicates;

pub use cross_filter::{emphasis, filtered_view, Emphasis};
pub use dataset::{DatasetState, DatasetView, FetchStatus, RequestGeneration};
pub use filter::{ChartId, FilterState, FilterUpdate, MonthRange, NumericRange};
