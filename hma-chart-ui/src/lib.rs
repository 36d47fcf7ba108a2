//! Shared Dioxus state, hooks and components for the housing dashboard.
//!
//! This crate provides:
//! - `state`: Reactive AppState with Dioxus Signals, including the shared `FilterStore`
//! - `cross_filter`: `use_cross_filter`, the per-chart view of the filter store
//! - `fetch`: `use_dataset`, the mount-time fetch and retry entry points
//! - `config`: `DashboardConfig` (API base URL and bin counts)
//! - `components`: Reusable RSX components (containers, placeholders, filter controls, histogram)

pub mod components;
pub mod config;
pub mod cross_filter;
pub mod fetch;
pub mod state;
