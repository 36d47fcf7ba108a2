//! The dashboard's charts, one per backend dataset.
//!
//! Each chart owns a `ChartId` constant; gesture state (hover, drag) lives in
//! component-local signals and never reaches the shared store.

mod bedrooms;
mod price_distribution;
mod scatter;
mod size_distribution;
mod summary;
mod trends;

pub use bedrooms::BedroomChart;
pub use price_distribution::PriceDistributionChart;
pub use scatter::ScatterChart;
pub use size_distribution::SizeDistributionChart;
pub use summary::SummaryCards;
pub use trends::TrendsChart;
