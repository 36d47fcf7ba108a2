//! Backend contract for the housing analytics service.
//!
//! Every endpoint returns JSON; the payload types here mirror those shapes
//! one-to-one. With the `api` feature enabled, [`client::HousingClient`]
//! fetches them over HTTP.

pub mod bedroom;
pub mod distribution;
pub mod endpoint;
pub mod query;
pub mod scatter;
pub mod summary;
pub mod trend;

#[cfg(feature = "api")]
pub mod client;

pub use bedroom::{BedroomCategory, BedroomCounts};
pub use distribution::{PriceDistribution, SizeDistribution};
pub use endpoint::{decode, Endpoint, Resource};
pub use query::FilterQuery;
pub use scatter::{ScatterPoint, ScatterPoints};
pub use summary::Summary;
pub use trend::{TrendPoint, Trends};
