use crate::bedroom::BedroomCategory;
use crate::endpoint::{Endpoint, Resource};
use serde::{Deserialize, Serialize};

/// A single sale for the price vs living-area plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub price: f64,
    pub sqft_living: f64,
    /// Kept as the raw string so one unexpected value does not reject the payload.
    pub bedroom_category: String,
}

impl ScatterPoint {
    pub fn category(&self) -> Option<BedroomCategory> {
        self.bedroom_category.parse().ok()
    }
}

/// Response of `/housing/scatter`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScatterPoints(pub Vec<ScatterPoint>);

impl ScatterPoints {
    pub fn points(&self) -> &[ScatterPoint] {
        &self.0
    }
}

impl Resource for ScatterPoints {
    const ENDPOINT: Endpoint = Endpoint::Scatter;
}
