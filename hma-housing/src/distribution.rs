//! Raw value arrays behind the histogram charts.
//!
//! Both endpoints return a bare JSON array of numbers; the newtypes keep the
//! price and square-footage series from being mixed up.

use crate::endpoint::{Endpoint, Resource};
use serde::{Deserialize, Serialize};

/// Response of `/housing/price-distribution` (sale prices in dollars).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceDistribution(pub Vec<f64>);

impl PriceDistribution {
    pub fn values(&self) -> &[f64] {
        &self.0
    }
}

impl Resource for PriceDistribution {
    const ENDPOINT: Endpoint = Endpoint::PriceDistribution;
}

/// Response of `/housing/size-distribution` (living area in square feet).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SizeDistribution(pub Vec<f64>);

impl SizeDistribution {
    pub fn values(&self) -> &[f64] {
        &self.0
    }
}

impl Resource for SizeDistribution {
    const ENDPOINT: Endpoint = Endpoint::SizeDistribution;
}
