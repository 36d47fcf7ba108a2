use crate::endpoint::{Endpoint, Resource};
use serde::{Deserialize, Serialize};

/// Response of `/housing/summary`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Summary {
    pub average_price: f64,
    pub median_sqft: f64,
    pub total_sales: u64,
}

impl Resource for Summary {
    const ENDPOINT: Endpoint = Endpoint::Summary;
}
