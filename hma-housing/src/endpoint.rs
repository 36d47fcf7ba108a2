use serde::de::DeserializeOwned;
use std::fmt;

/// The fixed set of GET endpoints exposed by the housing service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Summary,
    Trends,
    Scatter,
    SizeDistribution,
    PriceDistribution,
    Bedrooms,
}

impl Endpoint {
    pub const ALL: [Endpoint; 6] = [
        Endpoint::Summary,
        Endpoint::Trends,
        Endpoint::Scatter,
        Endpoint::SizeDistribution,
        Endpoint::PriceDistribution,
        Endpoint::Bedrooms,
    ];

    /// Path relative to the service base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Summary => "/housing/summary",
            Endpoint::Trends => "/housing/trends",
            Endpoint::Scatter => "/housing/scatter",
            Endpoint::SizeDistribution => "/housing/size-distribution",
            Endpoint::PriceDistribution => "/housing/price-distribution",
            Endpoint::Bedrooms => "/housing/bedrooms",
        }
    }

    /// Dataset name used in log lines and fallback error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Summary => "summary",
            Endpoint::Trends => "trends",
            Endpoint::Scatter => "scatter",
            Endpoint::SizeDistribution => "size distribution",
            Endpoint::PriceDistribution => "price distribution",
            Endpoint::Bedrooms => "bedroom",
        }
    }

    /// Message shown when a failure carries no text of its own.
    pub fn fallback_error(&self) -> String {
        format!("Error fetching {} data", self.name())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A payload type served by exactly one endpoint.
pub trait Resource: DeserializeOwned + Clone + 'static {
    const ENDPOINT: Endpoint;
}

/// Join a base URL and an endpoint path, tolerating a trailing `/` on the base.
pub fn endpoint_url(base_url: &str, endpoint: Endpoint) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), endpoint.path())
}

/// Decode a response body into the resource served by `R::ENDPOINT`.
pub fn decode<R: Resource>(body: &str) -> anyhow::Result<R> {
    serde_json::from_str(body)
        .map_err(|e| anyhow::anyhow!("malformed {} payload: {}", R::ENDPOINT.name(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BedroomCounts, PriceDistribution, Summary};

    #[test]
    fn test_endpoint_url() {
        assert_eq!(
            endpoint_url("http://localhost:8000", Endpoint::Summary),
            "http://localhost:8000/housing/summary"
        );
        assert_eq!(
            endpoint_url("http://api.example.com/", Endpoint::SizeDistribution),
            "http://api.example.com/housing/size-distribution"
        );
    }

    #[test]
    fn test_fallback_error() {
        assert_eq!(Endpoint::Trends.fallback_error(), "Error fetching trends data");
        assert_eq!(Endpoint::Bedrooms.fallback_error(), "Error fetching bedroom data");
    }

    #[test]
    fn test_decode_summary() {
        let summary: Summary =
            decode(r#"{"average_price": 540088.14, "median_sqft": 1910.0, "total_sales": 21613}"#)
                .unwrap();
        assert_eq!(summary.total_sales, 21613);
        assert_eq!(summary.median_sqft, 1910.0);
    }

    #[test]
    fn test_decode_number_array() {
        let prices: PriceDistribution = decode("[221900, 538000.5, 180000]").unwrap();
        assert_eq!(prices.values(), &[221900.0, 538000.5, 180000.0]);
    }

    #[test]
    fn test_decode_error_names_dataset() {
        let err = decode::<BedroomCounts>(r#"{"small": "many"}"#).unwrap_err();
        assert!(err.to_string().starts_with("malformed bedroom payload"));
    }
}
