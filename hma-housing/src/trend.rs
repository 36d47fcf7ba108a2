use crate::endpoint::{Endpoint, Resource};
use hma_utils::months::YearMonth;
use serde::{Deserialize, Serialize};

/// One month of aggregated sales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub year: i32,
    pub month: u32,
    pub average_price: f64,
    pub median_sqft: f64,
    pub average_price_per_sqft: f64,
    pub total_sales: u64,
}

impl TrendPoint {
    /// `None` if the backend sent a month outside `1..=12`.
    pub fn year_month(&self) -> Option<YearMonth> {
        YearMonth::new(self.year, self.month)
    }
}

/// Response of `/housing/trends`, in the order the backend returned it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trends(pub Vec<TrendPoint>);

impl Trends {
    pub fn points(&self) -> &[TrendPoint] {
        &self.0
    }
}

impl Resource for Trends {
    const ENDPOINT: Endpoint = Endpoint::Trends;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::decode;

    #[test]
    fn test_decode_trends() {
        let body = r#"[
            {"year": 2024, "month": 3, "average_price": 510000.0, "median_sqft": 1850.0,
             "average_price_per_sqft": 275.7, "total_sales": 412}
        ]"#;
        let trends: Trends = decode(body).unwrap();
        let point = &trends.points()[0];
        assert_eq!(point.year_month().unwrap().to_string(), "2024-03");
        assert_eq!(point.total_sales, 412);
    }

    #[test]
    fn test_invalid_month_has_no_key() {
        let point = TrendPoint {
            year: 2024,
            month: 13,
            average_price: 0.0,
            median_sqft: 0.0,
            average_price_per_sqft: 0.0,
            total_sales: 0,
        };
        assert!(point.year_month().is_none());
    }
}
