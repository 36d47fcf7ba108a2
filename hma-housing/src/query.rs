use crate::bedroom::BedroomCategory;

/// Server-side filter parameters understood by every housing endpoint.
///
/// Absent fields are not sent, so an empty query requests the unfiltered
/// population.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FilterQuery {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub bedroom_category: Option<BedroomCategory>,
    pub min_sqft: Option<f64>,
    pub max_sqft: Option<f64>,
}

impl FilterQuery {
    pub fn is_empty(&self) -> bool {
        self.to_pairs().is_empty()
    }

    /// Query parameters in a stable order.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(v) = self.min_price {
            pairs.push(("min_price", v.to_string()));
        }
        if let Some(v) = self.max_price {
            pairs.push(("max_price", v.to_string()));
        }
        if let Some(c) = self.bedroom_category {
            pairs.push(("bedroom_category", c.as_str().to_string()));
        }
        if let Some(v) = self.min_sqft {
            pairs.push(("min_sqft", v.to_string()));
        }
        if let Some(v) = self.max_sqft {
            pairs.push(("max_sqft", v.to_string()));
        }
        pairs
    }

    /// `?k=v&...`, or an empty string when nothing is set.
    pub fn to_query_string(&self) -> String {
        let pairs = self.to_pairs();
        if pairs.is_empty() {
            return String::new();
        }
        let joined = pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        format!("?{}", joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query() {
        let query = FilterQuery::default();
        assert!(query.is_empty());
        assert_eq!(query.to_query_string(), "");
    }

    #[test]
    fn test_query_string_order_and_format() {
        let query = FilterQuery {
            min_price: Some(400000.0),
            max_price: Some(800000.0),
            bedroom_category: Some(BedroomCategory::Small),
            min_sqft: None,
            max_sqft: Some(3000.0),
        };
        assert_eq!(
            query.to_query_string(),
            "?min_price=400000&max_price=800000&bedroom_category=small&max_sqft=3000"
        );
    }
}
