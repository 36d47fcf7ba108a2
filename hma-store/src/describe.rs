use crate::filter::{
    FilterState, DEFAULT_DATE_RANGE, DEFAULT_PRICE_RANGE, DEFAULT_SQFT_RANGE,
};
use hma_housing::FilterQuery;
use hma_utils::format::{currency, group_thousands};

impl FilterState {
    /// Human-readable summary of every bound that differs from its default.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();

        let price = self.price_range();
        if price != DEFAULT_PRICE_RANGE {
            parts.push(format!(
                "Price: {} - {}",
                currency(price.low),
                currency(price.high)
            ));
        }

        let sqft = self.sqft_range();
        if sqft != DEFAULT_SQFT_RANGE {
            parts.push(format!(
                "Size: {} - {} sqft",
                group_thousands(sqft.low),
                group_thousands(sqft.high)
            ));
        }

        if let Some(category) = self.bedroom_category() {
            parts.push(format!("Bedrooms: {}", category));
        }

        let dates = self.date_range();
        if dates != DEFAULT_DATE_RANGE {
            parts.push(format!("Date: {} - {}", dates.start, dates.end));
        }

        if parts.is_empty() {
            "All properties".to_string()
        } else {
            parts.join(" | ")
        }
    }

    /// Server-side parameters for the bounds the backend can filter on.
    ///
    /// A range only appears when it differs from its default, so the default
    /// state maps to an empty query.
    pub fn to_query(&self) -> FilterQuery {
        let price = self.price_range();
        let sqft = self.sqft_range();
        let (min_price, max_price) = if price != DEFAULT_PRICE_RANGE {
            (Some(price.low), Some(price.high))
        } else {
            (None, None)
        };
        let (min_sqft, max_sqft) = if sqft != DEFAULT_SQFT_RANGE {
            (Some(sqft.low), Some(sqft.high))
        } else {
            (None, None)
        };
        FilterQuery {
            min_price,
            max_price,
            bedroom_category: self.bedroom_category(),
            min_sqft,
            max_sqft,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::filter::{ChartId, FilterState, FilterUpdate, MonthRange, NumericRange};
    use hma_housing::BedroomCategory;

    const PANEL: ChartId = ChartId::new("filter-panel");

    #[test]
    fn test_default_description() {
        assert_eq!(FilterState::default().describe(), "All properties");
        assert!(FilterState::default().to_query().is_empty());
    }

    #[test]
    fn test_description_lists_changed_bounds() {
        let mut state = FilterState::default();
        state.update_filters(
            FilterUpdate::new()
                .price_range(NumericRange::new(100_000.0, 300_000.0))
                .bedroom_category(Some(BedroomCategory::Medium))
                .date_range(MonthRange::new(
                    "2021-01".parse().unwrap(),
                    "2022-06".parse().unwrap(),
                )),
            PANEL,
        );
        assert_eq!(
            state.describe(),
            "Price: $100,000 - $300,000 | Bedrooms: medium | Date: 2021-01 - 2022-06"
        );
    }

    #[test]
    fn test_query_mirrors_backend_filters() {
        let mut state = FilterState::default();
        state.update_filters(
            FilterUpdate::new()
                .sqft_range(NumericRange::new(500.0, 3_000.0))
                .bedroom_category(Some(BedroomCategory::Small)),
            PANEL,
        );
        let query = state.to_query();
        assert_eq!(query.min_price, None);
        assert_eq!(query.min_sqft, Some(500.0));
        assert_eq!(query.max_sqft, Some(3_000.0));
        assert_eq!(
            query.to_query_string(),
            "?bedroom_category=small&min_sqft=500&max_sqft=3000"
        );
    }
}
