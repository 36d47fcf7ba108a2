//! Membership checks of each dataset against the filter state.
//!
//! All functions share the `fn(&T, &FilterState) -> bool` shape expected by
//! [`crate::filtered_view`].

use crate::cross_filter::{emphasis, Emphasis};
use crate::filter::FilterState;
use hma_housing::{BedroomCategory, ScatterPoint, TrendPoint};

/// A sale matches when both bounds hold and, if set, its bedroom category agrees.
pub fn scatter_point_matches(point: &ScatterPoint, state: &FilterState) -> bool {
    state.price_range().contains(point.price)
        && state.sqft_range().contains(point.sqft_living)
        && state
            .bedroom_category()
            .map_or(true, |category| point.category() == Some(category))
}

pub fn price_matches(price: &f64, state: &FilterState) -> bool {
    state.price_range().contains(*price)
}

pub fn sqft_matches(sqft: &f64, state: &FilterState) -> bool {
    state.sqft_range().contains(*sqft)
}

/// Points with an unusable month never match an active date filter.
pub fn trend_matches(point: &TrendPoint, state: &FilterState) -> bool {
    point
        .year_month()
        .is_some_and(|month| state.date_range().contains(&month))
}

/// Dim every category except the selected one; nothing is dimmed without a selection.
pub fn bedroom_emphasis(state: &FilterState, category: BedroomCategory) -> Emphasis {
    emphasis(
        state,
        state
            .bedroom_category()
            .map_or(true, |selected| selected == category),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{ChartId, FilterUpdate, MonthRange, NumericRange};
    use crate::filtered_view;

    const SCATTER: ChartId = ChartId::new("scatter-chart");
    const PRICE_CHART: ChartId = ChartId::new("price-chart");
    const BEDROOM_CHART: ChartId = ChartId::new("bedroom-chart");
    const TRENDS: ChartId = ChartId::new("trends-chart");

    fn sale(price: f64, sqft: f64, category: &str) -> ScatterPoint {
        ScatterPoint {
            price,
            sqft_living: sqft,
            bedroom_category: category.to_string(),
        }
    }

    fn trend(year: i32, month: u32) -> TrendPoint {
        TrendPoint {
            year,
            month,
            average_price: 500_000.0,
            median_sqft: 1_900.0,
            average_price_per_sqft: 260.0,
            total_sales: 100,
        }
    }

    #[test]
    fn test_scatter_excludes_items_outside_price_band() {
        let sales = vec![
            sale(90_000.0, 900.0, "small"),
            sale(150_000.0, 1_200.0, "medium"),
            sale(299_999.0, 2_000.0, "large"),
            sale(650_000.0, 3_100.0, "large"),
        ];
        let mut state = FilterState::default();
        state.update_filters(
            FilterUpdate::new().price_range(NumericRange::new(100_000.0, 300_000.0)),
            PRICE_CHART,
        );

        let visible =
            filtered_view(&state, SCATTER, Some(&sales[..]), scatter_point_matches).unwrap();
        assert_eq!(visible.len(), 2);
        assert!(visible
            .iter()
            .all(|s| s.price >= 100_000.0 && s.price <= 300_000.0));

        let own = filtered_view(&state, PRICE_CHART, Some(&sales[..]), scatter_point_matches)
            .unwrap();
        assert_eq!(own.len(), sales.len());
    }

    #[test]
    fn test_scatter_category_filter() {
        let mut state = FilterState::default();
        state.update_filters(
            FilterUpdate::new().bedroom_category(Some(BedroomCategory::Medium)),
            BEDROOM_CHART,
        );
        assert!(scatter_point_matches(&sale(400_000.0, 1_500.0, "medium"), &state));
        assert!(!scatter_point_matches(&sale(400_000.0, 1_500.0, "large"), &state));
        assert!(!scatter_point_matches(&sale(400_000.0, 1_500.0, "unknown"), &state));
    }

    #[test]
    fn test_trend_date_range() {
        let mut state = FilterState::default();
        state.update_filters(
            FilterUpdate::new().date_range(MonthRange::new(
                "2021-02".parse().unwrap(),
                "2021-04".parse().unwrap(),
            )),
            ChartId::new("filter-panel"),
        );
        let points = vec![trend(2021, 1), trend(2021, 2), trend(2021, 4), trend(2021, 5)];
        let visible = filtered_view(&state, TRENDS, Some(&points[..]), trend_matches).unwrap();
        let months: Vec<u32> = visible.iter().map(|p| p.month).collect();
        assert_eq!(months, vec![2, 4]);
        assert!(!trend_matches(&trend(2021, 14), &state));
    }

    #[test]
    fn test_bedroom_emphasis() {
        let mut state = FilterState::default();
        assert_eq!(bedroom_emphasis(&state, BedroomCategory::Small), Emphasis::Normal);

        state.update_filters(
            FilterUpdate::new().bedroom_category(Some(BedroomCategory::Large)),
            BEDROOM_CHART,
        );
        assert_eq!(bedroom_emphasis(&state, BedroomCategory::Large), Emphasis::Normal);
        assert_eq!(bedroom_emphasis(&state, BedroomCategory::Small), Emphasis::Dimmed);
    }

    #[test]
    fn test_sqft_matches() {
        let mut state = FilterState::default();
        state.update_filters(
            FilterUpdate::new().sqft_range(NumericRange::new(1_000.0, 2_000.0)),
            ChartId::new("size-chart"),
        );
        assert!(sqft_matches(&1_000.0, &state));
        assert!(!sqft_matches(&2_000.1, &state));
    }
}
