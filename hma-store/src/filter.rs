//! Shared cross-filter state.
//!
//! A single [`FilterState`] describes the current selection across every
//! chart. It only changes through [`FilterState::update_filters`],
//! [`FilterState::clear_filters`] and [`FilterState::clear_source_chart`],
//! each of which takes `&mut self` and completes before any reader can
//! observe the value again.

use hma_housing::BedroomCategory;
use hma_utils::months::YearMonth;
use log::debug;
use std::collections::BTreeSet;
use std::fmt;

/// Stable identifier of a chart instance taking part in cross-filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChartId(&'static str);

impl ChartId {
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ChartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Inclusive numeric bounds. Callers keep `low <= high`; nothing here enforces it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericRange {
    pub low: f64,
    pub high: f64,
}

impl NumericRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Build a range from two bounds given in either order.
    pub fn ordered(a: f64, b: f64) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }
}

/// Inclusive month bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRange {
    pub start: YearMonth,
    pub end: YearMonth,
}

impl MonthRange {
    pub const fn new(start: YearMonth, end: YearMonth) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, month: &YearMonth) -> bool {
        *month >= self.start && *month <= self.end
    }
}

pub const DEFAULT_PRICE_RANGE: NumericRange = NumericRange::new(0.0, 2_000_000.0);
pub const DEFAULT_SQFT_RANGE: NumericRange = NumericRange::new(0.0, 10_000.0);
pub const DEFAULT_DATE_RANGE: MonthRange =
    MonthRange::new(YearMonth::of(2020, 1), YearMonth::of(2025, 12));

#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    price_range: NumericRange,
    sqft_range: NumericRange,
    bedroom_category: Option<BedroomCategory>,
    date_range: MonthRange,
    source_chart: Option<ChartId>,
    /// Point-level highlight ids. No chart produces these yet.
    selected_points: BTreeSet<String>,
    is_filtering: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            price_range: DEFAULT_PRICE_RANGE,
            sqft_range: DEFAULT_SQFT_RANGE,
            bedroom_category: None,
            date_range: DEFAULT_DATE_RANGE,
            source_chart: None,
            selected_points: BTreeSet::new(),
            is_filtering: false,
        }
    }
}

impl FilterState {
    pub fn price_range(&self) -> NumericRange {
        self.price_range
    }

    pub fn sqft_range(&self) -> NumericRange {
        self.sqft_range
    }

    pub fn bedroom_category(&self) -> Option<BedroomCategory> {
        self.bedroom_category
    }

    pub fn date_range(&self) -> MonthRange {
        self.date_range
    }

    pub fn source_chart(&self) -> Option<ChartId> {
        self.source_chart
    }

    pub fn selected_points(&self) -> &BTreeSet<String> {
        &self.selected_points
    }

    pub fn is_filtering(&self) -> bool {
        self.is_filtering
    }

    pub fn is_source(&self, chart: ChartId) -> bool {
        self.source_chart == Some(chart)
    }

    /// Merge the fields present in `update` and mark `source` as the origin.
    ///
    /// Fields absent from `update` keep their current value. Ranges are taken
    /// as given.
    pub fn update_filters(&mut self, update: FilterUpdate, source: ChartId) {
        let FilterUpdate {
            price_range,
            sqft_range,
            bedroom_category,
            date_range,
            selected_points,
        } = update;

        if let Some(range) = price_range {
            self.price_range = range;
        }
        if let Some(range) = sqft_range {
            self.sqft_range = range;
        }
        if let Some(category) = bedroom_category {
            self.bedroom_category = category;
        }
        if let Some(range) = date_range {
            self.date_range = range;
        }
        if let Some(points) = selected_points {
            self.selected_points = points;
        }
        self.source_chart = Some(source);
        self.is_filtering = true;
        debug!("filters updated by {}: {}", source, self.describe());
    }

    /// Reset everything to the defaults, including `is_filtering`.
    pub fn clear_filters(&mut self) {
        *self = Self::default();
        debug!("filters cleared");
    }

    /// Drop the source marker while keeping every bound.
    pub fn clear_source_chart(&mut self) {
        self.source_chart = None;
    }
}

/// Typed partial update for [`FilterState`]; `None` leaves a field untouched.
///
/// `bedroom_category` has two levels: `Some(None)` clears the category filter,
/// `None` keeps whatever is set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterUpdate {
    pub price_range: Option<NumericRange>,
    pub sqft_range: Option<NumericRange>,
    pub bedroom_category: Option<Option<BedroomCategory>>,
    pub date_range: Option<MonthRange>,
    pub selected_points: Option<BTreeSet<String>>,
}

impl FilterUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn price_range(mut self, range: NumericRange) -> Self {
        self.price_range = Some(range);
        self
    }

    pub fn sqft_range(mut self, range: NumericRange) -> Self {
        self.sqft_range = Some(range);
        self
    }

    pub fn bedroom_category(mut self, category: Option<BedroomCategory>) -> Self {
        self.bedroom_category = Some(category);
        self
    }

    pub fn date_range(mut self, range: MonthRange) -> Self {
        self.date_range = Some(range);
        self
    }

    pub fn selected_points(mut self, points: BTreeSet<String>) -> Self {
        self.selected_points = Some(points);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRICE_CHART: ChartId = ChartId::new("price-chart");
    const BEDROOM_CHART: ChartId = ChartId::new("bedroom-chart");

    fn month(s: &str) -> YearMonth {
        s.parse().unwrap()
    }

    #[test]
    fn test_defaults() {
        let state = FilterState::default();
        assert_eq!(state.price_range(), NumericRange::new(0.0, 2_000_000.0));
        assert_eq!(state.sqft_range(), NumericRange::new(0.0, 10_000.0));
        assert_eq!(state.bedroom_category(), None);
        assert_eq!(state.date_range().start.to_string(), "2020-01");
        assert_eq!(state.date_range().end.to_string(), "2025-12");
        assert_eq!(state.source_chart(), None);
        assert!(state.selected_points().is_empty());
        assert!(!state.is_filtering());
    }

    #[test]
    fn test_update_merges_only_present_fields() {
        let mut state = FilterState::default();
        let before = state.clone();

        state.update_filters(
            FilterUpdate::new().price_range(NumericRange::new(100_000.0, 300_000.0)),
            PRICE_CHART,
        );

        assert_eq!(state.price_range(), NumericRange::new(100_000.0, 300_000.0));
        assert_eq!(state.source_chart(), Some(PRICE_CHART));
        assert!(state.is_filtering());
        assert_eq!(state.sqft_range(), before.sqft_range());
        assert_eq!(state.bedroom_category(), before.bedroom_category());
        assert_eq!(state.date_range(), before.date_range());
        assert_eq!(state.selected_points(), before.selected_points());
    }

    #[test]
    fn test_empty_update_still_marks_source() {
        let mut state = FilterState::default();
        state.update_filters(FilterUpdate::new(), BEDROOM_CHART);
        assert!(state.is_filtering());
        assert!(state.is_source(BEDROOM_CHART));
        assert_eq!(state.price_range(), DEFAULT_PRICE_RANGE);
    }

    #[test]
    fn test_update_does_not_validate_ranges() {
        let mut state = FilterState::default();
        state.update_filters(
            FilterUpdate::new().sqft_range(NumericRange::new(5_000.0, 1_000.0)),
            PRICE_CHART,
        );
        assert_eq!(state.sqft_range().low, 5_000.0);
        assert_eq!(state.sqft_range().high, 1_000.0);
    }

    #[test]
    fn test_bedroom_category_toggle() {
        let mut state = FilterState::default();
        state.update_filters(
            FilterUpdate::new().sqft_range(NumericRange::new(800.0, 2_400.0)),
            PRICE_CHART,
        );
        state.update_filters(
            FilterUpdate::new().bedroom_category(Some(BedroomCategory::Medium)),
            BEDROOM_CHART,
        );
        assert_eq!(state.bedroom_category(), Some(BedroomCategory::Medium));

        state.update_filters(FilterUpdate::new().bedroom_category(None), BEDROOM_CHART);
        assert_eq!(state.bedroom_category(), None);
        assert!(state.is_filtering());
        assert_eq!(state.sqft_range(), NumericRange::new(800.0, 2_400.0));
        assert_eq!(state.source_chart(), Some(BEDROOM_CHART));
    }

    #[test]
    fn test_clear_filters_restores_defaults() {
        let mut state = FilterState::default();
        state.update_filters(
            FilterUpdate::new()
                .price_range(NumericRange::new(1.0, 2.0))
                .sqft_range(NumericRange::new(3.0, 4.0))
                .bedroom_category(Some(BedroomCategory::Large))
                .date_range(MonthRange::new(month("2021-01"), month("2021-06")))
                .selected_points(BTreeSet::from(["a".to_string()])),
            PRICE_CHART,
        );
        state.clear_filters();
        assert_eq!(state, FilterState::default());
        assert!(!state.is_filtering());
        assert_eq!(state.source_chart(), None);
    }

    #[test]
    fn test_clear_source_chart_keeps_bounds() {
        let mut state = FilterState::default();
        state.update_filters(
            FilterUpdate::new().price_range(NumericRange::new(100_000.0, 300_000.0)),
            PRICE_CHART,
        );
        state.clear_source_chart();
        assert_eq!(state.source_chart(), None);
        assert!(state.is_filtering());
        assert_eq!(state.price_range(), NumericRange::new(100_000.0, 300_000.0));
    }

    #[test]
    fn test_ranges_are_inclusive() {
        let range = NumericRange::ordered(300_000.0, 100_000.0);
        assert_eq!(range, NumericRange::new(100_000.0, 300_000.0));
        assert!(range.contains(100_000.0));
        assert!(range.contains(300_000.0));
        assert!(!range.contains(300_000.5));

        let months = MonthRange::new(month("2021-03"), month("2021-05"));
        assert!(months.contains(&month("2021-03")));
        assert!(months.contains(&month("2021-05")));
        assert!(!months.contains(&month("2021-06")));
    }
}
