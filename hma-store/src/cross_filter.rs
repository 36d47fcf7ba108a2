//! The cross-filter visibility rule.
//!
//! A chart never filters its own rendering because of its own gesture: it only
//! narrows its data when the current filter was produced somewhere else.

use crate::filter::{ChartId, FilterState};
use std::borrow::Cow;

/// Returns `data` untouched when it is absent, when no filter is active, or
/// when `chart` produced the current filter. Otherwise returns the items for
/// which `predicate` holds, in their original order.
pub fn filtered_view<'a, T, P>(
    state: &FilterState,
    chart: ChartId,
    data: Option<&'a [T]>,
    predicate: P,
) -> Option<Cow<'a, [T]>>
where
    T: Clone,
    P: Fn(&T, &FilterState) -> bool,
{
    let data = data?;
    if !state.is_filtering() || state.is_source(chart) {
        return Some(Cow::Borrowed(data));
    }
    Some(Cow::Owned(
        data.iter()
            .filter(|item| predicate(item, state))
            .cloned()
            .collect(),
    ))
}

/// Dimming for charts that keep every element on screen.
///
/// Nothing is dimmed while filtering is off. The source chart is not exempt:
/// dimming is how it shows its own selection.
pub fn emphasis(state: &FilterState, matches: bool) -> Emphasis {
    if state.is_filtering() {
        Emphasis::from_match(matches)
    } else {
        Emphasis::Normal
    }
}

/// Opacity-style suppression for charts that dim rather than remove elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Normal,
    Dimmed,
}

impl Emphasis {
    pub fn from_match(matches: bool) -> Self {
        if matches {
            Emphasis::Normal
        } else {
            Emphasis::Dimmed
        }
    }

    pub fn opacity(&self) -> f64 {
        match self {
            Emphasis::Normal => 1.0,
            Emphasis::Dimmed => 0.3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{FilterUpdate, NumericRange};
    use crate::predicates::price_matches;

    const CHART_A: ChartId = ChartId::new("chart-a");
    const CHART_B: ChartId = ChartId::new("chart-b");

    fn prices() -> Vec<f64> {
        vec![80_000.0, 100_000.0, 250_000.0, 300_000.0, 450_000.0]
    }

    #[test]
    fn test_absent_data_stays_absent() {
        let state = FilterState::default();
        let view = filtered_view::<f64, _>(&state, CHART_A, None, price_matches);
        assert!(view.is_none());
    }

    #[test]
    fn test_inactive_filter_borrows_data() {
        let state = FilterState::default();
        let data = prices();
        let view = filtered_view(&state, CHART_B, Some(&data[..]), |_: &f64, _| false).unwrap();
        assert!(matches!(view, Cow::Borrowed(_)));
        assert_eq!(view.len(), data.len());
    }

    #[test]
    fn test_source_chart_sees_unfiltered_data() {
        let mut state = FilterState::default();
        state.update_filters(
            FilterUpdate::new().price_range(NumericRange::new(100_000.0, 300_000.0)),
            CHART_A,
        );
        let data = prices();

        let own = filtered_view(&state, CHART_A, Some(&data[..]), price_matches).unwrap();
        assert!(matches!(own, Cow::Borrowed(_)));
        assert_eq!(own.as_ref(), &data[..]);

        let other = filtered_view(&state, CHART_B, Some(&data[..]), price_matches).unwrap();
        assert_eq!(other.as_ref(), &[100_000.0, 250_000.0, 300_000.0]);
    }

    #[test]
    fn test_released_source_is_filtered_too() {
        let mut state = FilterState::default();
        state.update_filters(
            FilterUpdate::new().price_range(NumericRange::new(100_000.0, 300_000.0)),
            CHART_A,
        );
        state.clear_source_chart();
        let data = prices();
        let own = filtered_view(&state, CHART_A, Some(&data[..]), price_matches).unwrap();
        assert_eq!(own.len(), 3);
    }

    #[test]
    fn test_emphasis_ignores_inactive_filter() {
        let mut state = FilterState::default();
        assert_eq!(emphasis(&state, false), Emphasis::Normal);
        state.update_filters(FilterUpdate::new(), CHART_A);
        assert_eq!(emphasis(&state, false), Emphasis::Dimmed);
        assert_eq!(emphasis(&state, true), Emphasis::Normal);
    }

    #[test]
    fn test_emphasis_opacity() {
        assert_eq!(Emphasis::from_match(true).opacity(), 1.0);
        assert_eq!(Emphasis::from_match(false).opacity(), 0.3);
    }
}
