//! Client-side aggregation for the housing charts.
//!
//! Raw distributions arrive as plain arrays of numbers; this crate bins them
//! into histogram buckets, turns brush gestures back into domain ranges and
//! maps domain values onto SVG coordinates.

/// Equal-width histogram binning
pub mod histogram {
    use hma_utils::format::{price_bucket_label, sqft_bucket_label};
    use log::debug;

    /// Bucket count of the price histogram.
    pub const DEFAULT_PRICE_BINS: usize = 20;
    /// Bucket count of the living-area histogram.
    pub const DEFAULT_SIZE_BINS: usize = 30;

    /// How bucket bounds are rendered in labels.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum BucketLabel {
        /// `$50k - $95k`
        Price,
        /// `1,000–1,500 sqft`
        Sqft,
    }

    impl BucketLabel {
        pub fn format(&self, lower: f64, upper: f64) -> String {
            match self {
                BucketLabel::Price => price_bucket_label(lower, upper),
                BucketLabel::Sqft => sqft_bucket_label(lower, upper),
            }
        }
    }

    /// One histogram bar covering `[lower, upper)`; the last bucket also
    /// includes `upper`.
    #[derive(Debug, Clone, PartialEq)]
    pub struct Bucket {
        pub lower: f64,
        pub upper: f64,
        pub count: usize,
        pub label: String,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct CumulativeBucket {
        pub bucket: Bucket,
        /// Share of all values in this bucket or an earlier one, `0..=100`.
        pub cumulative_percent: f64,
    }

    /// Bin `values` into `bin_count` equal-width buckets spanning `[min, max]`.
    ///
    /// Non-finite values are skipped. Returns no buckets when nothing finite
    /// remains or `bin_count` is zero. When every value is equal the width is
    /// zero and the whole count lands in bucket 0.
    pub fn histogram(values: &[f64], bin_count: usize, labeler: BucketLabel) -> Vec<Bucket> {
        if bin_count == 0 {
            return Vec::new();
        }
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        let Some((min, max)) = bounds(&finite) else {
            return Vec::new();
        };

        let width = (max - min) / bin_count as f64;
        let lower_of = |i: usize| min + width * i as f64;
        let upper_of = |i: usize| {
            if i + 1 == bin_count {
                max
            } else {
                lower_of(i + 1)
            }
        };

        let mut counts = vec![0usize; bin_count];
        for &value in &finite {
            counts[bucket_index(value, min, width, bin_count, &lower_of)] += 1;
        }

        debug!(
            "binned {} values into {} buckets over [{}, {}]",
            finite.len(),
            bin_count,
            min,
            max
        );

        counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| {
                let (lower, upper) = (lower_of(i), upper_of(i));
                Bucket {
                    lower,
                    upper,
                    count,
                    label: labeler.format(lower, upper),
                }
            })
            .collect()
    }

    /// [`histogram`] plus the running percentage of the total, in bin order.
    pub fn cumulative_histogram(
        values: &[f64],
        bin_count: usize,
        labeler: BucketLabel,
    ) -> Vec<CumulativeBucket> {
        let buckets = histogram(values, bin_count, labeler);
        let total: usize = buckets.iter().map(|b| b.count).sum();
        let mut running = 0usize;
        buckets
            .into_iter()
            .map(|bucket| {
                running += bucket.count;
                let cumulative_percent = if total == 0 {
                    0.0
                } else {
                    running as f64 / total as f64 * 100.0
                };
                CumulativeBucket {
                    bucket,
                    cumulative_percent,
                }
            })
            .collect()
    }

    fn bounds(values: &[f64]) -> Option<(f64, f64)> {
        let first = *values.first()?;
        Some(
            values
                .iter()
                .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
        )
    }

    /// `floor((value - min) / width)` clamped to the last bucket, then nudged so
    /// the value really lies within the bounds reported for that bucket.
    fn bucket_index(
        value: f64,
        min: f64,
        width: f64,
        bin_count: usize,
        lower_of: &impl Fn(usize) -> f64,
    ) -> usize {
        if width <= 0.0 {
            return 0;
        }
        let last = bin_count - 1;
        let mut index = (((value - min) / width).floor().max(0.0) as usize).min(last);
        if index < last && value >= lower_of(index + 1) {
            index += 1;
        } else if index > 0 && value < lower_of(index) {
            index -= 1;
        }
        index
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use proptest::prelude::*;

        /// 1000 values spread evenly over `[50_000, 950_000]`.
        fn spread_prices() -> Vec<f64> {
            (0..1000)
                .map(|i| 50_000.0 + 900_000.0 * i as f64 / 999.0)
                .collect()
        }

        #[test]
        fn test_empty_input() {
            assert!(histogram(&[], 20, BucketLabel::Price).is_empty());
            assert!(cumulative_histogram(&[], 30, BucketLabel::Sqft).is_empty());
        }

        #[test]
        fn test_zero_bins() {
            assert!(histogram(&[1.0, 2.0], 0, BucketLabel::Price).is_empty());
        }

        #[test]
        fn test_price_buckets_end_to_end() {
            let buckets = histogram(&spread_prices(), 20, BucketLabel::Price);
            assert_eq!(buckets.len(), 20);

            assert_eq!(buckets[0].lower, 50_000.0);
            assert_eq!(buckets[0].upper, 95_000.0);
            assert_eq!(buckets[0].label, "$50k - $95k");

            assert_eq!(buckets[19].lower, 905_000.0);
            assert_eq!(buckets[19].upper, 950_000.0);
            assert!(buckets[19].count > 0);

            let total: usize = buckets.iter().map(|b| b.count).sum();
            assert_eq!(total, 1000);
        }

        #[test]
        fn test_max_lands_in_last_bucket() {
            let buckets = histogram(&[0.0, 10.0], 5, BucketLabel::Sqft);
            assert_eq!(buckets[0].count, 1);
            assert_eq!(buckets[4].count, 1);
            assert_eq!(buckets[4].label, "8–10 sqft");
        }

        #[test]
        fn test_identical_values() {
            let buckets = histogram(&[1_500.0; 4], 30, BucketLabel::Sqft);
            assert_eq!(buckets.len(), 30);
            assert_eq!(buckets[0].count, 4);
            assert!(buckets[1..].iter().all(|b| b.count == 0));
            assert!(buckets.iter().all(|b| b.lower == 1_500.0 && b.upper == 1_500.0));
        }

        #[test]
        fn test_single_value() {
            let buckets = histogram(&[420_000.0], 20, BucketLabel::Price);
            assert_eq!(buckets.len(), 20);
            assert_eq!(buckets[0].count, 1);
        }

        #[test]
        fn test_non_finite_values_are_ignored() {
            let buckets = histogram(&[f64::NAN, 1.0, f64::INFINITY, 3.0], 2, BucketLabel::Sqft);
            let total: usize = buckets.iter().map(|b| b.count).sum();
            assert_eq!(total, 2);
            assert_eq!(buckets[0].lower, 1.0);
            assert_eq!(buckets[1].upper, 3.0);
            assert!(histogram(&[f64::NAN], 3, BucketLabel::Sqft).is_empty());
        }

        #[test]
        fn test_cumulative_percent() {
            let values = [1.0, 1.0, 2.0, 4.0];
            let buckets = cumulative_histogram(&values, 3, BucketLabel::Sqft);
            let percents: Vec<f64> = buckets.iter().map(|b| b.cumulative_percent).collect();
            assert_eq!(percents, vec![50.0, 75.0, 100.0]);
        }

        proptest! {
            #[test]
            fn prop_bucket_layout(
                values in prop::collection::vec(-1.0e7f64..1.0e7, 1..400),
                bins in 1usize..60,
            ) {
                let buckets = histogram(&values, bins, BucketLabel::Price);
                prop_assert_eq!(buckets.len(), bins);

                let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
                let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
                prop_assert_eq!(buckets[0].lower, min);
                prop_assert_eq!(buckets[bins - 1].upper, max);
                for pair in buckets.windows(2) {
                    prop_assert_eq!(pair[0].upper, pair[1].lower);
                    prop_assert!(pair[0].lower <= pair[0].upper);
                }

                let total: usize = buckets.iter().map(|b| b.count).sum();
                prop_assert_eq!(total, values.len());
            }

            #[test]
            fn prop_every_value_is_inside_its_bucket(
                values in prop::collection::vec(0.0f64..2.0e6, 1..200),
                bins in 1usize..40,
            ) {
                let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
                let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
                prop_assume!(max > min);

                let buckets = histogram(&values, bins, BucketLabel::Price);
                let last = buckets.len() - 1;
                let mut recount = vec![0usize; buckets.len()];
                for v in &values {
                    let hits: Vec<usize> = buckets
                        .iter()
                        .enumerate()
                        .filter(|(i, b)| {
                            if *i == last {
                                *v >= b.lower && *v <= b.upper
                            } else {
                                *v >= b.lower && *v < b.upper
                            }
                        })
                        .map(|(i, _)| i)
                        .collect();
                    prop_assert_eq!(hits.len(), 1);
                    recount[hits[0]] += 1;
                }
                let counts: Vec<usize> = buckets.iter().map(|b| b.count).collect();
                prop_assert_eq!(counts, recount);
            }

            #[test]
            fn prop_cumulative_is_monotone(
                values in prop::collection::vec(0.0f64..1.0e4, 1..200),
                bins in 1usize..40,
            ) {
                let buckets = cumulative_histogram(&values, bins, BucketLabel::Sqft);
                for pair in buckets.windows(2) {
                    prop_assert!(pair[0].cumulative_percent <= pair[1].cumulative_percent);
                }
                let last = buckets[buckets.len() - 1].cumulative_percent;
                prop_assert!((last - 100.0).abs() < 1e-9);
            }
        }
    }
}

/// Turning brush and drag gestures into domain ranges
pub mod brush {
    use crate::histogram::Bucket;

    /// Domain range covered by buckets `a..=b`, given in either order.
    ///
    /// Indices past the end are clamped to the last bucket. Returns `None`
    /// when there are no buckets.
    pub fn resolve_bucket_range(buckets: &[Bucket], a: usize, b: usize) -> Option<(f64, f64)> {
        let last = buckets.len().checked_sub(1)?;
        let (start, end) = (a.min(b).min(last), a.max(b).min(last));
        Some((buckets[start].lower, buckets[end].upper))
    }

    /// Keys of the first and last point selected on a point series.
    pub fn resolve_point_span<T, K, F>(items: &[T], a: usize, b: usize, key: F) -> Option<(K, K)>
    where
        F: Fn(&T) -> K,
    {
        let last = items.len().checked_sub(1)?;
        let (start, end) = (a.min(b).min(last), a.max(b).min(last));
        Some((key(&items[start]), key(&items[end])))
    }

    /// Axis-aligned selection in domain coordinates.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct SelectionRect {
        pub min_x: f64,
        pub max_x: f64,
        pub min_y: f64,
        pub max_y: f64,
    }

    /// An in-progress drag, from pointer-down to the latest pointer position.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct DragSelection {
        origin: (f64, f64),
        current: (f64, f64),
    }

    impl DragSelection {
        pub fn start(x: f64, y: f64) -> Self {
            Self {
                origin: (x, y),
                current: (x, y),
            }
        }

        pub fn move_to(&mut self, x: f64, y: f64) {
            self.current = (x, y);
        }

        pub fn origin(&self) -> (f64, f64) {
            self.origin
        }

        pub fn current(&self) -> (f64, f64) {
            self.current
        }

        /// Rectangle spanned so far, whatever the drag direction.
        pub fn rect(&self) -> SelectionRect {
            SelectionRect {
                min_x: self.origin.0.min(self.current.0),
                max_x: self.origin.0.max(self.current.0),
                min_y: self.origin.1.min(self.current.1),
                max_y: self.origin.1.max(self.current.1),
            }
        }

        /// Final selection on pointer-up. A click without movement along both
        /// axes selects nothing.
        pub fn finish(self) -> Option<SelectionRect> {
            let rect = self.rect();
            (rect.max_x > rect.min_x && rect.max_y > rect.min_y).then_some(rect)
        }
    }

}

/// Domain to pixel mapping for the SVG charts
pub mod scale {
    /// Continuous linear mapping from `domain` onto `range`.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct LinearScale {
        domain: (f64, f64),
        range: (f64, f64),
    }

    impl LinearScale {
        pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
            Self { domain, range }
        }

        /// Scale over the extent of `values`, or `(0, 1)` when there is none.
        pub fn fit<I>(values: I, range: (f64, f64)) -> Self
        where
            I: IntoIterator<Item = f64>,
        {
            let domain = values
                .into_iter()
                .filter(|v| v.is_finite())
                .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                    None => Some((v, v)),
                    Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
                })
                .unwrap_or((0.0, 1.0));
            Self::new(domain, range)
        }

        pub fn domain(&self) -> (f64, f64) {
            self.domain
        }

        pub fn range(&self) -> (f64, f64) {
            self.range
        }

        /// A collapsed domain maps everything to the middle of the range.
        pub fn map(&self, value: f64) -> f64 {
            let (d0, d1) = self.domain;
            let (r0, r1) = self.range;
            if d1 == d0 {
                return (r0 + r1) / 2.0;
            }
            r0 + (value - d0) / (d1 - d0) * (r1 - r0)
        }

        pub fn invert(&self, pixel: f64) -> f64 {
            let (d0, d1) = self.domain;
            let (r0, r1) = self.range;
            if r1 == r0 {
                return d0;
            }
            d0 + (pixel - r0) / (r1 - r0) * (d1 - d0)
        }

        /// Evenly spaced domain values including both ends.
        pub fn ticks(&self, count: usize) -> Vec<f64> {
            let (d0, d1) = self.domain;
            match count {
                0 => Vec::new(),
                1 => vec![d0],
                _ => (0..count)
                    .map(|i| d0 + (d1 - d0) * i as f64 / (count - 1) as f64)
                    .collect(),
            }
        }
    }

    /// `count` equal bands laid side by side over a pixel range.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct BandScale {
        count: usize,
        start: f64,
        end: f64,
    }

    impl BandScale {
        pub fn new(count: usize, start: f64, end: f64) -> Self {
            Self { count, start, end }
        }

        pub fn band_width(&self) -> f64 {
            if self.count == 0 {
                0.0
            } else {
                (self.end - self.start) / self.count as f64
            }
        }

        /// Left edge of band `index`.
        pub fn position(&self, index: usize) -> f64 {
            self.start + self.band_width() * index as f64
        }

        /// Centre of band `index`.
        pub fn center(&self, index: usize) -> f64 {
            self.position(index) + self.band_width() / 2.0
        }

        /// Band under `pixel`, clamped to the ends; `None` when there are no bands.
        pub fn index_at(&self, pixel: f64) -> Option<usize> {
            let width = self.band_width();
            if self.count == 0 || width <= 0.0 {
                return None;
            }
            let raw = ((pixel - self.start) / width).floor();
            Some((raw.max(0.0) as usize).min(self.count - 1))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_linear_map_and_invert() {
            let scale = LinearScale::new((0.0, 2_000_000.0), (0.0, 400.0));
            assert_eq!(scale.map(1_000_000.0), 200.0);
            assert_eq!(scale.invert(100.0), 500_000.0);
        }

        #[test]
        fn test_inverted_pixel_range() {
            // SVG y grows downwards
            let scale = LinearScale::new((0.0, 100.0), (300.0, 0.0));
            assert_eq!(scale.map(0.0), 300.0);
            assert_eq!(scale.map(100.0), 0.0);
            assert_eq!(scale.invert(150.0), 50.0);
        }

        #[test]
        fn test_fit_and_degenerate_domain() {
            let scale = LinearScale::fit([5.0, f64::NAN, 1.0, 3.0], (0.0, 10.0));
            assert_eq!(scale.domain(), (1.0, 5.0));

            let flat = LinearScale::fit([7.0, 7.0], (0.0, 10.0));
            assert_eq!(flat.map(7.0), 5.0);

            let empty = LinearScale::fit(Vec::<f64>::new(), (0.0, 10.0));
            assert_eq!(empty.domain(), (0.0, 1.0));
        }

        #[test]
        fn test_ticks() {
            let scale = LinearScale::new((0.0, 100.0), (0.0, 1.0));
            assert_eq!(scale.ticks(5), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
            assert!(scale.ticks(0).is_empty());
        }

        #[test]
        fn test_band_index_at() {
            let bands = BandScale::new(20, 40.0, 440.0);
            assert_eq!(bands.band_width(), 20.0);
            assert_eq!(bands.index_at(40.0), Some(0));
            assert_eq!(bands.index_at(75.0), Some(1));
            assert_eq!(bands.index_at(10.0), Some(0));
            assert_eq!(bands.index_at(1_000.0), Some(19));
            assert_eq!(bands.center(0), 50.0);
            assert_eq!(BandScale::new(0, 0.0, 100.0).index_at(5.0), None);
        }
    }
}
