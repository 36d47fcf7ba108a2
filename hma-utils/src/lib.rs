//! Shared utility functions for HMA crates.

/// Number formatting for labels, cards and tooltips
pub mod format {
    /// Insert `,` separators into the integer part of `value` (rounded).
    pub fn group_thousands(value: f64) -> String {
        let rounded = value.round();
        let digits = format!("{}", rounded.abs() as u64);
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        if rounded < 0.0 {
            format!("-{}", grouped)
        } else {
            grouped
        }
    }

    /// Format a dollar amount with no fractional digits, e.g. `$1,234,567`.
    pub fn currency(amount: f64) -> String {
        if amount < 0.0 && amount.round() != 0.0 {
            format!("-${}", group_thousands(-amount))
        } else {
            format!("${}", group_thousands(amount.abs()))
        }
    }

    /// Abbreviate large numbers: `1.2M`, `3.4K`, otherwise the plain value.
    pub fn compact(num: f64) -> String {
        if num >= 1_000_000.0 {
            format!("{:.1}M", num / 1_000_000.0)
        } else if num >= 1_000.0 {
            format!("{:.1}K", num / 1_000.0)
        } else {
            format!("{}", num)
        }
    }

    /// At most one decimal, without a trailing `.0`.
    fn trim_decimal(value: f64) -> String {
        let s = format!("{:.1}", value);
        match s.strip_suffix(".0") {
            Some(whole) => whole.to_string(),
            None => s,
        }
    }

    /// Dollar amount in thousands, e.g. `$95k`.
    pub fn thousands(amount: f64) -> String {
        format!("${}k", trim_decimal(amount / 1_000.0))
    }

    /// Histogram label for a price bucket, e.g. `$50k - $95k`.
    pub fn price_bucket_label(lower: f64, upper: f64) -> String {
        format!("{} - {}", thousands(lower), thousands(upper))
    }

    /// Histogram label for a square-footage bucket, e.g. `1,000–1,500 sqft`.
    pub fn sqft_bucket_label(lower: f64, upper: f64) -> String {
        format!("{}–{} sqft", group_thousands(lower), group_thousands(upper))
    }

    /// Living area, e.g. `2,150 sqft`.
    pub fn sqft(value: f64) -> String {
        format!("{} sqft", group_thousands(value))
    }

    /// Percentage with one decimal, e.g. `42.5%`.
    pub fn percent(value: f64) -> String {
        format!("{:.1}%", value)
    }

}

/// Calendar month helpers (`YYYY-MM` keys used by the date filter)
pub mod months {
    use chrono::{Datelike, NaiveDate};
    use serde::{Deserialize, Serialize};
    use std::fmt;
    use std::str::FromStr;

    /// A calendar month.
    ///
    /// Ordering is by year then month, which matches the lexicographic order
    /// of the zero-padded `YYYY-MM` form.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
    #[serde(try_from = "String", into = "String")]
    pub struct YearMonth {
        year: i32,
        month: u32,
    }

    impl YearMonth {
        /// Returns `None` when `month` is outside `1..=12`.
        pub fn new(year: i32, month: u32) -> Option<Self> {
            (1..=12).contains(&month).then_some(Self { year, month })
        }

        /// Const constructor for fixed months; an invalid month fails const evaluation.
        pub const fn of(year: i32, month: u32) -> Self {
            assert!(month >= 1 && month <= 12, "month must be in 1..=12");
            Self { year, month }
        }

        pub fn from_date(date: &NaiveDate) -> Self {
            Self {
                year: date.year(),
                month: date.month(),
            }
        }

        pub fn year(&self) -> i32 {
            self.year
        }

        pub fn month(&self) -> u32 {
            self.month
        }

        /// First day of the month.
        pub fn first_day(&self) -> Option<NaiveDate> {
            NaiveDate::from_ymd_opt(self.year, self.month, 1)
        }

        /// Axis tick label, e.g. `3/24`.
        pub fn short_label(&self) -> String {
            format!("{}/{:02}", self.month, self.year.rem_euclid(100))
        }
    }

    impl fmt::Display for YearMonth {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{:04}-{:02}", self.year, self.month)
        }
    }

    impl FromStr for YearMonth {
        type Err = anyhow::Error;

        /// Parse a `YYYY-MM` string.
        fn from_str(s: &str) -> anyhow::Result<Self> {
            let trimmed = s.trim();
            let date = NaiveDate::parse_from_str(&format!("{}-01", trimmed), "%Y-%m-%d")
                .map_err(|e| anyhow::anyhow!("invalid month '{}': {}", trimmed, e))?;
            Ok(Self::from_date(&date))
        }
    }

    impl TryFrom<String> for YearMonth {
        type Error = anyhow::Error;

        fn try_from(value: String) -> anyhow::Result<Self> {
            value.parse()
        }
    }

    impl From<YearMonth> for String {
        fn from(value: YearMonth) -> Self {
            value.to_string()
        }
    }

}
