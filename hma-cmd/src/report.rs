//! Plain-text reports for the summary, bedroom, trend and scatter datasets.

use std::fmt::Write;

use hma_housing::client::HousingClient;
use hma_housing::{BedroomCategory, BedroomCounts, FilterQuery, ScatterPoints, Summary, Trends};
use hma_utils::format::{currency, group_thousands, percent, sqft};
use log::info;

pub async fn run_summary(client: &HousingClient, query: &FilterQuery) -> anyhow::Result<()> {
    info!("Fetching summary from {}{}", client.base_url(), query.to_query_string());
    let summary: Summary = client.fetch_filtered(query).await?;
    print!("{}", render_summary(&summary));
    Ok(())
}

pub async fn run_bedrooms(client: &HousingClient, query: &FilterQuery) -> anyhow::Result<()> {
    let counts: BedroomCounts = client.fetch_filtered(query).await?;
    info!("Fetched bedroom counts for {} sales", counts.total);
    print!("{}", render_bedrooms(&counts));
    Ok(())
}

pub async fn run_trends(client: &HousingClient, query: &FilterQuery) -> anyhow::Result<()> {
    let trends: Trends = client.fetch_filtered(query).await?;
    info!("Fetched {} monthly points", trends.points().len());
    print!("{}", render_trends(&trends));
    Ok(())
}

pub async fn run_scatter(
    client: &HousingClient,
    query: &FilterQuery,
    limit: usize,
) -> anyhow::Result<()> {
    let sales: ScatterPoints = client.fetch_filtered(query).await?;
    info!("Fetched {} sales", sales.points().len());
    print!("{}", render_scatter(&sales, limit));
    Ok(())
}

pub fn render_summary(summary: &Summary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<16}{:>14}", "Average price", currency(summary.average_price));
    let _ = writeln!(out, "{:<16}{:>14}", "Median size", sqft(summary.median_sqft));
    let _ = writeln!(
        out,
        "{:<16}{:>14}",
        "Total sales",
        group_thousands(summary.total_sales as f64)
    );
    out
}

pub fn render_bedrooms(counts: &BedroomCounts) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<12}{:>10}{:>8}", "Bedrooms", "Sales", "Share");
    for category in BedroomCategory::ALL {
        let _ = writeln!(
            out,
            "{:<12}{:>10}{:>8}",
            category.label(),
            group_thousands(counts.count(category) as f64),
            percent(counts.share(category))
        );
    }
    out
}

pub fn render_trends(trends: &Trends) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<9}{:>14}{:>14}{:>10}{:>8}",
        "Month", "Avg price", "Median size", "$/sqft", "Sales"
    );
    for point in trends.points() {
        let month = match point.year_month() {
            Some(ym) => ym.to_string(),
            None => format!("{}-{:02}?", point.year, point.month),
        };
        let _ = writeln!(
            out,
            "{:<9}{:>14}{:>14}{:>10}{:>8}",
            month,
            currency(point.average_price),
            sqft(point.median_sqft),
            currency(point.average_price_per_sqft),
            point.total_sales
        );
    }
    out
}

/// First `limit` sales, followed by a count of the ones left out.
pub fn render_scatter(sales: &ScatterPoints, limit: usize) -> String {
    let points = sales.points();
    let mut out = String::new();
    let _ = writeln!(out, "{:>14}{:>14}  {}", "Price", "Living area", "Bedrooms");
    for point in points.iter().take(limit) {
        let _ = writeln!(
            out,
            "{:>14}{:>14}  {}",
            currency(point.price),
            sqft(point.sqft_living),
            point.bedroom_category
        );
    }
    if points.len() > limit {
        let _ = writeln!(out, "... {} more", points.len() - limit);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hma_housing::{ScatterPoint, TrendPoint};

    #[test]
    fn test_summary_report() {
        let report = render_summary(&Summary {
            average_price: 540_088.14,
            median_sqft: 1_910.0,
            total_sales: 21_613,
        });
        assert!(report.contains("$540,088"));
        assert!(report.contains("1,910 sqft"));
        assert!(report.contains("21,613"));
    }

    #[test]
    fn test_bedroom_report_lists_every_category() {
        let report = render_bedrooms(&BedroomCounts {
            small: 25,
            medium: 50,
            large: 25,
            total: 100,
        });
        assert_eq!(report.lines().count(), 4);
        assert!(report.contains("Medium"));
        assert!(report.contains("50.0%"));
    }

    #[test]
    fn test_trend_report_flags_bad_month() {
        let point = |month| TrendPoint {
            year: 2014,
            month,
            average_price: 500_000.0,
            median_sqft: 1_900.0,
            average_price_per_sqft: 260.0,
            total_sales: 1_200,
        };
        let report = render_trends(&Trends(vec![point(5), point(13)]));
        assert!(report.contains("2014-05"));
        assert!(report.contains("2014-13?"));
    }

    #[test]
    fn test_scatter_report_truncates() {
        let sales = ScatterPoints(
            (0..5)
                .map(|i| ScatterPoint {
                    price: 300_000.0 + i as f64 * 10_000.0,
                    sqft_living: 1_500.0,
                    bedroom_category: "medium".to_string(),
                })
                .collect(),
        );
        let report = render_scatter(&sales, 2);
        assert_eq!(report.lines().count(), 4);
        assert!(report.ends_with("... 3 more\n"));
        assert!(render_scatter(&sales, 10).lines().all(|l| !l.starts_with("...")));
    }
}
