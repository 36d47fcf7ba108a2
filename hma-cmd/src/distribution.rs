//! Histogram printing and CSV export for the price and living-area
//! distributions.

use std::io;

use clap::ValueEnum;
use hma_data::histogram::{
    cumulative_histogram, BucketLabel, CumulativeBucket, DEFAULT_PRICE_BINS, DEFAULT_SIZE_BINS,
};
use hma_housing::client::HousingClient;
use hma_housing::{FilterQuery, PriceDistribution, SizeDistribution};
use hma_utils::format::percent;
use log::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DistributionKind {
    /// Sale prices
    Price,
    /// Living area in sqft
    Size,
}

impl DistributionKind {
    pub fn default_bins(&self) -> usize {
        match self {
            DistributionKind::Price => DEFAULT_PRICE_BINS,
            DistributionKind::Size => DEFAULT_SIZE_BINS,
        }
    }

    fn labeler(&self) -> BucketLabel {
        match self {
            DistributionKind::Price => BucketLabel::Price,
            DistributionKind::Size => BucketLabel::Sqft,
        }
    }

    async fn fetch_values(
        &self,
        client: &HousingClient,
        query: &FilterQuery,
    ) -> anyhow::Result<Vec<f64>> {
        Ok(match self {
            DistributionKind::Price => client.fetch_filtered::<PriceDistribution>(query).await?.0,
            DistributionKind::Size => client.fetch_filtered::<SizeDistribution>(query).await?.0,
        })
    }
}

async fn fetch_buckets(
    client: &HousingClient,
    kind: DistributionKind,
    bins: Option<usize>,
    query: &FilterQuery,
) -> anyhow::Result<Vec<CumulativeBucket>> {
    let bins = bins.unwrap_or_else(|| kind.default_bins());
    if bins == 0 {
        anyhow::bail!("--bins must be at least 1");
    }
    let values = kind.fetch_values(client, query).await?;
    info!("Binning {} {:?} values into {} buckets", values.len(), kind, bins);
    let buckets = cumulative_histogram(&values, bins, kind.labeler());
    if buckets.is_empty() {
        warn!("No finite values returned; nothing to bin");
    }
    Ok(buckets)
}

pub async fn run_histogram(
    client: &HousingClient,
    kind: DistributionKind,
    bins: Option<usize>,
    cumulative: bool,
    query: &FilterQuery,
) -> anyhow::Result<()> {
    let buckets = fetch_buckets(client, kind, bins, query).await?;
    print!("{}", render_histogram(&buckets, cumulative));
    Ok(())
}

pub async fn run_export(
    client: &HousingClient,
    kind: DistributionKind,
    bins: Option<usize>,
    query: &FilterQuery,
    output: &str,
) -> anyhow::Result<()> {
    let buckets = fetch_buckets(client, kind, bins, query).await?;
    let mut contents = Vec::new();
    write_buckets(&mut contents, &buckets)?;
    tokio::fs::write(output, contents).await?;
    info!("Wrote {} buckets to {}", buckets.len(), output);
    Ok(())
}

/// One row per bucket with a bar scaled to the fullest bucket.
pub fn render_histogram(buckets: &[CumulativeBucket], cumulative: bool) -> String {
    const BAR_WIDTH: usize = 40;
    let max = buckets.iter().map(|b| b.bucket.count).max().unwrap_or(0);
    let label_width = buckets
        .iter()
        .map(|b| b.bucket.label.chars().count())
        .max()
        .unwrap_or(0);

    buckets
        .iter()
        .map(|b| {
            let bar = if max == 0 {
                0
            } else {
                (b.bucket.count * BAR_WIDTH).div_ceil(max)
            };
            let running = if cumulative {
                format!("  {:>6}", percent(b.cumulative_percent))
            } else {
                String::new()
            };
            format!(
                "{:<width$}  {:>6}{}  {}\n",
                b.bucket.label,
                b.bucket.count,
                running,
                "#".repeat(bar),
                width = label_width
            )
        })
        .collect()
}

/// Write `lower,upper,label,count,cumulative_percent` rows with a header.
pub fn write_buckets<W: io::Write>(writer: W, buckets: &[CumulativeBucket]) -> anyhow::Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["lower", "upper", "label", "count", "cumulative_percent"])?;
    for b in buckets {
        csv.write_record([
            b.bucket.lower.to_string(),
            b.bucket.upper.to_string(),
            b.bucket.label.clone(),
            b.bucket.count.to_string(),
            format!("{:.2}", b.cumulative_percent),
        ])?;
    }
    csv.flush()?;
    Ok(())
}
