//! Command implementations for the housing analytics CLI.
//!
//! Every subcommand talks to the same service as the dashboard and accepts the
//! same server-side filters, so a terminal session can reproduce what a
//! filtered dashboard shows.

use std::time::Duration;

use clap::Subcommand;
use hma_housing::client::HousingClient;

pub mod distribution;
pub mod filters;
pub mod report;

pub use distribution::DistributionKind;
pub use filters::FilterArgs;

#[derive(Subcommand)]
pub enum Command {
    /// Print the headline metrics (average price, median size, total sales)
    Summary {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Print sales per bedroom category with their share of the total
    Bedrooms {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Print the monthly average price table
    Trends {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Print individual sales from the scatter dataset
    Scatter {
        /// Maximum number of sales to print
        #[arg(short, long, default_value_t = 20)]
        limit: usize,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Bin a price or living-area distribution and print the buckets
    Histogram {
        /// Which distribution to bin
        #[arg(short, long, value_enum)]
        dataset: DistributionKind,

        /// Bucket count (20 for price, 30 for size when omitted)
        #[arg(short, long)]
        bins: Option<usize>,

        /// Also print the running percentage of sales
        #[arg(short, long)]
        cumulative: bool,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Write histogram buckets with cumulative percentages to a CSV file
    Export {
        /// Which distribution to bin
        #[arg(short, long, value_enum)]
        dataset: DistributionKind,

        /// Bucket count (20 for price, 30 for size when omitted)
        #[arg(short, long)]
        bins: Option<usize>,

        /// Output path for the bucket CSV
        #[arg(short, long)]
        output: String,

        #[command(flatten)]
        filters: FilterArgs,
    },
}

/// Client for `base_url` whose requests give up after `timeout`.
pub fn connect(base_url: &str, timeout: Duration) -> anyhow::Result<HousingClient> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    Ok(HousingClient::with_client(client, base_url))
}

pub async fn run(command: Command, client: &HousingClient) -> anyhow::Result<()> {
    match command {
        Command::Summary { filters } => report::run_summary(client, &filters.to_query()).await,
        Command::Bedrooms { filters } => report::run_bedrooms(client, &filters.to_query()).await,
        Command::Trends { filters } => report::run_trends(client, &filters.to_query()).await,
        Command::Scatter { limit, filters } => {
            report::run_scatter(client, &filters.to_query(), limit).await
        }
        Command::Histogram {
            dataset,
            bins,
            cumulative,
            filters,
        } => {
            distribution::run_histogram(client, dataset, bins, cumulative, &filters.to_query())
                .await
        }
        Command::Export {
            dataset,
            bins,
            output,
            filters,
        } => distribution::run_export(client, dataset, bins, &filters.to_query(), &output).await,
    }
}
