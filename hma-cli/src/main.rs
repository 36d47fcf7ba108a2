//! HMA CLI - Command line tool for the housing analytics service.

use std::time::Duration;

use clap::Parser;
use log::debug;

#[derive(Parser)]
#[command(
    name = "hma-cli",
    version,
    about = "Housing market analytics toolkit"
)]
struct Cli {
    /// Base URL of the housing service
    #[arg(long, env = "HOUSING_API_URL", default_value = "http://localhost:8000", global = true)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30, global = true)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: hma_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    debug!("Using {} with a {}s timeout", cli.base_url, cli.timeout_secs);
    let client = hma_cmd::connect(&cli.base_url, Duration::from_secs(cli.timeout_secs))?;
    hma_cmd::run(cli.command, &client).await
}
