//! Dashboard configuration.

use hma_data::histogram::{DEFAULT_PRICE_BINS, DEFAULT_SIZE_BINS};
use hma_housing::client::DEFAULT_BASE_URL;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Base URL of the housing service, without a trailing `/`.
    pub api_base_url: String,
    pub price_bins: usize,
    pub size_bins: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            price_bins: DEFAULT_PRICE_BINS,
            size_bins: DEFAULT_SIZE_BINS,
        }
    }
}

impl DashboardConfig {
    /// Defaults, with the base URL taken from `HOUSING_API_URL` at build time
    /// when it was set.
    pub fn from_env() -> Self {
        Self::with_base_url(option_env!("HOUSING_API_URL"))
    }

    fn with_base_url(base_url: Option<&str>) -> Self {
        match base_url.map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => Self {
                api_base_url: url.trim_end_matches('/').to_string(),
                ..Self::default()
            },
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.price_bins, 20);
        assert_eq!(config.size_bins, 30);
    }

    #[test]
    fn test_base_url_override() {
        let config = DashboardConfig::with_base_url(Some(" https://housing.example.org/ "));
        assert_eq!(config.api_base_url, "https://housing.example.org");
        assert_eq!(config.size_bins, 30);
        assert_eq!(DashboardConfig::with_base_url(Some("")), DashboardConfig::default());
    }
}
