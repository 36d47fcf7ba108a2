//! HTTP client for the housing service.
//!
//! Transport failures, non-2xx statuses and undecodable bodies all surface as
//! a single `anyhow::Error` whose message names the endpoint.

use crate::endpoint::{decode, endpoint_url, Endpoint, Resource};
use crate::query::FilterQuery;
use anyhow::Context;
use log::{debug, warn};
use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct HousingClient {
    client: Client,
    base_url: String,
}

impl HousingClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Use a preconfigured `reqwest::Client` (timeouts, headers).
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, endpoint: Endpoint) -> String {
        endpoint_url(&self.base_url, endpoint)
    }

    /// Fetch the unfiltered resource.
    pub async fn fetch<R: Resource>(&self) -> anyhow::Result<R> {
        self.fetch_filtered(&FilterQuery::default()).await
    }

    /// Fetch a resource restricted by server-side filter parameters.
    pub async fn fetch_filtered<R: Resource>(&self, query: &FilterQuery) -> anyhow::Result<R> {
        let url = self.url_for(R::ENDPOINT);
        debug!("GET {}{}", url, query.to_query_string());

        let response = self
            .client
            .get(&url)
            .query(&query.to_pairs())
            .send()
            .await
            .with_context(|| format!("request to {} failed", url))?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} responded with {}", url, status);
            anyhow::bail!("{} responded with {}", R::ENDPOINT.path(), status);
        }

        let body = response
            .text()
            .await
            .with_context(|| format!("failed to read {} response body", R::ENDPOINT.name()))?;
        decode(&body)
    }
}

impl Default for HousingClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let client = HousingClient::new("http://localhost:8000///");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(
            client.url_for(Endpoint::Bedrooms),
            "http://localhost:8000/housing/bedrooms"
        );
    }
}
