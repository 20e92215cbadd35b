//! Overpass API HTTP client.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::StationFeature;

use super::error::OverpassError;
use super::find::FeatureSource;
use super::query::SearchQuery;
use super::types::OverpassResponse;

/// Default public Overpass endpoint.
const DEFAULT_BASE_URL: &str = "https://overpass-api.de/api/interpreter";

/// Server-side query timeout requested in the QL header.
const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 25;

/// Configuration for the Overpass client.
#[derive(Debug, Clone)]
pub struct OverpassConfig {
    /// Interpreter endpoint
    pub base_url: String,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
    /// `[timeout:N]` sent to the server
    pub query_timeout_secs: u64,
}

impl Default for OverpassConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            query_timeout_secs: DEFAULT_QUERY_TIMEOUT_SECS,
        }
    }
}

impl OverpassConfig {
    /// Set a custom endpoint (for testing or a private instance).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the Overpass API.
#[derive(Debug, Clone)]
pub struct OverpassClient {
    http: reqwest::Client,
    base_url: String,
    query_timeout_secs: u64,
}

impl OverpassClient {
    /// Create a new Overpass client.
    pub fn new(config: OverpassConfig) -> Result<Self, OverpassError> {
        // The public instances ask clients to identify themselves
        let http = reqwest::Client::builder()
            .user_agent(concat!("petrol-map/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            query_timeout_secs: config.query_timeout_secs,
        })
    }

    /// Run a raw Overpass QL query.
    pub async fn run(&self, ql: &str) -> Result<OverpassResponse, OverpassError> {
        let response = self
            .http
            .post(&self.base_url)
            .form(&[("data", ql)])
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(OverpassError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OverpassError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: OverpassResponse =
            serde_json::from_str(&body).map_err(|e| OverpassError::Json {
                message: e.to_string(),
            })?;

        if parsed.elements.is_empty() {
            if let Some(remark) = parsed.remark {
                return Err(OverpassError::Remark(remark));
            }
        }

        Ok(parsed)
    }

    /// Fetch fuel stations matching a search.
    pub async fn fetch_stations(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<StationFeature>, OverpassError> {
        let ql = query.to_overpass_ql(self.query_timeout_secs);
        debug!(%ql, "overpass query");

        let response = self.run(&ql).await?;
        Ok(response.into_features())
    }
}

#[async_trait]
impl FeatureSource for OverpassClient {
    async fn features_near(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<StationFeature>, OverpassError> {
        self.fetch_stations(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = OverpassConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.query_timeout_secs, 25);
    }

    #[test]
    fn config_with_base_url() {
        let config = OverpassConfig::default()
            .with_base_url("http://localhost:8080/api/interpreter")
            .with_timeout(5);
        assert_eq!(config.base_url, "http://localhost:8080/api/interpreter");
        assert_eq!(config.timeout_secs, 5);
    }
}
