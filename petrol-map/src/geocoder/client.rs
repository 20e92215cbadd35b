//! Bing Maps Locations HTTP client.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::Coordinate;

use super::error::GeocodeError;
use super::resolve::{Geocoder, PostcodeQuery};
use super::types::LocationResponse;

/// Default base URL for the Bing Maps REST services.
const DEFAULT_BASE_URL: &str = "https://dev.virtualearth.net/REST/v1";

/// Configuration for the geocoding client.
#[derive(Debug, Clone)]
pub struct BingConfig {
    /// Bing Maps key, sent as the `key` query parameter
    pub api_key: String,
    /// Base URL for the API (defaults to production Bing Maps)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl BingConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
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

/// Geocoder backed by the Bing Maps Locations API.
#[derive(Debug, Clone)]
pub struct BingClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl BingClient {
    /// Create a new client with the given configuration.
    pub fn new(config: BingConfig) -> Result<Self, GeocodeError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        })
    }

    /// Look up a structured postal query, returning the first match.
    pub async fn locate(&self, query: &PostcodeQuery) -> Result<Option<Coordinate>, GeocodeError> {
        let url = format!("{}/Locations", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("postalCode", query.postal_code.as_str()),
                ("countryRegion", query.country_region.as_str()),
                ("maxResults", "1"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(GeocodeError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodeError::RateLimited);
        }

        // Bing answers 404 for postcodes it cannot place
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Service {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: LocationResponse =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        let coordinate = parsed.first_coordinate();
        debug!(
            postcode = %query.postal_code,
            found = coordinate.is_some(),
            "bing locations lookup"
        );
        Ok(coordinate)
    }
}

#[async_trait]
impl Geocoder for BingClient {
    async fn geocode(&self, query: &PostcodeQuery) -> Result<Option<Coordinate>, GeocodeError> {
        self.locate(query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = BingConfig::new("test-key")
            .with_base_url("http://localhost:8080")
            .with_timeout(5);

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn config_defaults() {
        let config = BingConfig::new("test-key");

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn client_creation() {
        let client = BingClient::new(BingConfig::new("test-key").with_base_url("http://x/"));
        assert_eq!(client.unwrap().base_url, "http://x");
    }
}
