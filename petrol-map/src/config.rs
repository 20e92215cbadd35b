//! Application configuration.
//!
//! Read once at startup and passed explicitly to whatever needs it.

use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Errors loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Immutable settings for one server process.
#[derive(Clone)]
pub struct AppConfig {
    /// Signs form tokens
    pub secret_key: String,
    /// Bing Maps key for postcode geocoding
    pub bing_maps_key: String,
    pub bing_base_url: Option<String>,
    pub overpass_url: Option<String>,
    pub bind_addr: SocketAddr,
    pub search_radius_meters: u32,
    pub http_timeout_secs: u64,
    pub static_dir: PathBuf,
    pub log_level: String,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("secret_key", &"<redacted>")
            .field("bing_maps_key", &"<redacted>")
            .field("bing_base_url", &self.bing_base_url)
            .field("overpass_url", &self.overpass_url)
            .field("bind_addr", &self.bind_addr)
            .field("search_radius_meters", &self.search_radius_meters)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("static_dir", &self.static_dir)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl AppConfig {
    /// Load from the process environment, after applying any `.env` file.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key))
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let require = |var: &str| -> Result<String, ConfigError> {
            lookup(var)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
        };

        let or_default =
            |var: &str, default: &str| -> String { lookup(var).unwrap_or_else(|_| default.to_string()) };

        let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason,
        };

        let secret_key = require("SECRET_KEY")?;
        let bing_maps_key = require("BING_MAPS_KEY")?;

        let bind_addr = or_default("BIND_ADDR", "127.0.0.1:5000")
            .parse::<SocketAddr>()
            .map_err(|e| invalid("BIND_ADDR", e.to_string()))?;

        let search_radius_meters = or_default("SEARCH_RADIUS_METERS", "3000")
            .parse::<u32>()
            .map_err(|e| invalid("SEARCH_RADIUS_METERS", e.to_string()))?;
        if search_radius_meters == 0 {
            return Err(invalid("SEARCH_RADIUS_METERS", "must be positive".into()));
        }

        let http_timeout_secs = or_default("HTTP_TIMEOUT_SECS", "30")
            .parse::<u64>()
            .map_err(|e| invalid("HTTP_TIMEOUT_SECS", e.to_string()))?;

        Ok(Self {
            secret_key,
            bing_maps_key,
            bing_base_url: lookup("BING_BASE_URL").ok(),
            overpass_url: lookup("OVERPASS_URL").ok(),
            bind_addr,
            search_radius_meters,
            http_timeout_secs,
            static_dir: PathBuf::from(or_default("STATIC_DIR", "static")),
            log_level: or_default("RUST_LOG", "info"),
        })
    }
}
