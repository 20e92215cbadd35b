//! Overpass API error types.

/// Errors that can occur when querying the Overpass API.
#[derive(Debug, thiserror::Error)]
pub enum OverpassError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Too many requests from this client
    #[error("rate limited by Overpass API")]
    RateLimited,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Query ran but the server reported a problem instead of results
    #[error("query failed: {0}")]
    Remark(String),

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
