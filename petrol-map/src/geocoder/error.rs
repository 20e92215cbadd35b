//! Geocoding client error types.

use std::fmt;

/// Errors from the geocoding HTTP client.
#[derive(Debug)]
pub enum GeocodeError {
    /// The provider did not answer within the client timeout
    Timeout,

    /// HTTP request failed for another reason (connection refused, DNS, etc.)
    Http(reqwest::Error),

    /// Provider returned a non-success status
    Service { status: u16, message: String },

    /// Rejected API key
    Unauthorized,

    /// Rate limited by the provider
    RateLimited,

    /// Response body could not be decoded
    Json {
        message: String,
        body: Option<String>,
    },
}

impl fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeocodeError::Timeout => write!(f, "geocoding request timed out"),
            GeocodeError::Http(e) => write!(f, "HTTP error: {e}"),
            GeocodeError::Service { status, message } => {
                write!(f, "geocoding service error {status}: {message}")
            }
            GeocodeError::Unauthorized => write!(f, "unauthorized (check BING_MAPS_KEY)"),
            GeocodeError::RateLimited => write!(f, "rate limited by geocoding service"),
            GeocodeError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for GeocodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeocodeError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GeocodeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GeocodeError::Timeout
        } else {
            GeocodeError::Http(err)
        }
    }
}
