//! Map composition error types.

use crate::normalize::NormalizeError;

/// Errors raised while composing or rendering a map.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// Station features could not be turned into markers
    #[error("cannot place stations: {0}")]
    Stations(#[from] NormalizeError),

    /// Template rendering failed
    #[error("map rendering failed: {0}")]
    Render(#[from] askama::Error),

    /// Element data could not be encoded for the page script
    #[error("map data encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}
