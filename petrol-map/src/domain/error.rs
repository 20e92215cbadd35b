//! Domain error types.

/// Domain-level validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Longitude or latitude was NaN or infinite
    #[error("coordinate is not finite: lon={lon}, lat={lat}")]
    NonFiniteCoordinate { lon: f64, lat: f64 },

    /// Search radius must be a positive number of metres
    #[error("search radius must be positive, got {0}")]
    InvalidRadius(u32),
}
