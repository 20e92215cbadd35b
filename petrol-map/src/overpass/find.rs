//! Station lookup on top of a [`FeatureSource`].

use async_trait::async_trait;

use crate::domain::{Coordinate, DomainError, FuelType, StationFeature};

use super::error::OverpassError;
use super::query::SearchQuery;

/// Source of map features near a point.
#[async_trait]
pub trait FeatureSource: Send + Sync {
    async fn features_near(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<StationFeature>, OverpassError>;
}

/// Why a station lookup produced nothing.
#[derive(Debug, thiserror::Error)]
pub enum FindError {
    /// Rejected before contacting the source
    #[error("invalid search: {0}")]
    InvalidQuery(#[from] DomainError),

    /// Source answered with no features
    #[error("no stations found")]
    NothingFound,

    /// Source could not be queried
    #[error("station search unavailable: {0}")]
    Unavailable(#[from] OverpassError),
}

/// Find fuel stations within `radius_meters` of `origin`.
///
/// Never returns an empty `Ok`: an empty result is
/// [`FindError::NothingFound`], so callers branch on `Ok`/`Err` alone.
pub async fn find_stations(
    source: &dyn FeatureSource,
    origin: Coordinate,
    radius_meters: u32,
    fuel_type: FuelType,
) -> Result<Vec<StationFeature>, FindError> {
    let query = SearchQuery::new(origin, radius_meters, fuel_type)?;

    let features = source.features_near(&query).await?;
    if features.is_empty() {
        return Err(FindError::NothingFound);
    }
    Ok(features)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Geometry;
    use crate::testing::StubSource;

    fn origin() -> Coordinate {
        Coordinate::new(-0.13, 51.56).unwrap()
    }

    fn station(lon: f64, lat: f64) -> StationFeature {
        StationFeature::new(Geometry::Point(Coordinate::new(lon, lat).unwrap()))
            .with_tag("amenity", "fuel")
    }

    #[tokio::test]
    async fn returns_all_features() {
        let source = StubSource::returning(vec![station(-0.13, 51.56), station(-0.12, 51.57)]);

        let found = find_stations(source.as_ref(), origin(), 3000, FuelType::E10)
            .await
            .unwrap();

        assert_eq!(found.len(), 2);
        let calls = source.calls.lock().unwrap();
        assert_eq!(calls[0].radius_meters(), 3000);
        assert_eq!(calls[0].fuel_type(), FuelType::E10);
    }

    #[tokio::test]
    async fn empty_result_is_nothing_found() {
        let source = StubSource::returning(vec![]);

        let result = find_stations(source.as_ref(), origin(), 3000, FuelType::Diesel).await;

        assert!(matches!(result, Err(FindError::NothingFound)));
        assert_eq!(source.call_count(), 1);
    }

    #[tokio::test]
    async fn invalid_radius_skips_source() {
        let source = StubSource::returning(vec![station(0.0, 0.0)]);

        let result = find_stations(source.as_ref(), origin(), 0, FuelType::Diesel).await;

        assert!(matches!(result, Err(FindError::InvalidQuery(_))));
        assert_eq!(source.call_count(), 0);
    }

    #[tokio::test]
    async fn source_failure_is_unavailable() {
        let source = StubSource::failing();

        let result = find_stations(source.as_ref(), origin(), 3000, FuelType::Lpg).await;

        assert!(matches!(
            result,
            Err(FindError::Unavailable(OverpassError::Api { status: 504, .. }))
        ));
        assert_eq!(source.call_count(), 1);
    }
}
