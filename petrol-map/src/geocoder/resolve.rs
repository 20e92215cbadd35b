//! Postcode resolution on top of a [`Geocoder`].

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::Coordinate;

use super::error::GeocodeError;

/// Country region sent with every query.
const COUNTRY_REGION: &str = "UK";

/// Structured query sent to the geocoding provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostcodeQuery {
    pub postal_code: String,
    pub country_region: String,
}

impl PostcodeQuery {
    /// Query for a UK postcode.
    pub fn uk(postcode: impl Into<String>) -> Self {
        Self {
            postal_code: postcode.into(),
            country_region: COUNTRY_REGION.to_string(),
        }
    }
}

/// Something that can place a postcode on the map.
///
/// Implementations return `Ok(None)` when the provider has no match and
/// `Err` when the provider could not be asked.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, query: &PostcodeQuery) -> Result<Option<Coordinate>, GeocodeError>;
}

/// Outcome of resolving a postcode.
#[derive(Debug)]
pub enum Resolution {
    Resolved(Coordinate),
    NotFound,
    ServiceUnavailable(GeocodeError),
}

impl Resolution {
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            Resolution::Resolved(c) => Some(*c),
            _ => None,
        }
    }
}

/// Resolve a postcode to a coordinate.
///
/// A blank postcode is `NotFound` and the provider is not contacted.
/// Exactly one provider call is made otherwise; there is no retry.
pub async fn resolve_postcode(geocoder: &dyn Geocoder, postcode: &str) -> Resolution {
    if postcode.trim().is_empty() {
        return Resolution::NotFound;
    }

    match geocoder.geocode(&PostcodeQuery::uk(postcode)).await {
        Ok(Some(coordinate)) => Resolution::Resolved(coordinate),
        Ok(None) => Resolution::NotFound,
        Err(e) => Resolution::ServiceUnavailable(e),
    }
}
