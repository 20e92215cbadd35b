//! Search parameters and Overpass QL generation.

use crate::domain::{Coordinate, DomainError, FuelType};

/// A validated nearby-station search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchQuery {
    origin: Coordinate,
    radius_meters: u32,
    fuel_type: FuelType,
}

impl SearchQuery {
    /// Build a query. The radius must be positive.
    pub fn new(
        origin: Coordinate,
        radius_meters: u32,
        fuel_type: FuelType,
    ) -> Result<Self, DomainError> {
        if radius_meters == 0 {
            return Err(DomainError::InvalidRadius(radius_meters));
        }
        Ok(Self {
            origin,
            radius_meters,
            fuel_type,
        })
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn radius_meters(&self) -> u32 {
        self.radius_meters
    }

    pub fn fuel_type(&self) -> FuelType {
        self.fuel_type
    }

    /// Overpass QL selecting fuel stations around the origin.
    ///
    /// Nodes, ways and relations are all requested; `out tags geom`
    /// returns way geometry inline so no second round-trip is needed.
    pub fn to_overpass_ql(&self, timeout_secs: u64) -> String {
        format!(
            "[out:json][timeout:{timeout}];\
             nwr[\"amenity\"=\"fuel\"][\"{fuel}\"=\"yes\"](around:{radius},{lat},{lon});\
             out tags geom;",
            timeout = timeout_secs,
            fuel = self.fuel_type.osm_key(),
            radius = self.radius_meters,
            lat = self.origin.lat(),
            lon = self.origin.lon(),
        )
    }
}
