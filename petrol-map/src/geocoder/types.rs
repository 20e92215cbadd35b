//! Bing Maps Locations API response types.
//!
//! Only the fields needed to extract a coordinate are modelled; serde
//! ignores the rest of the payload.

use serde::Deserialize;

use crate::domain::Coordinate;

/// Top-level Locations response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationResponse {
    #[serde(default)]
    pub resource_sets: Vec<ResourceSet>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceSet {
    #[serde(default)]
    pub resources: Vec<LocationResource>,
}

/// A single matched location.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationResource {
    #[serde(default)]
    pub point: Option<ResourcePoint>,
}

/// GeoJSON-ish point; Bing orders coordinates as `[lat, lon]`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourcePoint {
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

impl LocationResponse {
    /// Coordinate of the first resource that carries a usable point.
    pub fn first_coordinate(&self) -> Option<Coordinate> {
        self.resource_sets
            .iter()
            .flat_map(|set| set.resources.iter())
            .find_map(LocationResource::coordinate)
    }
}

impl LocationResource {
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self.point.as_ref()?.coordinates.as_slice() {
            [lat, lon, ..] => Coordinate::new(*lon, *lat).ok(),
            _ => None,
        }
    }
}
