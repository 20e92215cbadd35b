//! Nearby fuel station lookup.
//!
//! Queries the OpenStreetMap Overpass API for `amenity=fuel` features
//! within a radius of a point, filtered to stations advertising the
//! requested fuel. [`FeatureSource`] abstracts the HTTP client so the
//! lookup logic can be exercised against stubs.

mod client;
mod error;
mod find;
mod query;
mod types;

pub use client::{OverpassClient, OverpassConfig};
pub use error::OverpassError;
pub use find::{FeatureSource, FindError, find_stations};
pub use query::SearchQuery;
pub use types::{Bounds, Element, ElementKind, LatLon, OverpassResponse};
