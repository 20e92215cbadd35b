//! Station records as returned by the map-data source, and their
//! normalized display form.

use std::collections::BTreeMap;

use super::Coordinate;

/// Label used for a station with no name, operator or brand.
pub const DEFAULT_STATION_LABEL: &str = "Petrol Station";

/// Geometry of a map feature.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Coordinate),
    /// Exterior ring. Need not be explicitly closed.
    Polygon(Vec<Coordinate>),
}

/// A raw feature from the spatial query: geometry plus free-form tags.
///
/// Tags are not guaranteed to carry any particular key.
#[derive(Debug, Clone, PartialEq)]
pub struct StationFeature {
    pub geometry: Option<Geometry>,
    pub tags: BTreeMap<String, String>,
}

impl StationFeature {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry: Some(geometry),
            tags: BTreeMap::new(),
        }
    }

    /// Builder-style tag insertion.
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Look up a tag, treating blank values as missing.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }
}

/// A station reduced to a single point with display text.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedStation {
    pub point: Coordinate,
    pub display_name: Option<String>,
    pub display_address: Option<String>,
}

impl NormalizedStation {
    /// Name to show on the map and in the list.
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(DEFAULT_STATION_LABEL)
    }
}
