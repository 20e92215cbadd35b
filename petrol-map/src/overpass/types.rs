//! Overpass JSON response types and their conversion to station features.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::debug;

use crate::domain::{Coordinate, Geometry, StationFeature};

/// Top-level `[out:json]` response.
#[derive(Debug, Clone, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<Element>,
    /// Set when the server hit a runtime error (e.g. query timeout)
    #[serde(default)]
    pub remark: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Node,
    Way,
    Relation,
    #[serde(other)]
    Other,
}

/// One OSM element as returned with `out tags geom`.
#[derive(Debug, Clone, Deserialize)]
pub struct Element {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub id: i64,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub geometry: Vec<LatLon>,
    #[serde(default)]
    pub bounds: Option<Bounds>,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Bounds {
    pub minlat: f64,
    pub minlon: f64,
    pub maxlat: f64,
    pub maxlon: f64,
}

impl Element {
    /// Geometry for this element, if it can be placed.
    ///
    /// Ways become polygons over their node ring. Relations are placed at
    /// the middle of their bounding box.
    pub fn geometry(&self) -> Option<Geometry> {
        match self.kind {
            ElementKind::Node => {
                let point = Coordinate::new(self.lon?, self.lat?).ok()?;
                Some(Geometry::Point(point))
            }
            ElementKind::Way => {
                let ring: Vec<Coordinate> = self
                    .geometry
                    .iter()
                    .filter_map(|p| Coordinate::new(p.lon, p.lat).ok())
                    .collect();
                match ring.as_slice() {
                    [] => None,
                    [single] => Some(Geometry::Point(*single)),
                    _ => Some(Geometry::Polygon(ring)),
                }
            }
            ElementKind::Relation => {
                let b = self.bounds?;
                let point =
                    Coordinate::new((b.minlon + b.maxlon) / 2.0, (b.minlat + b.maxlat) / 2.0)
                        .ok()?;
                Some(Geometry::Point(point))
            }
            ElementKind::Other => None,
        }
    }
}

impl OverpassResponse {
    /// Convert elements into features, in response order.
    ///
    /// Elements that cannot be placed are dropped.
    pub fn into_features(self) -> Vec<StationFeature> {
        self.elements
            .into_iter()
            .filter_map(|element| match element.geometry() {
                Some(geometry) => Some(StationFeature {
                    geometry: Some(geometry),
                    tags: element.tags,
                }),
                None => {
                    debug!(
                        id = element.id,
                        kind = ?element.kind,
                        "dropping element without usable geometry"
                    );
                    None
                }
            })
            .collect()
    }
}
