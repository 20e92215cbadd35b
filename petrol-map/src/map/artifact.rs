//! The in-progress map.

use crate::domain::{CENTRAL_LONDON, Coordinate, NormalizedStation, StationFeature};
use crate::normalize::normalize_stations;

use super::error::MapError;
use super::render;

/// Initial zoom level for every map.
pub const DEFAULT_ZOOM: u8 = 12;

/// Tooltip on the origin marker.
pub const HOME_LABEL: &str = "Home";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerIcon {
    Home,
    Fuel,
}

impl MarkerIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerIcon::Home => "home",
            MarkerIcon::Fuel => "fuel",
        }
    }
}

/// One drawn element.
#[derive(Debug, Clone, PartialEq)]
pub enum MapElement {
    Marker {
        position: Coordinate,
        icon: MarkerIcon,
        tooltip: String,
        popup: Option<String>,
    },
    /// Outline only, no fill
    Circle {
        center: Coordinate,
        radius_meters: u32,
        tooltip: String,
    },
}

/// A map being composed for one response.
///
/// The `add_*` methods mutate in place and return `&mut Self` so calls can
/// be chained. Elements are drawn in insertion order, later ones on top.
///
/// # Examples
///
/// ```
/// use petrol_map::domain::Coordinate;
/// use petrol_map::map::MapArtifact;
///
/// let home = Coordinate::new(-0.13, 51.56).unwrap();
/// let mut map = MapArtifact::new(home);
/// map.add_origin_marker(home).add_radius_circle(home, 3000);
///
/// assert_eq!(map.elements().len(), 2);
/// assert!(map.serialize().unwrap().starts_with("<iframe srcdoc="));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MapArtifact {
    center: Coordinate,
    zoom: u8,
    elements: Vec<MapElement>,
}

impl Default for MapArtifact {
    /// Base map over central London.
    fn default() -> Self {
        Self::new(CENTRAL_LONDON)
    }
}

impl MapArtifact {
    /// Base map centred on `center` at the default zoom.
    pub fn new(center: Coordinate) -> Self {
        Self {
            center,
            zoom: DEFAULT_ZOOM,
            elements: Vec::new(),
        }
    }

    pub fn center(&self) -> Coordinate {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn elements(&self) -> &[MapElement] {
        &self.elements
    }

    /// Add the "Home" marker at the searched location.
    pub fn add_origin_marker(&mut self, origin: Coordinate) -> &mut Self {
        self.elements.push(MapElement::Marker {
            position: origin,
            icon: MarkerIcon::Home,
            tooltip: HOME_LABEL.to_string(),
            popup: None,
        });
        self
    }

    /// Outline the search area, labelled with its radius in kilometres.
    pub fn add_radius_circle(&mut self, origin: Coordinate, radius_meters: u32) -> &mut Self {
        self.elements.push(MapElement::Circle {
            center: origin,
            radius_meters,
            tooltip: format!("{} km", f64::from(radius_meters) / 1000.0),
        });
        self
    }

    /// Add one fuel marker per station, labelled with its name.
    pub fn add_station_markers(&mut self, stations: &[NormalizedStation]) -> &mut Self {
        self.elements
            .extend(stations.iter().map(|station| MapElement::Marker {
                position: station.point,
                icon: MarkerIcon::Fuel,
                tooltip: station.label().to_string(),
                popup: Some(station_popup(station)),
            }));
        self
    }

    /// Normalize raw features and add their markers.
    ///
    /// The whole collection is validated first; on error the map is left
    /// untouched. Returns the normalized stations for display elsewhere.
    pub fn add_station_features(
        &mut self,
        features: &[StationFeature],
    ) -> Result<Vec<NormalizedStation>, MapError> {
        let stations = normalize_stations(features)?;
        self.add_station_markers(&stations);
        Ok(stations)
    }

    /// Render to an embeddable `<iframe>` fragment.
    ///
    /// Output depends only on the artifact's contents, so an unchanged map
    /// serializes identically every time.
    pub fn serialize(&self) -> Result<String, MapError> {
        render::render_frame(self)
    }
}

fn station_popup(station: &NormalizedStation) -> String {
    match &station.display_address {
        Some(address) => format!("{}\n{}", station.label(), address),
        None => station.label().to_string(),
    }
}
