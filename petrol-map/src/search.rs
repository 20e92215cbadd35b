//! Station search orchestration.
//!
//! Runs one validated form submission through the pipeline:
//! geocode the postcode, query nearby stations, normalize them and compose
//! the map. Each failure branch ends in a map the user can still see,
//! together with a [`Notice`] explaining what happened.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{Coordinate, FuelType, NormalizedStation, Postcode};
use crate::geocoder::{Geocoder, Resolution, resolve_postcode};
use crate::map::MapArtifact;
use crate::overpass::{FeatureSource, FindError, find_stations};

/// A validated search submitted through the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub postcode: Postcode,
    pub fuel_type: FuelType,
}

/// User-facing explanation for a search that did not show stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    PostcodeNotFound,
    GeocoderUnavailable,
    NoStationsNearby,
    StationSearchUnavailable,
    StationsUnreadable,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::PostcodeNotFound => "Postcode not found",
            Notice::GeocoderUnavailable => {
                "Postcode lookup is unavailable at the moment. Please try again later."
            }
            Notice::NoStationsNearby => "No petrol stations found nearby",
            Notice::StationSearchUnavailable => {
                "Station search is unavailable at the moment. Please try again later."
            }
            Notice::StationsUnreadable => "Nearby stations could not be displayed",
        }
    }
}

/// Result of a search: always a map, plus stations or a notice.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub map: MapArtifact,
    pub stations: Vec<NormalizedStation>,
    pub notice: Option<Notice>,
}

impl SearchOutcome {
    fn notice(map: MapArtifact, notice: Notice) -> Self {
        Self {
            map,
            stations: Vec::new(),
            notice: Some(notice),
        }
    }
}

/// Station search service.
///
/// Holds its collaborators explicitly; nothing is read from global state.
#[derive(Clone)]
pub struct StationSearch {
    geocoder: Arc<dyn Geocoder>,
    stations: Arc<dyn FeatureSource>,
    radius_meters: u32,
}

impl StationSearch {
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        stations: Arc<dyn FeatureSource>,
        radius_meters: u32,
    ) -> Self {
        Self {
            geocoder,
            stations,
            radius_meters,
        }
    }

    pub fn radius_meters(&self) -> u32 {
        self.radius_meters
    }

    /// Map shown before any search (or after a rejected form).
    pub fn base_map(&self) -> MapArtifact {
        MapArtifact::default()
    }

    /// Run a search to completion.
    pub async fn run(&self, request: &SearchRequest) -> SearchOutcome {
        let postcode = request.postcode.as_str();

        let origin = match resolve_postcode(self.geocoder.as_ref(), postcode).await {
            Resolution::Resolved(origin) => origin,
            Resolution::NotFound => {
                info!(%postcode, "postcode not found");
                return SearchOutcome::notice(self.base_map(), Notice::PostcodeNotFound);
            }
            Resolution::ServiceUnavailable(e) => {
                warn!(%postcode, error = %e, "geocoding failed");
                return SearchOutcome::notice(self.base_map(), Notice::GeocoderUnavailable);
            }
        };

        let features = match find_stations(
            self.stations.as_ref(),
            origin,
            self.radius_meters,
            request.fuel_type,
        )
        .await
        {
            Ok(features) => features,
            Err(FindError::NothingFound) => {
                info!(%postcode, fuel = %request.fuel_type, "no stations nearby");
                return SearchOutcome::notice(degraded_map(origin), Notice::NoStationsNearby);
            }
            Err(e) => {
                warn!(%postcode, error = %e, "station search failed");
                return SearchOutcome::notice(
                    degraded_map(origin),
                    Notice::StationSearchUnavailable,
                );
            }
        };

        let mut map = MapArtifact::new(origin);
        let stations = match map.add_station_features(&features) {
            Ok(stations) => stations,
            Err(e) => {
                warn!(%postcode, error = %e, "could not place stations");
                return SearchOutcome::notice(degraded_map(origin), Notice::StationsUnreadable);
            }
        };
        map.add_origin_marker(origin)
            .add_radius_circle(origin, self.radius_meters);

        info!(%postcode, fuel = %request.fuel_type, count = stations.len(), "stations found");
        SearchOutcome {
            map,
            stations,
            notice: None,
        }
    }
}

/// Map centred on the origin with only the home marker.
fn degraded_map(origin: Coordinate) -> MapArtifact {
    let mut map = MapArtifact::new(origin);
    map.add_origin_marker(origin);
    map
}
