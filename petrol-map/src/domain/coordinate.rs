//! Geographic coordinates.

use std::fmt;

use super::DomainError;

/// Default map centre: central London.
pub const CENTRAL_LONDON: Coordinate = Coordinate {
    lon: -0.09,
    lat: 51.505,
};

/// A WGS84 longitude/latitude pair.
///
/// Both components are guaranteed finite. No range check is applied.
///
/// # Examples
///
/// ```
/// use petrol_map::domain::Coordinate;
///
/// let c = Coordinate::new(-0.1276, 51.5072).unwrap();
/// assert_eq!(c.lat(), 51.5072);
///
/// assert!(Coordinate::new(f64::NAN, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    lon: f64,
    lat: f64,
}

impl Coordinate {
    /// Create a coordinate, rejecting NaN and infinite components.
    pub fn new(lon: f64, lat: f64) -> Result<Self, DomainError> {
        if !lon.is_finite() || !lat.is_finite() {
            return Err(DomainError::NonFiniteCoordinate { lon, lat });
        }
        Ok(Self { lon, lat })
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// `[lat, lon]` order, as used by Leaflet.
    pub fn lat_lon(&self) -> [f64; 2] {
        [self.lat, self.lon]
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5}, {:.5})", self.lat, self.lon)
    }
}
