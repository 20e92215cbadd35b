//! Domain types for the petrol station finder.
//!
//! These types are independent of any external API. Values are validated
//! on construction so downstream code can rely on them.

mod coordinate;
mod error;
mod fuel;
mod postcode;
mod station;

pub use coordinate::{CENTRAL_LONDON, Coordinate};
pub use error::DomainError;
pub use fuel::{FuelType, UnknownFuelType};
pub use postcode::{InvalidPostcode, Postcode};
pub use station::{DEFAULT_STATION_LABEL, Geometry, NormalizedStation, StationFeature};
