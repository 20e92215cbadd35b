//! Postcode geocoding.
//!
//! Turns a UK postcode into a coordinate using the Bing Maps Locations API.
//! The [`Geocoder`] trait is the seam the rest of the crate depends on, so
//! tests can substitute a stub for the HTTP client.
//!
//! Outcomes are reported as a [`Resolution`] which keeps "postcode not found"
//! distinct from "provider unavailable".

mod client;
mod error;
mod resolve;
mod types;

pub use client::{BingClient, BingConfig};
pub use error::GeocodeError;
pub use resolve::{Geocoder, PostcodeQuery, Resolution, resolve_postcode};
