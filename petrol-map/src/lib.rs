//! Petrol station map server.
//!
//! A web application that answers: "Where can I buy this fuel near this
//! postcode?" It geocodes a UK postcode, asks OpenStreetMap for fuel
//! stations within a fixed radius, and draws them on a map.

pub mod config;
pub mod domain;
pub mod geocoder;
pub mod map;
pub mod normalize;
pub mod overpass;
pub mod search;
pub mod web;

#[cfg(test)]
pub(crate) mod testing;
