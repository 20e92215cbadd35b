//! Map composition and rendering.
//!
//! A [`MapArtifact`] accumulates drawn elements (markers, circles) in the
//! order they are added and renders to an embeddable `<iframe>` whose
//! document draws the map with Leaflet.

mod artifact;
mod error;
mod render;

pub use artifact::{DEFAULT_ZOOM, HOME_LABEL, MapArtifact, MapElement, MarkerIcon};
pub use error::MapError;
pub use render::{MapDocument, MapFrame};
