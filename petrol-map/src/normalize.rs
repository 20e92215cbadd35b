//! Reduce raw station features to points with display text.
//!
//! Features come back from the map-data source with mixed geometry and
//! inconsistent tagging. Every feature is placed at a single point
//! (polygons at their centroid) and given the best available name and
//! address by probing tags in a fixed preference order.

use geo::{Centroid, LineString, Polygon};

use crate::domain::{Coordinate, Geometry, NormalizedStation, StationFeature};

/// Tags tried, in order, for a station's display name.
pub const NAME_CANDIDATES: [&str; 3] = ["name", "operator", "brand"];

const HOUSE_NUMBER: &str = "addr:housenumber";
const STREET: &str = "addr:street";
const CITY: &str = "addr:city";
const POSTCODE: &str = "addr:postcode";

/// Malformed feature data that prevents building station markers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    /// A feature has no geometry at all
    #[error("feature {index} has no geometry")]
    MissingGeometry { index: usize },

    /// A polygon with no vertices cannot be placed
    #[error("feature {index} has an empty polygon")]
    EmptyGeometry { index: usize },

    /// None of the requested attributes appear on any feature
    #[error("no feature has any of the attributes {candidates:?}")]
    NoMatchingAttributes { candidates: Vec<String> },
}

/// Point representing a geometry: the point itself, or a polygon's centroid.
///
/// Returns `None` for an empty polygon.
pub fn to_point(geometry: &Geometry) -> Option<Coordinate> {
    match geometry {
        Geometry::Point(point) => Some(*point),
        Geometry::Polygon(ring) => {
            let exterior: LineString<f64> = ring.iter().map(|c| (c.lon(), c.lat())).collect();
            let centroid = Polygon::new(exterior, vec![]).centroid()?;
            Coordinate::new(centroid.x(), centroid.y()).ok()
        }
    }
}

/// Value of the first candidate tag present on the feature.
pub fn best_attribute<'a>(feature: &'a StationFeature, candidates: &[&str]) -> Option<&'a str> {
    candidates.iter().find_map(|key| feature.tag(key))
}

/// Address assembled from whichever of house number, street, city and
/// postcode are present, in that order.
///
/// ```
/// use petrol_map::domain::{Coordinate, Geometry, StationFeature};
/// use petrol_map::normalize::display_address;
///
/// let feature = StationFeature::new(Geometry::Point(Coordinate::new(0.0, 51.0).unwrap()))
///     .with_tag("addr:housenumber", "12")
///     .with_tag("addr:street", "Holloway Road")
///     .with_tag("addr:postcode", "N19 4LD");
///
/// assert_eq!(
///     display_address(&feature).as_deref(),
///     Some("12 Holloway Road, N19 4LD")
/// );
/// ```
pub fn display_address(feature: &StationFeature) -> Option<String> {
    let street = match (feature.tag(HOUSE_NUMBER), feature.tag(STREET)) {
        (Some(number), Some(street)) => Some(format!("{number} {street}")),
        (number, street) => number.or(street).map(str::to_string),
    };

    let parts: Vec<String> = street
        .into_iter()
        .chain(feature.tag(CITY).map(str::to_string))
        .chain(feature.tag(POSTCODE).map(str::to_string))
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

/// Normalize a whole result set.
///
/// The collection is checked before anything is converted: every feature
/// must have a placeable geometry, and at least one feature must carry one
/// of [`NAME_CANDIDATES`]. Individual features lacking a name are kept with
/// `display_name: None`.
pub fn normalize_stations(
    features: &[StationFeature],
) -> Result<Vec<NormalizedStation>, NormalizeError> {
    let points = features
        .iter()
        .enumerate()
        .map(|(index, feature)| {
            let geometry = feature
                .geometry
                .as_ref()
                .ok_or(NormalizeError::MissingGeometry { index })?;
            to_point(geometry).ok_or(NormalizeError::EmptyGeometry { index })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let any_named = features
        .iter()
        .any(|f| best_attribute(f, &NAME_CANDIDATES).is_some());
    if !features.is_empty() && !any_named {
        return Err(NormalizeError::NoMatchingAttributes {
            candidates: NAME_CANDIDATES.iter().map(|s| s.to_string()).collect(),
        });
    }

    Ok(features
        .iter()
        .zip(points)
        .map(|(feature, point)| NormalizedStation {
            point,
            display_name: best_attribute(feature, &NAME_CANDIDATES).map(str::to_string),
            display_address: display_address(feature),
        })
        .collect())
}
