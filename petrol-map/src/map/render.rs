//! Leaflet rendering of a [`MapArtifact`].

use askama::Template;
use serde_json::{Value, json};

use super::artifact::{MapArtifact, MapElement};
use super::error::MapError;

/// Standalone HTML document drawing the map.
#[derive(Template)]
#[template(path = "map.html")]
pub struct MapDocument {
    /// `[lat, lon]` as a JSON array
    pub center_json: String,
    pub zoom: u8,
    /// Element list as a JSON array, safe to inline in a `<script>`
    pub elements_json: String,
}

/// `<iframe>` embedding a rendered [`MapDocument`] via `srcdoc`.
#[derive(Template)]
#[template(path = "map_frame.html")]
pub struct MapFrame {
    pub document: String,
}

pub(super) fn render_frame(map: &MapArtifact) -> Result<String, MapError> {
    let document = render_document(map)?;
    Ok(MapFrame { document }.render()?)
}

pub(super) fn render_document(map: &MapArtifact) -> Result<String, MapError> {
    let elements: Vec<Value> = map.elements().iter().map(element_json).collect();

    let template = MapDocument {
        center_json: script_json(&json!(map.center().lat_lon()))?,
        zoom: map.zoom(),
        elements_json: script_json(&Value::Array(elements))?,
    };
    Ok(template.render()?)
}

fn element_json(element: &MapElement) -> Value {
    match element {
        MapElement::Marker {
            position,
            icon,
            tooltip,
            popup,
        } => json!({
            "kind": "marker",
            "position": position.lat_lon(),
            "icon": icon.as_str(),
            "tooltip": tooltip,
            "popup": popup,
        }),
        MapElement::Circle {
            center,
            radius_meters,
            tooltip,
        } => json!({
            "kind": "circle",
            "center": center.lat_lon(),
            "radius": radius_meters,
            "tooltip": tooltip,
        }),
    }
}

/// Serialize JSON for embedding inside a `<script>` element.
///
/// `<` only occurs inside string literals in JSON, where `\u003c` is an
/// equivalent escape, so no text from a tag value can close the script.
fn script_json(value: &Value) -> Result<String, MapError> {
    Ok(serde_json::to_string(value)?.replace('<', "\\u003c"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinate, NormalizedStation};

    fn hostile_station() -> NormalizedStation {
        NormalizedStation {
            point: Coordinate::new(-0.1, 51.5).unwrap(),
            display_name: Some("</script><script>alert(1)</script>".into()),
            display_address: None,
        }
    }

    #[test]
    fn document_embeds_center_and_zoom() {
        let map = MapArtifact::default();
        let html = render_document(&map).unwrap();

        assert!(html.contains("[51.505,-0.09]"));
        assert!(html.contains(", 12)"));
        assert!(html.contains("leaflet"));
    }

    #[test]
    fn document_lists_elements() {
        let home = Coordinate::new(-0.13, 51.56).unwrap();
        let mut map = MapArtifact::new(home);
        map.add_origin_marker(home).add_radius_circle(home, 3000);

        let html = render_document(&map).unwrap();

        assert!(html.contains(r#""kind":"marker""#));
        assert!(html.contains(r#""icon":"home""#));
        assert!(html.contains(r#""kind":"circle""#));
        assert!(html.contains(r#""radius":3000"#));
        assert!(html.contains(r#""tooltip":"3 km""#));
    }

    #[test]
    fn tag_text_cannot_close_script() {
        let mut map = MapArtifact::default();
        map.add_station_markers(&[hostile_station()]);

        let html = render_document(&map).unwrap();

        assert!(!html.contains("</script><script>alert"));
        assert!(html.contains(r"\u003c/script>\u003cscript>alert(1)"));
    }

    #[test]
    fn frame_escapes_document() {
        let map = MapArtifact::default();
        let frame = render_frame(&map).unwrap();

        assert!(frame.starts_with("<iframe srcdoc=\""));
        // The inner document's tags are escaped into the attribute.
        assert!(frame.contains("&lt;!DOCTYPE html&gt;"));
        assert!(!frame.contains("<script"));
    }
}
