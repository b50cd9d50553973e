//! Presentation layers for a [`DisplayRoute`].
//!
//! Renderers are interchangeable; the route model is computed once and each
//! renderer only decides how it is shown.

use serde_json::{Value, json};

use crate::format::{format_distance_km, format_duration};
use crate::normalize::DisplayRoute;
use crate::polyline::Coordinate;

pub trait RouteRenderer {
    type Output;

    fn render(&self, route: &DisplayRoute, markers: &[Coordinate]) -> Self::Output;
}

/// Plain-text information panel: totals, then one block per segment.
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    /// Omit turn-by-turn instructions.
    pub summary_only: bool,
}

impl RouteRenderer for TextRenderer {
    type Output = String;

    fn render(&self, route: &DisplayRoute, _markers: &[Coordinate]) -> String {
        let mut lines = vec![
            format!(
                "Total distance: {}",
                format_distance_km(route.summary.distance_meters)
            ),
            format!(
                "Total duration: {}",
                format_duration(route.summary.duration_seconds)
            ),
        ];

        for (index, segment) in route.segments.iter().enumerate() {
            lines.push(format!(
                "Segment {}: {} | {}",
                index + 1,
                format_distance_km(segment.distance_meters),
                format_duration(segment.duration_seconds)
            ));
            if !self.summary_only {
                lines.extend(
                    segment
                        .instructions
                        .iter()
                        .map(|instruction| format!("  - {}", instruction)),
                );
            }
        }

        lines.join("\n")
    }
}

/// GeoJSON `FeatureCollection`: the path as a `LineString` plus one `Point`
/// per marker, with the path's `bbox` for fitting the map view. Positions are
/// written `[lon, lat]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoJsonRenderer;

impl RouteRenderer for GeoJsonRenderer {
    type Output = Value;

    fn render(&self, route: &DisplayRoute, markers: &[Coordinate]) -> Value {
        let line: Vec<[f64; 2]> = route
            .path
            .points()
            .iter()
            .map(Coordinate::to_lon_lat)
            .collect();

        let mut features = vec![json!({
            "type": "Feature",
            "geometry": {"type": "LineString", "coordinates": line},
            "properties": {
                "distance": route.summary.distance_meters,
                "duration": route.summary.duration_seconds,
                "duration_text": format_duration(route.summary.duration_seconds),
            }
        })];

        features.extend(markers.iter().enumerate().map(|(index, marker)| {
            json!({
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": marker.to_lon_lat()},
                "properties": {"marker": index}
            })
        }));

        let mut collection = json!({"type": "FeatureCollection", "features": features});
        if let Some(bounds) = route.path.bounds() {
            collection["bbox"] = json!(bounds.to_bbox());
        }
        collection
    }
}
