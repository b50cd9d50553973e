//! Canned OpenRouteService responses.

use serde_json::{Value, json};

use route_planner::polyline::Coordinate;

/// Uruapan, Michoacán.
pub const URUAPAN: (f64, f64) = (19.4167, -102.0500);
/// Morelia, Michoacán.
pub const MORELIA: (f64, f64) = (19.7060, -101.1950);

pub fn coordinate((lat, lng): (f64, f64)) -> Coordinate {
    Coordinate::new(lat, lng)
}

/// The minimal one-step directions document.
pub fn single_step_directions() -> Value {
    json!({
        "routes": [{
            "geometry": "_p~iF~ps|U",
            "summary": {"distance": 1000, "duration": 130},
            "segments": [{
                "distance": 1000,
                "duration": 130,
                "steps": [{"instruction": "Head north"}]
            }]
        }]
    })
}

/// A longer drive: three path points, one segment with four steps.
pub fn uruapan_morelia_directions() -> Value {
    json!({
        "bbox": [-126.453, 38.5, -120.2, 43.252],
        "routes": [{
            "summary": {"distance": 112_345.6, "duration": 5_580.4},
            "segments": [{
                "distance": 112_345.6,
                "duration": 5_580.4,
                "steps": [
                    {"distance": 120.5, "duration": 30.1, "type": 11, "instruction": "Head east on Calle Independencia", "name": "Calle Independencia", "way_points": [0, 1]},
                    {"distance": 2_000.0, "duration": 150.0, "type": 1, "instruction": "Turn right onto Paseo Lázaro Cárdenas", "name": "Paseo Lázaro Cárdenas", "way_points": [1, 1]},
                    {"distance": 110_225.1, "duration": 5_400.3, "type": 6, "instruction": "Continue straight onto MEX 14D", "name": "MEX 14D", "way_points": [1, 2]},
                    {"distance": 0.0, "duration": 0.0, "type": 10, "instruction": "Arrive at your destination, on the left", "name": "-", "way_points": [2, 2]}
                ]
            }],
            "bbox": [-126.453, 38.5, -120.2, 43.252],
            "geometry": "_p~iF~ps|U_ulLnnqC_mqNvxq`@",
            "way_points": [0, 2]
        }],
        "metadata": {"service": "routing", "query": {"profile": "driving-car", "format": "json"}}
    })
}

pub fn empty_directions() -> Value {
    json!({"routes": []})
}

/// Geocoding response carrying one feature at `(lat, lng)`, written the way
/// the service does: `[lon, lat]`.
pub fn geocode_response(label: &str, (lat, lng): (f64, f64)) -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [lng, lat]},
            "properties": {"label": label, "confidence": 1}
        }]
    })
}

pub fn geocode_no_match() -> Value {
    json!({"type": "FeatureCollection", "features": []})
}
