//! Route normalization.
//!
//! Converts one raw directions document into a [`DisplayRoute`]. Pure: no
//! network access, no logging, no partial results.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::polyline::{DEFAULT_PRECISION, DecodeError, Polyline};

/// Aggregate route metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub distance_meters: f64,
    pub duration_seconds: f64,
}

/// One leg between waypoints with its turn-by-turn instructions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSegment {
    pub distance_meters: f64,
    pub duration_seconds: f64,
    pub instructions: Vec<String>,
}

/// Display-ready route: decoded path, totals, and per-segment breakdown.
///
/// The path's point count is unrelated to the number of segments or steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayRoute {
    pub path: Polyline,
    pub summary: RouteSummary,
    pub segments: Vec<RouteSegment>,
}

impl DisplayRoute {
    /// All instructions across segments, in route order.
    pub fn instructions(&self) -> impl Iterator<Item = &str> {
        self.segments
            .iter()
            .flat_map(|segment| segment.instructions.iter().map(String::as_str))
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalizeError {
    #[error("malformed route: {0}")]
    MalformedRoute(String),

    #[error("routing response contains no routes")]
    EmptyRoute,

    #[error("invalid route geometry: {0}")]
    Decode(#[from] DecodeError),
}

/// Normalizes the first candidate route of a directions document.
pub fn normalize(document: &Value) -> Result<DisplayRoute, NormalizeError> {
    let routes = document
        .get("routes")
        .and_then(Value::as_array)
        .ok_or_else(|| malformed("missing `routes` array"))?;
    let route = routes.first().ok_or(NormalizeError::EmptyRoute)?;

    let geometry = route
        .get("geometry")
        .and_then(Value::as_str)
        .ok_or_else(|| malformed("route has no encoded `geometry`"))?;
    let path = Polyline::decode(geometry, DEFAULT_PRECISION)?;

    Ok(DisplayRoute {
        path,
        summary: extract_summary(route)?,
        segments: extract_segments(route)?,
    })
}

/// Reads total distance and duration from a route's `summary` object.
pub fn extract_summary(route: &Value) -> Result<RouteSummary, NormalizeError> {
    let summary = route
        .get("summary")
        .filter(|value| value.is_object())
        .ok_or_else(|| malformed("route has no `summary` object"))?;

    Ok(RouteSummary {
        distance_meters: metric(summary, "distance", "summary")?,
        duration_seconds: metric(summary, "duration", "summary")?,
    })
}

/// Copies each segment's metrics and flattens its steps into instructions.
///
/// A route without `segments` has no breakdown; a segment without `steps`
/// has no instructions.
pub fn extract_segments(route: &Value) -> Result<Vec<RouteSegment>, NormalizeError> {
    let segments = match route.get("segments") {
        None => return Ok(Vec::new()),
        Some(value) => value
            .as_array()
            .ok_or_else(|| malformed("`segments` is not an array"))?,
    };

    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| -> Result<RouteSegment, NormalizeError> {
            let context = format!("segment {}", index);
            Ok(RouteSegment {
                distance_meters: metric(segment, "distance", &context)?,
                duration_seconds: metric(segment, "duration", &context)?,
                instructions: instructions(segment, &context)?,
            })
        })
        .collect()
}

fn instructions(segment: &Value, context: &str) -> Result<Vec<String>, NormalizeError> {
    let steps = match segment.get("steps") {
        None => return Ok(Vec::new()),
        Some(value) => value
            .as_array()
            .ok_or_else(|| malformed(format!("{}: `steps` is not an array", context)))?,
    };

    steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            step.get("instruction")
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| {
                    malformed(format!("{}: step {} has no `instruction`", context, index))
                })
        })
        .collect()
}

fn metric(object: &Value, field: &str, context: &str) -> Result<f64, NormalizeError> {
    let value = object
        .get(field)
        .ok_or_else(|| malformed(format!("{}: missing `{}`", context, field)))?
        .as_f64()
        .ok_or_else(|| malformed(format!("{}: `{}` is not a number", context, field)))?;

    if !value.is_finite() || value < 0.0 {
        return Err(malformed(format!(
            "{}: `{}` must be non-negative, got {}",
            context, field, value
        )));
    }
    Ok(value)
}

fn malformed(reason: impl Into<String>) -> NormalizeError {
    NormalizeError::MalformedRoute(reason.into())
}
