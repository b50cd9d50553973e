//! Route geometries and the encoded polyline format.
//!
//! Routing services ship paths as compact polyline strings (signed varint
//! deltas in 5-bit groups). Decoding happens once, at the boundary, and the
//! rest of the crate works with [`Coordinate`] sequences.

use geo_types::Coord;
use polyline::errors::PolylineError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Decimal precision used by the routing service (scale factor 1e5).
pub const DEFAULT_PRECISION: u32 = 5;

/// Printable range of the encoding alphabet (`?` through `~`).
const ALPHABET: std::ops::RangeInclusive<u8> = b'?'..=b'~';
/// Bytes at or above `_` carry the continuation bit.
const FIRST_CONTINUATION: u8 = b'_';
/// Twelve groups carry 60 bits; a longer run cannot be a valid delta.
const MAX_CONTINUED_GROUPS: usize = 11;

/// A geographic point in (latitude, longitude) order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Builds a coordinate from a service payload in (longitude, latitude) order.
    pub fn from_lon_lat(lon: f64, lat: f64) -> Self {
        Self { lat, lon }
    }

    /// Returns `[lon, lat]`, the order geocoding/routing services and GeoJSON expect.
    pub fn to_lon_lat(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }

    fn is_in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

impl From<Coord<f64>> for Coordinate {
    fn from(coord: Coord<f64>) -> Self {
        Self::from_lon_lat(coord.x, coord.y)
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(coordinate: Coordinate) -> Self {
        let [x, y] = coordinate.to_lon_lat();
        Coord { x, y }
    }
}

/// Smallest box containing every point of a path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// GeoJSON `bbox` order: `[west, south, east, north]`.
    pub fn to_bbox(&self) -> [f64; 4] {
        [self.west, self.south, self.east, self.north]
    }
}

/// A polyline representing a route geometry as decoded coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Decodes an encoded path string at the given precision.
    pub fn decode(encoded: &str, precision: u32) -> Result<Self, DecodeError> {
        decode_path(encoded, precision).map(Self::new)
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bounding box used to fit a map view, or `None` for an empty path.
    pub fn bounds(&self) -> Option<Bounds> {
        let (first, rest) = self.points.split_first()?;
        let mut bounds = Bounds {
            south: first.lat,
            west: first.lon,
            north: first.lat,
            east: first.lon,
        };
        for point in rest {
            bounds.south = bounds.south.min(point.lat);
            bounds.north = bounds.north.max(point.lat);
            bounds.west = bounds.west.min(point.lon);
            bounds.east = bounds.east.max(point.lon);
        }
        Some(bounds)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("invalid polyline character {byte:#04x} at byte {position}")]
    InvalidCharacter { position: usize, byte: u8 },

    #[error("polyline is truncated at byte {position}")]
    Truncated { position: usize },

    #[error("polyline value at byte {position} cannot be decoded")]
    Malformed { position: usize },

    #[error("polyline value starting at byte {position} overflows")]
    Overflow { position: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("coordinate {index} is not a finite latitude/longitude")]
    OutOfRange { index: usize },

    #[error("coordinates cannot be encoded at this precision")]
    Unencodable,
}

/// Decodes a polyline string into coordinates, preserving encoding order.
///
/// An empty string decodes to an empty path.
pub fn decode_path(encoded: &str, precision: u32) -> Result<Vec<Coordinate>, DecodeError> {
    check_alphabet(encoded)?;

    let line = polyline::decode_polyline(encoded, precision).map_err(|err| match err {
        PolylineError::NoLongError { idx } => DecodeError::Truncated { position: idx },
        PolylineError::DecodeError { idx } => DecodeError::Malformed { position: idx },
        _ => DecodeError::Malformed {
            position: encoded.len(),
        },
    })?;

    Ok(line.0.into_iter().map(Coordinate::from).collect())
}

/// Encodes coordinates with the standard polyline algorithm.
pub fn encode_path(points: &[Coordinate], precision: u32) -> Result<String, EncodeError> {
    if let Some(index) = points.iter().position(|point| !point.is_in_range()) {
        return Err(EncodeError::OutOfRange { index });
    }

    polyline::encode_coordinates(points.iter().copied().map(Coord::from), precision)
        .map_err(|_| EncodeError::Unencodable)
}

/// Rejects bytes outside the alphabet and continuation runs too long to
/// fit a 64-bit delta before handing the string to the codec.
fn check_alphabet(encoded: &str) -> Result<(), DecodeError> {
    let mut run_start = 0;
    let mut run = 0;

    for (position, &byte) in encoded.as_bytes().iter().enumerate() {
        if !ALPHABET.contains(&byte) {
            return Err(DecodeError::InvalidCharacter { position, byte });
        }
        if byte >= FIRST_CONTINUATION {
            if run == 0 {
                run_start = position;
            }
            run += 1;
            if run > MAX_CONTINUED_GROUPS {
                return Err(DecodeError::Overflow {
                    position: run_start,
                });
            }
        } else {
            run = 0;
        }
    }

    Ok(())
}
