//! Collaborator interfaces for the external services.
//!
//! Both services speak (longitude, latitude); implementations convert at the
//! boundary so callers only ever see [`Coordinate`] in (latitude, longitude).

use serde_json::Value;

use crate::polyline::Coordinate;

/// Error returned by a collaborator.
pub type ProviderError = Box<dyn std::error::Error + Send + Sync>;

/// Resolves free-text addresses to coordinates.
pub trait Geocoder {
    /// Best match for the address, or `None` when nothing matches.
    fn geocode(&self, address: &str) -> Result<Option<Coordinate>, ProviderError>;
}

/// Requests a route between two points.
pub trait RouteProvider {
    /// Raw directions document, ready for [`crate::normalize::normalize`].
    fn route(&self, from: Coordinate, to: Coordinate) -> Result<Value, ProviderError>;
}

impl<T: Geocoder + ?Sized> Geocoder for &T {
    fn geocode(&self, address: &str) -> Result<Option<Coordinate>, ProviderError> {
        (**self).geocode(address)
    }
}

impl<T: RouteProvider + ?Sized> RouteProvider for &T {
    fn route(&self, from: Coordinate, to: Coordinate) -> Result<Value, ProviderError> {
        (**self).route(from, to)
    }
}
