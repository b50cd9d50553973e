//! Geocode → route → normalize orchestration.
//!
//! The planner holds what is currently on display: the origin/destination
//! markers and the last normalized route. A calculation either replaces both
//! or leaves them untouched.

use thiserror::Error;
use tracing::{info, warn};

use crate::normalize::{DisplayRoute, NormalizeError, normalize};
use crate::polyline::Coordinate;
use crate::traits::{Geocoder, ProviderError, RouteProvider};

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("both origin and destination are required")]
    MissingAddress,

    #[error("no coordinates found for {0:?}")]
    AddressNotFound(String),

    #[error("geocoding {address:?} failed: {source}")]
    Geocoding {
        address: String,
        #[source]
        source: ProviderError,
    },

    #[error("routing failed: {0}")]
    Routing(#[source] ProviderError),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

pub struct RoutePlanner<G, P> {
    geocoder: G,
    provider: P,
    markers: Vec<Coordinate>,
    route: Option<DisplayRoute>,
}

impl<G, P> RoutePlanner<G, P>
where
    G: Geocoder + Sync,
    P: RouteProvider,
{
    pub fn new(geocoder: G, provider: P) -> Self {
        Self {
            geocoder,
            provider,
            markers: Vec::new(),
            route: None,
        }
    }

    /// Computes and stores the route between two addresses.
    ///
    /// On failure the previously displayed route and markers are kept.
    pub fn calculate(
        &mut self,
        origin: &str,
        destination: &str,
    ) -> Result<&DisplayRoute, PlannerError> {
        match self.resolve(origin.trim(), destination.trim()) {
            Ok((markers, route)) => {
                info!(
                    origin,
                    destination,
                    points = route.path.len(),
                    segments = route.segments.len(),
                    distance_meters = route.summary.distance_meters,
                    "route calculated"
                );
                self.markers = markers;
                Ok(self.route.insert(route))
            }
            Err(err) => {
                warn!(origin, destination, error = %err, "route calculation failed");
                Err(err)
            }
        }
    }

    /// Forgets the displayed route and markers.
    pub fn clear(&mut self) {
        self.markers.clear();
        self.route = None;
    }

    pub fn route(&self) -> Option<&DisplayRoute> {
        self.route.as_ref()
    }

    /// Origin and destination of the displayed route, in that order.
    pub fn markers(&self) -> &[Coordinate] {
        &self.markers
    }

    fn resolve(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<(Vec<Coordinate>, DisplayRoute), PlannerError> {
        if origin.is_empty() || destination.is_empty() {
            return Err(PlannerError::MissingAddress);
        }

        let geocoder = &self.geocoder;
        let (from, to) = rayon::join(
            || locate(geocoder, origin),
            || locate(geocoder, destination),
        );
        let (from, to) = (from?, to?);

        let document = self
            .provider
            .route(from, to)
            .map_err(PlannerError::Routing)?;
        let route = normalize(&document)?;

        Ok((vec![from, to], route))
    }
}

fn locate<G: Geocoder>(geocoder: &G, address: &str) -> Result<Coordinate, PlannerError> {
    geocoder
        .geocode(address)
        .map_err(|source| PlannerError::Geocoding {
            address: address.to_string(),
            source,
        })?
        .ok_or_else(|| PlannerError::AddressNotFound(address.to_string()))
}
