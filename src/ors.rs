//! OpenRouteService HTTP adapter for geocoding and directions.

use reqwest::blocking::Response;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::polyline::Coordinate;
use crate::traits::{Geocoder, ProviderError, RouteProvider};

pub const API_KEY_VAR: &str = "ORS_API_KEY";
pub const BASE_URL_VAR: &str = "ORS_BASE_URL";
pub const PROFILE_VAR: &str = "ORS_PROFILE";
pub const TIMEOUT_VAR: &str = "ORS_TIMEOUT_SECS";

#[derive(Debug, Clone)]
pub struct OrsConfig {
    pub base_url: String,
    pub profile: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl Default for OrsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openrouteservice.org".to_string(),
            profile: "driving-car".to_string(),
            api_key: String::new(),
            timeout_secs: 10,
        }
    }
}

impl OrsConfig {
    /// Reads the configuration from the process environment.
    ///
    /// `ORS_API_KEY` is required; `ORS_BASE_URL`, `ORS_PROFILE` and
    /// `ORS_TIMEOUT_SECS` override the defaults.
    pub fn from_env() -> Result<Self, OrsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, OrsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_key = lookup(API_KEY_VAR)
            .filter(|key| !key.trim().is_empty())
            .ok_or(OrsError::MissingApiKey)?;

        let timeout_secs = match lookup(TIMEOUT_VAR) {
            Some(raw) => raw.trim().parse().map_err(|_| {
                OrsError::InvalidConfig(format!("{} must be whole seconds, got {:?}", TIMEOUT_VAR, raw))
            })?,
            None => defaults.timeout_secs,
        };

        Ok(Self {
            base_url: lookup(BASE_URL_VAR)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            profile: lookup(PROFILE_VAR).unwrap_or(defaults.profile),
            api_key,
            timeout_secs,
        })
    }
}

#[derive(Debug, Error)]
pub enum OrsError {
    #[error("ORS_API_KEY is not set")]
    MissingApiKey,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {code} (HTTP {status}): {message}")]
    Api {
        status: u16,
        code: u32,
        message: String,
    },

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

#[derive(Debug, Clone)]
pub struct OrsClient {
    config: OrsConfig,
    client: reqwest::blocking::Client,
}

impl OrsClient {
    pub fn new(config: OrsConfig) -> Result<Self, OrsError> {
        if config.api_key.trim().is_empty() {
            return Err(OrsError::MissingApiKey);
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &OrsConfig {
        &self.config
    }

    /// Best geocoding match for an address.
    pub fn geocode_address(&self, address: &str) -> Result<Option<Coordinate>, OrsError> {
        let url = format!("{}/geocode/search", self.config.base_url);
        debug!(address, "geocoding");

        let response = self
            .client
            .get(url)
            .query(&[("api_key", self.config.api_key.as_str()), ("text", address)])
            .send()?;
        let body: GeocodeResponse = check_status(response)?.json()?;

        let Some(feature) = body.features.into_iter().next() else {
            debug!(address, "no geocoding match");
            return Ok(None);
        };
        match feature.geometry.coordinates.as_slice() {
            [lon, lat, ..] => Ok(Some(Coordinate::from_lon_lat(*lon, *lat))),
            other => Err(OrsError::UnexpectedResponse(format!(
                "geocoding feature has {} coordinates",
                other.len()
            ))),
        }
    }

    /// Raw directions document between two points.
    pub fn directions(&self, from: Coordinate, to: Coordinate) -> Result<Value, OrsError> {
        let url = format!(
            "{}/v2/directions/{}",
            self.config.base_url, self.config.profile
        );
        debug!(?from, ?to, profile = %self.config.profile, "requesting directions");

        let response = self
            .client
            .post(url)
            .header("Authorization", &self.config.api_key)
            .json(&DirectionsRequest::between(from, to))
            .send()?;

        Ok(check_status(response)?.json()?)
    }
}

impl Geocoder for OrsClient {
    fn geocode(&self, address: &str) -> Result<Option<Coordinate>, ProviderError> {
        Ok(self.geocode_address(address)?)
    }
}

impl RouteProvider for OrsClient {
    fn route(&self, from: Coordinate, to: Coordinate) -> Result<Value, ProviderError> {
        Ok(self.directions(from, to)?)
    }
}

fn check_status(response: Response) -> Result<Response, OrsError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text()?;
    let err = match serde_json::from_str::<OrsErrorPayload>(&body) {
        Ok(payload) => OrsError::Api {
            status: status.as_u16(),
            code: payload.error.code,
            message: payload.error.message,
        },
        Err(_) => OrsError::Status {
            status: status.as_u16(),
            body,
        },
    };
    warn!(%status, error = %err, "ORS request rejected");
    Err(err)
}

#[derive(Debug, Serialize)]
struct DirectionsRequest {
    coordinates: [[f64; 2]; 2],
    elevation: bool,
    instructions: bool,
    maneuvers: bool,
}

impl DirectionsRequest {
    fn between(from: Coordinate, to: Coordinate) -> Self {
        Self {
            coordinates: [from.to_lon_lat(), to.to_lon_lat()],
            elevation: false,
            instructions: true,
            maneuvers: true,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    coordinates: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct OrsErrorPayload {
    error: OrsErrorDetail,
}

#[derive(Debug, Deserialize)]
struct OrsErrorDetail {
    code: u32,
    message: String,
}
