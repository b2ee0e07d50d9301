//! OpenRouteService directions client (feature `ors`).
//!
//! Uses the heavy-goods-vehicle profile and asks for miles directly, so the
//! first segment's `distance` needs no conversion.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, trace};

use hos_core::{Coordinate, LatLng};

use crate::{RouteError, RouteLeg, RouteProvider, RouteResult};

pub const DEFAULT_BASE_URL: &str = "https://api.openrouteservice.org";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const PROFILE: &str = "driving-hgv";

// ── Configuration ────────────────────────────────────────────────────────────

/// Connection settings shared by [`OrsRouter`] and
/// [`OrsGeocoder`][crate::OrsGeocoder].
#[derive(Clone, Debug)]
pub struct OrsConfig {
    pub api_key:      String,
    pub base_url:     String,
    pub timeout_secs: u64,
}

impl OrsConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key:      api_key.into(),
            base_url:     DEFAULT_BASE_URL.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Read `ORS_API_KEY` (required) and `ORS_BASE_URL` (optional).
    pub fn from_env() -> RouteResult<Self> {
        let api_key = std::env::var("ORS_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(RouteError::MissingApiKey)?;

        let mut config = Self::new(api_key);
        if let Ok(url) = std::env::var("ORS_BASE_URL") {
            config.base_url = url.trim_end_matches('/').to_owned();
        }
        Ok(config)
    }

    pub(crate) fn client(&self) -> RouteResult<Client> {
        let client = Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(client)
    }
}

// ── Wire types ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct DirectionsResponse {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    properties: Properties,
    geometry:   Geometry,
}

#[derive(Deserialize)]
struct Properties {
    segments: Vec<Segment>,
}

#[derive(Deserialize)]
struct Segment {
    distance: f64,
    duration: f64,
}

#[derive(Deserialize)]
struct Geometry {
    /// `[lon, lat]` or `[lon, lat, elevation]`.
    coordinates: Vec<Vec<f64>>,
}

/// Decode a GeoJSON directions body into a [`RouteLeg`].
pub fn parse_directions(
    origin:      Coordinate,
    destination: Coordinate,
    body:        &str,
) -> RouteResult<RouteLeg> {
    let resp: DirectionsResponse = serde_json::from_str(body)?;
    let feature = resp
        .features
        .into_iter()
        .next()
        .ok_or_else(|| RouteError::Malformed("no route features".into()))?;
    let segment = feature
        .properties
        .segments
        .first()
        .ok_or_else(|| RouteError::Malformed("route has no segments".into()))?;

    let polyline = feature
        .geometry
        .coordinates
        .iter()
        .map(|c| match c.as_slice() {
            [lng, lat, ..] => Ok(LatLng { lat: *lat, lng: *lng }),
            _ => Err(RouteError::Malformed(format!("bad coordinate {c:?}"))),
        })
        .collect::<RouteResult<Vec<_>>>()?;

    Ok(RouteLeg {
        origin,
        destination,
        distance_miles: segment.distance,
        duration_hours: segment.duration / 3_600.0,
        polyline,
    })
}

// ── OrsRouter ────────────────────────────────────────────────────────────────

/// Blocking OpenRouteService directions provider.
pub struct OrsRouter {
    config: OrsConfig,
    client: Client,
}

impl OrsRouter {
    pub fn new(config: OrsConfig) -> RouteResult<Self> {
        let client = config.client()?;
        Ok(Self { config, client })
    }

    fn url(&self) -> String {
        format!("{}/v2/directions/{PROFILE}/geojson", self.config.base_url)
    }
}

impl RouteProvider for OrsRouter {
    #[tracing::instrument(skip(self))]
    fn route(&self, origin: Coordinate, destination: Coordinate) -> RouteResult<RouteLeg> {
        let body = json!({
            "coordinates":  [[origin.lon, origin.lat], [destination.lon, destination.lat]],
            "units":        "mi",
            "instructions": true,
            "elevation":    false,
        });

        let url = self.url();
        trace!("POST {url}");
        let resp = self
            .client
            .post(url)
            .header("Authorization", &self.config.api_key)
            .json(&body)
            .send()?;

        let status = resp.status();
        let text = resp.text()?;
        if !status.is_success() {
            return Err(RouteError::Api { status: status.as_u16(), body: text });
        }

        let leg = parse_directions(origin, destination, &text)?;
        debug!(miles = leg.distance_miles, hours = leg.duration_hours, points = leg.polyline.len(), "ORS route");
        Ok(leg)
    }
}
