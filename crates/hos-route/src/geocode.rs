//! Geocoding autocomplete passthrough (feature `ors`).
//!
//! Not used by the engine: front ends call this to turn free text into the
//! `[lon, lat]` pairs the trip simulator takes.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{OrsConfig, RouteError, RouteResult};

/// One autocomplete suggestion, flattened for front ends.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub label:       Option<String>,
    /// `[lon, lat]`.
    pub coordinates: Vec<f64>,
    pub name:        Option<String>,
    pub country:     Option<String>,
    pub region:      Option<String>,
    pub locality:    Option<String>,
}

#[derive(Deserialize)]
struct AutocompleteResponse {
    #[serde(default)]
    features: Vec<GeoFeature>,
}

#[derive(Deserialize)]
struct GeoFeature {
    geometry:   GeoPoint,
    properties: GeoProperties,
}

#[derive(Deserialize)]
struct GeoPoint {
    #[serde(default)]
    coordinates: Vec<f64>,
}

#[derive(Deserialize)]
struct GeoProperties {
    label:    Option<String>,
    name:     Option<String>,
    country:  Option<String>,
    region:   Option<String>,
    locality: Option<String>,
}

/// Decode a Pelias autocomplete body.  A body without `features` yields an
/// empty list.
pub fn parse_autocomplete(body: &str) -> RouteResult<Vec<Suggestion>> {
    let resp: AutocompleteResponse = serde_json::from_str(body)?;
    Ok(resp
        .features
        .into_iter()
        .map(|f| Suggestion {
            label:       f.properties.label,
            coordinates: f.geometry.coordinates,
            name:        f.properties.name,
            country:     f.properties.country,
            region:      f.properties.region,
            locality:    f.properties.locality,
        })
        .collect())
}

/// Blocking client for the OpenRouteService autocomplete endpoint.
pub struct OrsGeocoder {
    config: OrsConfig,
    client: Client,
}

impl OrsGeocoder {
    pub fn new(config: OrsConfig) -> RouteResult<Self> {
        let client = config.client()?;
        Ok(Self { config, client })
    }

    #[tracing::instrument(skip(self))]
    pub fn autocomplete(&self, query: &str) -> RouteResult<Vec<Suggestion>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(RouteError::EmptyQuery);
        }

        let resp = self
            .client
            .get(format!("{}/geocode/autocomplete", self.config.base_url))
            .query(&[("api_key", self.config.api_key.as_str()), ("text", query)])
            .send()?;

        let status = resp.status();
        let text = resp.text()?;
        if !status.is_success() {
            return Err(RouteError::Api { status: status.as_u16(), body: text });
        }

        let suggestions = parse_autocomplete(&text)?;
        debug!(count = suggestions.len(), "autocomplete");
        Ok(suggestions)
    }
}
