//! Stop records collected while a trip is simulated.

use serde::Serialize;

use hos_core::Coordinate;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuelStop {
    pub lat:      f64,
    pub lng:      f64,
    pub name:     String,
    /// Cumulative trip miles at the stop, whole miles.
    pub distance: f64,
    pub duration: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestStop {
    pub lat:      f64,
    pub lng:      f64,
    pub name:     String,
    /// `HH:MM` the rest begins.
    pub time:     String,
    pub duration: f64,
    /// Day index the rest begins on.
    pub day:      u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakStop {
    pub lat:      f64,
    pub lng:      f64,
    pub name:     String,
    pub time:     String,
    pub duration: f64,
    #[serde(rename = "type")]
    pub kind:     String,
}

/// Pickup or dropoff.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceStop {
    pub lat:      f64,
    pub lng:      f64,
    pub name:     String,
    pub duration: f64,
}

impl ServiceStop {
    pub fn new(at: Coordinate, name: impl Into<String>, duration: f64) -> Self {
        Self { lat: at.lat, lng: at.lon, name: name.into(), duration }
    }
}

/// Stops inserted by the leg simulator, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StopLog {
    pub fuel:   Vec<FuelStop>,
    pub rest:   Vec<RestStop>,
    pub breaks: Vec<BreakStop>,
}
