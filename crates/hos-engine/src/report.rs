//! The trip report returned by [`TripSimulator::simulate_trip`].
//!
//! [`TripSimulator::simulate_trip`]: crate::TripSimulator::simulate_trip

use serde::Serialize;

use hos_core::LatLng;
use hos_logbook::{DailyLog, Event};

use crate::{BreakStop, FuelStop, RestStop, ServiceStop};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripReport {
    pub route:       RouteSummary,
    pub stops:       Stops,
    pub timeline:    Timeline,
    pub hos_summary: HosSummary,
    pub logs:        Vec<DailyLog>,
    /// Raw event stream the logs were compiled from.
    pub events:      Vec<Event>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    /// Both legs, one decimal.
    pub distance_miles:    f64,
    /// Total distance at the average speed, one decimal.
    pub duration_hours:    f64,
    /// Leg 1 polyline followed by leg 2's; the shared pickup point repeats.
    pub route_coordinates: Vec<LatLng>,
    pub segments:          Vec<RouteSegment>,
}

/// One provider leg as reported by the router.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSegment {
    pub from:           LatLng,
    pub to:             LatLng,
    pub distance_miles: f64,
    pub duration_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stops {
    pub pickup:      ServiceStop,
    pub dropoff:     ServiceStop,
    pub fuel_stops:  Vec<FuelStop>,
    pub rest_stops:  Vec<RestStop>,
    pub break_stops: Vec<BreakStop>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timeline {
    /// `HH:MM`.
    pub start_time:           String,
    /// `HH:MM` of the final event.
    pub estimated_completion: String,
    /// Distinct calendar days covered by the logs.
    pub total_days:           usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HosSummary {
    /// Cycle cap minus `used_70hr_cycle`; negative once the cap is exceeded.
    pub remaining_70hr_cycle: f64,
    /// Hours already used at start plus every on-duty hour of this trip.
    pub used_70hr_cycle:      f64,
    pub driving_time_used:    f64,
    pub on_duty_time_used:    f64,
    pub cycle_limit_exceeded: bool,
}
