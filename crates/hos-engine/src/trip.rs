//! `TripSimulator` — start → pickup → dropoff, then the daily logs.

use chrono::{Local, NaiveDateTime, NaiveTime};
use tracing::{info, warn};

use hos_core::clock::{fmt_hhmm, round1};
use hos_core::{Coordinate, DutyStatus, HosRules};
use hos_logbook::{compile_daily_logs, EventLog, LogbookOptions};
use hos_route::{RouteLeg, RouteProvider};

use crate::report::{HosSummary, RouteSegment, RouteSummary, Stops, Timeline, TripReport};
use crate::{EngineResult, LegSimulator, ServiceStop, SimulationState, StopLog, TripSimulatorBuilder};

/// Hour of day a trip starts when the caller gives no start time.
const DEFAULT_START_HOUR: u32 = 6;

/// Plans HOS-compliant trips over routes from `R`.
///
/// Each [`simulate_trip`](Self::simulate_trip) call owns a fresh
/// [`SimulationState`]; the simulator itself is never mutated, so one
/// instance can serve any number of requests.
pub struct TripSimulator<R: RouteProvider> {
    pub(crate) rules:   HosRules,
    pub(crate) router:  R,
    pub(crate) logbook: LogbookOptions,
}

impl<R: RouteProvider> TripSimulator<R> {
    pub fn builder(router: R) -> TripSimulatorBuilder<R> {
        TripSimulatorBuilder::new(router)
    }

    /// Plan a trip from `current` through `pickup` to `dropoff`.
    ///
    /// `current_cycle_hours` is the on-duty time already used in the
    /// driver's cycle; it is reported against, never enforced.  A missing
    /// `start_time` means 06:00 today, local time.
    ///
    /// # Errors
    ///
    /// Any routing failure the provider could not recover from; no partial
    /// report is produced.
    pub fn simulate_trip(
        &self,
        current:             Coordinate,
        pickup:              Coordinate,
        dropoff:             Coordinate,
        current_cycle_hours: f64,
        start_time:          Option<NaiveDateTime>,
    ) -> EngineResult<TripReport> {
        let start_time = start_time.unwrap_or_else(default_start);
        let rules = &self.rules;

        let to_pickup = self.router.route(current, pickup)?;
        let to_dropoff = self.router.route(pickup, dropoff)?;

        let mut state = SimulationState::new(start_time, current_cycle_hours);
        let mut log = EventLog::new(state.start_date());
        let mut stops = StopLog::default();
        let legs = LegSimulator::new(rules);

        // ── Log start ─────────────────────────────────────────────────────
        if start_time > state.current_time {
            log.append(state.current_time, DutyStatus::OffDuty, "Off Duty", current, 0.0);
            state.wait_until(start_time);
        }
        log.append(state.current_time, DutyStatus::OnDuty, "Trip Start", current, 0.0);

        // ── Leg 1 and pickup ──────────────────────────────────────────────
        legs.run(&to_pickup, "to pickup", &mut state, &mut log, &mut stops)?;
        legs.rest_if_due(pickup, &mut state, &mut log, &mut stops)?;
        log.append(state.current_time, DutyStatus::OnDuty, "Pickup - Loading", pickup, 0.0);
        state.work(rules.pickup_duration)?;

        // ── Leg 2 and dropoff ─────────────────────────────────────────────
        legs.run(&to_dropoff, "to dropoff", &mut state, &mut log, &mut stops)?;
        legs.rest_if_due(dropoff, &mut state, &mut log, &mut stops)?;
        log.append(state.current_time, DutyStatus::OnDuty, "Dropoff - Unloading", dropoff, 0.0);
        state.work(rules.dropoff_duration)?;

        log.append(state.current_time, DutyStatus::OffDuty, "Trip Complete", dropoff, 0.0);

        // ── Report ────────────────────────────────────────────────────────
        let used = state.cycle_hours;
        let exceeded = used > rules.max_cycle_hours;
        if exceeded {
            warn!(
                used,
                cap = rules.max_cycle_hours,
                "trip exceeds the on-duty cycle limit"
            );
        }

        let logs = compile_daily_logs(log.events(), &self.logbook);
        let distance = to_pickup.distance_miles + to_dropoff.distance_miles;

        info!(
            miles = round1(distance),
            days = logs.len(),
            fuel = stops.fuel.len(),
            rests = stops.rest.len(),
            breaks = stops.breaks.len(),
            cycle_used = used,
            "trip planned"
        );

        let route = RouteSummary {
            distance_miles:    round1(distance),
            duration_hours:    round1(rules.hours_for_miles(distance)),
            route_coordinates: to_pickup.polyline.iter().chain(&to_dropoff.polyline).copied().collect(),
            segments:          vec![segment(&to_pickup), segment(&to_dropoff)],
        };
        let timeline = Timeline {
            start_time:           fmt_hhmm(start_time),
            estimated_completion: fmt_hhmm(state.current_time),
            // One sheet per calendar day touched.
            total_days:           logs.len(),
        };
        let hos_summary = HosSummary {
            remaining_70hr_cycle: rules.max_cycle_hours - used,
            used_70hr_cycle:      used,
            driving_time_used:    round1(state.total_driving_hours),
            on_duty_time_used:    round1(state.total_on_duty_hours),
            cycle_limit_exceeded: exceeded,
        };
        let StopLog { fuel, rest, breaks } = stops;

        Ok(TripReport {
            route,
            stops: Stops {
                pickup:      ServiceStop::new(pickup, "Pickup Location", rules.pickup_duration),
                dropoff:     ServiceStop::new(dropoff, "Dropoff Location", rules.dropoff_duration),
                fuel_stops:  fuel,
                rest_stops:  rest,
                break_stops: breaks,
            },
            timeline,
            hos_summary,
            logs,
            events: log.into_events(),
        })
    }
}

fn segment(leg: &RouteLeg) -> RouteSegment {
    RouteSegment {
        from:           leg.origin.to_lat_lng(),
        to:             leg.destination.to_lat_lng(),
        distance_miles: round1(leg.distance_miles),
        duration_hours: round1(leg.duration_hours),
    }
}

fn default_start() -> NaiveDateTime {
    let today = Local::now().date_naive();
    today
        .and_hms_opt(DEFAULT_START_HOUR, 0, 0)
        .unwrap_or_else(|| today.and_time(NaiveTime::MIN))
}
