//! Drive one leg under the HOS rules.
//!
//! # State machine
//!
//! ```text
//! while remaining > 0:
//!   duty ≥ 14 or driving ≥ 11
//!                      → 10 h SLEEPER_BERTH rest   (duty = driving = 0)
//!   else driving ≥ 8   → 30 min ON_DUTY break      (driving = 0)
//!   available = min(11 − driving, 14 − duty, 8 − driving mod 8)
//!   miles     = min(available × 55, remaining)
//!   crosses the 1000-mile fuel mark?
//!     yes → DRIVING to the mark, rest if the window closed there,
//!           30 min ON_DUTY fuel stop, re-loop
//!     no  → DRIVING for `miles`
//! ```
//!
//! Numbers shown are the defaults; the live values come from [`HosRules`].
//! The cycle cap is never a stopping condition.

use tracing::{debug, trace};

use hos_core::clock::fmt_hhmm;
use hos_core::{Coordinate, DutyStatus, HosRules};
use hos_logbook::EventLog;
use hos_route::RouteLeg;

use crate::{BreakStop, EngineResult, FuelStop, RestStop, SimulationState, StopLog};

/// Below this many hours a counter is treated as having reached its limit.
const HOURS_EPSILON: f64 = 1e-9;

/// Legs shorter than this many remaining miles are complete.
const MILES_EPSILON: f64 = 1e-9;

/// What one leg pass inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LegOutcome {
    pub driving_segments: usize,
    pub breaks:           usize,
    pub rests:            usize,
    pub fuel_stops:       usize,
    pub miles:            f64,
}

/// Advances a [`SimulationState`] across one leg.
///
/// Borrowing the rules keeps one simulator cheap to build per trip.
pub struct LegSimulator<'r> {
    rules: &'r HosRules,
}

impl<'r> LegSimulator<'r> {
    pub fn new(rules: &'r HosRules) -> Self {
        Self { rules }
    }

    /// Drive `leg`, appending events to `log` and stops to `stops`.
    ///
    /// `label` names the leg in driving-event descriptions
    /// (`"Driving (to pickup)"`).  A leg of zero or negative length appends
    /// nothing.
    pub fn run(
        &self,
        leg:   &RouteLeg,
        label: &str,
        state: &mut SimulationState,
        log:   &mut EventLog,
        stops: &mut StopLog,
    ) -> EngineResult<LegOutcome> {
        let rules = self.rules;
        let distance = leg.distance_miles;
        let description = format!("Driving ({label})");
        let path = leg.path();

        let mut outcome = LegOutcome::default();
        let mut remaining = distance;
        let mut covered = 0.0;

        while remaining > MILES_EPSILON {
            let here = path.position_at(covered / distance);

            if self.rest_if_due(here, state, log, stops)? {
                outcome.rests += 1;
            } else if state.driving_hours >= rules.break_required_after - HOURS_EPSILON {
                self.take_break(here, state, log, stops)?;
                outcome.breaks += 1;
            }

            let available = (rules.max_driving_hours - state.driving_hours)
                .min(rules.max_duty_window - state.duty_hours)
                .min(rules.break_required_after - state.driving_hours % rules.break_required_after);
            if available <= HOURS_EPSILON {
                // A break ran into the end of the duty window; rest first.
                continue;
            }

            let drive_miles = rules.miles_for_hours(available).min(remaining);

            if state.miles_since_fuel + drive_miles >= rules.fuel_interval_miles - MILES_EPSILON {
                let to_fuel = (rules.fuel_interval_miles - state.miles_since_fuel).clamp(0.0, drive_miles);
                if to_fuel > 0.0 {
                    self.drive(&description, here, to_fuel, state, log)?;
                    outcome.driving_segments += 1;
                    covered += to_fuel;
                    remaining -= to_fuel;
                }
                let pump = path.position_at(covered / distance);
                if self.rest_if_due(pump, state, log, stops)? {
                    outcome.rests += 1;
                }
                self.refuel(pump, state, log, stops)?;
                outcome.fuel_stops += 1;
                continue;
            }

            self.drive(&description, here, drive_miles, state, log)?;
            outcome.driving_segments += 1;
            covered += drive_miles;
            remaining -= drive_miles;
        }

        outcome.miles = covered;
        debug!(
            leg = label,
            miles = covered,
            segments = outcome.driving_segments,
            breaks = outcome.breaks,
            rests = outcome.rests,
            fuel = outcome.fuel_stops,
            "leg simulated"
        );
        Ok(outcome)
    }

    /// `true` once the duty window is used up or the driving limit reached.
    fn shift_over(&self, state: &SimulationState) -> bool {
        state.duty_hours >= self.rules.max_duty_window - HOURS_EPSILON
            || state.driving_hours >= self.rules.max_driving_hours - HOURS_EPSILON
    }

    /// Insert the qualifying rest at `at` if the shift is over.
    ///
    /// Called before every on-duty activity, so no activity starts past the
    /// duty window.
    pub(crate) fn rest_if_due(
        &self,
        at:    Coordinate,
        state: &mut SimulationState,
        log:   &mut EventLog,
        stops: &mut StopLog,
    ) -> EngineResult<bool> {
        if !self.shift_over(state) {
            return Ok(false);
        }
        self.rest(at, state, log, stops)?;
        Ok(true)
    }

    // ── Activities ────────────────────────────────────────────────────────

    fn drive(
        &self,
        description: &str,
        at:          Coordinate,
        miles:       f64,
        state:       &mut SimulationState,
        log:         &mut EventLog,
    ) -> EngineResult<()> {
        let hours = self.rules.hours_for_miles(miles);
        log.append(state.current_time, DutyStatus::Driving, description, at, miles);
        trace!(time = %state.current_time, miles, hours, "driving segment");
        state.drive(hours, miles)?;
        Ok(())
    }

    fn rest(
        &self,
        at:    Coordinate,
        state: &mut SimulationState,
        log:   &mut EventLog,
        stops: &mut StopLog,
    ) -> EngineResult<()> {
        let hours = self.rules.min_off_duty;
        log.append(state.current_time, DutyStatus::SleeperBerth, format!("{hours}-hour Rest"), at, 0.0);
        stops.rest.push(RestStop {
            lat:      at.lat,
            lng:      at.lon,
            name:     format!("{hours}-Hour Rest"),
            time:     fmt_hhmm(state.current_time),
            duration: hours,
            day:      state.day_index(),
        });
        debug!(time = %state.current_time, duty = state.duty_hours, "rest inserted");
        state.rest(hours)?;
        Ok(())
    }

    fn take_break(
        &self,
        at:    Coordinate,
        state: &mut SimulationState,
        log:   &mut EventLog,
        stops: &mut StopLog,
    ) -> EngineResult<()> {
        let hours = self.rules.break_duration;
        let minutes = (hours * 60.0).round();
        log.append(state.current_time, DutyStatus::OnDuty, format!("{minutes}-min Break"), at, 0.0);
        stops.breaks.push(BreakStop {
            lat:      at.lat,
            lng:      at.lon,
            name:     format!("{minutes}-Minute Break"),
            time:     fmt_hhmm(state.current_time),
            duration: hours,
            kind:     format!("{minutes}-min break"),
        });
        debug!(time = %state.current_time, driving = state.driving_hours, "break inserted");
        state.take_break(hours)?;
        Ok(())
    }

    fn refuel(
        &self,
        at:    Coordinate,
        state: &mut SimulationState,
        log:   &mut EventLog,
        stops: &mut StopLog,
    ) -> EngineResult<()> {
        let hours = self.rules.fuel_duration;
        log.append(state.current_time, DutyStatus::OnDuty, "Fuel Stop", at, 0.0);
        stops.fuel.push(FuelStop {
            lat:      at.lat,
            lng:      at.lon,
            name:     "Fuel Stop".to_owned(),
            distance: state.miles_driven.round(),
            duration: hours,
        });
        debug!(time = %state.current_time, miles = state.miles_driven, "fuel stop inserted");
        state.refuel(hours)?;
        Ok(())
    }
}
