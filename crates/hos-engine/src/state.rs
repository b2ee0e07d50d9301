//! The virtual clock and hour counters threaded through a trip.

use chrono::{NaiveDate, NaiveDateTime};

use hos_core::clock::{advance, day_index, midnight};
use hos_core::CoreResult;

/// Mutable working record for one trip.
///
/// Created once per trip and passed by `&mut` to the leg simulator and the
/// orchestrator.  Time only moves forward.
///
/// | Counter            | Grows with              | Reset by          |
/// |--------------------|-------------------------|-------------------|
/// | `driving_hours`    | driving                 | break, rest       |
/// | `duty_hours`       | driving, on-duty work   | rest              |
/// | `cycle_hours`      | driving, on-duty work   | never             |
/// | `miles_since_fuel` | driving                 | fuel stop         |
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub current_time:        NaiveDateTime,
    /// Midnight of the trip's first day.
    pub trip_start:          NaiveDateTime,
    pub duty_hours:          f64,
    pub driving_hours:       f64,
    pub cycle_hours:         f64,
    pub miles_driven:        f64,
    pub miles_since_fuel:    f64,
    /// Driving hours over the whole run, never reset.
    pub total_driving_hours: f64,
    /// Driving + on-duty hours over the whole run, never reset.
    pub total_on_duty_hours: f64,
}

impl SimulationState {
    /// Fresh state with the clock at midnight of `start`'s date and
    /// `cycle_hours` already used in the current cycle.
    pub fn new(start: NaiveDateTime, cycle_hours: f64) -> Self {
        let trip_start = midnight(start);
        Self {
            current_time: trip_start,
            trip_start,
            duty_hours: 0.0,
            driving_hours: 0.0,
            cycle_hours,
            miles_driven: 0.0,
            miles_since_fuel: 0.0,
            total_driving_hours: 0.0,
            total_on_duty_hours: 0.0,
        }
    }

    #[inline]
    pub fn start_date(&self) -> NaiveDate {
        self.trip_start.date()
    }

    /// Day index of the current clock position.
    #[inline]
    pub fn day_index(&self) -> u32 {
        day_index(self.start_date(), self.current_time)
    }

    /// Jump the clock forward to `t` without touching any counter.
    /// Times in the past are ignored.
    pub fn wait_until(&mut self, t: NaiveDateTime) {
        if t > self.current_time {
            self.current_time = t;
        }
    }

    /// On-duty, not-driving work (pickup, dropoff, fueling, breaks).
    pub fn work(&mut self, hours: f64) -> CoreResult<()> {
        self.current_time = advance(self.current_time, hours)?;
        self.duty_hours += hours;
        self.cycle_hours += hours;
        self.total_on_duty_hours += hours;
        Ok(())
    }

    pub fn drive(&mut self, hours: f64, miles: f64) -> CoreResult<()> {
        self.current_time = advance(self.current_time, hours)?;
        self.driving_hours += hours;
        self.duty_hours += hours;
        self.cycle_hours += hours;
        self.total_driving_hours += hours;
        self.total_on_duty_hours += hours;
        self.miles_driven += miles;
        self.miles_since_fuel += miles;
        Ok(())
    }

    /// A qualifying rest: closes the shift, opens a fresh duty window.
    pub fn rest(&mut self, hours: f64) -> CoreResult<()> {
        self.current_time = advance(self.current_time, hours)?;
        self.duty_hours = 0.0;
        self.driving_hours = 0.0;
        Ok(())
    }

    /// A break resets the driving clock only; duty and cycle keep running.
    pub fn take_break(&mut self, hours: f64) -> CoreResult<()> {
        self.work(hours)?;
        self.driving_hours = 0.0;
        Ok(())
    }

    pub fn refuel(&mut self, hours: f64) -> CoreResult<()> {
        self.work(hours)?;
        self.miles_since_fuel = 0.0;
        Ok(())
    }
}
