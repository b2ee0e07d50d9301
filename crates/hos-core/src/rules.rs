//! Hours-of-Service rule set.
//!
//! All thresholds the engine enforces live here rather than as constants in
//! the simulator, so alternate rule sets (short-haul exemptions, passenger
//! carriers, team driving) can be swapped in without touching the engine.
//!
//! Typically loaded from a JSON file by the application crate; fields that
//! are absent take the property-carrier 70-hour/8-day values.

use crate::{CoreError, CoreResult};

/// Thresholds and assumed durations for one HOS rule set.
///
/// Hours are fractional (`0.5` = 30 minutes).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HosRules {
    /// Maximum driving hours in one shift.
    pub max_driving_hours: f64,

    /// Length of the duty window that opens when a shift starts.
    pub max_duty_window: f64,

    /// Length of the rest that closes a shift and resets the duty window.
    pub min_off_duty: f64,

    /// Cumulative driving after which a break is mandatory.
    pub break_required_after: f64,

    pub break_duration: f64,

    /// Rolling cycle cap.  Reported, never enforced.
    pub max_cycle_hours: f64,

    pub fuel_interval_miles: f64,
    pub fuel_duration: f64,
    pub pickup_duration: f64,
    pub dropoff_duration: f64,

    /// Planning speed used to convert miles to driving hours.
    pub avg_speed_mph: f64,
}

impl Default for HosRules {
    /// FMCSA property-carrying driver, 70-hour/8-day cycle.
    fn default() -> Self {
        Self {
            max_driving_hours:    11.0,
            max_duty_window:      14.0,
            min_off_duty:         10.0,
            break_required_after: 8.0,
            break_duration:       0.5,
            max_cycle_hours:      70.0,
            fuel_interval_miles:  1_000.0,
            fuel_duration:        0.5,
            pickup_duration:      1.0,
            dropoff_duration:     1.0,
            avg_speed_mph:        55.0,
        }
    }
}

impl HosRules {
    /// Reject rule sets the leg simulator cannot terminate on.
    ///
    /// A zero speed, interval, or threshold would stall the drive loop, so
    /// every rate and threshold must be finite and strictly positive.
    /// Durations may be zero but not negative.
    pub fn validate(&self) -> CoreResult<()> {
        let positive = [
            ("max_driving_hours", self.max_driving_hours),
            ("max_duty_window", self.max_duty_window),
            ("break_required_after", self.break_required_after),
            ("max_cycle_hours", self.max_cycle_hours),
            ("fuel_interval_miles", self.fuel_interval_miles),
            ("avg_speed_mph", self.avg_speed_mph),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(CoreError::Config(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }

        let durations = [
            ("min_off_duty", self.min_off_duty),
            ("break_duration", self.break_duration),
            ("fuel_duration", self.fuel_duration),
            ("pickup_duration", self.pickup_duration),
            ("dropoff_duration", self.dropoff_duration),
        ];
        for (name, value) in durations {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::Config(format!(
                    "{name} must be zero or positive, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Driving hours needed to cover `miles` at the planning speed.
    #[inline]
    pub fn hours_for_miles(&self, miles: f64) -> f64 {
        miles / self.avg_speed_mph
    }

    /// Miles covered in `hours` of driving at the planning speed.
    #[inline]
    pub fn miles_for_hours(&self, hours: f64) -> f64 {
        hours * self.avg_speed_mph
    }
}
