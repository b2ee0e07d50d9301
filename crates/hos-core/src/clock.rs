//! Clock helpers for the virtual trip clock.
//!
//! The engine reasons in fractional hours while timestamps are
//! `chrono::NaiveDateTime` (a trip is planned in the driver's home-terminal
//! time, so no zone is attached).  Conversions round to whole microseconds,
//! which keeps repeated runs bit-identical.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::{CoreError, CoreResult};

const MICROS_PER_HOUR: f64 = 3_600_000_000.0;

/// Convert fractional hours to a `TimeDelta`, rounded to the microsecond.
#[inline]
pub fn hours(h: f64) -> TimeDelta {
    TimeDelta::microseconds((h * MICROS_PER_HOUR).round() as i64)
}

/// Convert a `TimeDelta` to fractional hours.
#[inline]
pub fn as_hours(d: TimeDelta) -> f64 {
    match d.num_microseconds() {
        Some(us) => us as f64 / MICROS_PER_HOUR,
        None     => d.num_seconds() as f64 / 3_600.0,
    }
}

/// `t + h` hours, or `CoreError::ClockOverflow` past the representable range.
pub fn advance(t: NaiveDateTime, h: f64) -> CoreResult<NaiveDateTime> {
    t.checked_add_signed(hours(h))
        .ok_or(CoreError::ClockOverflow { at: t, hours: h })
}

/// Midnight at the start of `t`'s calendar day.
#[inline]
pub fn midnight(t: NaiveDateTime) -> NaiveDateTime {
    t.date().and_time(NaiveTime::MIN)
}

/// Midnight at the start of the day after `t`'s calendar day.
#[inline]
pub fn next_midnight(t: NaiveDateTime) -> Option<NaiveDateTime> {
    t.date().succ_opt().map(|d| d.and_time(NaiveTime::MIN))
}

/// 1-based day index of `t` relative to `start`.
///
/// Derived from the calendar date of `t` alone, so any two timestamps on the
/// same date share an index regardless of how many rests happened between.
#[inline]
pub fn day_index(start: NaiveDate, t: NaiveDateTime) -> u32 {
    let days = t.date().signed_duration_since(start).num_days();
    (days + 1).max(1) as u32
}

/// `HH:MM`, as printed on log sheets.
#[inline]
pub fn fmt_hhmm(t: NaiveDateTime) -> String {
    t.format("%H:%M").to_string()
}

/// `MM/DD/YYYY`, as printed in log-sheet headers.
#[inline]
pub fn fmt_date(d: NaiveDate) -> String {
    d.format("%m/%d/%Y").to_string()
}

/// Round to one decimal place.
#[inline]
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
