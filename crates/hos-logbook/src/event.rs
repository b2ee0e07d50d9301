//! Duty-status events and the append-only `EventLog`.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use hos_core::clock::day_index;
use hos_core::{Coordinate, DutyStatus};

/// One duty-status change.
///
/// The event opens a span that lasts until the next event's `time`; the
/// last event of a log has no duration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub time:        NaiveDateTime,
    pub status:      DutyStatus,
    pub description: String,
    pub location:    Coordinate,
    /// 1-based calendar-day index relative to the trip start date.
    pub day:         u32,
    /// Exact miles driven during this event's span; zero unless `Driving`.
    pub miles:       f64,
}

/// Ordered, append-only record of a trip's events.
///
/// Events are immutable once appended; the log only grows.
#[derive(Debug, Clone)]
pub struct EventLog {
    trip_start: NaiveDate,
    events:     Vec<Event>,
}

impl EventLog {
    /// Empty log for a trip whose day 1 is `trip_start`.
    pub fn new(trip_start: NaiveDate) -> Self {
        Self { trip_start, events: Vec::new() }
    }

    pub fn trip_start(&self) -> NaiveDate {
        self.trip_start
    }

    /// Append an event and return it.  The day index is derived from `time`.
    ///
    /// Timestamps must be non-decreasing.
    pub fn append(
        &mut self,
        time:        NaiveDateTime,
        status:      DutyStatus,
        description: impl Into<String>,
        location:    Coordinate,
        miles:       f64,
    ) -> &Event {
        debug_assert!(
            self.events.last().is_none_or(|e| e.time <= time),
            "event log must be appended in time order"
        );
        self.events.push(Event {
            time,
            status,
            description: description.into(),
            location,
            day: day_index(self.trip_start, time),
            miles,
        });
        &self.events[self.events.len() - 1]
    }

    #[inline]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[inline]
    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}
