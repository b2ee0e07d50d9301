//! Fold an ordered event stream into per-calendar-day log sheets.
//!
//! # Algorithm
//!
//! ```text
//! for each event e[i]:
//!   sheet(e.day) gets a status change and a remark
//!   if i is not last:
//!     span = e[i].time .. e[i+1].time
//!     while span crosses midnight:
//!       credit time up to 00:00 to the current sheet
//!       open (or reuse) the next day's sheet, put a "00:00" continuation
//!       entry at the head of its grid
//!     credit what is left to the last sheet touched
//! round every sheet's totals to one decimal (unless disabled)
//! ```
//!
//! Summed over all sheets, the unrounded totals equal the wall-clock span
//! from the first event to the last.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use tracing::debug;

use hos_core::clock::{as_hours, fmt_hhmm, next_midnight, round1};
use hos_core::DutyStatus;

use crate::{DailyLog, DutyStatusChange, Event, LogbookOptions, MileageSource};

/// Build the daily log sheets for `events`, ordered by day index.
///
/// `events` must be in time order (as produced by
/// [`EventLog`][crate::EventLog]).  Days the trip never touches get no sheet.
pub fn compile_daily_logs(events: &[Event], options: &LogbookOptions) -> Vec<DailyLog> {
    let mut sheets: BTreeMap<u32, DailyLog> = BTreeMap::new();

    for (i, event) in events.iter().enumerate() {
        let hhmm = fmt_hhmm(event.time);
        let sheet = sheets
            .entry(event.day)
            .or_insert_with(|| DailyLog::new(event.time.date(), event.day, &options.identity));
        sheet.duty_status_changes.push(DutyStatusChange {
            time:     hhmm.clone(),
            status:   event.status,
            location: event.description.clone(),
        });
        sheet.remarks.push(format!("{hhmm} - {}", event.description));

        if let Some(next) = events.get(i + 1) {
            credit_span(&mut sheets, event, next.time, options);
        }
    }

    let logs: Vec<DailyLog> = sheets
        .into_values()
        .map(|mut sheet| {
            if options.round_totals {
                sheet.totals = sheet.totals.rounded();
                if matches!(options.mileage, MileageSource::Recorded) {
                    sheet.total_miles = round1(sheet.total_miles);
                }
            }
            sheet
        })
        .collect();

    debug!(events = events.len(), sheets = logs.len(), "compiled daily logs");
    logs
}

/// Credit `event`'s span up to `end`, splitting it at every midnight.
fn credit_span(
    sheets:  &mut BTreeMap<u32, DailyLog>,
    event:   &Event,
    end:     NaiveDateTime,
    options: &LogbookOptions,
) {
    let span_hours = as_hours(end - event.time);
    if span_hours <= 0.0 {
        return;
    }

    let mut cursor = event.time;
    while cursor < end {
        let boundary = next_midnight(cursor).filter(|m| *m < end).unwrap_or(end);
        let piece = as_hours(boundary - cursor);
        let day = event.day + (cursor.date() - event.time.date()).num_days() as u32;

        let sheet = sheets
            .entry(day)
            .or_insert_with(|| DailyLog::new(cursor.date(), day, &options.identity));

        if cursor != event.time {
            let label = format!("{} (continued)", event.description);
            sheet.duty_status_changes.insert(0, DutyStatusChange {
                time:     fmt_hhmm(cursor),
                status:   event.status,
                location: label.clone(),
            });
            sheet.remarks.insert(0, format!("{} - {label}", fmt_hhmm(cursor)));
        }

        sheet.totals.add(event.status, piece);
        if event.status == DutyStatus::Driving {
            sheet.total_miles += match options.mileage {
                MileageSource::Recorded => event.miles * piece / span_hours,
                MileageSource::Estimated { avg_speed_mph } => (piece * avg_speed_mph).floor(),
            };
        }

        cursor = boundary;
    }
}
