//! Flat row types written by the exporters.
//!
//! Rows own their strings so a backend never needs to know about the
//! report's nesting.

use hos_core::clock::fmt_hhmm;
use hos_engine::TripReport;
use hos_logbook::Event;

/// One entry of the raw event stream.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRow {
    /// Position in the stream, from 0.
    pub seq:         u32,
    /// `YYYY-MM-DD HH:MM`.
    pub time:        String,
    pub day:         u32,
    pub status:      &'static str,
    pub description: String,
    pub lon:         f64,
    pub lat:         f64,
    pub miles:       f64,
}

/// Header and totals of one daily log sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyLogRow {
    pub day:            u32,
    /// `MM/DD/YYYY`.
    pub date:           String,
    pub driver_name:    String,
    pub carrier_name:   String,
    pub vehicle_number: String,
    pub total_miles:    f64,
    pub off_duty:       f64,
    pub sleeper_berth:  f64,
    pub driving:        f64,
    pub on_duty:        f64,
}

/// One row of a sheet's duty-status grid, keyed by `(day, seq)`.
#[derive(Debug, Clone, PartialEq)]
pub struct DutyChangeRow {
    pub day:      u32,
    pub seq:      u32,
    pub time:     String,
    pub status:   &'static str,
    pub location: String,
}

/// Any stop on the route.  Fields a kind does not carry are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct StopRow {
    /// `pickup`, `dropoff`, `fuel`, `rest`, or `break`.
    pub kind:     &'static str,
    pub name:     String,
    pub lat:      f64,
    pub lng:      f64,
    pub duration: f64,
    pub time:     Option<String>,
    pub day:      Option<u32>,
    pub distance: Option<f64>,
}

/// Every row a report flattens into.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportRows {
    pub events:       Vec<EventRow>,
    pub daily_logs:   Vec<DailyLogRow>,
    pub duty_changes: Vec<DutyChangeRow>,
    pub stops:        Vec<StopRow>,
}

impl ReportRows {
    pub fn from_report(report: &TripReport) -> Self {
        let events = report
            .events
            .iter()
            .enumerate()
            .map(|(i, e)| event_row(i as u32, e))
            .collect();

        let mut daily_logs = Vec::with_capacity(report.logs.len());
        let mut duty_changes = Vec::new();
        for sheet in &report.logs {
            daily_logs.push(DailyLogRow {
                day:            sheet.day,
                date:           sheet.date_label(),
                driver_name:    sheet.driver_name.clone(),
                carrier_name:   sheet.carrier_name.clone(),
                vehicle_number: sheet.vehicle_number.clone(),
                total_miles:    sheet.total_miles,
                off_duty:       sheet.totals.off_duty,
                sleeper_berth:  sheet.totals.sleeper_berth,
                driving:        sheet.totals.driving,
                on_duty:        sheet.totals.on_duty,
            });
            duty_changes.extend(sheet.duty_status_changes.iter().enumerate().map(|(i, c)| {
                DutyChangeRow {
                    day:      sheet.day,
                    seq:      i as u32,
                    time:     c.time.clone(),
                    status:   c.status.as_str(),
                    location: c.location.clone(),
                }
            }));
        }

        Self { events, daily_logs, duty_changes, stops: stop_rows(report) }
    }
}

fn event_row(seq: u32, e: &Event) -> EventRow {
    EventRow {
        seq,
        time:        format!("{} {}", e.time.date(), fmt_hhmm(e.time)),
        day:         e.day,
        status:      e.status.as_str(),
        description: e.description.clone(),
        lon:         e.location.lon,
        lat:         e.location.lat,
        miles:       e.miles,
    }
}

fn stop_rows(report: &TripReport) -> Vec<StopRow> {
    let s = &report.stops;
    let mut rows = Vec::with_capacity(
        2 + s.fuel_stops.len() + s.rest_stops.len() + s.break_stops.len(),
    );

    for (kind, stop) in [("pickup", &s.pickup), ("dropoff", &s.dropoff)] {
        rows.push(StopRow {
            kind,
            name:     stop.name.clone(),
            lat:      stop.lat,
            lng:      stop.lng,
            duration: stop.duration,
            time:     None,
            day:      None,
            distance: None,
        });
    }
    rows.extend(s.fuel_stops.iter().map(|f| StopRow {
        kind:     "fuel",
        name:     f.name.clone(),
        lat:      f.lat,
        lng:      f.lng,
        duration: f.duration,
        time:     None,
        day:      None,
        distance: Some(f.distance),
    }));
    rows.extend(s.rest_stops.iter().map(|r| StopRow {
        kind:     "rest",
        name:     r.name.clone(),
        lat:      r.lat,
        lng:      r.lng,
        duration: r.duration,
        time:     Some(r.time.clone()),
        day:      Some(r.day),
        distance: None,
    }));
    rows.extend(s.break_stops.iter().map(|b| StopRow {
        kind:     "break",
        name:     b.name.clone(),
        lat:      b.lat,
        lng:      b.lng,
        duration: b.duration,
        time:     Some(b.time.clone()),
        day:      None,
        distance: None,
    }));
    rows
}
