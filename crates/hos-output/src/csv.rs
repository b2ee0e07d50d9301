//! CSV output backend.
//!
//! Creates four files in the configured output directory:
//! - `events.csv`
//! - `daily_logs.csv`
//! - `duty_changes.csv`
//! - `stops.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::ReportWriter;
use crate::{DailyLogRow, DutyChangeRow, EventRow, OutputResult, StopRow};

/// Writes a trip report to four CSV files.
pub struct CsvWriter {
    events:       Writer<File>,
    daily_logs:   Writer<File>,
    duty_changes: Writer<File>,
    stops:        Writer<File>,
    finished:     bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the four CSV files and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(["seq", "time", "day", "status", "description", "lon", "lat", "miles"])?;

        let mut daily_logs = Writer::from_path(dir.join("daily_logs.csv"))?;
        daily_logs.write_record([
            "day", "date", "driver_name", "carrier_name", "vehicle_number", "total_miles",
            "off_duty", "sleeper_berth", "driving", "on_duty",
        ])?;

        let mut duty_changes = Writer::from_path(dir.join("duty_changes.csv"))?;
        duty_changes.write_record(["day", "seq", "time", "status", "location"])?;

        let mut stops = Writer::from_path(dir.join("stops.csv"))?;
        stops.write_record(["kind", "name", "lat", "lng", "duration", "time", "day", "distance"])?;

        Ok(Self { events, daily_logs, duty_changes, stops, finished: false })
    }
}

fn opt<T: ToString>(v: &Option<T>) -> String {
    v.as_ref().map(ToString::to_string).unwrap_or_default()
}

impl ReportWriter for CsvWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        for row in rows {
            self.events.write_record(&[
                row.seq.to_string(),
                row.time.clone(),
                row.day.to_string(),
                row.status.to_owned(),
                row.description.clone(),
                row.lon.to_string(),
                row.lat.to_string(),
                row.miles.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_daily_logs(&mut self, rows: &[DailyLogRow]) -> OutputResult<()> {
        for row in rows {
            self.daily_logs.write_record(&[
                row.day.to_string(),
                row.date.clone(),
                row.driver_name.clone(),
                row.carrier_name.clone(),
                row.vehicle_number.clone(),
                row.total_miles.to_string(),
                row.off_duty.to_string(),
                row.sleeper_berth.to_string(),
                row.driving.to_string(),
                row.on_duty.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_duty_changes(&mut self, rows: &[DutyChangeRow]) -> OutputResult<()> {
        for row in rows {
            self.duty_changes.write_record(&[
                row.day.to_string(),
                row.seq.to_string(),
                row.time.clone(),
                row.status.to_owned(),
                row.location.clone(),
            ])?;
        }
        Ok(())
    }

    fn write_stops(&mut self, rows: &[StopRow]) -> OutputResult<()> {
        for row in rows {
            self.stops.write_record(&[
                row.kind.to_owned(),
                row.name.clone(),
                row.lat.to_string(),
                row.lng.to_string(),
                row.duration.to_string(),
                opt(&row.time),
                opt(&row.day),
                opt(&row.distance),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.daily_logs.flush()?;
        self.duty_changes.flush()?;
        self.stops.flush()?;
        Ok(())
    }
}
