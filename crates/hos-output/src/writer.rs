//! The `ReportWriter` trait implemented by all backend writers.

use tracing::debug;

use hos_engine::TripReport;

use crate::{DailyLogRow, DutyChangeRow, EventRow, OutputResult, ReportRows, StopRow};

/// Trait implemented by the CSV and SQLite writers.
pub trait ReportWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()>;

    fn write_daily_logs(&mut self, rows: &[DailyLogRow]) -> OutputResult<()>;

    fn write_duty_changes(&mut self, rows: &[DutyChangeRow]) -> OutputResult<()>;

    fn write_stops(&mut self, rows: &[StopRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Flatten `report` and write every table, then finish the writer.
pub fn write_report<W: ReportWriter + ?Sized>(writer: &mut W, report: &TripReport) -> OutputResult<()> {
    let rows = ReportRows::from_report(report);
    writer.write_events(&rows.events)?;
    writer.write_daily_logs(&rows.daily_logs)?;
    writer.write_duty_changes(&rows.duty_changes)?;
    writer.write_stops(&rows.stops)?;
    writer.finish()?;
    debug!(
        events = rows.events.len(),
        sheets = rows.daily_logs.len(),
        stops = rows.stops.len(),
        "report written"
    );
    Ok(())
}
