//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `trip.db` file in the configured output directory with
//! four tables: `events`, `daily_logs`, `duty_changes` and `stops`.

use std::path::Path;

use rusqlite::{params, Connection};

use crate::writer::ReportWriter;
use crate::{DailyLogRow, DutyChangeRow, EventRow, OutputResult, StopRow};

/// Writes a trip report to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `trip.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        let conn = Connection::open(dir.join("trip.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS events (
                 seq         INTEGER PRIMARY KEY,
                 time        TEXT    NOT NULL,
                 day         INTEGER NOT NULL,
                 status      TEXT    NOT NULL,
                 description TEXT    NOT NULL,
                 lon         REAL    NOT NULL,
                 lat         REAL    NOT NULL,
                 miles       REAL    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS daily_logs (
                 day            INTEGER PRIMARY KEY,
                 date           TEXT    NOT NULL,
                 driver_name    TEXT    NOT NULL,
                 carrier_name   TEXT    NOT NULL,
                 vehicle_number TEXT    NOT NULL,
                 total_miles    REAL    NOT NULL,
                 off_duty       REAL    NOT NULL,
                 sleeper_berth  REAL    NOT NULL,
                 driving        REAL    NOT NULL,
                 on_duty        REAL    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS duty_changes (
                 day      INTEGER NOT NULL,
                 seq      INTEGER NOT NULL,
                 time     TEXT    NOT NULL,
                 status   TEXT    NOT NULL,
                 location TEXT    NOT NULL,
                 PRIMARY KEY (day, seq)
             );
             CREATE TABLE IF NOT EXISTS stops (
                 kind     TEXT    NOT NULL,
                 name     TEXT    NOT NULL,
                 lat      REAL    NOT NULL,
                 lng      REAL    NOT NULL,
                 duration REAL    NOT NULL,
                 time     TEXT,
                 day      INTEGER,
                 distance REAL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl ReportWriter for SqliteWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO events (seq, time, day, status, description, lon, lat, miles) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for row in rows {
                stmt.execute(params![
                    row.seq, row.time, row.day, row.status, row.description, row.lon, row.lat, row.miles,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_daily_logs(&mut self, rows: &[DailyLogRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO daily_logs \
                 (day, date, driver_name, carrier_name, vehicle_number, total_miles, \
                  off_duty, sleeper_berth, driving, on_duty) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            )?;
            for row in rows {
                stmt.execute(params![
                    row.day,
                    row.date,
                    row.driver_name,
                    row.carrier_name,
                    row.vehicle_number,
                    row.total_miles,
                    row.off_duty,
                    row.sleeper_berth,
                    row.driving,
                    row.on_duty,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_duty_changes(&mut self, rows: &[DutyChangeRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO duty_changes (day, seq, time, status, location) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(params![row.day, row.seq, row.time, row.status, row.location])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_stops(&mut self, rows: &[StopRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO stops (kind, name, lat, lng, duration, time, day, distance) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for row in rows {
                stmt.execute(params![
                    row.kind, row.name, row.lat, row.lng, row.duration, row.time, row.day, row.distance,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
