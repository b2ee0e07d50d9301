//! `hos-output` — trip report exporters.
//!
//! Two backends are provided; SQLite sits behind a Cargo feature:
//!
//! | Feature   | Backend | Files created                                                  |
//! |-----------|---------|----------------------------------------------------------------|
//! | *(none)*  | CSV     | `events.csv`, `daily_logs.csv`, `duty_changes.csv`, `stops.csv` |
//! | `sqlite`  | SQLite  | `trip.db`                                                      |
//!
//! Both implement [`ReportWriter`]; [`write_report`] flattens a
//! [`TripReport`](hos_engine::TripReport) into rows and drives any writer.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hos_output::{write_report, CsvWriter};
//!
//! let mut writer = CsvWriter::new(Path::new("./out"))?;
//! write_report(&mut writer, &report)?;
//! ```

pub mod csv;
pub mod error;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use row::{DailyLogRow, DutyChangeRow, EventRow, ReportRows, StopRow};
pub use writer::{write_report, ReportWriter};

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
