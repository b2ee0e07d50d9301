//! `hos-logbook` — duty-status events and daily log sheets.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`event`]   | `Event`, `EventLog` (append-only, day index from the timestamp) |
//! | [`sheet`]   | `DailyLog`, `DutyStatusChange`, `DutyTotals`                    |
//! | [`compile`] | `compile_daily_logs` — fold events into calendar-day sheets     |
//! | [`options`] | `LogbookOptions`, `LogIdentity`, `MileageSource`                |
//!
//! # Day model
//!
//! An event's day index is the calendar date of its own timestamp relative
//! to the trip's start date (day 1).  Nothing increments a counter, so a
//! duty period that runs past midnight is split exactly at `00:00` and the
//! remainder credited to the next sheet.

pub mod compile;
pub mod event;
pub mod options;
pub mod sheet;


pub use compile::compile_daily_logs;
pub use event::{Event, EventLog};
pub use options::{LogIdentity, LogbookOptions, MileageSource};
pub use sheet::{DailyLog, DutyStatusChange, DutyTotals};
