//! Per-calendar-day log sheet types.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use hos_core::clock::{fmt_date, round1};
use hos_core::DutyStatus;

use crate::LogIdentity;

/// Hours per duty status on one sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DutyTotals {
    pub off_duty:      f64,
    pub sleeper_berth: f64,
    pub driving:       f64,
    pub on_duty:       f64,
}

impl DutyTotals {
    pub fn add(&mut self, status: DutyStatus, hours: f64) {
        match status {
            DutyStatus::OffDuty      => self.off_duty += hours,
            DutyStatus::SleeperBerth => self.sleeper_berth += hours,
            DutyStatus::Driving      => self.driving += hours,
            DutyStatus::OnDuty       => self.on_duty += hours,
        }
    }

    /// Sum over all four statuses.
    pub fn sum(&self) -> f64 {
        self.off_duty + self.sleeper_berth + self.driving + self.on_duty
    }

    pub fn rounded(&self) -> Self {
        Self {
            off_duty:      round1(self.off_duty),
            sleeper_berth: round1(self.sleeper_berth),
            driving:       round1(self.driving),
            on_duty:       round1(self.on_duty),
        }
    }
}

/// One row of a sheet's duty-status grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DutyStatusChange {
    /// `HH:MM`.
    pub time:     String,
    pub status:   DutyStatus,
    pub location: String,
}

/// The log sheet for one calendar day of the trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    #[serde(serialize_with = "serialize_sheet_date")]
    pub date:                NaiveDate,
    pub day:                 u32,
    pub driver_name:         String,
    pub carrier_name:        String,
    pub vehicle_number:      String,
    pub total_miles:         f64,
    pub duty_status_changes: Vec<DutyStatusChange>,
    pub remarks:             Vec<String>,
    pub totals:              DutyTotals,
}

impl DailyLog {
    /// Blank sheet for `date` / `day`.
    pub fn new(date: NaiveDate, day: u32, identity: &LogIdentity) -> Self {
        Self {
            date,
            day,
            driver_name:         identity.driver_name.clone(),
            carrier_name:        identity.carrier_name.clone(),
            vehicle_number:      identity.vehicle_number.clone(),
            total_miles:         0.0,
            duty_status_changes: Vec::new(),
            remarks:             Vec::new(),
            totals:              DutyTotals::default(),
        }
    }

    /// `MM/DD/YYYY`.
    pub fn date_label(&self) -> String {
        fmt_date(self.date)
    }
}

fn serialize_sheet_date<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&fmt_date(*date))
}
