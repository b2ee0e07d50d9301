//! Duty-status enum shared by the engine, the logbook, and the exporters.

/// The four mutually exclusive classifications of a driver's time.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DutyStatus {
    OffDuty,
    SleeperBerth,
    Driving,
    OnDuty,
}

impl DutyStatus {
    /// Wire label, also used as CSV/SQLite column values.
    pub fn as_str(self) -> &'static str {
        match self {
            DutyStatus::OffDuty      => "off_duty",
            DutyStatus::SleeperBerth => "sleeper_berth",
            DutyStatus::Driving      => "driving",
            DutyStatus::OnDuty       => "on_duty",
        }
    }
}

impl std::fmt::Display for DutyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
