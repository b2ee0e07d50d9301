//! Log-sheet header identity and mileage policy.

/// Header fields printed on every sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogIdentity {
    pub driver_name:    String,
    pub carrier_name:   String,
    pub vehicle_number: String,
}

impl Default for LogIdentity {
    fn default() -> Self {
        Self {
            driver_name:    "John Doe".to_owned(),
            carrier_name:   "ELD Pro Transport".to_owned(),
            vehicle_number: "TRK-101".to_owned(),
        }
    }
}

/// How a sheet's `total_miles` is computed.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum MileageSource {
    /// Sum the exact miles carried by each driving event, apportioned by time
    /// when a driving span crosses midnight.  Rounded to one decimal.
    #[default]
    Recorded,
    /// `floor(hours × avg_speed_mph)` per credited driving span.  Can drift
    /// from the recorded miles; kept for sheets that must match older output.
    Estimated { avg_speed_mph: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogbookOptions {
    pub identity:     LogIdentity,
    pub mileage:      MileageSource,
    /// Round each sheet's hour totals (and recorded miles) to one decimal,
    /// as printed.  Off keeps the exact credited hours.
    pub round_totals: bool,
}

impl Default for LogbookOptions {
    fn default() -> Self {
        Self {
            identity:     LogIdentity::default(),
            mileage:      MileageSource::default(),
            round_totals: true,
        }
    }
}
