//! Command-line definitions.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand, ValueEnum};

use hos_core::Coordinate;

#[derive(Debug, Parser)]
#[command(name = "trip", author, version, about)]
pub struct Opts {
    #[command(subcommand)]
    pub subcmd: SubCommand,
}

#[derive(Debug, Subcommand)]
pub enum SubCommand {
    /// Plan a trip and print the report as JSON.
    Plan(PlanOpts),
    /// Look up place suggestions for a partial address.
    Autocomplete(AutocompleteOpts),
}

#[derive(Debug, Parser)]
pub struct PlanOpts {
    /// Current position as LON,LAT.
    #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
    pub current: Coordinate,
    /// Pickup as LON,LAT.
    #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
    pub pickup: Coordinate,
    /// Dropoff as LON,LAT.
    #[arg(long, value_parser = parse_coordinate, allow_hyphen_values = true)]
    pub dropoff: Coordinate,
    /// On-duty hours already used in the current cycle.
    #[arg(long, default_value_t = 0.0)]
    pub cycle_hours: f64,
    /// Local start time, YYYY-MM-DDTHH:MM (default: 06:00 today).
    #[arg(long, value_parser = parse_start)]
    pub start: Option<NaiveDateTime>,
    /// JSON file overriding the default HOS rule set.
    #[arg(long)]
    pub rules: Option<PathBuf>,
    /// Driver name printed on each log sheet.
    #[arg(long)]
    pub driver: Option<String>,
    /// Carrier name printed on each log sheet.
    #[arg(long)]
    pub carrier: Option<String>,
    /// Vehicle number printed on each log sheet.
    #[arg(long)]
    pub vehicle: Option<String>,
    /// Never call the routing service; use straight-line estimates.
    #[arg(long)]
    pub offline: bool,
    /// Also export the report into this directory.
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Export format used with --out.
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,
}

#[derive(Debug, Parser)]
pub struct AutocompleteOpts {
    /// Partial address or place name.
    pub query: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Sqlite,
}

pub fn parse_coordinate(s: &str) -> Result<Coordinate, String> {
    let (lon, lat) = s
        .split_once(',')
        .ok_or_else(|| format!("expected LON,LAT, got {s:?}"))?;
    let lon: f64 = lon.trim().parse().map_err(|e| format!("bad longitude {lon:?}: {e}"))?;
    let lat: f64 = lat.trim().parse().map_err(|e| format!("bad latitude {lat:?}: {e}"))?;
    Ok(Coordinate::new(lon, lat))
}

pub fn parse_start(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|e| format!("bad start time {s:?}: {e}"))
}
