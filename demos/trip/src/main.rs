//! trip — plan an HOS-compliant trip from the command line.
//!
//! ```text
//! trip plan --current -122.42,37.77 --pickup -122.27,37.80 \
//!           --dropoff -121.49,38.58 --cycle-hours 12 --driver "A. Driver" --out ./out
//! trip autocomplete "1600 Amphitheatre"
//! ```
//!
//! Routing uses OpenRouteService when `ORS_API_KEY` is set, falling back to
//! straight-line estimates per leg; `--offline` skips the service entirely.
//! Logs go to stderr (`RUST_LOG`, default `info`), the report to stdout.

mod cli;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use hos_core::HosRules;
use hos_engine::{TripReport, TripSimulator};
use hos_logbook::LogIdentity;
use hos_output::{write_report, CsvWriter, ReportWriter, SqliteWriter};
use hos_route::{FallbackRouter, OrsConfig, OrsGeocoder, OrsRouter, RouteProvider, StraightLineRouter};

use cli::{AutocompleteOpts, Format, Opts, PlanOpts, SubCommand};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let opts = Opts::parse();
    match opts.subcmd {
        SubCommand::Plan(plan) => run_plan(plan),
        SubCommand::Autocomplete(ac) => run_autocomplete(ac),
    }
}

// ── plan ──────────────────────────────────────────────────────────────────────

fn run_plan(opts: PlanOpts) -> Result<()> {
    let rules = match &opts.rules {
        Some(path) => load_rules(path)?,
        None => HosRules::default(),
    };
    let router = build_router(&opts, &rules)?;

    let defaults = LogIdentity::default();
    let identity = LogIdentity {
        driver_name:    opts.driver.clone().unwrap_or(defaults.driver_name),
        carrier_name:   opts.carrier.clone().unwrap_or(defaults.carrier_name),
        vehicle_number: opts.vehicle.clone().unwrap_or(defaults.vehicle_number),
    };
    let sim = TripSimulator::builder(router).rules(rules).identity(identity).build()?;
    let report = sim
        .simulate_trip(opts.current, opts.pickup, opts.dropoff, opts.cycle_hours, opts.start)
        .context("trip planning failed")?;

    if let Some(dir) = &opts.out {
        export(&report, dir, opts.format)?;
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn load_rules(path: &Path) -> Result<HosRules> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading rules from {}", path.display()))?;
    let rules: HosRules = serde_json::from_str(&text)
        .with_context(|| format!("parsing rules in {}", path.display()))?;
    info!(path = %path.display(), "loaded HOS rules");
    Ok(rules)
}

fn build_router(opts: &PlanOpts, rules: &HosRules) -> Result<Box<dyn RouteProvider>> {
    let straight = StraightLineRouter::new(rules.avg_speed_mph);
    if opts.offline {
        info!("offline: straight-line routing");
        return Ok(Box::new(straight));
    }
    match OrsConfig::from_env() {
        Ok(config) => {
            let ors = OrsRouter::new(config)?;
            Ok(Box::new(FallbackRouter::new(ors, straight)))
        }
        Err(e) => {
            warn!(error = %e, "no routing service configured, using straight-line estimates");
            Ok(Box::new(straight))
        }
    }
}

fn export(report: &TripReport, dir: &Path, format: Format) -> Result<()> {
    let mut writer: Box<dyn ReportWriter> = match format {
        Format::Csv => Box::new(CsvWriter::new(dir)?),
        Format::Sqlite => Box::new(SqliteWriter::new(dir)?),
    };
    write_report(writer.as_mut(), report)
        .with_context(|| format!("exporting to {}", dir.display()))?;
    info!(dir = %dir.display(), ?format, "report exported");
    Ok(())
}

// ── autocomplete ──────────────────────────────────────────────────────────────

fn run_autocomplete(opts: AutocompleteOpts) -> Result<()> {
    let config = OrsConfig::from_env().context("autocomplete needs ORS_API_KEY")?;
    let suggestions = OrsGeocoder::new(config)?.autocomplete(&opts.query)?;
    info!(count = suggestions.len(), "suggestions");
    println!("{}", serde_json::to_string_pretty(&suggestions)?);
    Ok(())
}
