//! `hos-engine` — Hours-of-Service trip simulation.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`state`]   | `SimulationState` — the virtual clock and hour counters      |
//! | [`stops`]   | `FuelStop`, `RestStop`, `BreakStop`, `ServiceStop`, `StopLog` |
//! | [`leg`]     | `LegSimulator` — drive one leg, inserting breaks/rests/fuel  |
//! | [`trip`]    | `TripSimulator` — start → pickup → dropoff → report          |
//! | [`report`]  | `TripReport` and its sections                                |
//! | [`builder`] | `TripSimulatorBuilder`                                        |
//! | [`error`]   | `EngineError`, `EngineResult<T>`                              |
//!
//! # Trip sequence
//!
//! ```text
//! OFF_DUTY  midnight → start_time      (only if the trip starts after 00:00)
//! ON_DUTY   Trip Start
//! leg 1     current → pickup           (LegSimulator)
//! SLEEPER   rest, if the duty window is used up
//! ON_DUTY   Pickup - Loading            pickup_duration
//! leg 2     pickup → dropoff           (LegSimulator)
//! SLEEPER   rest, if the duty window is used up
//! ON_DUTY   Dropoff - Unloading         dropoff_duration
//! OFF_DUTY  Trip Complete
//! ```
//!
//! The finished event log goes through
//! [`hos_logbook::compile_daily_logs`] and is bundled into a [`TripReport`].
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hos_engine::TripSimulator;
//! use hos_route::StraightLineRouter;
//!
//! let sim = TripSimulator::builder(StraightLineRouter::default()).build()?;
//! let report = sim.simulate_trip(current, pickup, dropoff, 12.0, Some(start))?;
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! ```

pub mod builder;
pub mod error;
pub mod leg;
pub mod report;
pub mod state;
pub mod stops;
pub mod trip;


pub use builder::TripSimulatorBuilder;
pub use error::{EngineError, EngineResult};
pub use leg::{LegOutcome, LegSimulator};
pub use report::{HosSummary, RouteSegment, RouteSummary, Stops, Timeline, TripReport};
pub use state::SimulationState;
pub use stops::{BreakStop, FuelStop, RestStop, ServiceStop, StopLog};
pub use trip::TripSimulator;
