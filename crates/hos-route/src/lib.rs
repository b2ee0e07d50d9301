//! `hos-route` — route providers and geocoding for the trip planner.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`leg`]      | `RouteLeg`, `LegPath` — polyline geometry and interpolation   |
//! | [`provider`] | `RouteProvider` trait, `StraightLineRouter`, `FallbackRouter` |
//! | [`ors`]      | `OrsConfig`, `OrsRouter` (feature = `"ors"`)                  |
//! | [`geocode`]  | `OrsGeocoder`, `Suggestion` (feature = `"ors"`)               |
//! | [`error`]    | `RouteError`, `RouteResult<T>`                                |
//!
//! # Feature flags
//!
//! | Flag  | Effect                                                          |
//! |-------|-----------------------------------------------------------------|
//! | `ors` | OpenRouteService HTTP client via `reqwest` (on by default).     |
//!
//! # Failure model
//!
//! The engine only ever sees a [`FallbackRouter`]: the primary provider is
//! tried once and any error is logged and replaced by the deterministic
//! straight-line estimate.  Only a failure of the fallback itself (non-finite
//! coordinates) reaches the caller.

pub mod error;
pub mod leg;
pub mod provider;

#[cfg(feature = "ors")]
pub mod geocode;
#[cfg(feature = "ors")]
pub mod ors;

#[cfg(test)]
mod tests;

pub use error::{RouteError, RouteResult};
pub use leg::{LegPath, RouteLeg};
pub use provider::{FallbackRouter, RouteProvider, StraightLineRouter};

#[cfg(feature = "ors")]
pub use geocode::{OrsGeocoder, Suggestion};
#[cfg(feature = "ors")]
pub use ors::{OrsConfig, OrsRouter};
