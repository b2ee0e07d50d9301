//! Routing trait, straight-line fallback, and the primary/fallback combinator.
//!
//! # Pluggability
//!
//! The trip simulator calls routing through the [`RouteProvider`] trait, so
//! applications can swap in any directions service (or a canned provider in
//! tests) without touching the engine.

use hos_core::geo::interpolate;
use hos_core::Coordinate;
use tracing::{debug, warn};

use crate::{RouteError, RouteLeg, RouteResult};

// ── RouteProvider trait ──────────────────────────────────────────────────────

/// Pluggable source of leg distance, duration, and geometry.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one provider can serve
/// independent trip computations on different threads.
pub trait RouteProvider: Send + Sync {
    /// Compute the leg from `origin` to `destination`.
    fn route(&self, origin: Coordinate, destination: Coordinate) -> RouteResult<RouteLeg>;
}

impl<R: RouteProvider + ?Sized> RouteProvider for Box<R> {
    fn route(&self, origin: Coordinate, destination: Coordinate) -> RouteResult<RouteLeg> {
        (**self).route(origin, destination)
    }
}

impl<R: RouteProvider + ?Sized> RouteProvider for &R {
    fn route(&self, origin: Coordinate, destination: Coordinate) -> RouteResult<RouteLeg> {
        (**self).route(origin, destination)
    }
}

// ── StraightLineRouter ───────────────────────────────────────────────────────

/// Deterministic offline estimate.
///
/// | Field    | Value                                               |
/// |----------|-----------------------------------------------------|
/// | distance | haversine great-circle miles (R = 3959 mi)          |
/// | duration | distance / `avg_speed_mph`                          |
/// | polyline | `segments + 1` points linearly spaced in lon/lat    |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StraightLineRouter {
    pub avg_speed_mph: f64,
    pub segments:      usize,
}

impl StraightLineRouter {
    pub const DEFAULT_SEGMENTS: usize = 20;

    pub fn new(avg_speed_mph: f64) -> Self {
        Self { avg_speed_mph, segments: Self::DEFAULT_SEGMENTS }
    }
}

impl Default for StraightLineRouter {
    fn default() -> Self {
        Self::new(55.0)
    }
}

impl RouteProvider for StraightLineRouter {
    fn route(&self, origin: Coordinate, destination: Coordinate) -> RouteResult<RouteLeg> {
        if !origin.is_finite() || !destination.is_finite() {
            return Err(RouteError::Degenerate { origin, destination });
        }

        let distance_miles = origin.distance_miles(destination);
        Ok(RouteLeg {
            origin,
            destination,
            distance_miles,
            duration_hours: distance_miles / self.avg_speed_mph,
            polyline:       interpolate(origin, destination, self.segments),
        })
    }
}

// ── FallbackRouter ───────────────────────────────────────────────────────────

/// Try `primary` once; on any error, answer from `fallback`.
///
/// The primary's error is logged and dropped.  No retry is attempted, and the
/// result does not say which provider produced it.
#[derive(Debug, Clone)]
pub struct FallbackRouter<P, F> {
    pub primary:  P,
    pub fallback: F,
}

impl<P: RouteProvider, F: RouteProvider> FallbackRouter<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: RouteProvider, F: RouteProvider> RouteProvider for FallbackRouter<P, F> {
    fn route(&self, origin: Coordinate, destination: Coordinate) -> RouteResult<RouteLeg> {
        match self.primary.route(origin, destination) {
            Ok(leg) => {
                debug!(%origin, %destination, miles = leg.distance_miles, "primary route");
                Ok(leg)
            }
            Err(e) => {
                warn!(%origin, %destination, error = %e, "route provider failed, using fallback estimate");
                self.fallback.route(origin, destination)
            }
        }
    }
}
