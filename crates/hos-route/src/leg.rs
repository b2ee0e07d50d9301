//! The `RouteLeg` value returned by every provider.

use hos_core::{Coordinate, LatLng};

/// One origin→destination segment of a trip.
///
/// Built once per leg by a [`RouteProvider`][crate::RouteProvider] and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteLeg {
    pub origin:         Coordinate,
    pub destination:    Coordinate,
    pub distance_miles: f64,
    pub duration_hours: f64,
    /// Ordered points from origin to destination, already in `{lat, lng}`.
    pub polyline:       Vec<LatLng>,
}

impl RouteLeg {
    /// Measure the polyline once for repeated [`LegPath::position_at`] calls.
    pub fn path(&self) -> LegPath<'_> {
        LegPath::new(self)
    }

    /// Position after `progress` ∈ `[0, 1]` of the leg has been driven.
    ///
    /// One-off lookup; callers sampling many positions should hold a
    /// [`LegPath`] instead.
    pub fn position_at(&self, progress: f64) -> Coordinate {
        self.path().position_at(progress)
    }
}

/// A [`RouteLeg`] polyline with its cumulative great-circle lengths.
#[derive(Debug, Clone)]
pub struct LegPath<'a> {
    leg:        &'a RouteLeg,
    points:     Vec<Coordinate>,
    /// `cumulative[i]` = miles from the first point to `points[i]`.
    cumulative: Vec<f64>,
}

impl<'a> LegPath<'a> {
    pub fn new(leg: &'a RouteLeg) -> Self {
        let points: Vec<Coordinate> = leg.polyline.iter().copied().map(Coordinate::from).collect();
        let mut cumulative = Vec::with_capacity(points.len());
        let mut walked = 0.0;
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                walked += points[i - 1].distance_miles(*p);
            }
            cumulative.push(walked);
        }
        Self { leg, points, cumulative }
    }

    /// Great-circle length of the polyline in miles.
    pub fn total_miles(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Position after `progress` ∈ `[0, 1]` of the leg has been driven.
    ///
    /// Out-of-range progress is clamped and NaN (a zero-length leg) maps to
    /// the origin.  Polylines with fewer than two points, or of zero length,
    /// interpolate straight between `origin` and `destination`.
    pub fn position_at(&self, progress: f64) -> Coordinate {
        let t = if progress.is_finite() { progress.clamp(0.0, 1.0) } else { 0.0 };
        let total = self.total_miles();

        if self.points.len() < 2 || total <= 0.0 {
            return self.leg.origin.lerp(self.leg.destination, t);
        }

        let target = t * total;
        // First vertex at or beyond the target; the segment ending there has
        // non-zero length whenever idx > 0.
        let idx = self.cumulative.partition_point(|&c| c < target);
        match idx {
            0 => self.points[0],
            i if i >= self.points.len() => self.points[self.points.len() - 1],
            i => {
                let (a, b) = (self.cumulative[i - 1], self.cumulative[i]);
                self.points[i - 1].lerp(self.points[i], (target - a) / (b - a))
            }
        }
    }
}
