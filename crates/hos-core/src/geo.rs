//! Geographic coordinate types and great-circle helpers.
//!
//! Inputs arrive as `(longitude, latitude)` pairs, which is the order most
//! routing services use.  Output boundaries re-project to `{lat, lng}` via
//! [`LatLng`], which is what map front ends expect.

/// Mean Earth radius in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3_959.0;

/// A WGS-84 coordinate in `(longitude, latitude)` order.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// `false` if either component is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }

    /// Haversine great-circle distance in miles.
    pub fn distance_miles(self, other: Coordinate) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lat = lat2 - lat1;
        let d_lon = (other.lon - self.lon).to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        // Clamp guards asin against a > 1 from rounding on antipodal points.
        let c = 2.0 * a.sqrt().min(1.0).asin();
        EARTH_RADIUS_MILES * c
    }

    /// Linear interpolation in lon/lat space; `t` is not clamped.
    #[inline]
    pub fn lerp(self, other: Coordinate, t: f64) -> Coordinate {
        Coordinate {
            lon: self.lon + (other.lon - self.lon) * t,
            lat: self.lat + (other.lat - self.lat) * t,
        }
    }

    #[inline]
    pub fn to_lat_lng(self) -> LatLng {
        LatLng { lat: self.lat, lng: self.lon }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lon, self.lat)
    }
}

/// A point re-projected for output: `{lat, lng}`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl From<LatLng> for Coordinate {
    #[inline]
    fn from(p: LatLng) -> Self {
        Coordinate { lon: p.lng, lat: p.lat }
    }
}

impl From<Coordinate> for LatLng {
    #[inline]
    fn from(c: Coordinate) -> Self {
        c.to_lat_lng()
    }
}

/// `segments + 1` evenly spaced points from `start` to `end` inclusive.
pub fn interpolate(start: Coordinate, end: Coordinate, segments: usize) -> Vec<LatLng> {
    if segments == 0 {
        return vec![start.to_lat_lng()];
    }
    (0..=segments)
        .map(|i| start.lerp(end, i as f64 / segments as f64).to_lat_lng())
        .collect()
}
