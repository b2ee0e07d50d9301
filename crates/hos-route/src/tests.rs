//! Unit tests for hos-route.
//!
//! No test touches the network: providers are exercised with stubs and the
//! ORS decoders with canned bodies.

#[cfg(test)]
mod helpers {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use hos_core::Coordinate;

    use crate::{RouteError, RouteLeg, RouteProvider, RouteResult};

    /// A provider that always fails and counts how often it was asked.
    #[derive(Default)]
    pub struct Unavailable {
        pub calls: AtomicUsize,
    }

    impl RouteProvider for Unavailable {
        fn route(&self, _o: Coordinate, _d: Coordinate) -> RouteResult<RouteLeg> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(RouteError::Api { status: 503, body: "down".into() })
        }
    }

    pub fn sf() -> Coordinate {
        Coordinate::new(-122.4, 37.8)
    }

    pub fn sacramento() -> Coordinate {
        Coordinate::new(-121.9, 38.5)
    }
}

// ── RouteLeg ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod leg {
    use hos_core::{Coordinate, LatLng};

    use crate::{RouteLeg, RouteProvider, StraightLineRouter};

    use super::helpers::{sacramento, sf};

    #[test]
    fn position_at_endpoints() {
        let leg = StraightLineRouter::default().route(sf(), sacramento()).unwrap();
        let start = leg.position_at(0.0);
        let end = leg.position_at(1.0);
        assert!((start.lon - sf().lon).abs() < 1e-9 && (start.lat - sf().lat).abs() < 1e-9);
        assert!((end.lon - sacramento().lon).abs() < 1e-9 && (end.lat - sacramento().lat).abs() < 1e-9);
    }

    #[test]
    fn position_at_clamps_and_handles_nan() {
        let leg = StraightLineRouter::default().route(sf(), sacramento()).unwrap();
        assert_eq!(leg.position_at(-3.0), leg.position_at(0.0));
        assert_eq!(leg.position_at(7.0), leg.position_at(1.0));
        assert_eq!(leg.position_at(f64::NAN), leg.position_at(0.0));
    }

    #[test]
    fn position_follows_bent_polyline() {
        // L-shaped path: east along the equator, then north.  Both arms are
        // one degree, so halfway lands on the corner.
        let leg = RouteLeg {
            origin:         Coordinate::new(0.0, 0.0),
            destination:    Coordinate::new(1.0, 1.0),
            distance_miles: 138.0,
            duration_hours: 2.5,
            polyline: vec![
                LatLng { lat: 0.0, lng: 0.0 },
                LatLng { lat: 0.0, lng: 1.0 },
                LatLng { lat: 1.0, lng: 1.0 },
            ],
        };
        let mid = leg.position_at(0.5);
        assert!((mid.lon - 1.0).abs() < 1e-3, "got {mid}");
        assert!(mid.lat.abs() < 1e-3, "got {mid}");
    }

    #[test]
    fn short_polyline_interpolates_straight() {
        let leg = RouteLeg {
            origin:         Coordinate::new(0.0, 0.0),
            destination:    Coordinate::new(2.0, 2.0),
            distance_miles: 0.0,
            duration_hours: 0.0,
            polyline:       vec![],
        };
        assert_eq!(leg.position_at(0.5), Coordinate::new(1.0, 1.0));
    }

    #[test]
    fn path_measures_once_and_matches_leg() {
        let leg = StraightLineRouter::default().route(sf(), sacramento()).unwrap();
        let path = leg.path();
        assert!((path.total_miles() - leg.distance_miles).abs() < 0.01);
        for p in [0.0, 0.1, 0.25, 0.5, 0.77, 1.0] {
            assert_eq!(path.position_at(p), leg.position_at(p));
        }
    }

    #[test]
    fn path_skips_repeated_vertices() {
        // ORS polylines can repeat a vertex; the zero-length segment must not
        // trap the lookup.
        let leg = RouteLeg {
            origin:         Coordinate::new(0.0, 0.0),
            destination:    Coordinate::new(2.0, 0.0),
            distance_miles: 138.0,
            duration_hours: 2.5,
            polyline: vec![
                LatLng { lat: 0.0, lng: 0.0 },
                LatLng { lat: 0.0, lng: 1.0 },
                LatLng { lat: 0.0, lng: 1.0 },
                LatLng { lat: 0.0, lng: 2.0 },
            ],
        };
        let path = leg.path();
        let q = path.position_at(0.75);
        assert!((q.lon - 1.5).abs() < 1e-9, "got {q}");
        assert_eq!(path.position_at(1.0), Coordinate::new(2.0, 0.0));
        assert_eq!(path.position_at(0.0), Coordinate::new(0.0, 0.0));
    }
}

// ── Providers ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod providers {
    use std::sync::atomic::Ordering;

    use hos_core::Coordinate;

    use crate::{FallbackRouter, RouteError, RouteProvider, StraightLineRouter};

    use super::helpers::{sacramento, sf, Unavailable};

    #[test]
    fn straight_line_uses_haversine_and_avg_speed() {
        let leg = StraightLineRouter::default().route(sf(), sacramento()).unwrap();
        let expected = sf().distance_miles(sacramento());
        assert!((leg.distance_miles - expected).abs() < 1e-12);
        assert!((leg.duration_hours - expected / 55.0).abs() < 1e-12);
        assert_eq!(leg.polyline.len(), 21);
        assert_eq!(leg.polyline[0], sf().to_lat_lng());
        assert_eq!(leg.polyline[20], sacramento().to_lat_lng());
    }

    #[test]
    fn straight_line_same_point_is_zero() {
        let leg = StraightLineRouter::default().route(sf(), sf()).unwrap();
        assert_eq!(leg.distance_miles, 0.0);
        assert_eq!(leg.duration_hours, 0.0);
    }

    #[test]
    fn straight_line_rejects_non_finite() {
        let bad = Coordinate::new(f64::NAN, 10.0);
        let err = StraightLineRouter::default().route(bad, sf()).unwrap_err();
        assert!(matches!(err, RouteError::Degenerate { .. }));
    }

    #[test]
    fn fallback_used_when_primary_fails() {
        let router = FallbackRouter::new(Unavailable::default(), StraightLineRouter::default());
        let leg = router.route(sf(), sacramento()).unwrap();
        let direct = StraightLineRouter::default().route(sf(), sacramento()).unwrap();
        assert_eq!(leg, direct);
        assert_eq!(router.primary.calls.load(Ordering::SeqCst), 1, "no retry");
    }

    #[test]
    fn primary_answer_passes_through() {
        let primary = StraightLineRouter { avg_speed_mph: 40.0, segments: 4 };
        let router = FallbackRouter::new(primary, StraightLineRouter::default());
        let leg = router.route(sf(), sacramento()).unwrap();
        assert_eq!(leg.polyline.len(), 5);
    }

    #[test]
    fn fallback_failure_surfaces() {
        let router = FallbackRouter::new(Unavailable::default(), StraightLineRouter::default());
        let bad = Coordinate::new(0.0, f64::INFINITY);
        assert!(router.route(bad, sf()).is_err());
    }

    #[test]
    fn boxed_provider_dispatches() {
        let boxed: Box<dyn RouteProvider> = Box::new(StraightLineRouter::default());
        assert!(boxed.route(sf(), sacramento()).is_ok());
    }
}

// ── ORS decoding ─────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "ors"))]
mod ors_decoding {
    use crate::geocode::parse_autocomplete;
    use crate::ors::parse_directions;
    use crate::RouteError;

    use super::helpers::{sacramento, sf};

    const DIRECTIONS: &str = r#"{
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {
                "segments": [{ "distance": 88.4, "duration": 5400.0, "steps": [] }],
                "summary": { "distance": 88.4, "duration": 5400.0 }
            },
            "geometry": {
                "type": "LineString",
                "coordinates": [[-122.4, 37.8], [-122.1, 38.1], [-121.9, 38.5]]
            }
        }]
    }"#;

    #[test]
    fn directions_decoded() {
        let leg = parse_directions(sf(), sacramento(), DIRECTIONS).unwrap();
        assert_eq!(leg.distance_miles, 88.4);
        assert!((leg.duration_hours - 1.5).abs() < 1e-12);
        assert_eq!(leg.polyline.len(), 3);
        assert_eq!(leg.polyline[1].lat, 38.1);
        assert_eq!(leg.polyline[1].lng, -122.1);
    }

    #[test]
    fn directions_without_features_malformed() {
        let err = parse_directions(sf(), sacramento(), r#"{"features": []}"#).unwrap_err();
        assert!(matches!(err, RouteError::Malformed(_)));
    }

    #[test]
    fn directions_bad_json() {
        let err = parse_directions(sf(), sacramento(), "<html>rate limited</html>").unwrap_err();
        assert!(matches!(err, RouteError::Json(_)));
    }

    #[test]
    fn autocomplete_decoded() {
        let body = r#"{
            "features": [{
                "geometry": { "coordinates": [-87.63, 41.88] },
                "properties": {
                    "label": "Chicago, IL, USA",
                    "name": "Chicago",
                    "country": "United States",
                    "region": "Illinois",
                    "locality": "Chicago"
                }
            }, {
                "geometry": { "coordinates": [-89.0, 40.0] },
                "properties": { "label": "Illinois, USA", "name": "Illinois" }
            }]
        }"#;
        let s = parse_autocomplete(body).unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(s[0].label.as_deref(), Some("Chicago, IL, USA"));
        assert_eq!(s[0].coordinates, vec![-87.63, 41.88]);
        assert_eq!(s[1].locality, None);
    }

    #[test]
    fn autocomplete_missing_features_is_empty() {
        assert!(parse_autocomplete("{}").unwrap().is_empty());
    }
}
