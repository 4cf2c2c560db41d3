//! Haversine great-circle distance

use super::DistanceCalculator;
use crate::domain::entities::Coordinate;

/// Mean Earth radius in meters
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance in meters between two coordinates on a sphere of
/// radius [`EARTH_RADIUS_METERS`].
///
/// Uses the `atan2` form of the haversine formula. The intermediate term is
/// clamped to `[0, 1]` so rounding near antipodal points cannot produce NaN.
/// Out-of-range coordinates are not rejected.
pub fn haversine_distance(center: &Coordinate, point: &Coordinate) -> f64 {
    let (lat1, lon1) = center.to_radians();
    let (lat2, lon2) = point.to_radians();

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    c * EARTH_RADIUS_METERS
}

/// Spherical distance calculator backed by [`haversine_distance`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Haversine;

impl DistanceCalculator for Haversine {
    fn distance(&self, center: &Coordinate, point: &Coordinate) -> f64 {
        haversine_distance(center, point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    fn sample_points() -> Vec<Coordinate> {
        vec![
            Coordinate::new(37.7749, -122.4194),
            Coordinate::new(37.7833, -122.4167),
            Coordinate::new(-33.8688, 151.2093),
            Coordinate::new(90.0, 0.0),
            Coordinate::new(-90.0, 180.0),
            Coordinate::new(0.0, -180.0),
            Coordinate::new(51.5074, -0.1278),
        ]
    }

    #[test]
    fn same_point_is_zero() {
        for p in sample_points() {
            let d = haversine_distance(&p, &p);
            assert!(d.abs() < EPSILON, "distance({p}, {p}) = {d}");
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let points = sample_points();
        for a in &points {
            for b in &points {
                assert_eq!(haversine_distance(a, b), haversine_distance(b, a));
            }
        }
    }

    #[test]
    fn known_san_francisco_pair() {
        let a = Coordinate::new(37.7749, -122.4194);
        let b = Coordinate::new(37.7833, -122.4167);
        let d = haversine_distance(&a, &b);
        assert!((d - 960.0).abs() <= 10.0, "got {d}");
    }

    #[test]
    fn london_to_paris() {
        let london = Coordinate::new(51.5074, -0.1278);
        let paris = Coordinate::new(48.8566, 2.3522);
        let d = haversine_distance(&london, &paris);
        assert!((d - 343_556.0).abs() < 100.0, "got {d}");
    }

    #[test]
    fn antipodal_points_are_half_circumference() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 180.0);
        let d = haversine_distance(&a, &b);
        assert!(d.is_finite());
        let half = std::f64::consts::PI * EARTH_RADIUS_METERS;
        assert!((d - half).abs() < 1.0, "got {d}");
    }

    #[test]
    fn pole_to_pole() {
        let d = haversine_distance(&Coordinate::new(90.0, 0.0), &Coordinate::new(-90.0, 0.0));
        assert!(!d.is_nan());
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_METERS).abs() < 1.0);
    }

    #[test]
    fn results_are_non_negative_and_finite() {
        let points = sample_points();
        for a in &points {
            for b in &points {
                let d = haversine_distance(a, b);
                assert!(d.is_finite() && d >= 0.0);
            }
        }
    }

    #[test]
    fn calculator_delegates_to_formula() {
        let a = Coordinate::new(37.7749, -122.4194);
        let b = Coordinate::new(37.7936, -122.3987);
        assert_eq!(Haversine.distance(&a, &b), haversine_distance(&a, &b));
    }
}
