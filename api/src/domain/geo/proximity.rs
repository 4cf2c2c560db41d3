//! Radius filter over a collection of spots

use super::{DistanceCalculator, Haversine};
use crate::domain::entities::{Coordinate, Spot};

/// Selects the spots lying within a radius of a center point.
///
/// The filter is stateless: the collection is borrowed per call and
/// matches come back in input order.
#[derive(Debug, Clone)]
pub struct ProximityFilter<D = Haversine> {
    calculator: D,
}

impl ProximityFilter {
    /// Filter using spherical haversine distances
    pub fn haversine() -> Self {
        Self::new(Haversine)
    }
}

impl<D: DistanceCalculator> ProximityFilter<D> {
    pub fn new(calculator: D) -> Self {
        Self { calculator }
    }

    /// Whether `point` lies within `radius_m` meters of `center` (boundary inclusive)
    pub fn contains(&self, center: &Coordinate, radius_m: f64, point: &Coordinate) -> bool {
        // NaN fails both comparisons, so a NaN radius never matches either.
        radius_m >= 0.0 && self.calculator.distance(center, point) <= radius_m
    }

    /// Spots within `radius_m` meters of `center`, preserving input order.
    ///
    /// A negative radius always yields an empty result.
    pub fn filter<'a>(
        &self,
        center: &Coordinate,
        radius_m: f64,
        spots: &'a [Spot],
    ) -> Vec<&'a Spot> {
        if radius_m.is_nan() || radius_m < 0.0 {
            return Vec::new();
        }
        spots
            .iter()
            .filter(|spot| self.contains(center, radius_m, &spot.coordinate))
            .collect()
    }
}
