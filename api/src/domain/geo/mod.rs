//! Geospatial core
//!
//! Great-circle distance between coordinates and the radius filter that
//! applies it over a borrowed collection of spots.

pub mod haversine;
pub mod proximity;

pub use haversine::Haversine;
pub use proximity::ProximityFilter;

use crate::domain::entities::Coordinate;

/// Distance between two coordinates, in meters
pub trait DistanceCalculator: Send + Sync {
    fn distance(&self, center: &Coordinate, point: &Coordinate) -> f64;
}
