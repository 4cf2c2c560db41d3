//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::Spot;

/// The three San Francisco reference spots, in dataset order
pub fn reference_spots() -> Vec<Spot> {
    vec![
        test_spot("Spot 1", 37.7749, -122.4194),
        test_spot("Spot 2", 37.7833, -122.4167),
        test_spot("Spot 3", 37.7936, -122.3987),
    ]
}

/// Create a spot with the given name and position
pub fn test_spot(name: &str, latitude: f64, longitude: f64) -> Spot {
    Spot::new(name, latitude, longitude)
}
