//! Spot domain entity
//!
//! A named point of interest. Spots are read-only once loaded.

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// A named location.
///
/// Serializes flat as `{"name", "latitude", "longitude"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spot {
    pub name: String,
    #[serde(flatten)]
    pub coordinate: Coordinate,
}

impl Spot {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            coordinate: Coordinate::new(latitude, longitude),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_flat() {
        let spot = Spot::new("Spot 1", 37.7749, -122.4194);
        let json = serde_json::to_value(&spot).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Spot 1",
                "latitude": 37.7749,
                "longitude": -122.4194
            })
        );
    }

    #[test]
    fn deserializes_flat() {
        let json = r#"{"name": "Pier", "latitude": 37.8, "longitude": -122.4}"#;
        let spot: Spot = serde_json::from_str(json).unwrap();
        assert_eq!(spot.name, "Pier");
        assert_eq!(spot.coordinate, Coordinate::new(37.8, -122.4));
    }

    #[test]
    fn missing_longitude_fails() {
        let json = r#"{"name": "Pier", "latitude": 37.8}"#;
        let result: Result<Spot, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
