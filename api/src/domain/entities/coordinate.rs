//! Coordinate value object
//!
//! A WGS84 latitude/longitude pair in degrees.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// A geographic position in degrees.
///
/// Range checks are not enforced on construction; see [`Coordinate::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude and longitude converted to radians
    pub fn to_radians(self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }

    /// Check that both components are finite and within WGS84 bounds
    pub fn validate(&self) -> Result<(), DomainError> {
        if !self.latitude.is_finite() || !(MIN_LATITUDE..=MAX_LATITUDE).contains(&self.latitude)
        {
            return Err(DomainError::Validation(format!(
                "latitude must be between {} and {}, got {}",
                MIN_LATITUDE, MAX_LATITUDE, self.latitude
            )));
        }
        if !self.longitude.is_finite()
            || !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&self.longitude)
        {
            return Err(DomainError::Validation(format!(
                "longitude must be between {} and {}, got {}",
                MIN_LONGITUDE, MAX_LONGITUDE, self.longitude
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}
