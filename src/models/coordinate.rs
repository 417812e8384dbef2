// Coordinate model representing a point on the Earth's surface

use serde::{Deserialize, Serialize};

use crate::models::Degrees;
use crate::utils::distance::haversine_km;

/// Represents a geographic position in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, valid in [-90, 90]
    pub latitude: Degrees,

    /// Longitude in degrees, valid in [-180, 180]
    pub longitude: Degrees,
}

impl Coordinate {
    /// Creates a new coordinate from decimal degrees
    pub fn new(latitude: Degrees, longitude: Degrees) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to another coordinate in kilometers
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        haversine_km(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_creation() {
        let coord = Coordinate::new(40.7128, -74.0060);

        assert_eq!(coord.latitude, 40.7128);
        assert_eq!(coord.longitude, -74.0060);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let coord = Coordinate::new(41.8781, -87.6298);

        assert_eq!(coord.distance_km(&coord), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let new_york = Coordinate::new(40.7128, -74.0060);
        let chicago = Coordinate::new(41.8781, -87.6298);

        let forward = new_york.distance_km(&chicago);
        let backward = chicago.distance_km(&new_york);

        assert!((forward - backward).abs() < 1e-9);
    }
}
