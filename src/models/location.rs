// Location model binding a place name to its resolved coordinate

use serde::{Deserialize, Serialize};

use crate::models::Coordinate;

/// Represents a named stop on a route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Display name of the place, never empty
    pub name: String,

    /// Resolved geographic position of the place
    pub coordinate: Coordinate,
}

impl Location {
    /// Creates a new location with the given name and coordinate
    pub fn new<S: Into<String>>(name: S, coordinate: Coordinate) -> Self {
        Self {
            name: name.into(),
            coordinate,
        }
    }

    /// Great-circle distance to another location in kilometers
    pub fn distance_km(&self, other: &Location) -> f64 {
        self.coordinate.distance_km(&other.coordinate)
    }
}
