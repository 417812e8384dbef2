// Geocoding module - resolves place names to coordinates

pub mod known_places;
mod simulated;

pub use self::simulated::SimulatedGeocoder;

use crate::error::RouteError;
use crate::models::Coordinate;

/// Resolves place names to geographic coordinates
///
/// The optimizer only ever talks to this trait, so a production client for
/// a real geocoding service and the deterministic stubs used in tests are
/// interchangeable.
pub trait Geocoder: Send + Sync {
    /// Resolve a location name to a coordinate
    ///
    /// Returns [`RouteError::InvalidInput`] when `name` is empty after
    /// trimming, or [`RouteError::Geocoding`] when the name cannot be
    /// resolved.
    fn resolve(&self, name: &str) -> Result<Coordinate, RouteError>;
}
