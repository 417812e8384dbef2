// Simulated geocoder standing in for an external geocoding service

use std::thread;
use std::time::Duration;

use rand::Rng;

use crate::error::RouteError;
use crate::geocoding::{known_places, Geocoder};
use crate::models::Coordinate;

/// Delay applied to synthesized lookups, modeling a network round trip
const DEFAULT_LATENCY: Duration = Duration::from_millis(100);

/// Center of the region unknown names are scattered around
const FALLBACK_LATITUDE: f64 = 40.0;
const FALLBACK_LONGITUDE: f64 = -95.0;

/// Geocoder backed by the known-places table with a synthetic fallback
///
/// Known names resolve instantly and deterministically. Unknown names are
/// placed at a random coordinate in the central United States (latitude
/// 40 +/- 5, longitude -95 +/- 5) after a blocking delay, with a fresh draw
/// on every call. Tests that need determinism either stick to known names
/// or supply their own [`Geocoder`] implementation.
pub struct SimulatedGeocoder {
    /// Blocking delay before each synthesized resolution
    latency: Duration,
}

impl SimulatedGeocoder {
    /// Creates a geocoder with the default synthetic-path latency
    pub fn new() -> Self {
        Self::with_latency(DEFAULT_LATENCY)
    }

    /// Creates a geocoder with an explicit synthetic-path latency
    ///
    /// Pass [`Duration::ZERO`] to keep unknown-name lookups instant.
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedGeocoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Geocoder for SimulatedGeocoder {
    fn resolve(&self, name: &str) -> Result<Coordinate, RouteError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RouteError::InvalidInput(
                "location name is empty".to_string(),
            ));
        }

        if let Some(coordinate) = known_places::lookup(name) {
            log::debug!("Resolved \"{}\" from the known-places table", name);
            return Ok(coordinate);
        }

        // Unknown name: emulate the round trip to a real service
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }

        let mut rng = rand::thread_rng();
        let coordinate = Coordinate::new(
            FALLBACK_LATITUDE + rng.gen_range(-5.0..5.0),
            FALLBACK_LONGITUDE + rng.gen_range(-5.0..5.0),
        );
        log::debug!(
            "Synthesized coordinate ({:.4}, {:.4}) for unknown name \"{}\"",
            coordinate.latitude,
            coordinate.longitude,
            name
        );
        Ok(coordinate)
    }
}
