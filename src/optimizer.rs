// Orchestrates geocoding, route planning and distance aggregation

use std::sync::atomic::Ordering::Relaxed;
use std::sync::{atomic::AtomicBool, Arc};

use geo::prelude::*;
use geo::{MultiPoint, Point};

use crate::algorithms::plan_route;
use crate::error::RouteError;
use crate::geocoding::Geocoder;
use crate::models::{Coordinate, Kilometers, Location, OptimizedRoute};

/// Cooperative cancellation flag checked between geocoding steps
///
/// Clones share one flag, so a caller can keep a clone and set it from
/// another thread while the optimizer holds the other.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a token in the not-cancelled state
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation of the optimization holding this token
    pub fn cancel(&self) {
        self.cancelled.store(true, Relaxed);
    }

    /// Whether cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Relaxed)
    }
}

/// Drives a full optimization from raw place names to an ordered route
/// with leg distances
pub struct RouteOptimizer<G: Geocoder> {
    geocoder: G,
}

impl<G: Geocoder> RouteOptimizer<G> {
    /// Creates an optimizer over the given geocoding collaborator
    pub fn new(geocoder: G) -> Self {
        Self { geocoder }
    }

    /// Computes a route from the origin through every destination
    ///
    /// Destination names are trimmed and exact duplicates dropped before
    /// any geocoding happens; at least two usable names must remain. The
    /// origin is validated first, so a blank origin fails before a single
    /// geocoding call is made. Any geocoding failure abandons the whole
    /// request.
    pub fn optimize<S: AsRef<str>>(
        &self,
        origin_name: &str,
        destination_names: &[S],
    ) -> Result<OptimizedRoute, RouteError> {
        self.optimize_with_cancel(origin_name, destination_names, &CancelToken::new())
    }

    /// Same as [`optimize`](Self::optimize), checking `cancel` before each
    /// geocoding step
    ///
    /// Cancellation is coarse-grained: a request already past its last
    /// geocoding call runs to completion.
    pub fn optimize_with_cancel<S: AsRef<str>>(
        &self,
        origin_name: &str,
        destination_names: &[S],
        cancel: &CancelToken,
    ) -> Result<OptimizedRoute, RouteError> {
        let origin_name = origin_name.trim();
        if origin_name.is_empty() {
            return Err(RouteError::InvalidInput("origin name is empty".to_string()));
        }

        let names = usable_names(destination_names);
        if names.len() < 2 {
            return Err(RouteError::InsufficientDestinations { found: names.len() });
        }

        let origin = Location::new(origin_name, self.resolve(origin_name, cancel)?);

        let mut destinations = Vec::with_capacity(names.len());
        for name in names {
            let coordinate = self.resolve(&name, cancel)?;
            destinations.push(Location::new(name, coordinate));
        }

        let ordered = plan_route(origin.coordinate, destinations);

        let mut stops = Vec::with_capacity(ordered.len() + 1);
        stops.push(origin);
        stops.extend(ordered);

        let leg_distances_km: Vec<Kilometers> = stops
            .windows(2)
            .map(|pair| pair[0].coordinate.distance_km(&pair[1].coordinate))
            .collect();
        let total_distance_km: Kilometers = leg_distances_km.iter().sum();

        let route = OptimizedRoute {
            map_center: map_center(&stops),
            stops,
            leg_distances_km,
            total_distance_km,
        };

        log::info!(
            "Optimized route over {} stops, {:.3} km total",
            route.stop_count(),
            route.total_distance_km
        );
        Ok(route)
    }

    /// Resolves one name, honoring the cancellation token first
    fn resolve(&self, name: &str, cancel: &CancelToken) -> Result<Coordinate, RouteError> {
        if cancel.is_cancelled() {
            return Err(RouteError::Cancelled);
        }
        log::debug!("Resolving \"{}\"", name);
        self.geocoder.resolve(name)
    }
}

/// Trims the raw names and drops blanks and exact duplicates, keeping
/// first-occurrence order
fn usable_names<S: AsRef<str>>(raw_names: &[S]) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(raw_names.len());

    for raw_name in raw_names {
        let name = raw_name.as_ref().trim();
        if name.is_empty() {
            continue;
        }
        if names.iter().all(|seen| seen != name) {
            names.push(name.to_string());
        }
    }

    names
}

/// Arithmetic mean of all stop coordinates, for centering a map view
fn map_center(stops: &[Location]) -> Coordinate {
    let points: Vec<Point<f64>> = stops
        .iter()
        .map(|stop| Point::new(stop.coordinate.longitude, stop.coordinate.latitude))
        .collect();

    MultiPoint::from(points)
        .centroid()
        .map(|center| Coordinate::new(center.y(), center.x()))
        .unwrap_or_else(|| Coordinate::new(0.0, 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_names_trims_and_drops_blanks() {
        let names = usable_names(&["  Chicago  ", "", "   ", "Houston"]);

        assert_eq!(names, vec!["Chicago", "Houston"]);
    }

    #[test]
    fn test_usable_names_collapses_duplicates() {
        let names = usable_names(&["Chicago", "Houston", "Chicago ", "Dallas"]);

        assert_eq!(names, vec!["Chicago", "Houston", "Dallas"]);
    }

    #[test]
    fn test_usable_names_keeps_case_variants() {
        let names = usable_names(&["Chicago", "chicago"]);

        assert_eq!(names, vec!["Chicago", "chicago"]);
    }

    #[test]
    fn test_map_center_is_mean_of_stops() {
        let stops = vec![
            Location::new("A", Coordinate::new(0.0, -10.0)),
            Location::new("B", Coordinate::new(10.0, -20.0)),
            Location::new("C", Coordinate::new(20.0, -30.0)),
        ];

        let center = map_center(&stops);

        assert!((center.latitude - 10.0).abs() < 1e-9);
        assert!((center.longitude - (-20.0)).abs() < 1e-9);
    }

    #[test]
    fn test_map_center_of_no_stops_defaults_to_zero() {
        let center = map_center(&[]);

        assert_eq!(center.latitude, 0.0);
        assert_eq!(center.longitude, 0.0);
    }

    #[test]
    fn test_cancel_token_starts_clear() {
        let token = CancelToken::new();

        assert!(!token.is_cancelled());

        token.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_cancel_token_clones_share_state() {
        let token = CancelToken::new();
        let clone = token.clone();

        clone.cancel();

        assert!(token.is_cancelled());
    }
}
