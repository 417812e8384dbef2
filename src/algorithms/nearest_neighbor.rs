// Greedy nearest-neighbor route construction

use crate::models::{Coordinate, Location};

/// Orders destinations by repeatedly visiting the nearest unvisited one
///
/// Starting from `origin`, each step picks the remaining destination with
/// the strictly smallest great-circle distance from the current position;
/// on an exact tie the destination that appears earlier in the input wins.
/// The result is a permutation of `destinations` and does not include the
/// origin itself. Chosen destinations leave the pool by index, so entries
/// sharing a name are still visited exactly once each.
///
/// Runs in O(n^2) distance evaluations for n destinations.
pub fn plan_route(origin: Coordinate, destinations: Vec<Location>) -> Vec<Location> {
    let mut remaining = destinations;
    let mut route = Vec::with_capacity(remaining.len());
    let mut current = origin;

    while !remaining.is_empty() {
        let mut best_index = 0;
        let mut best_distance = f64::INFINITY;

        for (index, candidate) in remaining.iter().enumerate() {
            let distance = current.distance_km(&candidate.coordinate);
            if distance < best_distance {
                best_distance = distance;
                best_index = index;
            }
        }

        let next = remaining.remove(best_index);
        current = next.coordinate;
        route.push(next);
    }

    route
}
