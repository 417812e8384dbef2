// Route models for the result of an optimization

use std::fmt;

use serde::Serialize;

use crate::models::{Coordinate, Kilometers, Location};

/// Represents a fully computed route over a set of stops
///
/// The first entry of `stops` is always the origin. Each optimization
/// produces a fresh value; callers holding an earlier route replace it
/// wholesale rather than mutating it in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizedRoute {
    /// Stops in visiting order, origin first
    pub stops: Vec<Location>,

    /// Distance of each consecutive pair of stops
    pub leg_distances_km: Vec<Kilometers>,

    /// Sum of all leg distances
    pub total_distance_km: Kilometers,

    /// Arithmetic mean of all stop coordinates, for centering a map view
    pub map_center: Coordinate,
}

impl OptimizedRoute {
    /// Number of stops including the origin
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Legs between consecutive stops, paired with their distances
    pub fn legs(&self) -> impl Iterator<Item = RouteLeg<'_>> {
        self.stops
            .windows(2)
            .zip(self.leg_distances_km.iter())
            .map(|(pair, &distance_km)| RouteLeg {
                from: &pair[0],
                to: &pair[1],
                distance_km,
            })
    }
}

/// One traveled segment between two consecutive stops
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteLeg<'a> {
    /// Stop the leg departs from
    pub from: &'a Location,

    /// Stop the leg arrives at
    pub to: &'a Location,

    /// Great-circle length of the leg
    pub distance_km: Kilometers,
}

impl fmt::Display for RouteLeg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}: {:.3} km",
            self.from.name, self.to.name, self.distance_km
        )
    }
}
