// Fixed coordinate table for well-known place names

use crate::models::Coordinate;

/// Known place names and their coordinates
///
/// Lookups are exact and case-sensitive; any other spelling falls through
/// to the synthetic path of the simulated geocoder.
static KNOWN_PLACES: &[(&str, Coordinate)] = &[
    (
        "New York",
        Coordinate {
            latitude: 40.7128,
            longitude: -74.0060,
        },
    ),
    (
        "Los Angeles",
        Coordinate {
            latitude: 34.0522,
            longitude: -118.2437,
        },
    ),
    (
        "Chicago",
        Coordinate {
            latitude: 41.8781,
            longitude: -87.6298,
        },
    ),
    (
        "Houston",
        Coordinate {
            latitude: 29.7604,
            longitude: -95.3698,
        },
    ),
    (
        "Phoenix",
        Coordinate {
            latitude: 33.4484,
            longitude: -112.0740,
        },
    ),
    (
        "Philadelphia",
        Coordinate {
            latitude: 39.9526,
            longitude: -75.1652,
        },
    ),
    (
        "San Antonio",
        Coordinate {
            latitude: 29.4241,
            longitude: -98.4936,
        },
    ),
    (
        "San Diego",
        Coordinate {
            latitude: 32.7157,
            longitude: -117.1611,
        },
    ),
    (
        "Dallas",
        Coordinate {
            latitude: 32.7767,
            longitude: -96.7970,
        },
    ),
    (
        "San Jose",
        Coordinate {
            latitude: 37.3382,
            longitude: -121.8863,
        },
    ),
];

/// Look up a known place by exact, case-sensitive name
pub fn lookup(name: &str) -> Option<Coordinate> {
    KNOWN_PLACES
        .iter()
        .find(|(place, _)| *place == name)
        .map(|(_, coordinate)| *coordinate)
}
