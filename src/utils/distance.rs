// Distance calculation utilities

use crate::models::{Coordinate, Kilometers};

/// Mean Earth radius in kilometers, the constant behind every distance here
pub const EARTH_RADIUS_KM: Kilometers = 6371.0;

/// Calculate the great-circle distance between two coordinates in kilometers
/// using the haversine formula
///
/// Symmetric in its arguments and exactly zero when both coordinates are
/// equal. The intermediate term is clamped to [0, 1] because floating-point
/// rounding can push it just past 1 for near-antipodal pairs, which would
/// otherwise take the square root of a negative number.
pub fn haversine_km(a: &Coordinate, b: &Coordinate) -> Kilometers {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lng = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (d_lng / 2.0).sin().powi(2);
    let h = h.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_self_is_zero() {
        let point = Coordinate::new(40.7128, -74.0060);

        assert_eq!(haversine_km(&point, &point), 0.0);
    }

    #[test]
    fn test_new_york_to_chicago() {
        let new_york = Coordinate::new(40.7128, -74.0060);
        let chicago = Coordinate::new(41.8781, -87.6298);

        let distance = haversine_km(&new_york, &chicago);

        // Great-circle distance between the two cities is roughly 1144 km
        assert!(distance > 1140.0 && distance < 1150.0);
    }

    #[test]
    fn test_new_york_to_los_angeles() {
        let new_york = Coordinate::new(40.7128, -74.0060);
        let los_angeles = Coordinate::new(34.0522, -118.2437);

        let distance = haversine_km(&new_york, &los_angeles);

        // Roughly 3936 km
        assert!(distance > 3930.0 && distance < 3945.0);
    }

    #[test]
    fn test_symmetry() {
        let a = Coordinate::new(29.7604, -95.3698);
        let b = Coordinate::new(33.4484, -112.0740);

        assert!((haversine_km(&a, &b) - haversine_km(&b, &a)).abs() < 1e-9);
    }

    #[test]
    fn test_antipodal_points_stay_finite() {
        let pairs = [
            (Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0)),
            (Coordinate::new(10.0, 20.0), Coordinate::new(-10.0, -160.0)),
            (Coordinate::new(45.0, 45.0), Coordinate::new(-45.0, -135.0)),
        ];

        for (a, b) in &pairs {
            let distance = haversine_km(a, b);

            assert!(distance.is_finite());
            // Half the Earth's circumference, about 20015 km
            assert!((distance - 20015.0).abs() < 1.0);
        }
    }

    #[test]
    fn test_triangle_inequality() {
        let new_york = Coordinate::new(40.7128, -74.0060);
        let chicago = Coordinate::new(41.8781, -87.6298);
        let los_angeles = Coordinate::new(34.0522, -118.2437);

        let direct = haversine_km(&new_york, &los_angeles);
        let via_chicago =
            haversine_km(&new_york, &chicago) + haversine_km(&chicago, &los_angeles);

        assert!(direct <= via_chicago + 1e-6);
    }
}
