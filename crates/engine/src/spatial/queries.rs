//! Spatial query utilities for distance, bearing, and speed calculations.
//!
//! Uses the Haversine formula for accurate distances on Earth's surface.

use geo::{HaversineDistance, Point};

use crate::models::types::GeoFix;

/// Calculate Haversine distance between two points in meters
pub fn haversine_distance(p1: Point, p2: Point) -> f64 {
    p1.haversine_distance(&p2)
}

/// Initial bearing from `prev` to `curr` in degrees [0, 360), 0 = north,
/// clockwise.
///
/// Degenerate when the points coincide; returns 0 in that case.
pub fn initial_bearing(prev: Point, curr: Point) -> f64 {
    let lat1 = prev.y().to_radians();
    let lat2 = curr.y().to_radians();
    let delta_lng = (curr.x() - prev.x()).to_radians();

    let x = delta_lng.sin() * lat2.cos();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lng.cos();

    // atan2(0, 0) == 0, so coincident points fall out as 0 (due north)
    let bearing = x.atan2(y).to_degrees();
    (bearing + 360.0) % 360.0
}

/// Ground speed between two fixes in m/s.
///
/// Returns 0 (not an error, not infinity) when the elapsed time is zero or
/// negative: GPS fixes can legitimately arrive out of order or duplicated,
/// and a zero speed is the tolerant reading of such a pair.
pub fn ground_speed(prev: &GeoFix, curr: &GeoFix) -> f64 {
    let elapsed_ms = (curr.timestamp - prev.timestamp).num_milliseconds();
    if elapsed_ms <= 0 {
        return 0.0;
    }
    haversine_distance(prev.location, curr.location) / (elapsed_ms as f64 / 1000.0)
}

/// Convert meters to degrees at equator (for bounding box queries)
pub fn meters_to_degrees_approx(meters: f64) -> f64 {
    meters / 111_320.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::types::{geo_point, GeoFix};
    use chrono::DateTime;

    #[test]
    fn test_haversine_distance() {
        // Distance from NYC to LA is approximately 3,936 km
        let nyc = Point::new(-74.0060, 40.7128);
        let la = Point::new(-118.2437, 34.0522);

        let dist = haversine_distance(nyc, la);
        assert!((dist - 3_936_000.0).abs() < 50_000.0); // Within 50km
    }

    #[test]
    fn test_haversine_identity_and_symmetry() {
        let a = geo_point(35.6895, 139.6917).unwrap();
        let b = geo_point(35.6985, 139.6917).unwrap();

        assert_eq!(haversine_distance(a, a), 0.0);
        assert_eq!(haversine_distance(a, b), haversine_distance(b, a));
    }

    #[test]
    fn test_haversine_short_range_accuracy() {
        // 0.009 degrees of latitude along a meridian is ~1000 m
        let a = geo_point(35.6895, 139.6917).unwrap();
        let b = geo_point(35.6985, 139.6917).unwrap();

        let dist = haversine_distance(a, b);
        assert!((dist - 1000.0).abs() < 10.0, "got {dist}"); // within 1%
    }

    #[test]
    fn test_initial_bearing_cardinal_directions() {
        let origin = geo_point(0.0, 0.0).unwrap();
        let north = geo_point(1.0, 0.0).unwrap();
        let east = geo_point(0.0, 1.0).unwrap();
        let south = geo_point(-1.0, 0.0).unwrap();
        let west = geo_point(0.0, -1.0).unwrap();

        assert!((initial_bearing(origin, north) - 0.0).abs() < 1e-9);
        assert!((initial_bearing(origin, east) - 90.0).abs() < 1e-9);
        assert!((initial_bearing(origin, south) - 180.0).abs() < 1e-9);
        assert!((initial_bearing(origin, west) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_initial_bearing_degenerate() {
        let p = geo_point(35.0, 139.0).unwrap();
        assert_eq!(initial_bearing(p, p), 0.0);
    }

    #[test]
    fn test_ground_speed() {
        let t0 = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let t1 = DateTime::from_timestamp(1_700_000_100, 0).unwrap();

        // ~1000 m in 100 s -> ~10 m/s
        let prev = GeoFix::new(35.6895, 139.6917, t0).unwrap();
        let curr = GeoFix::new(35.6985, 139.6917, t1).unwrap();

        let speed = ground_speed(&prev, &curr);
        assert!((speed - 10.0).abs() < 0.2, "got {speed}");
    }

    #[test]
    fn test_ground_speed_tolerates_non_positive_elapsed() {
        let t0 = DateTime::from_timestamp(1_700_000_100, 0).unwrap();
        let t1 = DateTime::from_timestamp(1_700_000_000, 0).unwrap();

        let prev = GeoFix::new(35.6895, 139.6917, t0).unwrap();
        let curr = GeoFix::new(35.6985, 139.6917, t1).unwrap();

        // Out-of-order pair
        assert_eq!(ground_speed(&prev, &curr), 0.0);
        // Duplicate timestamp
        let dup = GeoFix::new(35.6985, 139.6917, t0).unwrap();
        assert_eq!(ground_speed(&prev, &dup), 0.0);
    }
}
