//! Spherical-earth helpers shared by the scoring engine and terrain analyzer.
//!
//! All angles are in degrees. Azimuths and bearings are clockwise from true north.

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Normalize an azimuth into `[0, 360)`.
pub fn normalize_azimuth(azimuth: f64) -> f64 {
    let wrapped = azimuth.rem_euclid(360.0);
    // rem_euclid can round tiny negatives up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Smallest angle between two azimuths, in `[0, 180]`.
pub fn angular_difference(a: f64, b: f64) -> f64 {
    let diff = (normalize_azimuth(a) - normalize_azimuth(b)).abs();
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

/// Forward azimuth from point 1 to point 2, in `[0, 360)`.
pub fn bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let y = dlon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
    normalize_azimuth(y.atan2(x).to_degrees())
}

/// Great-circle distance in meters (haversine).
pub fn haversine_distance_m(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();

    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Linear alignment score: 100 when `a == b`, 0 when they are opposite.
pub fn alignment_score(a: f64, b: f64) -> f64 {
    100.0 * (1.0 - angular_difference(a, b) / 180.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_azimuth() {
        assert_eq!(normalize_azimuth(0.0), 0.0);
        assert_eq!(normalize_azimuth(360.0), 0.0);
        assert_eq!(normalize_azimuth(-10.0), 350.0);
        assert_eq!(normalize_azimuth(725.0), 5.0);
        assert!(normalize_azimuth(-1e-15) < 360.0);
    }

    #[test]
    fn test_angular_difference_wraps() {
        assert_eq!(angular_difference(350.0, 10.0), 20.0);
        assert_eq!(angular_difference(10.0, 350.0), 20.0);
        assert_eq!(angular_difference(0.0, 180.0), 180.0);
        assert_eq!(angular_difference(90.0, 90.0), 0.0);
    }

    #[test]
    fn test_bearing_cardinal_directions() {
        assert!(bearing(31.0, 120.0, 31.1, 120.0).abs() < 1e-9);
        assert!((bearing(31.0, 120.0, 30.9, 120.0) - 180.0).abs() < 1e-9);
        assert!((bearing(0.0, 120.0, 0.0, 120.1) - 90.0).abs() < 1e-9);
        assert!((bearing(0.0, 120.0, 0.0, 119.9) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_haversine_one_degree_latitude() {
        let d = haversine_distance_m(31.0, 120.0, 32.0, 120.0);
        assert!((d - 111_195.0).abs() < 10.0, "got {}", d);
        assert_eq!(haversine_distance_m(31.0, 120.0, 31.0, 120.0), 0.0);
    }

    #[test]
    fn test_alignment_score_extremes() {
        assert_eq!(alignment_score(45.0, 45.0), 100.0);
        assert_eq!(alignment_score(45.0, 225.0), 0.0);
        assert!((alignment_score(0.0, 90.0) - 50.0).abs() < 1e-12);
    }
}
