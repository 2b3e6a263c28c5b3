use crate::config::constants::EARTH_RADIUS_M;

/// Great-circle distance in meters between two (latitude, longitude) pairs
/// given in degrees, via the haversine formula.
///
/// Pure and infallible: non-finite input yields NaN, callers guard upstream.
#[inline]
pub fn haversine_m(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Signed distance from a zone boundary: negative or zero means inside.
#[inline]
pub fn boundary_distance_m(
    lat: f64,
    lon: f64,
    center_lat: f64,
    center_lon: f64,
    radius_m: f64,
) -> f64 {
    haversine_m(lat, lon, center_lat, center_lon) - radius_m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_points_zero_distance() {
        assert_eq!(haversine_m(24.0, 54.0, 24.0, 54.0), 0.0);
        assert_eq!(haversine_m(-89.9, 179.9, -89.9, 179.9), 0.0);
        assert_eq!(haversine_m(0.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_known_meridian_distance() {
        // One degree of latitude on the reference sphere: R * pi / 180 = ~111,194.9 m
        let d = haversine_m(24.0, 54.0, 25.0, 54.0);
        assert!((d - 111_194.9).abs() < 1.0, "got {}", d);
    }

    #[test]
    fn test_small_meridian_offsets() {
        // 0.0015 deg north = ~166.8 m; 0.0006 deg north = ~66.7 m
        let far = haversine_m(24.0015, 54.0, 24.0, 54.0);
        let near = haversine_m(24.0006, 54.0, 24.0, 54.0);
        assert!((far - 166.8).abs() < 0.5, "got {}", far);
        assert!((near - 66.7).abs() < 0.5, "got {}", near);
    }

    #[test]
    fn test_symmetry() {
        let ab = haversine_m(24.5, 54.3, 25.1, 53.9);
        let ba = haversine_m(25.1, 53.9, 24.5, 54.3);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn test_boundary_distance_sign() {
        // 166.8 m from a 100 m zone center: +66.8 m outside the boundary
        let outside = boundary_distance_m(24.0015, 54.0, 24.0, 54.0, 100.0);
        assert!((outside - 66.8).abs() < 0.5, "got {}", outside);

        // 66.7 m from center: -33.3 m (inside)
        let inside = boundary_distance_m(24.0006, 54.0, 24.0, 54.0, 100.0);
        assert!((inside + 33.3).abs() < 0.5, "got {}", inside);
    }

    #[test]
    fn test_non_finite_input_is_nan() {
        assert!(haversine_m(f64::NAN, 54.0, 24.0, 54.0).is_nan());
        assert!(haversine_m(24.0, f64::INFINITY, 24.0, 54.0).is_nan());
    }
}
