// Distance search - planar degrees-to-km approximation

/// Fixed degrees-to-kilometers factor. The distance below is a planar
/// Euclidean approximation, not geodesic; it is inaccurate at high latitudes
/// and long distances. Callers rely on this exact formula.
pub const DEGREES_TO_KM: f64 = 111.0;

pub fn planar_distance_km(lat_q: f64, lng_q: f64, lat_v: f64, lng_v: f64) -> f64 {
    ((lat_q - lat_v).powi(2) + (lng_q - lng_v).powi(2)).sqrt() * DEGREES_TO_KM
}

pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance_at_same_point() {
        assert_eq!(planar_distance_km(-37.8136, 144.9631, -37.8136, 144.9631), 0.0);
    }

    #[test]
    fn one_degree_is_111_km() {
        assert!((planar_distance_km(0.0, 0.0, 1.0, 0.0) - 111.0).abs() < 1e-9);
        assert!((planar_distance_km(0.0, 0.0, 0.0, 1.0) - 111.0).abs() < 1e-9);
    }

    #[test]
    fn diagonal_is_euclidean() {
        let d = planar_distance_km(0.0, 0.0, 3.0, 4.0);
        assert!((d - 5.0 * 111.0).abs() < 1e-9);
    }

    #[test]
    fn rounding_to_two_decimals() {
        assert_eq!(round2(1.2345), 1.23);
        assert_eq!(round2(1.235), 1.24);
    }
}
