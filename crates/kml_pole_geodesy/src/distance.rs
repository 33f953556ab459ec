//! Großkreis-Distanz nach der Haversine-Formel (Kugel-Näherung).

use crate::point::GeoPoint;

/// Mittlerer Erdradius in Metern.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Großkreis-Distanz zwischen zwei Punkten in Metern.
///
/// Symmetrisch, nicht negativ, 0 für identische Punkte.
pub fn haversine_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = b.lon.to_radians() - a.lon.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_M * c
}

/// Längen aller Segmente (Vertex `i` → `i + 1`).
pub fn segment_lengths(points: &[GeoPoint]) -> Vec<f64> {
    points
        .windows(2)
        .map(|w| haversine_distance(w[0], w[1]))
        .collect()
}

/// Gesamtlänge einer Polyline entlang der Segmente.
pub fn polyline_length(points: &[GeoPoint]) -> f64 {
    points
        .windows(2)
        .map(|w| haversine_distance(w[0], w[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_identical_points_have_zero_distance() {
        for p in [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(-6.2, 106.8),
            GeoPoint::new(89.9, -179.9),
        ] {
            assert_eq!(haversine_distance(p, p), 0.0);
        }
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = GeoPoint::new(-6.175_392, 106.827_153);
        let b = GeoPoint::new(-6.914_744, 107.609_810);
        assert_eq!(haversine_distance(a, b), haversine_distance(b, a));
    }

    #[test]
    fn test_antipodal_points_are_half_circumference() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 180.0);
        assert_relative_eq!(haversine_distance(a, b), PI * EARTH_RADIUS_M, epsilon = 1e-6);
    }

    #[test]
    fn test_one_degree_on_equator() {
        let d = haversine_distance(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 1.0));
        assert_relative_eq!(d, EARTH_RADIUS_M * PI / 180.0, max_relative = 1e-12);
    }

    #[test]
    fn test_polyline_length_sums_segments() {
        let line = [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 0.001),
            GeoPoint::new(0.001, 0.001),
        ];
        let lengths = segment_lengths(&line);
        assert_eq!(lengths.len(), 2);
        assert_relative_eq!(polyline_length(&line), lengths[0] + lengths[1]);
    }

    #[test]
    fn test_polyline_length_short_input() {
        assert_eq!(polyline_length(&[]), 0.0);
        assert_eq!(polyline_length(&[GeoPoint::new(1.0, 1.0)]), 0.0);
        assert!(segment_lengths(&[GeoPoint::new(1.0, 1.0)]).is_empty());
    }
}
