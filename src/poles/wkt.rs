//! WKT-Punkte (`POINT(lon lat)`) der Bestandsmasten.

use kml_pole_geodesy::GeoPoint;
use regex::Regex;
use std::sync::LazyLock;

static POINT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*POINT\s*\(\s*([-+0-9.eE]+)\s+([-+0-9.eE]+)\s*\)\s*$")
        .expect("WKT-Regex ist gültig")
});

/// Liest `POINT(lon lat)`; `None` bei anderem Geometrietyp oder ungültigen Zahlen.
pub fn parse_wkt_point(wkt: &str) -> Option<GeoPoint> {
    let captures = POINT_PATTERN.captures(wkt)?;
    let lon = captures[1].parse::<f64>().ok()?;
    let lat = captures[2].parse::<f64>().ok()?;
    if !lon.is_finite() || !lat.is_finite() || lat.abs() > 90.0 {
        return None;
    }
    Some(GeoPoint::from_lon_lat(lon, lat))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point_variants() {
        assert_eq!(
            parse_wkt_point("POINT(106.8 -6.2)"),
            Some(GeoPoint::new(-6.2, 106.8))
        );
        assert_eq!(
            parse_wkt_point("  point ( 1e-3   2.5 ) "),
            Some(GeoPoint::new(2.5, 0.001))
        );
    }

    #[test]
    fn test_reject_other_geometries() {
        assert_eq!(parse_wkt_point("POINT(1 2 3)"), None);
        assert_eq!(parse_wkt_point("LINESTRING(1 2, 3 4)"), None);
        assert_eq!(parse_wkt_point("POINT(1.2.3 4)"), None);
        assert_eq!(parse_wkt_point("POINT(1 95)"), None);
        assert_eq!(parse_wkt_point(""), None);
    }
}
