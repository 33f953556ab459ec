//! Geographischer Punkt in Dezimalgrad.

use serde::{Deserialize, Serialize};

/// Punkt auf der Erdoberfläche (Breite, Länge) in Dezimalgrad, ohne Höhe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Breitengrad in Grad
    pub lat: f64,
    /// Längengrad in Grad
    pub lon: f64,
}

impl GeoPoint {
    /// Erstellt einen Punkt aus Breite und Länge.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Erstellt einen Punkt aus einem `(lon, lat)`-Paar (KML-Reihenfolge).
    pub const fn from_lon_lat(lon: f64, lat: f64) -> Self {
        Self { lat, lon }
    }

    /// Liefert `(lon, lat)` für die Ausgabe in Dokumenten.
    pub const fn lon_lat(self) -> (f64, f64) {
        (self.lon, self.lat)
    }

    /// Lineare Interpolation im Grad-Raum (nicht geodätisch).
    ///
    /// `frac = 0` liefert exakt `self`.
    pub fn interpolate(self, other: GeoPoint, frac: f64) -> GeoPoint {
        GeoPoint {
            lat: self.lat + frac * (other.lat - self.lat),
            lon: self.lon + frac * (other.lon - self.lon),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_frac_zero_is_exact_start() {
        let a = GeoPoint::new(-6.123_456_789, 106.987_654_321);
        let b = GeoPoint::new(-6.2, 107.0);
        assert_eq!(a.interpolate(b, 0.0), a);
    }

    #[test]
    fn test_interpolate_midpoint() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(2.0, -4.0);
        assert_eq!(a.interpolate(b, 0.5), GeoPoint::new(1.0, -2.0));
    }

    #[test]
    fn test_lon_lat_order() {
        let p = GeoPoint::from_lon_lat(106.8, -6.2);
        assert_eq!(p.lat, -6.2);
        assert_eq!(p.lon_lat(), (106.8, -6.2));
    }
}
