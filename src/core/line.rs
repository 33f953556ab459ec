//! Benannter LineString aus der Eingabe-KML.

use kml_pole_geodesy::{polyline_length, GeoPoint};

/// Ein LineString-Placemark mit Namen und Koordinaten.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedLine {
    /// Laufende Nummer des Placemarks im Dokument (0-basiert, zählt alle Placemarks)
    pub index: usize,
    /// Name aus `<name>` oder `LineString_{index + 1}`
    pub name: String,
    /// Vertices in Dokument-Reihenfolge
    pub coords: Vec<GeoPoint>,
}

impl NamedLine {
    /// Erstellt einen neuen LineString
    pub fn new(index: usize, name: impl Into<String>, coords: Vec<GeoPoint>) -> Self {
        Self {
            index,
            name: name.into(),
            coords,
        }
    }

    /// Fallback-Name für Placemarks ohne `<name>`.
    pub fn fallback_name(index: usize) -> String {
        format!("LineString_{}", index + 1)
    }

    pub fn vertex_count(&self) -> usize {
        self.coords.len()
    }

    /// Länge entlang der Vertices in Metern (Haversine).
    pub fn length_m(&self) -> f64 {
        polyline_length(&self.coords)
    }
}
