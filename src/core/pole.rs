//! Bestandsmast aus der CSV-Datei.

use kml_pole_geodesy::GeoPoint;

/// Ein bereits existierender Mast.
#[derive(Debug, Clone, PartialEq)]
pub struct ExistingPole {
    /// Anzeigename (Spalte `name`)
    pub name: String,
    /// Bezeichner (Spalte `designator`)
    pub designator: String,
    /// Position aus der WKT-Spalte
    pub position: GeoPoint,
}

impl ExistingPole {
    pub fn new(name: impl Into<String>, designator: impl Into<String>, position: GeoPoint) -> Self {
        Self {
            name: name.into(),
            designator: designator.into(),
            position,
        }
    }
}
