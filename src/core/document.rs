//! Ausgabe-Dokument als Ordner-Hierarchie, unabhängig vom Dateiformat.

use kml_pole_geodesy::GeoPoint;

/// Referenz auf einen der gemeinsamen Styles des Dokuments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleRef {
    /// Mast-Punkt (Kreis-Icon)
    PolePoint,
    /// Resampelte Distributions-Linie
    DistributionLine,
}

impl StyleRef {
    /// Style-ID im KML-Dokument
    pub fn id(self) -> &'static str {
        match self {
            StyleRef::PolePoint => "pole_point",
            StyleRef::DistributionLine => "distribution_line",
        }
    }
}

/// Geometrie eines Placemarks.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(GeoPoint),
    LineString(Vec<GeoPoint>),
}

/// Ein Placemark in der Ausgabe.
#[derive(Debug, Clone, PartialEq)]
pub struct Placemark {
    pub name: String,
    pub description: Option<String>,
    pub style: StyleRef,
    pub geometry: Geometry,
}

/// Ordner mit Unterordnern und Placemarks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Folder {
    pub name: String,
    pub folders: Vec<Folder>,
    pub placemarks: Vec<Placemark>,
}

impl Folder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sucht einen direkten Unterordner anhand des Namens.
    pub fn subfolder(&self, name: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.name == name)
    }

    /// Anzahl aller Placemarks inklusive Unterordner.
    pub fn placemark_count(&self) -> usize {
        self.placemarks.len()
            + self
                .folders
                .iter()
                .map(Folder::placemark_count)
                .sum::<usize>()
    }
}

/// Vollständiges Ausgabe-Dokument.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoleDocument {
    /// Dokumentname (Stamm der Eingabedatei)
    pub name: String,
    /// Top-Level-Ordner in Ausgabe-Reihenfolge
    pub folders: Vec<Folder>,
}

impl PoleDocument {
    pub fn folder(&self, name: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.name == name)
    }

    pub fn placemark_count(&self) -> usize {
        self.folders.iter().map(Folder::placemark_count).sum()
    }
}
