//! Zentrale Konfiguration für den KML Pole Generator.
//!
//! `GeneratorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── Resampling ──────────────────────────────────────────────────────

/// Standard-Abstand zwischen zwei neuen Masten in Metern.
pub const DEFAULT_INTERVAL_M: f64 = 100.0;
/// Kleinster zulässiger Mast-Abstand in Metern.
pub const MIN_INTERVAL_M: f64 = 1.0;

// ── Ordner ──────────────────────────────────────────────────────────

/// Ordner für Bestandsmasten.
pub const FOLDER_TE: &str = "TE";
/// Ordner für neue Masten entlang der Linie.
pub const FOLDER_TN7: &str = "TN7";
/// Ordner für die resampelten Linien.
pub const FOLDER_DISTRIBUTION: &str = "DISTRIBUSI";
/// Präfix der Linien-Unterordner im Distributions-Ordner.
pub const DISTRIBUTION_PREFIX: &str = "Distribusi";

// ── Placemarks ──────────────────────────────────────────────────────

/// Feste Beschreibung der Bestandsmasten.
pub const TE_DESCRIPTION: &str = "PU-AS";
/// Name der neuen Masten.
pub const TN7_POINT_NAME: &str = "TN7";
/// Feste Beschreibung der neuen Masten.
pub const TN7_DESCRIPTION: &str = "PU-S7.0-400NM";

// ── Styles ──────────────────────────────────────────────────────────

/// Icon aller Mast-Punkte.
pub const POLE_ICON_HREF: &str = "http://maps.google.com/mapfiles/kml/shapes/placemark_circle.png";
/// Linienbreite der Distributions-Linien.
pub const DISTRIBUTION_LINE_WIDTH: f32 = 3.0;
/// Linienfarbe der Distributions-Linien (KML `aabbggrr`: Blau).
pub const DISTRIBUTION_LINE_COLOR: &str = "ffff0000";

// ── Ausgabe ─────────────────────────────────────────────────────────

/// Suffix am Dateinamen der Ausgabe.
pub const OUTPUT_SUFFIX: &str = "_poles";

/// Alle zur Laufzeit änderbaren Generator-Optionen.
/// Wird als `kml_pole_generator.toml` neben der Binary gesucht.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneratorOptions {
    // ── Resampling ──────────────────────────────────────────────
    /// Abstand zwischen neuen Masten in Metern
    pub interval_m: f64,

    // ── Ordner ──────────────────────────────────────────────────
    /// Name des TE-Ordners
    pub folder_te: String,
    /// Name des TN7-Ordners
    pub folder_tn7: String,
    /// Name des Distributions-Ordners
    pub folder_distribution: String,
    /// Präfix der Linien-Unterordner im Distributions-Ordner
    pub distribution_prefix: String,

    // ── Placemarks ──────────────────────────────────────────────
    /// Beschreibung der Bestandsmasten
    pub te_description: String,
    /// Designator aus der CSV statt `te_description` verwenden
    pub te_use_designator: bool,
    /// Name der neuen Masten
    pub tn7_point_name: String,
    /// Beschreibung der neuen Masten
    pub tn7_description: String,

    // ── Styles ──────────────────────────────────────────────────
    /// Icon-URL der Mast-Punkte
    pub icon_href: String,
    /// Icon-Skalierung
    pub icon_scale: f32,
    /// Label-Skalierung
    pub label_scale: f32,
    /// Breite der Distributions-Linien
    pub line_width: f32,
    /// Farbe der Distributions-Linien (`aabbggrr`)
    pub line_color: String,

    // ── Ausgabe ─────────────────────────────────────────────────
    /// Suffix am Dateinamen der Ausgabe
    pub output_suffix: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            interval_m: DEFAULT_INTERVAL_M,

            folder_te: FOLDER_TE.to_string(),
            folder_tn7: FOLDER_TN7.to_string(),
            folder_distribution: FOLDER_DISTRIBUTION.to_string(),
            distribution_prefix: DISTRIBUTION_PREFIX.to_string(),

            te_description: TE_DESCRIPTION.to_string(),
            te_use_designator: false,
            tn7_point_name: TN7_POINT_NAME.to_string(),
            tn7_description: TN7_DESCRIPTION.to_string(),

            icon_href: POLE_ICON_HREF.to_string(),
            icon_scale: 1.0,
            label_scale: 1.0,
            line_width: DISTRIBUTION_LINE_WIDTH,
            line_color: DISTRIBUTION_LINE_COLOR.to_string(),

            output_suffix: OUTPUT_SUFFIX.to_string(),
        }
    }
}

impl GeneratorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("kml_pole_generator"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("kml_pole_generator.toml")
    }

    /// Prüft Werte, die das Resampling oder die Ausgabe unbrauchbar machen würden.
    pub fn validate(&self) -> Result<()> {
        if !self.interval_m.is_finite() || self.interval_m < MIN_INTERVAL_M {
            bail!(
                "Intervall muss mindestens {}m betragen (aktuell: {})",
                MIN_INTERVAL_M,
                self.interval_m
            );
        }
        if self.line_color.len() != 8 || !self.line_color.chars().all(|c| c.is_ascii_hexdigit()) {
            bail!(
                "Linienfarbe muss 8 Hex-Zeichen im Format aabbggrr haben (aktuell: '{}')",
                self.line_color
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let options = GeneratorOptions::default();
        assert!(options.validate().is_ok());
        assert_eq!(options.interval_m, 100.0);
        assert_eq!(options.folder_distribution, "DISTRIBUSI");
    }

    #[test]
    fn test_validate_rejects_bad_interval() {
        for interval in [0.0, -1.0, f64::NAN, f64::INFINITY, 1e-300, 0.5] {
            let options = GeneratorOptions {
                interval_m: interval,
                ..Default::default()
            };
            assert!(options.validate().is_err(), "Intervall {interval} akzeptiert");
        }
    }

    #[test]
    fn test_validate_accepts_minimum_interval() {
        let options = GeneratorOptions {
            interval_m: MIN_INTERVAL_M,
            ..Default::default()
        };
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_color() {
        let options = GeneratorOptions {
            line_color: "blue".to_string(),
            ..Default::default()
        };
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults_for_missing_fields() {
        let options: GeneratorOptions =
            toml::from_str("interval_m = 50.0\nfolder_tn7 = \"Tiang Baru\"\n").unwrap();
        assert_eq!(options.interval_m, 50.0);
        assert_eq!(options.folder_tn7, "Tiang Baru");
        assert_eq!(options.tn7_description, TN7_DESCRIPTION);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = std::env::temp_dir().join("kml_pole_generator_options_test.toml");
        let options = GeneratorOptions {
            interval_m: 42.5,
            te_use_designator: true,
            ..Default::default()
        };
        options.save_to_file(&path).unwrap();

        let loaded = GeneratorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, options);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("kml_pole_generator_does_not_exist.toml");
        assert_eq!(
            GeneratorOptions::load_from_file(&path),
            GeneratorOptions::default()
        );
    }
}
