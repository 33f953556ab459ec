//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::core::NamedLine;
use crate::kml::{is_kmz, parse_linestrings, read_kml_from_kmz, write_kmz};
use crate::poles::{parse_existing_poles, PoleImport};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Lädt die LineStrings aus einer KML- oder KMZ-Datei.
pub fn load_line_drawing(path: &Path) -> Result<Vec<NamedLine>> {
    let content = std::fs::read(path)
        .with_context(|| format!("Eingabedatei nicht lesbar: {}", path.display()))?;

    let kml = if is_kmz(path, &content) {
        read_kml_from_kmz(&content)?
    } else {
        String::from_utf8(content)
            .with_context(|| format!("KML ist kein gültiges UTF-8: {}", path.display()))?
    };

    let lines = parse_linestrings(&kml)
        .with_context(|| format!("KML konnte nicht gelesen werden: {}", path.display()))?;

    log::info!("Loaded {} LineStrings from {}", lines.len(), path.display());
    Ok(lines)
}

/// Lädt die Bestandsmasten aus einer CSV-Datei.
pub fn load_existing_poles(path: &Path) -> Result<PoleImport> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("CSV nicht lesbar: {}", path.display()))?;
    parse_existing_poles(&content)
        .with_context(|| format!("CSV konnte nicht gelesen werden: {}", path.display()))
}

/// Dateistamm der Eingabe, dient auch als Dokumentname.
pub fn input_stem(input: &Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string())
}

/// Ausgabepfad `{stamm}{suffix}.kml|.kmz` neben der Eingabedatei.
pub fn default_output_path(input: &Path, suffix: &str, kmz: bool) -> PathBuf {
    let extension = if kmz { "kmz" } else { "kml" };
    let file_name = format!("{}{}.{}", input_stem(input), suffix, extension);
    input.with_file_name(file_name)
}

/// Schreibt das KML-Dokument, bei `kmz = true` als KMZ-Archiv.
pub fn write_output(path: &Path, kml: &str, kmz: bool) -> Result<()> {
    let written = if kmz {
        std::fs::write(path, write_kmz(kml)?)
    } else {
        std::fs::write(path, kml)
    };
    written.with_context(|| {
        format!("Ausgabe konnte nicht geschrieben werden: {}", path.display())
    })?;

    log::info!("File saved as: {}", path.display());
    Ok(())
}
