//! Import der Bestandsmasten aus einer CSV-Datei.
//!
//! Erwartet eine Kopfzeile mit den Spalten `name`, `designator` und `wkt`
//! (`POINT(lon lat)`). Zeilen mit unlesbarer Geometrie werden übersprungen.

mod csv_fields;
mod wkt;

use crate::core::ExistingPole;
use anyhow::{bail, Context, Result};

pub use csv_fields::split_record;
pub use wkt::parse_wkt_point;

/// Pflichtspalten der CSV.
const REQUIRED_COLUMNS: [&str; 3] = ["name", "designator", "wkt"];

/// Ergebnis des CSV-Imports.
#[derive(Debug, Clone, Default)]
pub struct PoleImport {
    /// Erfolgreich gelesene Masten in Datei-Reihenfolge
    pub poles: Vec<ExistingPole>,
    /// Anzahl übersprungener Datenzeilen
    pub skipped_rows: usize,
}

/// Parsed die CSV der Bestandsmasten.
pub fn parse_existing_poles(csv_content: &str) -> Result<PoleImport> {
    let content = csv_content.strip_prefix('\u{feff}').unwrap_or(csv_content);
    let mut rows = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let Some((_, header_line)) = rows.next() else {
        bail!("CSV ist leer");
    };
    let header = split_record(header_line).context("Kopfzeile der CSV ist fehlerhaft")?;
    let column = |wanted: &str| {
        header
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(wanted))
            .with_context(|| format!("Spalte '{}' fehlt in der CSV", wanted))
    };
    let [name_col, designator_col, wkt_col] = [
        column(REQUIRED_COLUMNS[0])?,
        column(REQUIRED_COLUMNS[1])?,
        column(REQUIRED_COLUMNS[2])?,
    ];

    let mut import = PoleImport::default();
    for (line_index, line) in rows {
        let row_number = line_index + 1;
        let fields = match split_record(line) {
            Ok(fields) => fields,
            Err(e) => {
                log::warn!("CSV-Zeile {} übersprungen: {:#}", row_number, e);
                import.skipped_rows += 1;
                continue;
            }
        };

        let (Some(name), Some(designator), Some(wkt)) = (
            fields.get(name_col),
            fields.get(designator_col),
            fields.get(wkt_col),
        ) else {
            log::warn!("CSV-Zeile {} übersprungen: zu wenige Spalten", row_number);
            import.skipped_rows += 1;
            continue;
        };

        match parse_wkt_point(wkt) {
            Some(position) => import
                .poles
                .push(ExistingPole::new(name.trim(), designator.trim(), position)),
            None => {
                log::warn!(
                    "CSV-Zeile {} übersprungen: ungültige Geometrie '{}'",
                    row_number,
                    wkt
                );
                import.skipped_rows += 1;
            }
        }
    }

    log::info!(
        "{} Bestandsmasten gelesen, {} Zeilen übersprungen",
        import.poles.len(),
        import.skipped_rows
    );

    Ok(import)
}
