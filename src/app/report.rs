//! JSON-Bericht eines Generator-Laufs.

use super::generate::LineSummary;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Zusammenfassung eines Laufs für die JSON-Ausgabe.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub interval_m: f64,
    /// Anzahl gelesener LineStrings (gelabelt oder nicht)
    pub line_count: usize,
    pub existing_poles: usize,
    pub skipped_pole_rows: usize,
    pub lines: Vec<LineSummary>,
}

impl RunReport {
    /// Summe aller erzeugten TN7-/TE-Placemarks.
    pub fn total_poles(&self) -> usize {
        self.lines.iter().map(|l| l.pole_count).sum()
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Bericht konnte nicht serialisiert werden")
    }

    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?).with_context(|| {
            format!("Bericht konnte nicht geschrieben werden: {}", path.display())
        })?;
        log::info!("Bericht geschrieben: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LineLabel;

    #[test]
    fn test_report_json_fields() {
        let report = RunReport {
            input: PathBuf::from("jalur.kml"),
            output: PathBuf::from("jalur_poles.kml"),
            interval_m: 50.0,
            line_count: 3,
            existing_poles: 0,
            skipped_pole_rows: 0,
            lines: vec![LineSummary {
                index: 2,
                name: "Jalur".to_string(),
                label: LineLabel::Tn7,
                vertex_count: 2,
                length_m: 100.07,
                resampled_points: 4,
                endpoint_appended: true,
                pole_count: 4,
            }],
        };

        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["interval_m"], 50.0);
        assert_eq!(value["lines"][0]["label"], "TN7");
        assert_eq!(value["lines"][0]["resampled_points"], 4);
        assert_eq!(report.total_poles(), 4);
    }
}
