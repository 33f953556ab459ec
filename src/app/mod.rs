//! Anwendungsschicht: Use-Cases zwischen Dateien, Labels und Dokument.

pub mod file_io;
pub mod generate;
pub mod labels;
pub mod report;

pub use generate::{build_pole_document, GeneratedDocument, LineSummary};
pub use labels::{resolve_labels, LabelAssignment, LineSelector};
pub use report::RunReport;

use crate::core::LineLabel;
use crate::kml::write_pole_document;
use crate::shared::GeneratorOptions;
use anyhow::Result;
use std::path::PathBuf;

/// Parameter eines Generator-Laufs.
#[derive(Debug, Clone)]
pub struct GenerateJob {
    /// KML- oder KMZ-Eingabe
    pub input: PathBuf,
    /// Optionale CSV mit Bestandsmasten
    pub poles_csv: Option<PathBuf>,
    /// Ausgabepfad; `None` → neben der Eingabe mit Suffix
    pub output: Option<PathBuf>,
    /// Ausgabe als KMZ
    pub kmz: bool,
    pub labels: Vec<LabelAssignment>,
    /// Label für Linien ohne explizite Angabe
    pub default_label: LineLabel,
    /// Optionaler Pfad für den JSON-Bericht
    pub report: Option<PathBuf>,
    pub options: GeneratorOptions,
}

/// Führt einen kompletten Lauf aus: lesen, labeln, resampeln, schreiben.
pub fn run_generate(job: &GenerateJob) -> Result<RunReport> {
    job.options.validate()?;

    let lines = file_io::load_line_drawing(&job.input)?;
    let labels = resolve_labels(&lines, &job.labels, job.default_label)?;

    let pole_import = match job.poles_csv {
        Some(ref path) => file_io::load_existing_poles(path)?,
        None => Default::default(),
    };

    let document_name = file_io::input_stem(&job.input);
    let generated = build_pole_document(
        &document_name,
        &lines,
        &labels,
        &job.options,
        &pole_import.poles,
    );

    if generated.lines.is_empty() {
        log::warn!("Keine Linie gelabelt, Ausgabe enthält nur leere Ordner");
    }

    let output = job.output.clone().unwrap_or_else(|| {
        file_io::default_output_path(&job.input, &job.options.output_suffix, job.kmz)
    });

    let kml = write_pole_document(&generated.document, &job.options)?;
    file_io::write_output(&output, &kml, job.kmz)?;

    let report = RunReport {
        input: job.input.clone(),
        output,
        interval_m: job.options.interval_m,
        line_count: lines.len(),
        existing_poles: pole_import.poles.len(),
        skipped_pole_rows: pole_import.skipped_rows,
        lines: generated.lines,
    };

    if let Some(ref path) = job.report {
        report.write_to_file(path)?;
    }

    log::info!(
        "{} Linien verarbeitet, {} Masten erzeugt → {}",
        report.lines.len(),
        report.total_poles(),
        report.output.display()
    );

    Ok(report)
}
