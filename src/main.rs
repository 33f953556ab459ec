//! KML Pole Generator.
//!
//! Liest LineStrings aus einer KML/KMZ, verteilt neue Masten im festen
//! Abstand entlang der gelabelten Linien und schreibt das Ergebnis als KML/KMZ.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use kml_pole_generator::app::{file_io, run_generate, GenerateJob};
use kml_pole_generator::GeneratorOptions;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(cli.log_level())
        .init();

    log::info!(
        "KML Pole Generator v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    if let Some(ref path) = cli.write_default_config {
        return GeneratorOptions::default().save_to_file(path);
    }

    let Some(input) = cli.input.clone() else {
        anyhow::bail!("Keine Eingabedatei angegeben");
    };

    if cli.list {
        return list_lines(&input);
    }

    let job = GenerateJob {
        input,
        poles_csv: cli.poles.clone(),
        output: cli.output.clone(),
        kmz: cli.kmz,
        labels: cli.labels.clone(),
        default_label: cli.default_label,
        report: cli.report.clone(),
        options: cli.resolve_options(),
    };

    let report = run_generate(&job)?;
    for line in &report.lines {
        println!(
            "#{:<3} {:<4} {:<32} {:>10.1} m  {:>5} Punkte",
            line.index,
            line.label.to_string(),
            line.name,
            line.length_m,
            line.resampled_points
        );
    }
    println!("{}", report.output.display());

    Ok(())
}

/// Gibt alle LineStrings mit Placemark-Index aus (Grundlage für `--label`).
fn list_lines(input: &Path) -> Result<()> {
    let lines = file_io::load_line_drawing(input)?;
    for line in &lines {
        println!(
            "#{:<3} {:<32} {:>5} Vertices {:>10.1} m",
            line.index,
            line.name,
            line.vertex_count(),
            line.length_m()
        );
    }
    Ok(())
}
