//! Kommandozeilen-Argumente.

use clap::{ArgAction, Parser};
use kml_pole_generator::{GeneratorOptions, LabelAssignment, LineLabel};
use std::path::PathBuf;

/// Erzeugt aus KML-LineStrings gelabelte Mast-Ordner (TE / TN7 / DISTRIBUSI).
#[derive(Debug, Parser)]
#[command(name = "KML-Pole-Generator", version, about)]
pub struct Cli {
    /// KML- oder KMZ-Datei mit LineStrings
    #[arg(required_unless_present = "write_default_config")]
    pub input: Option<PathBuf>,

    /// Abstand zwischen neuen Masten in Metern (überschreibt die Konfiguration)
    #[arg(short, long, value_name = "METER")]
    pub interval: Option<f64>,

    /// Label einer Linie: `#INDEX=LABEL` oder `NAME=LABEL` (LABEL: TE, TN7, none)
    #[arg(short, long = "label", value_name = "SELEKTOR=LABEL")]
    pub labels: Vec<LabelAssignment>,

    /// Label für alle Linien ohne explizite Angabe
    #[arg(long, value_name = "LABEL", default_value = "none")]
    pub default_label: LineLabel,

    /// CSV mit Bestandsmasten (Spalten name, designator, wkt)
    #[arg(short, long, value_name = "CSV")]
    pub poles: Option<PathBuf>,

    /// Ausgabedatei (Standard: neben der Eingabe mit Suffix)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Ausgabe als KMZ statt KML
    #[arg(long)]
    pub kmz: bool,

    /// JSON-Bericht über den Lauf schreiben
    #[arg(long, value_name = "JSON")]
    pub report: Option<PathBuf>,

    /// Optionen-Datei (TOML); Standard: neben der Binary
    #[arg(short, long, value_name = "TOML")]
    pub config: Option<PathBuf>,

    /// Suffix am Dateinamen der Ausgabe (überschreibt die Konfiguration)
    #[arg(long)]
    pub suffix: Option<String>,

    /// Nur die gefundenen LineStrings mit Index auflisten
    #[arg(long)]
    pub list: bool,

    /// Standard-Optionen als TOML schreiben und beenden
    #[arg(long, value_name = "TOML")]
    pub write_default_config: Option<PathBuf>,

    /// Ausführlichere Log-Ausgabe (-v: Debug, -vv: Trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    /// Lädt die Optionen-Datei und wendet die CLI-Overrides an.
    pub fn resolve_options(&self) -> GeneratorOptions {
        let path = self
            .config
            .clone()
            .unwrap_or_else(GeneratorOptions::config_path);
        let mut options = GeneratorOptions::load_from_file(&path);

        if let Some(interval) = self.interval {
            options.interval_m = interval;
        }
        if let Some(ref suffix) = self.suffix {
            options.output_suffix = suffix.clone();
        }
        options
    }
}
