//! Geteilte Konfiguration für alle Schichten.

pub mod options;

pub use options::GeneratorOptions;
pub use options::{DEFAULT_INTERVAL_M, MIN_INTERVAL_M, OUTPUT_SUFFIX};
