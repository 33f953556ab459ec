//! KML Pole Generator Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod kml;
pub mod poles;
pub mod shared;

pub use app::{
    build_pole_document, resolve_labels, run_generate, GenerateJob, LabelAssignment, RunReport,
};
pub use crate::core::{ExistingPole, LabelMapping, LineLabel, NamedLine, PoleDocument};
pub use kml::{parse_linestrings, write_pole_document};
pub use kml_pole_geodesy::{haversine_distance, resample_by_interval, GeoPoint, ResampledPath};
pub use poles::parse_existing_poles;
pub use shared::GeneratorOptions;
