//! KML/KMZ Import und Export.
//!
//! Der Parser liest benannte LineStrings aus beliebigen KML-Dokumenten,
//! der Writer erzeugt das gelabelte Mast-Dokument.

pub mod kmz;
pub mod parser;
pub mod writer;

pub use kmz::{is_kmz, read_kml_from_kmz, write_kmz};
pub use parser::parse_linestrings;
pub use writer::write_pole_document;
