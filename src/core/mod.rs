//! Core-Domänentypen: LineStrings, Labels, Bestandsmasten und Ausgabe-Dokument.

pub mod document;
pub mod label;
pub mod line;
pub mod pole;

pub use document::{Folder, Geometry, Placemark, PoleDocument, StyleRef};
pub use label::{LabelMapping, LineLabel};
pub use line::NamedLine;
pub use pole::ExistingPole;
