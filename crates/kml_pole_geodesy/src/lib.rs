//! Geodätischer Kern: Punkt-Typ, Haversine-Distanz und Resampling.
//!
//! Reine Berechnung ohne I/O. Alle Funktionen sind total über gültigen
//! Koordinaten und können parallel für unabhängige Polylines aufgerufen werden.

pub mod distance;
pub mod point;
pub mod resample;

pub use distance::{EARTH_RADIUS_M, haversine_distance, polyline_length, segment_lengths};
pub use point::GeoPoint;
pub use resample::{MAX_RESAMPLED_POINTS, ResampledPath, resample_by_interval};
