//! Gleichabständiges Resampling einer Polyline entlang der Bogenlänge.
//!
//! Die Zielpunkte liegen bei `0, I, 2I, …, floor(L / I) · I` Metern
//! kumulierter Haversine-Distanz. Innerhalb eines Segments wird linear im
//! Grad-Raum interpoliert; für Segmentlängen im Bereich weniger hundert Meter
//! ist der Fehler gegenüber geodätischer Interpolation vernachlässigbar.

use crate::distance::segment_lengths;
use crate::point::GeoPoint;

/// Obergrenze für interpolierte Punkte pro Polyline.
pub const MAX_RESAMPLED_POINTS: usize = 10_000_000;

/// Ergebnis eines Resamplings.
///
/// Der letzte Punkt ist immer exakt der letzte Vertex der Eingabe.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResampledPath {
    /// Neue Punktfolge (Breite/Länge)
    pub points: Vec<GeoPoint>,
    /// Anzahl interpolierter Punkte vor der Endpunkt-Korrektur
    pub interpolated_count: usize,
    /// Gesamtlänge der Eingabe in Metern
    pub total_length_m: f64,
}

impl ResampledPath {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// true wenn der Endpunkt nachträglich angehängt wurde.
    pub fn endpoint_appended(&self) -> bool {
        self.points.len() > self.interpolated_count
    }

    /// Punkte als `(lon, lat)`-Paare (Reihenfolge für KML/GeoJSON).
    pub fn lon_lat(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points.iter().map(|p| p.lon_lat())
    }

    pub fn into_points(self) -> Vec<GeoPoint> {
        self.points
    }
}

/// Aktives Segment des vorwärts laufenden Cursors.
struct SegmentCursor<'a> {
    points: &'a [GeoPoint],
    lengths: &'a [f64],
    /// Summe der vollständig verbrauchten Segmentlängen
    consumed: f64,
    index: usize,
}

impl<'a> SegmentCursor<'a> {
    fn new(points: &'a [GeoPoint], lengths: &'a [f64]) -> Self {
        Self {
            points,
            lengths,
            consumed: 0.0,
            index: 0,
        }
    }

    fn active_length(&self) -> f64 {
        self.lengths[self.index]
    }

    /// Rückt vor, bis `target` im aktiven Segment liegt oder kein Segment mehr folgt.
    /// Läuft nie zurück; `target` muss daher monoton steigen.
    fn advance_to(&mut self, target: f64) {
        while self.consumed + self.active_length() < target && self.index + 1 < self.lengths.len() {
            self.consumed += self.active_length();
            self.index += 1;
        }
    }

    /// Punkt bei kumulierter Distanz `target` im aktiven Segment.
    fn point_at(&self, target: f64) -> GeoPoint {
        let seg_len = self.active_length();
        let frac = if seg_len != 0.0 {
            (target - self.consumed) / seg_len
        } else {
            0.0
        };
        self.points[self.index].interpolate(self.points[self.index + 1], frac)
    }
}

/// Verteilt Punkte im festen Abstand `interval_m` (Meter) entlang der Polyline.
///
/// - Weniger als 2 Vertices: leeres Ergebnis.
/// - Der letzte Vertex wird angehängt, falls der letzte Zielpunkt nicht exakt
///   auf ihm liegt.
/// - `interval_m` muss positiv und endlich sein; sonst leeres Ergebnis mit Warnung
///   (die Validierung gehört zum Aufrufer).
/// - Mehr als [`MAX_RESAMPLED_POINTS`] Zielpunkte: leeres Ergebnis mit Warnung.
pub fn resample_by_interval(polyline: &[GeoPoint], interval_m: f64) -> ResampledPath {
    if polyline.len() < 2 {
        return ResampledPath::default();
    }
    if !(interval_m.is_finite() && interval_m > 0.0) {
        log::warn!("Resampling übersprungen: ungültiges Intervall {}", interval_m);
        return ResampledPath::default();
    }

    let lengths = segment_lengths(polyline);
    let total: f64 = lengths.iter().sum();
    let steps = (total / interval_m).floor();
    if !steps.is_finite() || steps >= MAX_RESAMPLED_POINTS as f64 {
        log::warn!(
            "Resampling übersprungen: {:.1}m bei Intervall {}m ergibt zu viele Punkte (max. {})",
            total,
            interval_m,
            MAX_RESAMPLED_POINTS
        );
        return ResampledPath::default();
    }
    let num_points = steps as usize;

    let mut points = Vec::with_capacity(num_points.saturating_add(2));
    let mut cursor = SegmentCursor::new(polyline, &lengths);

    for n in 0..=num_points {
        let target = n as f64 * interval_m;
        cursor.advance_to(target);
        points.push(cursor.point_at(target));
    }

    let interpolated_count = points.len();
    let last_vertex = polyline[polyline.len() - 1];
    if points.last() != Some(&last_vertex) {
        points.push(last_vertex);
    }

    log::debug!(
        "Resampling: {} Vertices, {:.1}m → {} Punkte ({} interpoliert)",
        polyline.len(),
        total,
        points.len(),
        interpolated_count
    );

    ResampledPath {
        points,
        interpolated_count,
        total_length_m: total,
    }
}
