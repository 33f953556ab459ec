//! Parser für LineString-Placemarks aus KML-Dokumenten.

mod coordinates;

use crate::core::NamedLine;
use anyhow::{Context, Result};
use quick_xml::events::Event;
use quick_xml::Reader;

pub(crate) use coordinates::parse_coordinates;

/// Textinhalt, der gerade gesammelt wird.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Capture {
    Name,
    Coordinates,
}

/// Zustand des aktuell offenen Placemarks.
#[derive(Debug, Default)]
struct PlacemarkScope {
    index: usize,
    /// Stack-Tiefe des `<Placemark>`-Elements
    depth: usize,
    name: Option<String>,
    /// Stack-Tiefe des ersten `<LineString>`, solange er offen ist
    line_depth: Option<usize>,
    /// Erster LineString wurde vollständig gelesen
    line_closed: bool,
    coordinates: Option<String>,
}

impl PlacemarkScope {
    fn new(index: usize, depth: usize) -> Self {
        Self {
            index,
            depth,
            ..Default::default()
        }
    }

    fn has_line(&self) -> bool {
        self.line_depth.is_some() || self.line_closed
    }

    /// Beginnt ein Element auf Tiefe `depth` und liefert ggf. den zu sammelnden Text.
    fn open_element(&mut self, local: &str, depth: usize) -> Option<Capture> {
        match local {
            "name" if depth == self.depth + 1 && self.name.is_none() => {
                self.name = Some(String::new());
                Some(Capture::Name)
            }
            "LineString" if !self.has_line() => {
                self.line_depth = Some(depth);
                None
            }
            "coordinates"
                if self.line_depth.map(|d| d + 1) == Some(depth) && self.coordinates.is_none() =>
            {
                self.coordinates = Some(String::new());
                Some(Capture::Coordinates)
            }
            _ => None,
        }
    }

    fn push_text(&mut self, capture: Capture, text: &str) {
        let target = match capture {
            Capture::Name => self.name.as_mut(),
            Capture::Coordinates => self.coordinates.as_mut(),
        };
        if let Some(buffer) = target {
            buffer.push_str(text);
        }
    }

    fn close_element(&mut self, depth: usize) {
        if self.line_depth == Some(depth) {
            self.line_depth = None;
            self.line_closed = true;
        }
    }

    /// Wandelt den Placemark in einen `NamedLine`, falls er einen LineString mit Koordinaten hat.
    ///
    /// Nur-Whitespace in `<coordinates>` ergibt eine Linie ohne Punkte, die
    /// trotzdem gelabelt werden kann.
    fn finish(self) -> Result<Option<NamedLine>> {
        let coordinates = match self.coordinates {
            Some(text) if self.has_line() && !text.is_empty() => text,
            _ => return Ok(None),
        };

        let name = self
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| NamedLine::fallback_name(self.index));

        let coords = parse_coordinates(&coordinates)
            .with_context(|| format!("Fehlerhafte Koordinaten in Placemark '{}'", name))?;

        Ok(Some(NamedLine::new(self.index, name, coords)))
    }
}

/// Liest alle LineString-Placemarks aus einem KML-String.
///
/// Jeder `<Placemark>` erhält in Dokument-Reihenfolge einen Index, auch wenn er
/// keinen LineString enthält. Pro Placemark zählt nur der erste LineString.
/// Elemente werden über ihren lokalen Namen erkannt, der Namespace ist egal.
pub fn parse_linestrings(kml_content: &str) -> Result<Vec<NamedLine>> {
    let mut reader = Reader::from_str(kml_content);
    reader.config_mut().trim_text(false);

    let mut buffer = Vec::new();
    let mut stack: Vec<String> = Vec::new();
    let mut lines = Vec::new();

    let mut placemark_index = 0usize;
    let mut current: Option<PlacemarkScope> = None;
    // Sammel-Ziel und Stack-Tiefe des sammelnden Elements
    let mut capture: Option<(Capture, usize)> = None;

    loop {
        match reader.read_event_into(&mut buffer) {
            Ok(Event::Start(ref e)) => {
                let local = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                let depth = stack.len();

                if local == "Placemark" {
                    if current.is_none() {
                        current = Some(PlacemarkScope::new(placemark_index, depth));
                    } else {
                        log::warn!("Verschachtelter Placemark #{} ignoriert", placemark_index);
                    }
                    placemark_index += 1;
                } else if let Some(scope) = current.as_mut() {
                    if let Some(kind) = scope.open_element(&local, depth) {
                        capture = Some((kind, depth));
                    }
                }

                stack.push(local);
            }
            Ok(Event::Empty(ref e)) => {
                // <name/>, <coordinates/> und <LineString/> zählen als vorhanden, aber leer
                let local = String::from_utf8_lossy(e.local_name().as_ref()).into_owned();
                let depth = stack.len();
                if local == "Placemark" {
                    placemark_index += 1;
                } else if let Some(scope) = current.as_mut() {
                    scope.open_element(&local, depth);
                    scope.close_element(depth);
                }
            }
            Ok(Event::Text(e)) => {
                if let (Some(scope), Some((kind, _))) = (current.as_mut(), capture) {
                    let text = e.xml_content()?;
                    scope.push_text(kind, &text);
                }
            }
            Ok(Event::CData(e)) => {
                if let (Some(scope), Some((kind, _))) = (current.as_mut(), capture) {
                    let text = e.decode()?;
                    scope.push_text(kind, &text);
                }
            }
            Ok(Event::GeneralRef(e)) => {
                if let (Some(scope), Some((kind, _))) = (current.as_mut(), capture) {
                    if let Some(ch) = e.resolve_char_ref()? {
                        scope.push_text(kind, ch.encode_utf8(&mut [0u8; 4]));
                    } else {
                        let entity = e.decode()?;
                        match quick_xml::escape::resolve_predefined_entity(&entity) {
                            Some(resolved) => scope.push_text(kind, resolved),
                            None => log::warn!("Unbekannte Entity '&{};' ignoriert", entity),
                        }
                    }
                }
            }
            Ok(Event::End(_)) => {
                stack.pop();
                let depth = stack.len();

                if capture.is_some_and(|(_, d)| d == depth) {
                    capture = None;
                }

                if current.as_ref().is_some_and(|scope| scope.depth == depth) {
                    if let Some(scope) = current.take() {
                        if let Some(line) = scope.finish()? {
                            lines.push(line);
                        }
                    }
                } else if let Some(scope) = current.as_mut() {
                    scope.close_element(depth);
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => {
                return Err(err).with_context(|| {
                    format!(
                        "Fehler beim Parsen der KML an Position {}",
                        reader.buffer_position()
                    )
                })
            }
            _ => {}
        }

        buffer.clear();
    }

    log::info!(
        "KML gelesen: {} LineStrings in {} Placemarks",
        lines.len(),
        placemark_index
    );

    Ok(lines)
}
