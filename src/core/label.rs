//! Kategorien, denen ein LineString zugeordnet werden kann.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label eines LineStrings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LineLabel {
    /// Nicht gelabelt → wird bei der Ausgabe übersprungen
    #[default]
    Unlabeled,
    /// Bestandsmasten (Punkte aus CSV)
    #[serde(rename = "TE")]
    Te,
    /// Neue Masten entlang der resampelten Linie
    #[serde(rename = "TN7")]
    Tn7,
}

impl LineLabel {
    /// true für Labels, die in die Ausgabe übernommen werden.
    pub fn is_labeled(self) -> bool {
        self != LineLabel::Unlabeled
    }
}

impl fmt::Display for LineLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            LineLabel::Unlabeled => "-",
            LineLabel::Te => "TE",
            LineLabel::Tn7 => "TN7",
        };
        f.write_str(text)
    }
}

impl FromStr for LineLabel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TE" => Ok(LineLabel::Te),
            "TN7" => Ok(LineLabel::Tn7),
            "-" | "" | "NONE" | "UNLABELED" => Ok(LineLabel::Unlabeled),
            other => anyhow::bail!("Unbekanntes Label '{}' (erlaubt: TE, TN7, none)", other),
        }
    }
}

/// Zuordnung Placemark-Index → Label.
///
/// Einfüge-Reihenfolge bleibt erhalten; nicht eingetragene Indizes liefern
/// das Default-Label.
#[derive(Debug, Clone, Default)]
pub struct LabelMapping {
    labels: IndexMap<usize, LineLabel>,
    default_label: LineLabel,
}

impl LabelMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mapping mit Label für alle nicht explizit gesetzten Indizes.
    pub fn with_default(default_label: LineLabel) -> Self {
        Self {
            labels: IndexMap::new(),
            default_label,
        }
    }

    /// Setzt das Label für einen Index; ein vorheriger Eintrag wird überschrieben.
    pub fn set(&mut self, index: usize, label: LineLabel) -> Option<LineLabel> {
        self.labels.insert(index, label)
    }

    pub fn get(&self, index: usize) -> LineLabel {
        self.labels
            .get(&index)
            .copied()
            .unwrap_or(self.default_label)
    }

    pub fn default_label(&self) -> LineLabel {
        self.default_label
    }

    /// Explizit gesetzte Einträge in Einfüge-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = (usize, LineLabel)> + '_ {
        self.labels.iter().map(|(&index, &label)| (index, label))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
