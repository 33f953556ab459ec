//! Auflösung der Label-Angaben (`SELEKTOR=LABEL`) gegen die gelesenen LineStrings.

use crate::core::{LabelMapping, LineLabel, NamedLine};
use anyhow::{bail, Context, Result};
use std::str::FromStr;

/// Wählt LineStrings über Placemark-Index oder Namen aus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineSelector {
    /// `#3` → Placemark-Index 3
    Index(usize),
    /// Exakter Name (alle Linien mit diesem Namen)
    Name(String),
}

/// Eine Label-Angabe `SELEKTOR=LABEL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelAssignment {
    pub selector: LineSelector,
    pub label: LineLabel,
}

impl FromStr for LabelAssignment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (selector, label) = s
            .rsplit_once('=')
            .with_context(|| format!("Label-Angabe '{}' hat nicht die Form SELEKTOR=LABEL", s))?;

        let selector = selector.trim();
        if selector.is_empty() {
            bail!("Label-Angabe '{}' ohne Selektor", s);
        }

        let selector = match selector.strip_prefix('#') {
            Some(index) => LineSelector::Index(
                index
                    .trim()
                    .parse()
                    .with_context(|| format!("Ungültiger Index '{}'", index))?,
            ),
            None => LineSelector::Name(selector.to_string()),
        };

        Ok(Self {
            selector,
            label: label.parse()?,
        })
    }
}

/// Baut die Label-Zuordnung; spätere Angaben überschreiben frühere.
///
/// Ein Selektor, der keine Linie trifft, ist ein Fehler.
pub fn resolve_labels(
    lines: &[NamedLine],
    assignments: &[LabelAssignment],
    default_label: LineLabel,
) -> Result<LabelMapping> {
    let mut mapping = LabelMapping::with_default(default_label);

    for assignment in assignments {
        let matched: Vec<usize> = lines
            .iter()
            .filter(|line| match &assignment.selector {
                LineSelector::Index(index) => line.index == *index,
                LineSelector::Name(name) => line.name == *name,
            })
            .map(|line| line.index)
            .collect();

        if matched.is_empty() {
            match &assignment.selector {
                LineSelector::Index(index) => bail!("Kein LineString mit Index #{}", index),
                LineSelector::Name(name) => bail!("Kein LineString mit Namen '{}'", name),
            }
        }

        for index in matched {
            if let Some(previous) = mapping.set(index, assignment.label) {
                if previous != assignment.label {
                    log::info!(
                        "Label für #{} überschrieben: {} → {}",
                        index,
                        previous,
                        assignment.label
                    );
                }
            }
        }
    }

    Ok(mapping)
}
