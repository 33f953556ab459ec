//! Use-Case: Gelabelte LineStrings zu einem Mast-Dokument zusammenbauen.

use crate::core::{
    ExistingPole, Folder, Geometry, LabelMapping, LineLabel, NamedLine, Placemark, PoleDocument,
    StyleRef,
};
use crate::shared::GeneratorOptions;
use kml_pole_geodesy::{resample_by_interval, ResampledPath};
use serde::Serialize;

/// Kennzahlen eines verarbeiteten LineStrings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSummary {
    pub index: usize,
    pub name: String,
    pub label: LineLabel,
    pub vertex_count: usize,
    pub length_m: f64,
    /// Punkte der resampelten Linie (inkl. angehängtem Endpunkt)
    pub resampled_points: usize,
    pub endpoint_appended: bool,
    /// Placemarks im TE- bzw. TN7-Unterordner
    pub pole_count: usize,
}

/// Ergebnis des Zusammenbaus.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    pub document: PoleDocument,
    /// Nur gelabelte Linien, in Placemark-Reihenfolge
    pub lines: Vec<LineSummary>,
}

/// Baut das Ausgabe-Dokument.
///
/// Top-Level-Ordner in fester Reihenfolge: TE, TN7, Distribution.
/// Ungelabelte Linien werden übersprungen. Jede gelabelte Linie wird im
/// konfigurierten Intervall resampelt und erscheint im Distributions-Ordner;
/// TN7-Linien erhalten einen Mast je resampeltem Punkt, TE-Linien alle
/// Bestandsmasten.
pub fn build_pole_document(
    document_name: &str,
    lines: &[NamedLine],
    labels: &LabelMapping,
    options: &GeneratorOptions,
    existing_poles: &[ExistingPole],
) -> GeneratedDocument {
    let mut te_folder = Folder::new(&options.folder_te);
    let mut tn7_folder = Folder::new(&options.folder_tn7);
    let mut distribution_folder = Folder::new(&options.folder_distribution);
    let mut summaries = Vec::new();

    for line in lines {
        let label = labels.get(line.index);
        if !label.is_labeled() {
            log::debug!("Linie #{} '{}' ohne Label übersprungen", line.index, line.name);
            continue;
        }

        let resampled = resample_by_interval(&line.coords, options.interval_m);
        if resampled.is_empty() {
            log::warn!(
                "Linie #{} '{}' hat weniger als 2 Punkte, Distribution bleibt leer",
                line.index,
                line.name
            );
        }

        distribution_folder
            .folders
            .push(distribution_subfolder(line, &resampled, options));

        let pole_folder = match label {
            LineLabel::Te => {
                te_folder.folders.push(te_subfolder(line, options, existing_poles));
                te_folder.folders.last()
            }
            LineLabel::Tn7 => {
                tn7_folder.folders.push(tn7_subfolder(line, &resampled, options));
                tn7_folder.folders.last()
            }
            LineLabel::Unlabeled => None,
        };

        summaries.push(LineSummary {
            index: line.index,
            name: line.name.clone(),
            label,
            vertex_count: line.vertex_count(),
            length_m: line.length_m(),
            resampled_points: resampled.len(),
            endpoint_appended: resampled.endpoint_appended(),
            pole_count: pole_folder.map_or(0, |f| f.placemarks.len()),
        });
    }

    log::info!(
        "Dokument '{}': {} gelabelte Linien, Intervall {}m",
        document_name,
        summaries.len(),
        options.interval_m
    );

    GeneratedDocument {
        document: PoleDocument {
            name: document_name.to_string(),
            folders: vec![te_folder, tn7_folder, distribution_folder],
        },
        lines: summaries,
    }
}

fn distribution_subfolder(
    line: &NamedLine,
    resampled: &ResampledPath,
    options: &GeneratorOptions,
) -> Folder {
    let mut folder = Folder::new(format!("{} {}", options.distribution_prefix, line.name));
    folder.placemarks.push(Placemark {
        name: line.name.clone(),
        description: None,
        style: StyleRef::DistributionLine,
        geometry: Geometry::LineString(resampled.points.clone()),
    });
    folder
}

fn te_subfolder(
    line: &NamedLine,
    options: &GeneratorOptions,
    existing_poles: &[ExistingPole],
) -> Folder {
    let mut folder = Folder::new(&line.name);
    folder.placemarks = existing_poles
        .iter()
        .map(|pole| {
            let description = if options.te_use_designator && !pole.designator.is_empty() {
                pole.designator.clone()
            } else {
                options.te_description.clone()
            };
            Placemark {
                name: pole.name.clone(),
                description: Some(description),
                style: StyleRef::PolePoint,
                geometry: Geometry::Point(pole.position),
            }
        })
        .collect();
    folder
}

fn tn7_subfolder(
    line: &NamedLine,
    resampled: &ResampledPath,
    options: &GeneratorOptions,
) -> Folder {
    let mut folder = Folder::new(&line.name);
    folder.placemarks = resampled
        .points
        .iter()
        .map(|&point| Placemark {
            name: options.tn7_point_name.clone(),
            description: Some(options.tn7_description.clone()),
            style: StyleRef::PolePoint,
            geometry: Geometry::Point(point),
        })
        .collect();
    folder
}
