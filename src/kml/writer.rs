//! Writer für das gelabelte Mast-Dokument im KML-2.2-Format.

use crate::core::{Folder, Geometry, Placemark, PoleDocument, StyleRef};
use crate::shared::GeneratorOptions;
use anyhow::Result;
use kml_pole_geodesy::GeoPoint;
use std::fmt::Write;

const INDENT: &str = "  ";

/// Schreibt ein `PoleDocument` als KML-String.
///
/// Koordinaten werden als `lon,lat,0` mit kürzester verlustfreier
/// Dezimaldarstellung geschrieben, ein erneutes Parsen liefert identische Werte.
pub fn write_pole_document(document: &PoleDocument, options: &GeneratorOptions) -> Result<String> {
    let mut output = String::new();
    output.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    output.push_str("<kml xmlns=\"http://www.opengis.net/kml/2.2\">\n");
    output.push_str("<Document>\n");
    writeln!(output, "{INDENT}<name>{}</name>", escape_xml(&document.name))?;

    write_styles(&mut output, options)?;

    for folder in &document.folders {
        write_folder(&mut output, folder, 1)?;
    }

    output.push_str("</Document>\n");
    output.push_str("</kml>\n");

    Ok(output)
}

fn write_styles(output: &mut String, options: &GeneratorOptions) -> Result<()> {
    writeln!(output, "{INDENT}<Style id=\"{}\">", StyleRef::PolePoint.id())?;
    writeln!(output, "{INDENT}{INDENT}<IconStyle>")?;
    writeln!(
        output,
        "{INDENT}{INDENT}{INDENT}<scale>{}</scale>",
        options.icon_scale
    )?;
    writeln!(
        output,
        "{INDENT}{INDENT}{INDENT}<Icon><href>{}</href></Icon>",
        escape_xml(&options.icon_href)
    )?;
    writeln!(output, "{INDENT}{INDENT}</IconStyle>")?;
    writeln!(
        output,
        "{INDENT}{INDENT}<LabelStyle><scale>{}</scale></LabelStyle>",
        options.label_scale
    )?;
    writeln!(output, "{INDENT}</Style>")?;

    writeln!(
        output,
        "{INDENT}<Style id=\"{}\">",
        StyleRef::DistributionLine.id()
    )?;
    writeln!(
        output,
        "{INDENT}{INDENT}<LineStyle><color>{}</color><width>{}</width></LineStyle>",
        escape_xml(&options.line_color),
        options.line_width
    )?;
    writeln!(output, "{INDENT}</Style>")?;
    Ok(())
}

fn write_folder(output: &mut String, folder: &Folder, depth: usize) -> Result<()> {
    let pad = INDENT.repeat(depth);
    writeln!(output, "{pad}<Folder>")?;
    writeln!(output, "{pad}{INDENT}<name>{}</name>", escape_xml(&folder.name))?;

    for sub in &folder.folders {
        write_folder(output, sub, depth + 1)?;
    }
    for placemark in &folder.placemarks {
        write_placemark(output, placemark, depth + 1)?;
    }

    writeln!(output, "{pad}</Folder>")?;
    Ok(())
}

fn write_placemark(output: &mut String, placemark: &Placemark, depth: usize) -> Result<()> {
    let pad = INDENT.repeat(depth);
    writeln!(output, "{pad}<Placemark>")?;
    writeln!(
        output,
        "{pad}{INDENT}<name>{}</name>",
        escape_xml(&placemark.name)
    )?;
    if let Some(ref description) = placemark.description {
        writeln!(
            output,
            "{pad}{INDENT}<description>{}</description>",
            escape_xml(description)
        )?;
    }
    writeln!(
        output,
        "{pad}{INDENT}<styleUrl>#{}</styleUrl>",
        placemark.style.id()
    )?;

    match &placemark.geometry {
        Geometry::Point(point) => {
            writeln!(
                output,
                "{pad}{INDENT}<Point><coordinates>{}</coordinates></Point>",
                format_coordinate(*point)
            )?;
        }
        Geometry::LineString(points) => {
            let coords: Vec<String> = points.iter().copied().map(format_coordinate).collect();
            writeln!(output, "{pad}{INDENT}<LineString>")?;
            writeln!(output, "{pad}{INDENT}{INDENT}<tessellate>1</tessellate>")?;
            writeln!(
                output,
                "{pad}{INDENT}{INDENT}<coordinates>{}</coordinates>",
                coords.join(" ")
            )?;
            writeln!(output, "{pad}{INDENT}</LineString>")?;
        }
    }

    writeln!(output, "{pad}</Placemark>")?;
    Ok(())
}

/// `lon,lat,0` in kürzester verlustfreier Darstellung.
fn format_coordinate(point: GeoPoint) -> String {
    let (lon, lat) = point.lon_lat();
    format!("{},{},0", lon, lat)
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
