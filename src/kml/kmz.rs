//! KMZ-Container: ZIP-Archiv mit einer `doc.kml`.

use anyhow::{bail, Context, Result};
use std::io::{Cursor, Read, Write};
use std::path::Path;

/// Name der Haupt-KML innerhalb einer KMZ.
pub const KMZ_DOC_NAME: &str = "doc.kml";

const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// true wenn Pfad-Endung oder Dateiinhalt auf eine KMZ hindeuten.
pub fn is_kmz(path: &Path, content: &[u8]) -> bool {
    let by_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("kmz"));
    by_extension || content.starts_with(ZIP_MAGIC)
}

/// Liest die Haupt-KML aus einem KMZ-Archiv.
///
/// Bevorzugt `doc.kml`, sonst die erste `*.kml`-Datei im Archiv.
pub fn read_kml_from_kmz(content: &[u8]) -> Result<String> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(content)).context("Ungültiges KMZ-Archiv")?;

    let mut fallback: Option<usize> = None;
    let mut doc_index: Option<usize> = None;
    for i in 0..archive.len() {
        let entry = archive.by_index(i)?;
        if !entry.is_file() {
            continue;
        }
        let name = entry.name().to_ascii_lowercase();
        if name == KMZ_DOC_NAME {
            doc_index = Some(i);
            break;
        }
        if fallback.is_none() && name.ends_with(".kml") {
            fallback = Some(i);
        }
    }

    let Some(index) = doc_index.or(fallback) else {
        bail!("KMZ-Archiv enthält keine KML-Datei");
    };

    let mut entry = archive.by_index(index)?;
    let entry_name = entry.name().to_string();
    let mut kml = String::with_capacity(entry.size() as usize);
    entry
        .read_to_string(&mut kml)
        .with_context(|| format!("KML '{}' im KMZ ist kein gültiges UTF-8", entry_name))?;

    log::info!("KMZ entpackt: '{}' ({} Bytes)", entry_name, kml.len());
    Ok(kml)
}

/// Packt eine KML als `doc.kml` in ein KMZ-Archiv.
pub fn write_kmz(kml: &str) -> Result<Vec<u8>> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated);

    writer.start_file(KMZ_DOC_NAME, options)?;
    writer.write_all(kml.as_bytes())?;
    let cursor = writer.finish().context("KMZ-Archiv konnte nicht geschrieben werden")?;

    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zip_with(entries: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in entries {
            writer
                .start_file(*name, zip::write::SimpleFileOptions::default())
                .unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_kmz_roundtrip() {
        let kml = "<kml><Document><name>Test</name></Document></kml>";
        let bytes = write_kmz(kml).unwrap();
        assert!(is_kmz(Path::new("out.bin"), &bytes));
        assert_eq!(read_kml_from_kmz(&bytes).unwrap(), kml);
    }

    #[test]
    fn test_doc_kml_preferred_over_other_kml() {
        let bytes = zip_with(&[("files/other.kml", "<other/>"), ("doc.kml", "<doc/>")]);
        assert_eq!(read_kml_from_kmz(&bytes).unwrap(), "<doc/>");
    }

    #[test]
    fn test_first_kml_used_without_doc_kml() {
        let bytes = zip_with(&[("icon.png", "png"), ("jalur.kml", "<jalur/>")]);
        assert_eq!(read_kml_from_kmz(&bytes).unwrap(), "<jalur/>");
    }

    #[test]
    fn test_archive_without_kml_fails() {
        let bytes = zip_with(&[("readme.txt", "hi")]);
        let err = read_kml_from_kmz(&bytes).expect_err("KMZ ohne KML muss fehlschlagen");
        assert!(format!("{err:#}").contains("keine KML"));
    }

    #[test]
    fn test_is_kmz_by_extension() {
        assert!(is_kmz(Path::new("jalur.KMZ"), b"<kml/>"));
        assert!(!is_kmz(Path::new("jalur.kml"), b"<kml/>"));
    }
}
