//! Parsen von KML-Koordinatenlisten (`lon,lat[,alt] lon,lat[,alt] …`).

use anyhow::{bail, Context, Result};
use kml_pole_geodesy::GeoPoint;

/// Parsed eine whitespace-getrennte Liste von Koordinaten-Tupeln.
///
/// Tupel mit weniger als zwei Komponenten werden übersprungen, die Höhe
/// wird verworfen. Nicht-numerische Werte führen zu einem Fehler.
pub(crate) fn parse_coordinates(text: &str) -> Result<Vec<GeoPoint>> {
    let mut coords = Vec::new();

    for tuple in text.split_whitespace() {
        let mut parts = tuple.split(',');
        let (Some(lon), Some(lat)) = (parts.next(), parts.next()) else {
            log::debug!("Koordinaten-Tupel '{}' ohne Breite übersprungen", tuple);
            continue;
        };

        let lon = parse_component(lon, tuple)?;
        let lat = parse_component(lat, tuple)?;

        if lat.abs() > 90.0 {
            bail!("Breitengrad {} ausserhalb [-90, 90] in '{}'", lat, tuple);
        }

        coords.push(GeoPoint::from_lon_lat(lon, lat));
    }

    Ok(coords)
}

fn parse_component(value: &str, tuple: &str) -> Result<f64> {
    let parsed = value
        .trim()
        .parse::<f64>()
        .with_context(|| format!("Wert '{}' in '{}' ist keine Zahl", value, tuple))?;
    if !parsed.is_finite() {
        bail!("Wert '{}' in '{}' ist nicht endlich", value, tuple);
    }
    Ok(parsed)
}
