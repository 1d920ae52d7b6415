//! Rein-mathematische Geometrie-Funktionen: Fläche, Schwerpunkt, Kreis-Polygon.
//!
//! Flächen werden sphärisch genähert (Kugel mit WGS84-Äquatorradius),
//! Kreis-Positionen per Großkreis-Ziel-Berechnung auf der mittleren Erdkugel.
//! Keine I/O, keine Zustände.

use super::{CaptureError, Coordinate, Geometry};
use glam::DVec2;
use std::f64::consts::PI;

/// Kugelradius für die Flächenberechnung (WGS84-Äquatorradius, Meter).
pub const AREA_EARTH_RADIUS_M: f64 = 6_378_137.0;
/// Mittlerer Erdradius für die Ziel-Berechnung von Kreis-Positionen (Meter).
pub const MEAN_EARTH_RADIUS_M: f64 = 6_371_008.8;
/// Quadratmeter pro Hektar.
pub const SQUARE_METERS_PER_HECTARE: f64 = 10_000.0;
/// Nachkommastellen gespeicherter Hektar-Werte.
pub const AREA_DECIMALS: u32 = 2;
/// Standard-Schrittzahl der Kreis-Näherung (ergibt 65 Positionen).
pub const DEFAULT_CIRCLE_STEPS: usize = 64;
/// Obergrenze der Rundungsstellen; darüber wird `10^n` in f64 ungenau.
pub const MAX_AREA_DECIMALS: u32 = 10;

/// Prüft einen Polygon-Ring: mindestens 4 Positionen, geschlossen, endlich,
/// mindestens 3 verschiedene Eckpunkte.
pub fn validate_ring(ring: &[Coordinate]) -> Result<(), CaptureError> {
    if ring.len() < 4 {
        return Err(CaptureError::InvalidGeometry(format!(
            "Ring braucht mindestens 4 Positionen, erhalten: {}",
            ring.len()
        )));
    }
    if ring.iter().any(|c| !c.is_finite()) {
        return Err(CaptureError::InvalidGeometry(
            "Ring enthält ungültige Koordinaten".to_string(),
        ));
    }
    if ring.first() != ring.last() {
        return Err(CaptureError::InvalidGeometry(
            "Ring ist nicht geschlossen".to_string(),
        ));
    }
    if !has_three_distinct_vertices(ring) {
        return Err(CaptureError::InvalidGeometry(
            "Ring braucht mindestens 3 verschiedene Eckpunkte".to_string(),
        ));
    }
    Ok(())
}

fn has_three_distinct_vertices(ring: &[Coordinate]) -> bool {
    let first = ring[0];
    let Some(second) = ring.iter().copied().find(|c| *c != first) else {
        return false;
    };
    ring.iter().any(|c| *c != first && *c != second)
}

/// Ungerundete Ringfläche in Quadratmetern (sphärischer Exzess, Betrag).
pub fn ring_area_square_meters(ring: &[Coordinate]) -> Result<f64, CaptureError> {
    validate_ring(ring)?;

    // Offener Ring: Schlusspunkt nicht doppelt zählen
    let n = ring.len() - 1;
    let mut total = 0.0;
    for i in 0..n {
        let lower = ring[i];
        let middle = ring[(i + 1) % n];
        let upper = ring[(i + 2) % n];
        total += (upper.lng.to_radians() - lower.lng.to_radians())
            * middle.lat.to_radians().sin();
    }

    Ok((total * AREA_EARTH_RADIUS_M * AREA_EARTH_RADIUS_M / 2.0).abs())
}

/// Ringfläche in Hektar, auf [`AREA_DECIMALS`] Nachkommastellen gerundet.
pub fn polygon_area_hectares(ring: &[Coordinate]) -> Result<f64, CaptureError> {
    polygon_area_hectares_with_precision(ring, AREA_DECIMALS)
}

/// Wie [`polygon_area_hectares`], mit frei wählbarer Rundung.
pub fn polygon_area_hectares_with_precision(
    ring: &[Coordinate],
    decimals: u32,
) -> Result<f64, CaptureError> {
    let square_meters = ring_area_square_meters(ring)?;
    Ok(round_to_decimals(
        square_meters / SQUARE_METERS_PER_HECTARE,
        decimals,
    ))
}

/// Rundet kaufmännisch auf `decimals` Nachkommastellen
/// (höchstens [`MAX_AREA_DECIMALS`]).
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(MAX_AREA_DECIMALS) as i32);
    (value * factor).round() / factor
}

/// Repräsentativer Mittelpunkt einer Geometrie.
///
/// Polygon: flächengewichteter Schwerpunkt. Point: der Punkt selbst.
pub fn centroid(geometry: &Geometry) -> Result<Coordinate, CaptureError> {
    match geometry {
        Geometry::Point(c) => Ok(*c),
        Geometry::Polygon(ring) => polygon_centroid(ring),
    }
}

/// Flächengewichteter Schwerpunkt eines Rings (planar in lng/lat).
///
/// Bei entarteten Ringen ohne Fläche: Mittelwert der Eckpunkte.
pub fn polygon_centroid(ring: &[Coordinate]) -> Result<Coordinate, CaptureError> {
    validate_ring(ring)?;

    // Relativ zum ersten Eckpunkt rechnen, sonst frisst die Auslöschung die Präzision
    let origin = ring[0].as_dvec2();
    let mut twice_area = 0.0;
    let mut weighted = DVec2::ZERO;
    for pair in ring.windows(2) {
        let a = pair[0].as_dvec2() - origin;
        let b = pair[1].as_dvec2() - origin;
        let cross = a.perp_dot(b);
        twice_area += cross;
        weighted += (a + b) * cross;
    }

    if twice_area.abs() < 1e-20 {
        let open = &ring[..ring.len() - 1];
        let sum: DVec2 = open.iter().map(|c| c.as_dvec2()).sum();
        return Ok(Coordinate::from_dvec2(sum / open.len() as f64));
    }

    Ok(Coordinate::from_dvec2(
        origin + weighted / (3.0 * twice_area),
    ))
}

/// Kreisradius in Metern zu einer Fläche in Hektar.
pub fn radius_from_area_hectares(area_hectares: f64) -> f64 {
    (area_hectares * SQUARE_METERS_PER_HECTARE / PI).sqrt()
}

/// Zielposition nach `distance_m` Metern in Richtung `bearing_deg`
/// (Großkreis, mittlerer Erdradius).
pub fn destination(origin: Coordinate, distance_m: f64, bearing_deg: f64) -> Coordinate {
    let lng1 = origin.lng.to_radians();
    let lat1 = origin.lat.to_radians();
    let bearing = bearing_deg.to_radians();
    let angular = distance_m / MEAN_EARTH_RADIUS_M;

    let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos()).asin();
    let lng2 = lng1
        + (bearing.sin() * angular.sin() * lat1.cos())
            .atan2(angular.cos() - lat1.sin() * lat2.sin());

    Coordinate::new(lng2.to_degrees(), lat2.to_degrees())
}

/// Erzeugt ein geschlossenes `steps`-Eck, das einen Kreis der gegebenen
/// Fläche um `center` annähert.
pub fn circle_from_area_hectares(
    center: Coordinate,
    area_hectares: f64,
    steps: usize,
) -> Result<Geometry, CaptureError> {
    if !area_hectares.is_finite() || area_hectares <= 0.0 {
        return Err(CaptureError::InvalidArea(area_hectares));
    }
    if steps < 3 {
        return Err(CaptureError::InvalidGeometry(format!(
            "Kreis braucht mindestens 3 Schritte, erhalten: {steps}"
        )));
    }
    if !center.is_finite() {
        return Err(CaptureError::InvalidGeometry(
            "Kreismittelpunkt ist ungültig".to_string(),
        ));
    }

    let radius_m = radius_from_area_hectares(area_hectares);
    let mut ring: Vec<Coordinate> = (0..steps)
        .map(|i| destination(center, radius_m, i as f64 * -360.0 / steps as f64))
        .collect();
    ring.push(ring[0]);

    Ok(Geometry::Polygon(ring))
}
