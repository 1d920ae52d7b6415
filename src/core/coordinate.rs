//! Geografische Koordinate (WGS84, Grad) mit GeoJSON-Positionsformat.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Geografische Position in Grad.
///
/// Auf dem Draht als GeoJSON-Position `[lng, lat]` serialisiert.
/// Eine optionale dritte Komponente (Höhe) wird beim Einlesen verworfen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "[f64; 2]")]
pub struct Coordinate {
    /// Längengrad (Ost positiv)
    pub lng: f64,
    /// Breitengrad (Nord positiv)
    pub lat: f64,
}

impl Coordinate {
    /// Erstellt eine Koordinate aus Längen- und Breitengrad.
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Planare Sicht `(x = lng, y = lat)` für Vektor-Rechnungen.
    pub fn as_dvec2(self) -> DVec2 {
        DVec2::new(self.lng, self.lat)
    }

    /// Gegenstück zu [`Coordinate::as_dvec2`].
    pub fn from_dvec2(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }

    /// `true`, wenn beide Komponenten endliche Zahlen sind.
    pub fn is_finite(self) -> bool {
        self.lng.is_finite() && self.lat.is_finite()
    }
}

impl TryFrom<Vec<f64>> for Coordinate {
    type Error = String;

    fn try_from(position: Vec<f64>) -> Result<Self, Self::Error> {
        match position.as_slice() {
            [lng, lat, ..] => Ok(Self::new(*lng, *lat)),
            _ => Err(format!(
                "GeoJSON-Position braucht mindestens 2 Werte, erhalten: {}",
                position.len()
            )),
        }
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(c: Coordinate) -> Self {
        [c.lng, c.lat]
    }
}
