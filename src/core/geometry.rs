//! Parzellen-Geometrie und ihr GeoJSON-kompatibles Drahtformat.

use super::{CaptureError, Coordinate};
use serde::{Deserialize, Serialize};

/// Geometrie einer Parzelle.
///
/// Kreise (Pin-Modus) sind auf dem Draht gewöhnliche Polygone mit
/// `steps + 1` Positionen; eine eigene Kreis-Variante gibt es nicht.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GeoJsonGeometry", into = "GeoJsonGeometry")]
pub enum Geometry {
    /// Geschlossener Außenring (erste Position == letzte Position)
    Polygon(Vec<Coordinate>),
    /// Einzelne Position (Pin ohne Fläche)
    Point(Coordinate),
}

impl Geometry {
    /// Gibt den Ring zurück, falls es sich um ein Polygon handelt.
    pub fn ring(&self) -> Option<&[Coordinate]> {
        match self {
            Geometry::Polygon(ring) => Some(ring),
            Geometry::Point(_) => None,
        }
    }

    /// Anzahl der Positionen inkl. Schlusspunkt (Point = 1).
    pub fn vertex_count(&self) -> usize {
        match self {
            Geometry::Polygon(ring) => ring.len(),
            Geometry::Point(_) => 1,
        }
    }

    /// `true` für einen einzelnen Punkt.
    pub fn is_point(&self) -> bool {
        matches!(self, Geometry::Point(_))
    }

    /// GeoJSON-Typname.
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Polygon(_) => "Polygon",
            Geometry::Point(_) => "Point",
        }
    }
}

/// Drahtformat `{"type": …, "coordinates": …}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
enum GeoJsonGeometry {
    Polygon(Vec<Vec<Coordinate>>),
    Point(Coordinate),
}

impl TryFrom<GeoJsonGeometry> for Geometry {
    type Error = CaptureError;

    fn try_from(wire: GeoJsonGeometry) -> Result<Self, Self::Error> {
        match wire {
            GeoJsonGeometry::Point(c) => Ok(Geometry::Point(c)),
            GeoJsonGeometry::Polygon(mut rings) => match rings.len() {
                1 => Ok(Geometry::Polygon(rings.remove(0))),
                0 => Err(CaptureError::InvalidGeometry(
                    "Polygon ohne Ring".to_string(),
                )),
                n => Err(CaptureError::InvalidGeometry(format!(
                    "Polygone mit Löchern werden nicht unterstützt ({n} Ringe)"
                ))),
            },
        }
    }
}

impl From<Geometry> for GeoJsonGeometry {
    fn from(geometry: Geometry) -> Self {
        match geometry {
            Geometry::Polygon(ring) => GeoJsonGeometry::Polygon(vec![ring]),
            Geometry::Point(c) => GeoJsonGeometry::Point(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_wire_format() {
        let json = serde_json::to_value(Geometry::Point(Coordinate::new(1.0, 2.0))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "Point", "coordinates": [1.0, 2.0] })
        );
    }

    #[test]
    fn test_polygon_wire_format_wraps_ring() {
        let ring = vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(1.0, 0.0),
            Coordinate::new(1.0, 1.0),
            Coordinate::new(0.0, 0.0),
        ];
        let json = serde_json::to_value(Geometry::Polygon(ring.clone())).unwrap();
        assert_eq!(json["type"], "Polygon");
        assert_eq!(json["coordinates"].as_array().unwrap().len(), 1);

        let back: Geometry = serde_json::from_value(json).unwrap();
        assert_eq!(back, Geometry::Polygon(ring));
    }

    #[test]
    fn test_polygon_with_hole_is_rejected() {
        let json = r#"{"type":"Polygon","coordinates":[
            [[0,0],[4,0],[4,4],[0,0]],
            [[1,1],[2,1],[2,2],[1,1]]
        ]}"#;
        let err = serde_json::from_str::<Geometry>(json).unwrap_err();
        assert!(err.to_string().contains("Löchern"));
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let json = r#"{"type":"LineString","coordinates":[[0,0],[1,1]]}"#;
        assert!(serde_json::from_str::<Geometry>(json).is_err());
    }
}
