//! Ermittelt beim Laden eines bestehenden Datensatzes den Erfassungsmodus.
//!
//! Reihenfolge: gespeicherter Modus-Tag, Point-Geometrie, Vertex-Anzahl
//! eines Kreis-Polygons (nur für Altdaten ohne Tag), sonst Zeichnen.
//! Die Vertex-Heuristik hängt an der Schrittzahl: wurde sie geändert,
//! fallen alte Pin-Kreise ohne Tag auf Zeichnen zurück.

use crate::core::{geo_math, CaptureError, CaptureMode, Coordinate, Geometry};

/// Woher die Modus-Entscheidung stammt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationSource {
    /// Explizit gespeicherter `captureMode`
    StoredTag,
    /// Point-Geometrie ist immer ein Pin
    PointGeometry,
    /// Polygon mit `steps + 1` Positionen, als Kreis gedeutet
    VertexCountHeuristic,
    /// Beliebiges anderes Polygon
    Boundary,
}

/// Ergebnis der Klassifizierung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    /// Ermittelter Modus
    pub mode: CaptureMode,
    /// Mittelpunkt für Zustand und Puffer
    pub center: Coordinate,
    /// Grundlage der Entscheidung
    pub source: ClassificationSource,
}

/// Klassifiziert persistierte Geometrien.
#[derive(Debug, Clone, Copy)]
pub struct GeometryClassifier {
    circle_steps: usize,
    vertex_count_fallback: bool,
}

impl GeometryClassifier {
    /// Erstellt einen Klassifizierer für Kreise mit `circle_steps` Schritten.
    pub fn new(circle_steps: usize) -> Self {
        Self {
            circle_steps,
            vertex_count_fallback: true,
        }
    }

    /// Schaltet die Vertex-Anzahl-Heuristik für ungetaggte Polygone an/aus.
    pub fn with_vertex_count_fallback(mut self, enabled: bool) -> Self {
        self.vertex_count_fallback = enabled;
        self
    }

    /// Positionsanzahl eines Kreis-Polygons inkl. Schlusspunkt.
    pub fn circle_vertex_count(&self) -> usize {
        self.circle_steps + 1
    }

    /// Bestimmt Modus und Mittelpunkt einer persistierten Geometrie.
    pub fn classify(
        &self,
        geometry: &Geometry,
        stored_center: Option<Coordinate>,
        stored_mode: Option<CaptureMode>,
    ) -> Result<Classification, CaptureError> {
        if let Some(mode) = stored_mode {
            return self.classify_tagged(geometry, stored_center, mode);
        }

        match geometry {
            Geometry::Point(point) => Ok(Classification {
                mode: CaptureMode::Pin,
                center: *point,
                source: ClassificationSource::PointGeometry,
            }),
            Geometry::Polygon(ring)
                if self.vertex_count_fallback && ring.len() == self.circle_vertex_count() =>
            {
                log::warn!(
                    "Geometrie ohne Modus-Tag anhand von {} Positionen als Pin-Kreis erkannt",
                    ring.len()
                );
                Ok(Classification {
                    mode: CaptureMode::Pin,
                    center: pin_center(geometry, stored_center)?,
                    source: ClassificationSource::VertexCountHeuristic,
                })
            }
            Geometry::Polygon(ring) => Ok(Classification {
                mode: CaptureMode::Draw,
                center: geo_math::polygon_centroid(ring)?,
                source: ClassificationSource::Boundary,
            }),
        }
    }

    fn classify_tagged(
        &self,
        geometry: &Geometry,
        stored_center: Option<Coordinate>,
        mode: CaptureMode,
    ) -> Result<Classification, CaptureError> {
        let center = match (mode, geometry) {
            (CaptureMode::Pin, _) => pin_center(geometry, stored_center)?,
            (CaptureMode::Draw, Geometry::Polygon(ring)) => geo_math::polygon_centroid(ring)?,
            (CaptureMode::Draw, Geometry::Point(_)) => {
                return Err(CaptureError::InvalidGeometry(
                    "Zeichen-Modus erwartet ein Polygon".to_string(),
                ))
            }
        };
        Ok(Classification {
            mode,
            center,
            source: ClassificationSource::StoredTag,
        })
    }
}

impl Default for GeometryClassifier {
    fn default() -> Self {
        Self::new(geo_math::DEFAULT_CIRCLE_STEPS)
    }
}

/// Pin-Mittelpunkt: Point selbst, sonst gespeicherter Mittelpunkt, sonst Schwerpunkt.
fn pin_center(
    geometry: &Geometry,
    stored_center: Option<Coordinate>,
) -> Result<Coordinate, CaptureError> {
    match (geometry, stored_center) {
        (Geometry::Point(point), _) => Ok(*point),
        (_, Some(center)) if center.is_finite() => Ok(center),
        _ => geo_math::centroid(geometry),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn circle(center: Coordinate, steps: usize) -> Geometry {
        geo_math::circle_from_area_hectares(center, 12.0, steps).unwrap()
    }

    fn boundary() -> Geometry {
        Geometry::Polygon(vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.01, 0.0),
            Coordinate::new(0.01, 0.01),
            Coordinate::new(0.0, 0.01),
            Coordinate::new(0.0, 0.0),
        ])
    }

    #[test]
    fn test_point_is_pin() {
        let p = Coordinate::new(-47.0, -18.0);
        let c = GeometryClassifier::default()
            .classify(&Geometry::Point(p), None, None)
            .unwrap();
        assert_eq!(c.mode, CaptureMode::Pin);
        assert_eq!(c.center, p);
        assert_eq!(c.source, ClassificationSource::PointGeometry);
    }

    #[test]
    fn test_65_vertex_polygon_is_pin_with_stored_center() {
        let center = Coordinate::new(-47.0, -18.0);
        let stored = Coordinate::new(-47.0001, -18.0001);
        let c = GeometryClassifier::default()
            .classify(&circle(center, 64), Some(stored), None)
            .unwrap();
        assert_eq!(c.mode, CaptureMode::Pin);
        assert_eq!(c.center, stored);
        assert_eq!(c.source, ClassificationSource::VertexCountHeuristic);
    }

    #[test]
    fn test_65_vertex_polygon_without_center_uses_centroid() {
        let center = Coordinate::new(-47.0, -18.0);
        let c = GeometryClassifier::default()
            .classify(&circle(center, 64), None, None)
            .unwrap();
        assert_relative_eq!(c.center.lng, center.lng, epsilon = 1e-6);
        assert_relative_eq!(c.center.lat, center.lat, epsilon = 1e-6);
    }

    #[test]
    fn test_other_polygon_is_draw() {
        let c = GeometryClassifier::default()
            .classify(&boundary(), None, None)
            .unwrap();
        assert_eq!(c.mode, CaptureMode::Draw);
        assert_eq!(c.source, ClassificationSource::Boundary);
        assert_relative_eq!(c.center.lng, 0.005, epsilon = 1e-12);
    }

    #[test]
    fn test_stored_tag_wins_over_vertex_count() {
        let center = Coordinate::new(-47.0, -18.0);
        let c = GeometryClassifier::default()
            .classify(&circle(center, 64), None, Some(CaptureMode::Draw))
            .unwrap();
        assert_eq!(c.mode, CaptureMode::Draw);
        assert_eq!(c.source, ClassificationSource::StoredTag);
    }

    #[test]
    fn test_tagged_pin_circle_with_changed_step_count_stays_pin() {
        let center = Coordinate::new(-47.0, -18.0);
        let c = GeometryClassifier::default()
            .classify(&circle(center, 128), Some(center), Some(CaptureMode::Pin))
            .unwrap();
        assert_eq!(c.mode, CaptureMode::Pin);
        assert_eq!(c.center, center);
    }

    #[test]
    fn test_untagged_circle_with_other_step_count_falls_back_to_draw() {
        let c = GeometryClassifier::default()
            .classify(&circle(Coordinate::new(0.0, 0.0), 128), None, None)
            .unwrap();
        assert_eq!(c.mode, CaptureMode::Draw);
    }

    #[test]
    fn test_disabled_heuristic_treats_circle_as_boundary() {
        let c = GeometryClassifier::default()
            .with_vertex_count_fallback(false)
            .classify(&circle(Coordinate::new(0.0, 0.0), 64), None, None)
            .unwrap();
        assert_eq!(c.mode, CaptureMode::Draw);
    }

    #[test]
    fn test_draw_tag_on_point_is_rejected() {
        let result = GeometryClassifier::default().classify(
            &Geometry::Point(Coordinate::new(0.0, 0.0)),
            None,
            Some(CaptureMode::Draw),
        );
        assert!(matches!(result, Err(CaptureError::InvalidGeometry(_))));
    }
}
