//! Zwei-Slot-Puffer: letztes gültiges Ergebnis je Erfassungsmodus.
//!
//! Erlaubt das Umschalten Zeichnen ↔ Pin, ohne bereits erfasste Arbeit zu
//! verlieren. Der Puffer validiert nicht; was die Sitzung ablegt, gilt.

use crate::core::{CaptureMode, Coordinate, Geometry};

/// Gepuffertes Ergebnis eines Modus. Die Variante bestimmt den Slot.
#[derive(Debug, Clone, PartialEq)]
pub enum ModeArtifact {
    /// Gezeichnetes Polygon mit Fläche
    Draw { geometry: Geometry, area_hectares: f64 },
    /// Kreis (oder Legacy-Pin) mit Fläche und Mittelpunkt
    Pin {
        geometry: Geometry,
        area_hectares: f64,
        center: Coordinate,
    },
}

impl ModeArtifact {
    /// Modus, unter dem das Artefakt abgelegt wird.
    pub fn mode(&self) -> CaptureMode {
        match self {
            ModeArtifact::Draw { .. } => CaptureMode::Draw,
            ModeArtifact::Pin { .. } => CaptureMode::Pin,
        }
    }

    /// Gepufferte Geometrie.
    pub fn geometry(&self) -> &Geometry {
        match self {
            ModeArtifact::Draw { geometry, .. } | ModeArtifact::Pin { geometry, .. } => geometry,
        }
    }

    /// Gepufferte Fläche in Hektar.
    pub fn area_hectares(&self) -> f64 {
        match self {
            ModeArtifact::Draw { area_hectares, .. } | ModeArtifact::Pin { area_hectares, .. } => {
                *area_hectares
            }
        }
    }
}

/// Puffer mit je einem Slot pro `CaptureMode`. Lebensdauer: eine Sitzung.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModeBuffer {
    draw: Option<ModeArtifact>,
    pin: Option<ModeArtifact>,
}

impl ModeBuffer {
    /// Erstellt einen leeren Puffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Legt ein Artefakt ab und überschreibt den bisherigen Eintrag des Modus.
    pub fn save(&mut self, artifact: ModeArtifact) {
        let mode = artifact.mode();
        log::debug!("Modus-Puffer: Slot '{}' überschrieben", mode);
        *self.slot_mut(mode) = Some(artifact);
    }

    /// Gibt das gepufferte Artefakt eines Modus zurück.
    pub fn get(&self, mode: CaptureMode) -> Option<&ModeArtifact> {
        match mode {
            CaptureMode::Draw => self.draw.as_ref(),
            CaptureMode::Pin => self.pin.as_ref(),
        }
    }

    /// Leert beide Slots (Sitzungsende).
    pub fn clear(&mut self) {
        self.draw = None;
        self.pin = None;
    }

    /// `true`, wenn kein Slot belegt ist.
    pub fn is_empty(&self) -> bool {
        self.draw.is_none() && self.pin.is_none()
    }

    fn slot_mut(&mut self, mode: CaptureMode) -> &mut Option<ModeArtifact> {
        match mode {
            CaptureMode::Draw => &mut self.draw,
            CaptureMode::Pin => &mut self.pin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw_artifact(area: f64) -> ModeArtifact {
        ModeArtifact::Draw {
            geometry: Geometry::Polygon(vec![
                Coordinate::new(0.0, 0.0),
                Coordinate::new(1.0, 0.0),
                Coordinate::new(1.0, 1.0),
                Coordinate::new(0.0, 0.0),
            ]),
            area_hectares: area,
        }
    }

    #[test]
    fn test_save_routes_artifact_to_its_slot() {
        let mut buffer = ModeBuffer::new();
        buffer.save(draw_artifact(3.5));

        assert_eq!(buffer.get(CaptureMode::Draw).map(|a| a.area_hectares()), Some(3.5));
        assert!(buffer.get(CaptureMode::Pin).is_none());
    }

    #[test]
    fn test_save_overwrites_previous_entry() {
        let mut buffer = ModeBuffer::new();
        buffer.save(draw_artifact(1.0));
        buffer.save(draw_artifact(2.0));

        assert_eq!(buffer.get(CaptureMode::Draw).map(|a| a.area_hectares()), Some(2.0));
    }

    #[test]
    fn test_clear_empties_both_slots() {
        let mut buffer = ModeBuffer::new();
        buffer.save(draw_artifact(1.0));
        buffer.save(ModeArtifact::Pin {
            geometry: Geometry::Point(Coordinate::new(5.0, 5.0)),
            area_hectares: 4.0,
            center: Coordinate::new(5.0, 5.0),
        });
        assert!(!buffer.is_empty());

        buffer.clear();
        assert!(buffer.is_empty());
        assert!(buffer.get(CaptureMode::Pin).is_none());
    }
}
