//! Read-only Erfassungszustand und abgeleitete Phase.

use crate::core::{CaptureMode, Coordinate, Geometry};
use serde::Serialize;

/// Phase der Erfassung, abgeleitet aus Modus und aktiver Geometrie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapturePhase {
    /// Noch keine Geometrie erfasst
    Idle,
    /// Polygon gezeichnet (oder aus dem Puffer wiederhergestellt)
    DrawActive,
    /// Pin gesetzt, Fläche ausstehend oder bereits eingegeben
    PinActive,
}

/// Aktueller Erfassungszustand einer Sitzung.
///
/// Wird ausschließlich über die Transitionen der `CaptureSession` verändert.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureState {
    /// Aktiver Erfassungsmodus
    pub mode: CaptureMode,
    /// Aktive Geometrie (Polygon, Kreis-Polygon oder Pin)
    pub geometry: Option<Geometry>,
    /// Fläche in Hektar
    pub area_hectares: Option<f64>,
    /// Schwerpunkt (Zeichnen) bzw. Pin-Position (Pin)
    pub center: Option<Coordinate>,
    /// Geometrie vollständig erfasst
    pub is_valid: bool,
}

impl CaptureState {
    /// Leerer Zustand im gegebenen Modus.
    pub fn new(mode: CaptureMode) -> Self {
        Self {
            mode,
            geometry: None,
            area_hectares: None,
            center: None,
            is_valid: false,
        }
    }

    /// Leitet die Phase aus Modus und Geometrie ab.
    pub fn phase(&self) -> CapturePhase {
        match (&self.geometry, self.mode) {
            (None, _) => CapturePhase::Idle,
            (Some(_), CaptureMode::Draw) => CapturePhase::DrawActive,
            (Some(_), CaptureMode::Pin) => CapturePhase::PinActive,
        }
    }

    /// Verwirft die aktive Geometrie, der Modus bleibt.
    pub(crate) fn clear_active(&mut self) {
        self.geometry = None;
        self.area_hectares = None;
        self.center = None;
        self.is_valid = false;
    }
}

impl Default for CaptureState {
    fn default() -> Self {
        Self::new(CaptureMode::default())
    }
}
