//! Speicher-Gate: entscheidet, ob der Erfassungszustand persistiert werden darf.

use super::CaptureState;
use crate::core::{CaptureError, CaptureMode};

/// `true`, wenn Geometrie und positive Fläche vorliegen und im Pin-Modus
/// zusätzlich ein Mittelpunkt gesetzt ist.
pub fn is_ready_to_persist(state: &CaptureState) -> bool {
    missing_requirement(state).is_none()
}

/// Liefert den ersten fehlenden Bestandteil als Fehler, `None` wenn bereit.
///
/// Dient der Statuszeile und der Ablehnung beim Speichern.
pub fn missing_requirement(state: &CaptureState) -> Option<CaptureError> {
    if state.mode == CaptureMode::Pin && state.center.is_none() {
        return Some(CaptureError::NoCenterSet);
    }
    if state.geometry.is_none() {
        return Some(CaptureError::InvalidGeometry(
            "keine Geometrie erfasst".to_string(),
        ));
    }
    match state.area_hectares {
        Some(area) if area > 0.0 => None,
        Some(area) => Some(CaptureError::InvalidArea(area)),
        None => Some(CaptureError::InvalidArea(0.0)),
    }
}
