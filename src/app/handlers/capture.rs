//! Handler für Erfassungs-Transitionen (Zeichnen / Pin).
//!
//! Abgelehnte Transitionen sind lokal: Hinweis setzen, Zustand unverändert.

use super::report;
use crate::app::state::{DialogError, DialogStep};
use crate::app::AppState;
use crate::capture::CaptureSession;
use crate::core::{CaptureError, CaptureMode, Coordinate};

/// Wechselt den Erfassungsmodus.
pub fn switch_mode(state: &mut AppState, mode: CaptureMode) {
    apply(state, "Moduswechsel", |capture| {
        capture.switch_mode(mode);
        Ok(())
    });
}

/// Übernimmt ein gezeichnetes oder bearbeitetes Polygon.
pub fn apply_polygon(state: &mut AppState, ring: Vec<Coordinate>) {
    apply(state, "Polygon übernehmen", |capture| {
        capture.on_polygon_drawn(ring)
    });
}

/// Verwirft das gezeichnete Polygon.
pub fn clear_polygon(state: &mut AppState) {
    apply(state, "Polygon löschen", |capture| {
        capture.on_polygon_cleared();
        Ok(())
    });
}

/// Setzt oder verschiebt den Pin.
pub fn place_pin(state: &mut AppState, position: Coordinate) {
    apply(state, "Pin setzen", |capture| capture.on_pin_placed(position));
}

/// Übernimmt die manuell eingegebene Fläche.
pub fn apply_manual_area(state: &mut AppState, hectares: f64) {
    apply(state, "Fläche eingeben", |capture| {
        capture.on_manual_area_entered(hectares)
    });
}

/// Gemeinsame Logik: Schritt prüfen, Transition ausführen, Rückmeldung setzen.
fn apply(
    state: &mut AppState,
    action: &str,
    transition: impl FnOnce(&mut CaptureSession) -> Result<(), CaptureError>,
) {
    if let Err(e) = state.dialog.ensure_step(DialogStep::Map) {
        report(state, action, &e);
        return;
    }

    match transition(&mut state.dialog.capture) {
        Ok(()) => {
            // Geänderte Geometrie muss neu bestätigt werden
            state.dialog.map_confirmed = false;
            state.ui.last_error = None;
            log::debug!(
                "{}: Phase {:?}, speicherbereit: {}",
                action,
                state.dialog.capture.phase(),
                state.dialog.capture.is_ready_to_persist()
            );
        }
        Err(e) => report(state, action, &DialogError::from(e)),
    }
}
