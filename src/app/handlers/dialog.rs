//! Handler für Dialog-Lebenszyklus und Stammdaten.

use super::report;
use crate::app::AppState;
use crate::persistence::Culture;
use anyhow::Context;

/// Öffnet den Dialog für eine neue Parzelle.
pub fn open_create(state: &mut AppState) {
    state.dialog.open_new(&state.options);
    state.ui.notice = None;
    state.ui.last_error = None;
    log::info!("Parzellen-Dialog geöffnet (neu)");
}

/// Öffnet den Dialog für einen bestehenden Datensatz.
///
/// Eine unbekannte ID ist ein Host-Fehler und wird propagiert; eine nicht
/// ladbare Geometrie öffnet den Dialog mit leerer Erfassung.
pub fn open_edit(state: &mut AppState, parcel_id: u64) -> anyhow::Result<()> {
    let parcel = state
        .store
        .get(parcel_id)
        .cloned()
        .with_context(|| format!("Parzelle {parcel_id} nicht gefunden"))?;

    state.ui.notice = None;
    state.ui.last_error = None;
    if let Err(e) = state.dialog.open_existing(&parcel, &state.options) {
        report(state, "Geometrie laden", &e);
    }
    log::info!(
        "Parzellen-Dialog geöffnet (Bearbeiten {}, Modus '{}')",
        parcel_id,
        state.dialog.capture.mode()
    );
    Ok(())
}

/// Schließt den Dialog und verwirft Erfassung und Modus-Puffer.
pub fn close(state: &mut AppState) {
    state.dialog.close();
    log::info!("Parzellen-Dialog geschlossen");
}

/// Setzt den Lead.
pub fn set_lead(state: &mut AppState, lead_id: u64) {
    state.dialog.details.lead_id = Some(lead_id);
}

/// Setzt den Namen.
pub fn set_name(state: &mut AppState, name: String) {
    state.dialog.details.name = name;
}

/// Setzt die Gemeinde.
pub fn set_city(state: &mut AppState, city: String) {
    state.dialog.details.city = Some(city);
}

/// Setzt die Kultur.
pub fn set_culture(state: &mut AppState, culture: Culture) {
    state.dialog.details.culture = Some(culture);
}

/// Setzt die Bemerkung.
pub fn set_obs(state: &mut AppState, obs: String) {
    state.dialog.details.obs = obs;
}

/// Weiter zur Karte (Stammdaten werden geprüft).
pub fn advance_to_map(state: &mut AppState) {
    match state.dialog.advance_to_map() {
        Ok(()) => {
            let hint = state.dialog.capture.status_text();
            state.ui.notify(hint);
        }
        Err(e) => report(state, "Weiter zur Karte", &e),
    }
}

/// Zurück zu den Stammdaten.
pub fn return_to_details(state: &mut AppState) {
    if let Err(e) = state.dialog.return_to_details() {
        report(state, "Zurück zu Stammdaten", &e);
    }
}

/// Bestätigt die Kartenauswahl.
pub fn confirm_map(state: &mut AppState) {
    match state.dialog.confirm_map() {
        Ok(()) => state.ui.notify("Fläche bestätigt."),
        Err(e) => report(state, "Karte bestätigen", &e),
    }
}
