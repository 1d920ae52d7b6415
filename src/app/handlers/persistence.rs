//! Handler für das Speichern einer Parzelle.

use super::report;
use crate::app::AppState;

/// Speichert den Dialog-Inhalt als neue oder aktualisierte Parzelle.
///
/// Ein nicht erfülltes Speicher-Gate ist eine lokale Ablehnung. Fehler der
/// Ablage werden gemeldet, der Dialog bleibt dann mit allen Eingaben offen.
pub fn save(state: &mut AppState) -> anyhow::Result<()> {
    let payload = match state.dialog.build_payload() {
        Ok(payload) => payload,
        Err(e) => {
            report(state, "Speichern", &e);
            return Ok(());
        }
    };

    let result = match state.dialog.editing_id {
        Some(id) => state.store.update(id, payload),
        None => state.store.create(payload),
    };

    match result {
        Ok(stored) => {
            let message = if state.dialog.is_edit_mode() {
                "Parzelle aktualisiert."
            } else {
                "Parzelle angelegt."
            };
            log::info!(
                "Parzelle {} gespeichert ({} ha, Modus {:?})",
                stored.id,
                stored.payload.area,
                stored.payload.capture_mode
            );
            state.dialog.close();
            state.ui.notify(message);
            Ok(())
        }
        Err(e) => {
            log::error!("Speichern fehlgeschlagen: {e:#}");
            state
                .ui
                .report("Speichern fehlgeschlagen. Bitte erneut versuchen.");
            Err(e.context("Parzelle konnte nicht gespeichert werden"))
        }
    }
}
