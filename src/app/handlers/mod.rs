//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod capture;
pub mod dialog;
pub mod persistence;

use super::state::DialogError;
use super::AppState;

/// Meldet eine abgelehnte Aktion: Log-Eintrag plus Hinweistext für die UI.
fn report(state: &mut AppState, action: &str, error: &DialogError) {
    log::warn!("{} abgelehnt: {}", action, error);
    state.ui.report(error.user_hint());
}
