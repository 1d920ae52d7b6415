//! Application State: Dialog, Erfassung, Rückmeldungen.

mod app_state;
mod dialog;

pub use app_state::AppState;
pub use dialog::{DialogError, DialogStep, ParcelDialogState};

/// Rückmeldungen für Toasts und Statuszeile
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    /// Letzte Erfolgs- oder Info-Meldung
    pub notice: Option<String>,
    /// Letzte abgelehnte Aktion (Hinweistext)
    pub last_error: Option<String>,
}

impl UiState {
    /// Erstellt einen leeren UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt eine Info-Meldung und verwirft einen alten Fehler.
    pub fn notify(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
        self.last_error = None;
    }

    /// Setzt einen Fehler-Hinweis.
    pub fn report(&mut self, hint: impl Into<String>) {
        self.last_error = Some(hint.into());
    }
}
