use crate::app::CommandLog;
use crate::persistence::{InMemoryParcelStore, ParcelStore};
use crate::shared::CaptureOptions;

use super::{ParcelDialogState, UiState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Create-/Edit-Dialog inkl. Erfassungssitzung
    pub dialog: ParcelDialogState,
    /// Persistenz-Adapter
    pub store: Box<dyn ParcelStore>,
    /// Laufzeit-Optionen
    pub options: CaptureOptions,
    /// Rückmeldungen an den Benutzer
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl AppState {
    /// Erstellt einen neuen App-State mit In-Memory-Ablage.
    pub fn new() -> Self {
        Self::with_store(Box::new(InMemoryParcelStore::new()))
    }

    /// Erstellt einen App-State mit der gegebenen Ablage.
    pub fn with_store(store: Box<dyn ParcelStore>) -> Self {
        let options = CaptureOptions::default();
        Self {
            dialog: ParcelDialogState::new(&options),
            store,
            options,
            ui: UiState::new(),
            command_log: CommandLog::new(),
        }
    }

    /// Ersetzt die Optionen; wirkt ab der nächsten Dialog-Öffnung.
    pub fn with_options(mut self, options: CaptureOptions) -> Self {
        self.dialog = ParcelDialogState::new(&options);
        self.options = options;
        self
    }

    /// Speicher-Gate des aktuellen Dialogs (für den Speichern-Button).
    pub fn can_save(&self) -> bool {
        self.dialog.visible && self.dialog.capture.is_ready_to_persist()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
