//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Dialog, Erfassung, Ablage).
pub mod state;

pub use command_log::{CommandLog, LogEntry};
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use state::{AppState, DialogError, DialogStep, ParcelDialogState, UiState};
