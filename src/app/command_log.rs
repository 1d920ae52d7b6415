//! Command-Log einer Dialog-Sitzung.
//!
//! Jeder Eintrag hält den Command zusammen mit Dialog-Schritt und
//! Erfassungsmodus zum Zeitpunkt der Ausführung.

use super::state::DialogStep;
use super::AppCommand;
use crate::core::CaptureMode;

/// Ein ausgeführter Command mit Kontext.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub command: AppCommand,
    pub step: DialogStep,
    pub mode: CaptureMode,
}

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<LogEntry>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Begrenzt auf MAX_ENTRIES, die ältere Hälfte wird verworfen.
    pub fn record(&mut self, command: &AppCommand, step: DialogStep, mode: CaptureMode) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(LogEntry {
            command: command.clone(),
            step,
            mode,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Alle Einträge, älteste zuerst.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Zuletzt ausgeführter Command.
    pub fn last_command(&self) -> Option<&AppCommand> {
        self.entries.last().map(|entry| &entry.command)
    }

    /// Anzahl der Einträge, die im gegebenen Modus ausgeführt wurden.
    pub fn count_in_mode(&self, mode: CaptureMode) -> usize {
        self.entries.iter().filter(|e| e.mode == mode).count()
    }
}
