use serde::{Deserialize, Serialize};
use std::fmt;

/// Erfassungsweg einer Parzellen-Geometrie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureMode {
    /// Freihand-Polygon auf der Karte zeichnen
    #[default]
    Draw,
    /// Pin setzen und Fläche manuell eingeben (Kreis-Näherung)
    Pin,
}

impl CaptureMode {
    /// Anzeigename für Umschalter und Statuszeile.
    pub fn label(self) -> &'static str {
        match self {
            CaptureMode::Draw => "Fläche zeichnen",
            CaptureMode::Pin => "Pin setzen",
        }
    }
}

impl fmt::Display for CaptureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureMode::Draw => f.write_str("draw"),
            CaptureMode::Pin => f.write_str("pin"),
        }
    }
}
