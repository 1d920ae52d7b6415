//! Fehler-Taxonomie der Geometrie-Erfassung.
//!
//! Alle Varianten sind lokal behebbar: die auslösende Transition wird
//! verworfen, der Erfassungszustand bleibt unverändert.

use super::CaptureMode;

/// Abgelehnte Erfassungs-Transition.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CaptureError {
    /// Ring zu klein, offen oder mit ungültigen Zahlen
    #[error("ungültige Geometrie: {0}")]
    InvalidGeometry(String),
    /// Fläche fehlt oder ist nicht positiv
    #[error("ungültige Fläche: {0} ha")]
    InvalidArea(f64),
    /// Fläche eingegeben, bevor ein Pin gesetzt wurde
    #[error("kein Pin gesetzt")]
    NoCenterSet,
    /// Transition gehört zum anderen Erfassungsmodus
    #[error("Aktion nur im Modus '{expected}' möglich (aktiv: '{actual}')")]
    WrongMode {
        expected: CaptureMode,
        actual: CaptureMode,
    },
}

impl CaptureError {
    /// Hinweistext für den Benutzer.
    pub fn user_hint(&self) -> &'static str {
        match self {
            CaptureError::InvalidGeometry(_) => "Bitte die Fläche neu zeichnen.",
            CaptureError::InvalidArea(_) => {
                "Bitte eine gültige Fläche eingeben, bevor es weitergeht."
            }
            CaptureError::NoCenterSet => "Bitte zuerst einen Pin auf der Karte setzen.",
            CaptureError::WrongMode { expected, .. } => match expected {
                CaptureMode::Draw => "Zum Zeichnen bitte in den Zeichen-Modus wechseln.",
                CaptureMode::Pin => "Für Pin und Fläche bitte in den Pin-Modus wechseln.",
            },
        }
    }
}
