//! Geteilte Typen für schichtübergreifende Verträge.
//!
//! Enthält die Laufzeit-Konfiguration, die von `capture` und `app`
//! gleichermaßen gelesen wird.

pub mod options;

pub use options::{CaptureOptions, OPTIONS_FILE_NAME};
