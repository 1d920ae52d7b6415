//! Geometrie-Erfassung: Zustandsautomat, Modus-Puffer, Speicher-Gate, Klassifizierer.
//!
//! Die Sitzung erzeugt reine Zustände. Kartenseitige Effekte (Marker,
//! Layer, Kamera) übersetzt der Host aus dem read-only `CaptureState`.

/// Zwei-Slot-Puffer je Erfassungsmodus
pub mod buffer;
/// Modus-Erkennung für bestehende Geometrien
pub mod classifier;
/// Zustandsautomat der Erfassungssitzung
pub mod session;
mod state;
/// Speicher-Gate
pub mod validation;

pub use buffer::{ModeArtifact, ModeBuffer};
pub use classifier::{Classification, ClassificationSource, GeometryClassifier};
pub use session::CaptureSession;
pub use state::{CapturePhase, CaptureState};
pub use validation::is_ready_to_persist;
