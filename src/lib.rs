//! Parzellen-Erfassung: Geometrie-Capture und Konsistenz-Engine.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod capture;
pub mod core;
pub mod persistence;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState, DialogStep, UiState};
pub use capture::{CapturePhase, CaptureSession, CaptureState, GeometryClassifier, ModeBuffer};
pub use core::{CaptureError, CaptureMode, Coordinate, Geometry};
pub use persistence::{Culture, InMemoryParcelStore, ParcelPayload, ParcelStore, StoredParcel};
pub use shared::CaptureOptions;
