//! Persistenz-Grenze: Stammdaten, Drahtformat und Ablage-Schnittstelle.
//!
//! Die eigentliche Ablage (HTTP-API, ORM) ist ein externer Kollaborateur;
//! hier liegen nur Vertrag und In-Memory-Referenz.

pub mod details;
pub mod payload;
pub mod store;

pub use details::{Culture, ParcelDetails};
pub use payload::{ParcelPayload, PayloadError};
pub use store::{InMemoryParcelStore, ParcelStore, StoredParcel};
