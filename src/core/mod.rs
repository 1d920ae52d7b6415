//! Core-Domänentypen: Koordinaten, Geometrie, Erfassungsmodus, Geometrie-Mathematik.

pub mod capture_mode;
pub mod coordinate;
pub mod error;
/// Rein-mathematische Geometrie-Funktionen (Fläche, Schwerpunkt, Kreis)
pub mod geo_math;
pub mod geometry;

pub use capture_mode::CaptureMode;
pub use coordinate::Coordinate;
pub use error::CaptureError;
pub use geo_math::{
    centroid, circle_from_area_hectares, polygon_area_hectares, DEFAULT_CIRCLE_STEPS,
};
pub use geometry::Geometry;
