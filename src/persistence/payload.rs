//! Drahtformat zwischen Erfassung und Datensatz-API.

use super::{Culture, ParcelDetails};
use crate::capture::{validation, CaptureState};
use crate::core::{CaptureError, CaptureMode, Coordinate, Geometry};
use serde::{Deserialize, Serialize};

/// Create-/Update-Payload eines Parzellen-Datensatzes.
///
/// `lat`/`lng` spiegeln den Mittelpunkt für Abfragen; `captureMode`
/// ersetzt die Modus-Erkennung über die Vertex-Anzahl.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParcelPayload {
    pub lead_id: u64,
    pub name: String,
    pub city: String,
    pub culture: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub obs: Option<String>,
    /// Fläche in Hektar
    pub area: f64,
    pub geometry: Geometry,
    pub lat: f64,
    pub lng: f64,
    /// Fehlt bei Altdaten
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture_mode: Option<CaptureMode>,
}

/// Abgelehnter Payload-Aufbau.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PayloadError {
    /// Pflichtfeld der Stammdaten fehlt
    #[error("Pflichtfeld fehlt: {0}")]
    MissingField(&'static str),
    /// Erfassung hat das Speicher-Gate nicht passiert
    #[error("Geometrie nicht speicherbereit: {0}")]
    NotReady(#[from] CaptureError),
}

impl ParcelPayload {
    /// Baut den Payload aus Stammdaten und Erfassungszustand.
    ///
    /// Setzt voraus, dass das Speicher-Gate passiert ist.
    pub fn build(details: &ParcelDetails, state: &CaptureState) -> Result<Self, PayloadError> {
        if let Some(field) = details.missing_field() {
            return Err(PayloadError::MissingField(field));
        }
        if let Some(missing) = validation::missing_requirement(state) {
            return Err(missing.into());
        }

        let (Some(lead_id), Some(city), Some(culture)) =
            (details.lead_id, details.city.clone(), details.culture)
        else {
            return Err(PayloadError::MissingField("lead"));
        };
        let (Some(geometry), Some(area), Some(center)) =
            (state.geometry.clone(), state.area_hectares, state.center)
        else {
            return Err(CaptureError::NoCenterSet.into());
        };

        let obs = details.obs.trim();
        Ok(Self {
            lead_id,
            name: details.name.trim().to_string(),
            city,
            culture: culture.label().to_string(),
            obs: (!obs.is_empty()).then(|| obs.to_string()),
            area,
            geometry,
            lat: center.lat,
            lng: center.lng,
            capture_mode: Some(state.mode),
        })
    }

    /// Gespiegelter Mittelpunkt.
    pub fn center(&self) -> Coordinate {
        Coordinate::new(self.lng, self.lat)
    }

    /// Stammdaten für einen Edit-Dialog zurückgewinnen.
    pub fn details(&self) -> ParcelDetails {
        ParcelDetails {
            lead_id: Some(self.lead_id),
            name: self.name.clone(),
            city: Some(self.city.clone()),
            culture: Culture::from_label(&self.culture),
            obs: self.obs.clone().unwrap_or_default(),
        }
    }
}
