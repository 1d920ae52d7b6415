//! Schnittstelle zur Datensatz-Ablage und In-Memory-Referenzimplementierung.

use super::ParcelPayload;
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Gespeicherter Parzellen-Datensatz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredParcel {
    pub id: u64,
    #[serde(flatten)]
    pub payload: ParcelPayload,
}

/// Persistenz-Adapter für Parzellen (HTTP-API, Datenbank, …).
///
/// Fehler sind Persistenz-Fehler, keine Geometrie-Fehler; die Erfassung
/// wiederholt nichts.
pub trait ParcelStore {
    /// Legt einen neuen Datensatz an.
    fn create(&mut self, payload: ParcelPayload) -> anyhow::Result<StoredParcel>;

    /// Überschreibt einen bestehenden Datensatz.
    fn update(&mut self, id: u64, payload: ParcelPayload) -> anyhow::Result<StoredParcel>;

    /// Liest einen Datensatz.
    fn get(&self, id: u64) -> Option<&StoredParcel>;

    /// Alle Datensätze in ID-Reihenfolge.
    fn list(&self) -> Vec<&StoredParcel>;
}

/// Ablage im Speicher mit serverseitiger Minimal-Validierung.
#[derive(Debug, Default)]
pub struct InMemoryParcelStore {
    parcels: BTreeMap<u64, StoredParcel>,
    last_id: u64,
}

impl InMemoryParcelStore {
    /// Erstellt eine leere Ablage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Anzahl gespeicherter Datensätze.
    pub fn len(&self) -> usize {
        self.parcels.len()
    }

    /// `true`, wenn keine Datensätze vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.parcels.is_empty()
    }

    fn check(payload: &ParcelPayload) -> anyhow::Result<()> {
        if !payload.area.is_finite() || payload.area <= 0.0 {
            bail!("Fläche muss positiv sein (erhalten: {})", payload.area);
        }
        if payload.name.trim().is_empty() {
            bail!("Name darf nicht leer sein");
        }
        Ok(())
    }
}

impl ParcelStore for InMemoryParcelStore {
    fn create(&mut self, payload: ParcelPayload) -> anyhow::Result<StoredParcel> {
        Self::check(&payload).context("Parzelle konnte nicht angelegt werden")?;
        self.last_id += 1;
        let parcel = StoredParcel {
            id: self.last_id,
            payload,
        };
        self.parcels.insert(parcel.id, parcel.clone());
        log::info!("Parzelle {} angelegt", parcel.id);
        Ok(parcel)
    }

    fn update(&mut self, id: u64, payload: ParcelPayload) -> anyhow::Result<StoredParcel> {
        Self::check(&payload).with_context(|| format!("Parzelle {id} konnte nicht aktualisiert werden"))?;
        let Some(entry) = self.parcels.get_mut(&id) else {
            bail!("Parzelle {id} nicht gefunden");
        };
        entry.payload = payload;
        log::info!("Parzelle {id} aktualisiert");
        Ok(entry.clone())
    }

    fn get(&self, id: u64) -> Option<&StoredParcel> {
        self.parcels.get(&id)
    }

    fn list(&self) -> Vec<&StoredParcel> {
        self.parcels.values().collect()
    }
}
