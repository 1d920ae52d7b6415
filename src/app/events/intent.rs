use crate::core::{CaptureMode, Coordinate};
use crate::persistence::Culture;
use serde::{Deserialize, Serialize};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/Kartenfläche ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum AppIntent {
    /// Dialog für eine neue Parzelle öffnen
    CreateDialogRequested,
    /// Dialog für einen bestehenden Datensatz öffnen
    EditDialogRequested { parcel_id: u64 },
    /// Dialog schließen (verwirft die Erfassung)
    DialogCloseRequested,

    /// Kunde (Lead) ausgewählt
    LeadSelected { lead_id: u64 },
    /// Name geändert
    NameChanged { name: String },
    /// Gemeinde ausgewählt
    CitySelected { city: String },
    /// Kultur ausgewählt
    CultureSelected { culture: Culture },
    /// Bemerkung geändert
    ObsChanged { obs: String },
    /// Weiter zu Schritt 2 (Karte)
    NextStepRequested,
    /// Zurück zu Schritt 1 (Stammdaten)
    PreviousStepRequested,

    /// Umschalter Zeichnen / Pin betätigt
    CaptureModeSelected { mode: CaptureMode },
    /// Zeichenfläche meldet ein fertiges Polygon
    PolygonCreated { ring: Vec<Coordinate> },
    /// Zeichenfläche meldet ein bearbeitetes Polygon
    PolygonUpdated { ring: Vec<Coordinate> },
    /// Zeichenfläche meldet gelöschtes Polygon
    PolygonDeleted,
    /// Klick auf die Karte
    MapClicked { position: Coordinate },
    /// Fläche manuell eingegeben (Hektar)
    ManualAreaEntered { hectares: f64 },
    /// Kartenauswahl bestätigen
    MapConfirmRequested,
    /// Speichern
    SaveRequested,
}
