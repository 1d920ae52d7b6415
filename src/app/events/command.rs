use crate::core::{CaptureMode, Coordinate};
use crate::persistence::Culture;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Leeren Dialog öffnen
    OpenCreateDialog,
    /// Dialog mit bestehendem Datensatz öffnen
    OpenEditDialog { parcel_id: u64 },
    /// Dialog schließen, Erfassung und Puffer verwerfen
    CloseDialog,

    /// Lead setzen
    SetLead { lead_id: u64 },
    /// Namen setzen
    SetName { name: String },
    /// Gemeinde setzen
    SetCity { city: String },
    /// Kultur setzen
    SetCulture { culture: Culture },
    /// Bemerkung setzen
    SetObs { obs: String },
    /// Stammdaten prüfen und zur Karte wechseln
    AdvanceToMap,
    /// Zurück zu den Stammdaten
    ReturnToDetails,

    /// Erfassungsmodus wechseln
    SwitchCaptureMode { mode: CaptureMode },
    /// Polygon übernehmen (neu oder bearbeitet)
    ApplyPolygon { ring: Vec<Coordinate> },
    /// Polygon verwerfen
    ClearPolygon,
    /// Pin setzen oder verschieben
    PlacePin { position: Coordinate },
    /// Manuelle Fläche übernehmen
    ApplyManualArea { hectares: f64 },
    /// Kartenauswahl bestätigen
    ConfirmMap,
    /// Datensatz anlegen oder aktualisieren
    SaveParcel,
}
