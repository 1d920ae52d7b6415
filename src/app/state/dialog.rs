use crate::capture::CaptureSession;
use crate::core::CaptureError;
use crate::persistence::{ParcelDetails, ParcelPayload, PayloadError, StoredParcel};
use crate::shared::CaptureOptions;

/// Schritt des zweistufigen Parzellen-Dialogs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogStep {
    /// Stammdaten (Lead, Name, Gemeinde, Kultur)
    #[default]
    Details,
    /// Geometrie auf der Karte erfassen
    Map,
}

/// Abgelehnte Dialog-Aktion
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DialogError {
    /// Aktion bei geschlossenem Dialog
    #[error("Dialog ist nicht geöffnet")]
    NotOpen,
    /// Aktion gehört zu einem anderen Schritt
    #[error("Aktion nur in Schritt {expected:?} möglich (aktiv: {actual:?})")]
    WrongStep {
        expected: DialogStep,
        actual: DialogStep,
    },
    /// Pflichtfeld der Stammdaten fehlt
    #[error("Pflichtfeld fehlt: {0}")]
    MissingField(&'static str),
    /// Erfassungs-Transition abgelehnt
    #[error(transparent)]
    Capture(#[from] CaptureError),
}

impl DialogError {
    /// Hinweistext für den Benutzer.
    pub fn user_hint(&self) -> String {
        match self {
            DialogError::NotOpen => "Der Dialog ist nicht geöffnet.".to_string(),
            DialogError::WrongStep { .. } => "Diese Aktion ist im aktuellen Schritt nicht möglich.".to_string(),
            DialogError::MissingField(_) => "Bitte alle Pflichtfelder ausfüllen.".to_string(),
            DialogError::Capture(e) => e.user_hint().to_string(),
        }
    }
}

impl From<PayloadError> for DialogError {
    fn from(e: PayloadError) -> Self {
        match e {
            PayloadError::MissingField(field) => DialogError::MissingField(field),
            PayloadError::NotReady(capture) => DialogError::Capture(capture),
        }
    }
}

/// Zustand des Create-/Edit-Dialogs einer Parzelle
#[derive(Debug, Clone)]
pub struct ParcelDialogState {
    /// Ob der Dialog sichtbar ist
    pub visible: bool,
    /// Aktiver Schritt
    pub step: DialogStep,
    /// ID des bearbeiteten Datensatzes (None = neuer Datensatz)
    pub editing_id: Option<u64>,
    /// Stammdaten (Arbeitskopie)
    pub details: ParcelDetails,
    /// Geometrie-Erfassung
    pub capture: CaptureSession,
    /// Kartenauswahl bestätigt
    pub map_confirmed: bool,
}

impl ParcelDialogState {
    /// Erstellt einen geschlossenen Dialog-Zustand.
    pub fn new(options: &CaptureOptions) -> Self {
        Self {
            visible: false,
            step: DialogStep::Details,
            editing_id: None,
            details: ParcelDetails::default(),
            capture: CaptureSession::with_options(options),
            map_confirmed: false,
        }
    }

    /// `true`, wenn ein bestehender Datensatz bearbeitet wird.
    pub fn is_edit_mode(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Öffnet den Dialog leer für einen neuen Datensatz.
    pub fn open_new(&mut self, options: &CaptureOptions) {
        *self = Self::new(options);
        self.visible = true;
    }

    /// Öffnet den Dialog für einen bestehenden Datensatz.
    ///
    /// Stammdaten werden immer übernommen. Lässt sich die gespeicherte
    /// Geometrie nicht laden, bleibt die Erfassung leer und der Fehler
    /// wird zurückgegeben.
    pub fn open_existing(
        &mut self,
        parcel: &StoredParcel,
        options: &CaptureOptions,
    ) -> Result<(), DialogError> {
        self.open_new(options);
        self.editing_id = Some(parcel.id);
        self.details = parcel.payload.details();

        let payload = &parcel.payload;
        self.capture.load_existing(
            payload.geometry.clone(),
            payload.area,
            Some(payload.center()),
            payload.capture_mode,
        )?;
        Ok(())
    }

    /// Schließt den Dialog; Erfassung und Modus-Puffer werden verworfen.
    pub fn close(&mut self) {
        self.visible = false;
        self.step = DialogStep::Details;
        self.map_confirmed = false;
        self.capture.reset();
    }

    /// Prüft die Stammdaten und wechselt zur Karte.
    pub fn advance_to_map(&mut self) -> Result<(), DialogError> {
        self.ensure_step(DialogStep::Details)?;
        if let Some(field) = self.details.missing_field() {
            return Err(DialogError::MissingField(field));
        }
        self.step = DialogStep::Map;
        Ok(())
    }

    /// Zurück zu den Stammdaten; die Erfassung bleibt erhalten.
    pub fn return_to_details(&mut self) -> Result<(), DialogError> {
        self.ensure_step(DialogStep::Map)?;
        self.step = DialogStep::Details;
        self.map_confirmed = false;
        Ok(())
    }

    /// Bestätigt die Kartenauswahl (nur wenn speicherbereit).
    pub fn confirm_map(&mut self) -> Result<(), DialogError> {
        self.ensure_step(DialogStep::Map)?;
        if let Some(missing) = crate::capture::validation::missing_requirement(self.capture.state())
        {
            return Err(missing.into());
        }
        self.map_confirmed = true;
        Ok(())
    }

    /// Baut den Payload für die Ablage (Speicher-Gate + Pflichtfelder).
    pub fn build_payload(&self) -> Result<ParcelPayload, DialogError> {
        if !self.visible {
            return Err(DialogError::NotOpen);
        }
        Ok(ParcelPayload::build(&self.details, self.capture.state())?)
    }

    /// Prüft, ob der Dialog offen ist und im erwarteten Schritt steht.
    pub fn ensure_step(&self, expected: DialogStep) -> Result<(), DialogError> {
        if !self.visible {
            return Err(DialogError::NotOpen);
        }
        if self.step != expected {
            return Err(DialogError::WrongStep {
                expected,
                actual: self.step,
            });
        }
        Ok(())
    }
}
