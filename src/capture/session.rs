//! Zustandsautomat einer Erfassungssitzung (Zeichnen / Pin).
//!
//! Die Sitzung besitzt den `CaptureState` und den `ModeBuffer`. Abgelehnte
//! Transitionen liefern einen `CaptureError` und lassen beides unverändert.

use super::buffer::{ModeArtifact, ModeBuffer};
use super::classifier::{Classification, GeometryClassifier};
use super::state::{CapturePhase, CaptureState};
use super::validation;
use crate::core::{geo_math, CaptureError, CaptureMode, Coordinate, Geometry};
use crate::shared::CaptureOptions;

/// Erfassungssitzung eines Create-/Edit-Dialogs.
#[derive(Debug, Clone)]
pub struct CaptureSession {
    state: CaptureState,
    buffer: ModeBuffer,
    classifier: GeometryClassifier,
    /// Schrittzahl neu erzeugter Kreise
    circle_steps: usize,
    /// Nachkommastellen gezeichneter Flächen
    area_decimals: u32,
}

impl CaptureSession {
    /// Erstellt eine leere Sitzung mit Standard-Optionen (Zeichen-Modus).
    pub fn new() -> Self {
        Self::with_options(&CaptureOptions::default())
    }

    /// Erstellt eine leere Sitzung mit den gegebenen Optionen.
    pub fn with_options(options: &CaptureOptions) -> Self {
        Self {
            state: CaptureState::new(CaptureMode::Draw),
            buffer: ModeBuffer::new(),
            classifier: GeometryClassifier::new(options.circle_steps)
                .with_vertex_count_fallback(options.classify_by_vertex_count),
            circle_steps: options.circle_steps,
            area_decimals: options.area_decimals.min(geo_math::MAX_AREA_DECIMALS),
        }
    }

    /// Read-only Sicht auf den Zustand (für Rendering und Payload).
    pub fn state(&self) -> &CaptureState {
        &self.state
    }

    /// Read-only Sicht auf den Modus-Puffer.
    pub fn buffer(&self) -> &ModeBuffer {
        &self.buffer
    }

    /// Aktiver Modus.
    pub fn mode(&self) -> CaptureMode {
        self.state.mode
    }

    /// Aktuelle Phase.
    pub fn phase(&self) -> CapturePhase {
        self.state.phase()
    }

    /// Speicher-Gate auf dem aktuellen Zustand.
    pub fn is_ready_to_persist(&self) -> bool {
        validation::is_ready_to_persist(&self.state)
    }

    /// Hinweistext für die Statuszeile.
    pub fn status_text(&self) -> &'static str {
        match (self.phase(), self.state.is_valid) {
            (CapturePhase::Idle, _) => match self.state.mode {
                CaptureMode::Draw => "Polygon-Werkzeug wählen und Fläche auf der Karte zeichnen",
                CaptureMode::Pin => "Auf die Karte klicken, um den Pin zu setzen",
            },
            (CapturePhase::DrawActive, _) => "Fläche erfasst: bearbeiten oder bestätigen",
            (CapturePhase::PinActive, false) => "Fläche in Hektar eingeben",
            (CapturePhase::PinActive, true) => "Kreisfläche erfasst: Pin verschieben oder bestätigen",
        }
    }

    // ── Transitionen ────────────────────────────────────────────────

    /// Wechselt den Erfassungsmodus.
    ///
    /// Das gültige Ergebnis des verlassenen Modus wandert in den Puffer,
    /// das gepufferte Ergebnis des neuen Modus wird wiederhergestellt.
    /// Ein Wechsel in den aktiven Modus ändert nichts.
    pub fn switch_mode(&mut self, new_mode: CaptureMode) {
        if new_mode == self.state.mode {
            return;
        }

        if let Some(artifact) = self.active_artifact() {
            self.buffer.save(artifact);
        }

        self.state.mode = new_mode;
        match self.buffer.get(new_mode).cloned() {
            Some(artifact) => self.restore(artifact),
            None => self.state.clear_active(),
        }

        log::debug!(
            "Erfassungsmodus gewechselt auf '{}' (gültig: {})",
            new_mode,
            self.state.is_valid
        );
    }

    /// Übernimmt einen fertig gezeichneten oder bearbeiteten Ring.
    pub fn on_polygon_drawn(&mut self, ring: Vec<Coordinate>) -> Result<(), CaptureError> {
        self.ensure_mode(CaptureMode::Draw)?;

        let area = geo_math::polygon_area_hectares_with_precision(&ring, self.area_decimals)?;
        // Gerundet 0 ha ist nicht speicherbar
        if area <= 0.0 {
            return Err(CaptureError::InvalidArea(area));
        }
        let center = geo_math::polygon_centroid(&ring)?;

        self.state.geometry = Some(Geometry::Polygon(ring));
        self.state.area_hectares = Some(area);
        self.state.center = Some(center);
        self.state.is_valid = true;

        log::debug!("Polygon übernommen: {area} ha");
        Ok(())
    }

    /// Verwirft das gezeichnete Polygon. Der Puffer bleibt erhalten.
    ///
    /// Im Pin-Modus wirkungslos (dort gibt es kein Polygon der Zeichenfläche).
    pub fn on_polygon_cleared(&mut self) {
        if self.state.mode != CaptureMode::Draw {
            log::debug!("Polygon-Löschung im Pin-Modus ignoriert");
            return;
        }
        self.state.clear_active();
    }

    /// Setzt oder verschiebt den Pin.
    ///
    /// Liegt bereits eine Fläche vor, wird der Kreis um den neuen Pin erzeugt.
    pub fn on_pin_placed(&mut self, position: Coordinate) -> Result<(), CaptureError> {
        self.ensure_mode(CaptureMode::Pin)?;
        if !position.is_finite() {
            return Err(CaptureError::InvalidGeometry(
                "Pin-Position ist ungültig".to_string(),
            ));
        }

        match self.state.area_hectares.filter(|area| *area > 0.0) {
            Some(area) => {
                let circle = geo_math::circle_from_area_hectares(position, area, self.circle_steps)?;
                self.state.geometry = Some(circle);
                self.state.is_valid = true;
            }
            None => {
                self.state.geometry = Some(Geometry::Point(position));
                self.state.is_valid = false;
            }
        }
        self.state.center = Some(position);

        log::debug!("Pin gesetzt bei ({}, {})", position.lng, position.lat);
        Ok(())
    }

    /// Übernimmt die manuell eingegebene Fläche und erzeugt den Kreis.
    pub fn on_manual_area_entered(&mut self, hectares: f64) -> Result<(), CaptureError> {
        self.ensure_mode(CaptureMode::Pin)?;
        if !hectares.is_finite() || hectares <= 0.0 {
            return Err(CaptureError::InvalidArea(hectares));
        }
        // Gleiche Genauigkeit wie gezeichnete Flächen
        let hectares = geo_math::round_to_decimals(hectares, self.area_decimals);
        if hectares <= 0.0 {
            return Err(CaptureError::InvalidArea(hectares));
        }
        let center = self.state.center.ok_or(CaptureError::NoCenterSet)?;

        let circle = geo_math::circle_from_area_hectares(center, hectares, self.circle_steps)?;
        self.state.geometry = Some(circle);
        self.state.area_hectares = Some(hectares);
        self.state.is_valid = true;

        log::debug!("Kreisfläche übernommen: {hectares} ha");
        Ok(())
    }

    /// Lädt die Geometrie eines bestehenden Datensatzes.
    ///
    /// Der Klassifizierer bestimmt den Modus; aktiver Zustand und der
    /// passende Puffer-Slot werden damit befüllt. Der Puffer wird vorher
    /// geleert, da ein Laden eine neue Bearbeitung beginnt.
    pub fn load_existing(
        &mut self,
        geometry: Geometry,
        area_hectares: f64,
        center: Option<Coordinate>,
        stored_mode: Option<CaptureMode>,
    ) -> Result<Classification, CaptureError> {
        if !area_hectares.is_finite() || area_hectares <= 0.0 {
            return Err(CaptureError::InvalidArea(area_hectares));
        }
        if let Geometry::Polygon(ring) = &geometry {
            geo_math::validate_ring(ring)?;
        }
        let classification = self.classifier.classify(&geometry, center, stored_mode)?;

        let artifact = match classification.mode {
            CaptureMode::Draw => ModeArtifact::Draw {
                geometry: geometry.clone(),
                area_hectares,
            },
            CaptureMode::Pin => ModeArtifact::Pin {
                geometry: geometry.clone(),
                area_hectares,
                center: classification.center,
            },
        };
        self.buffer.clear();
        self.buffer.save(artifact);

        self.state = CaptureState {
            mode: classification.mode,
            geometry: Some(geometry),
            area_hectares: Some(area_hectares),
            center: Some(classification.center),
            is_valid: true,
        };

        log::info!(
            "Bestehende Geometrie geladen: Modus '{}' ({:?})",
            classification.mode,
            classification.source
        );
        Ok(classification)
    }

    /// Beendet die Sitzung: Zustand zurück auf leer, Puffer geleert.
    pub fn reset(&mut self) {
        self.state = CaptureState::new(CaptureMode::Draw);
        self.buffer.clear();
    }

    // ── Interna ─────────────────────────────────────────────────────

    fn ensure_mode(&self, expected: CaptureMode) -> Result<(), CaptureError> {
        if self.state.mode == expected {
            Ok(())
        } else {
            Err(CaptureError::WrongMode {
                expected,
                actual: self.state.mode,
            })
        }
    }

    /// Pufferbares Ergebnis des aktiven Modus, falls gültig.
    fn active_artifact(&self) -> Option<ModeArtifact> {
        if !self.state.is_valid {
            return None;
        }
        let geometry = self.state.geometry.clone()?;
        let area_hectares = self.state.area_hectares.filter(|area| *area > 0.0)?;
        match self.state.mode {
            CaptureMode::Draw => Some(ModeArtifact::Draw {
                geometry,
                area_hectares,
            }),
            CaptureMode::Pin => Some(ModeArtifact::Pin {
                geometry,
                area_hectares,
                center: self.state.center?,
            }),
        }
    }

    fn restore(&mut self, artifact: ModeArtifact) {
        match artifact {
            ModeArtifact::Draw {
                geometry,
                area_hectares,
            } => {
                self.state.center = geo_math::centroid(&geometry).ok();
                self.state.geometry = Some(geometry);
                self.state.area_hectares = Some(area_hectares);
            }
            ModeArtifact::Pin {
                geometry,
                area_hectares,
                center,
            } => {
                self.state.geometry = Some(geometry);
                self.state.area_hectares = Some(area_hectares);
                self.state.center = Some(center);
            }
        }
        self.state.is_valid = true;
    }
}

impl Default for CaptureSession {
    fn default() -> Self {
        Self::new()
    }
}
