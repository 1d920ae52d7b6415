//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::DialogStep;
use super::{AppCommand, AppIntent, AppState};
use crate::core::CaptureMode;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::CreateDialogRequested => vec![AppCommand::OpenCreateDialog],
        AppIntent::EditDialogRequested { parcel_id } => {
            vec![AppCommand::OpenEditDialog { parcel_id }]
        }
        AppIntent::DialogCloseRequested => vec![AppCommand::CloseDialog],

        AppIntent::LeadSelected { lead_id } => vec![AppCommand::SetLead { lead_id }],
        AppIntent::NameChanged { name } => vec![AppCommand::SetName { name }],
        AppIntent::CitySelected { city } => vec![AppCommand::SetCity { city }],
        AppIntent::CultureSelected { culture } => vec![AppCommand::SetCulture { culture }],
        AppIntent::ObsChanged { obs } => vec![AppCommand::SetObs { obs }],
        AppIntent::NextStepRequested => vec![AppCommand::AdvanceToMap],
        AppIntent::PreviousStepRequested => vec![AppCommand::ReturnToDetails],

        AppIntent::CaptureModeSelected { mode } => vec![AppCommand::SwitchCaptureMode { mode }],
        AppIntent::PolygonCreated { ring } | AppIntent::PolygonUpdated { ring } => {
            vec![AppCommand::ApplyPolygon { ring }]
        }
        AppIntent::PolygonDeleted => vec![AppCommand::ClearPolygon],
        AppIntent::MapClicked { position } => {
            // Klicks im Zeichen-Modus gehören dem Zeichenwerkzeug
            let dialog = &state.dialog;
            let pin_mode_on_map = dialog.visible
                && dialog.step == DialogStep::Map
                && dialog.capture.mode() == CaptureMode::Pin;
            if pin_mode_on_map {
                vec![AppCommand::PlacePin { position }]
            } else {
                Vec::new()
            }
        }
        AppIntent::ManualAreaEntered { hectares } => {
            vec![AppCommand::ApplyManualArea { hectares }]
        }
        AppIntent::MapConfirmRequested => vec![AppCommand::ConfirmMap],
        AppIntent::SaveRequested => vec![AppCommand::SaveParcel],
    }
}
