//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Erfassungs-Transitionen auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(
            &command,
            state.dialog.step,
            state.dialog.capture.mode(),
        );
        use super::handlers;

        match command {
            // === Dialog ===
            AppCommand::OpenCreateDialog => handlers::dialog::open_create(state),
            AppCommand::OpenEditDialog { parcel_id } => {
                handlers::dialog::open_edit(state, parcel_id)?
            }
            AppCommand::CloseDialog => handlers::dialog::close(state),

            // === Stammdaten ===
            AppCommand::SetLead { lead_id } => handlers::dialog::set_lead(state, lead_id),
            AppCommand::SetName { name } => handlers::dialog::set_name(state, name),
            AppCommand::SetCity { city } => handlers::dialog::set_city(state, city),
            AppCommand::SetCulture { culture } => handlers::dialog::set_culture(state, culture),
            AppCommand::SetObs { obs } => handlers::dialog::set_obs(state, obs),
            AppCommand::AdvanceToMap => handlers::dialog::advance_to_map(state),
            AppCommand::ReturnToDetails => handlers::dialog::return_to_details(state),

            // === Erfassung ===
            AppCommand::SwitchCaptureMode { mode } => handlers::capture::switch_mode(state, mode),
            AppCommand::ApplyPolygon { ring } => handlers::capture::apply_polygon(state, ring),
            AppCommand::ClearPolygon => handlers::capture::clear_polygon(state),
            AppCommand::PlacePin { position } => handlers::capture::place_pin(state, position),
            AppCommand::ApplyManualArea { hectares } => {
                handlers::capture::apply_manual_area(state, hectares)
            }
            AppCommand::ConfirmMap => handlers::dialog::confirm_map(state),

            // === Persistenz ===
            AppCommand::SaveParcel => handlers::persistence::save(state)?,
        }

        Ok(())
    }
}
