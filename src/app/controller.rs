//! Application Controller für zentrale Event-Verarbeitung.

use super::frame_mapping;
use super::render_scene;
use super::{AppCommand, AppEffect, AppIntent, AppState, FrameInput};
use crate::shared::RenderScene;

/// Orchestriert Eingabe-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Frame: Eingabe → Intents → Commands.
    ///
    /// Gibt die im Frame angefallenen Host-Aufträge zurück. Ein fehlschlagender
    /// Intent bricht den Frame nicht ab, der Fehler wird geloggt.
    pub fn tick(
        &mut self,
        state: &mut AppState,
        input: &FrameInput,
        dt: f32,
    ) -> anyhow::Result<Vec<AppEffect>> {
        for intent in frame_mapping::intents_for_frame(state, input, dt) {
            if let Err(e) = self.handle_intent(state, intent) {
                log::error!("Frame-Verarbeitung fehlgeschlagen: {:#}", e);
            }
        }
        Ok(state.take_effects())
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
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Sitzung ===
            AppCommand::SetPointerLock { locked } => handlers::dialog::set_pointer_lock(state, locked),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
            AppCommand::ToggleControlPanel => handlers::view::toggle_control_panel(state),
            AppCommand::ToggleOptionsDialog => handlers::view::toggle_options_dialog(state),

            // === Kamera ===
            AppCommand::AdvancePhysics { dt, move_axes } => {
                handlers::view::advance_physics(state, dt, move_axes)
            }
            AppCommand::RotateCamera { delta } => handlers::view::rotate_camera(state, delta),

            // === Auswahl ===
            AppCommand::ResolveHover {
                ray,
                max_distance,
                mask,
            } => handlers::selection::resolve_hover(state, ray, max_distance, mask),
            AppCommand::SelectHovered => handlers::selection::select_hovered(state),

            // === Griffe ===
            AppCommand::DeleteHold { hold } => handlers::holds::delete(state, hold),
            AppCommand::UpdateHoldDrags {
                pitch_deg,
                primary_pressed,
                primary_down,
                dt,
            } => handlers::holds::update_drags(state, pitch_deg, primary_pressed, primary_down, dt),

            // === Galerie ===
            AppCommand::NavigateGallery { direction } => {
                handlers::gallery::navigate(state, direction)
            }
            AppCommand::SelectGalleryEntry { index } => handlers::gallery::select_entry(state, index),
            AppCommand::ConfirmGallery => handlers::gallery::confirm(state),
            AppCommand::CloseGallery => handlers::gallery::close(state),
            AppCommand::AdvanceGalleryScroll { dt } => handlers::gallery::advance_scroll(state, dt),

            // === Wand & Assets ===
            AppCommand::RegenerateWall => handlers::wall::regenerate(state),
            AppCommand::ClearWall => handlers::wall::clear(state),
            AppCommand::GeneratePreviews => handlers::wall::generate_previews(state)?,

            // === Optionen ===
            AppCommand::ApplyOptions { options } => handlers::dialog::apply_options(state, options)?,
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
        }

        Ok(())
    }

    /// Baut die RenderScene für den aktuellen Frame.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
