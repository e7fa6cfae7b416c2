//! Mapping von Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::SessionStarted => vec![AppCommand::SetPointerLock { locked: true }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::ControlPanelToggleRequested => vec![AppCommand::ToggleControlPanel],
        AppIntent::OptionsDialogToggleRequested => vec![AppCommand::ToggleOptionsDialog],
        AppIntent::PointerLockRequested { locked } => {
            // Während der Galerie bleibt der Zeiger frei
            if locked && state.gallery.visible {
                Vec::new()
            } else {
                vec![AppCommand::SetPointerLock { locked }]
            }
        }

        // === Kamera ===
        AppIntent::PhysicsStepRequested { dt, move_axes } => {
            vec![AppCommand::AdvancePhysics { dt, move_axes }]
        }
        AppIntent::CameraLookRequested { delta } => vec![AppCommand::RotateCamera { delta }],

        // === Auswahl ===
        AppIntent::PointerRaycastRequested => vec![AppCommand::ResolveHover {
            ray: state.view.camera.center_ray(),
            max_distance: state.options.max_selection_distance,
            mask: state.options.selection_mask,
        }],
        AppIntent::SelectHoveredRequested => vec![AppCommand::SelectHovered],

        // === Griffe ===
        AppIntent::DeleteHoveredHoldRequested => {
            if state.gallery.visible {
                return Vec::new();
            }
            state
                .hovered_hold()
                .map(|hold| vec![AppCommand::DeleteHold { hold }])
                .unwrap_or_default()
        }
        AppIntent::HoldDragUpdateRequested {
            primary_pressed,
            primary_down,
            dt,
        } => vec![AppCommand::UpdateHoldDrags {
            pitch_deg: state.view.camera.pitch_deg,
            primary_pressed,
            primary_down,
            dt,
        }],

        // === Galerie ===
        AppIntent::GalleryNavigateRequested { direction } => {
            vec![AppCommand::NavigateGallery { direction }]
        }
        AppIntent::GalleryEntryClicked { index } => vec![AppCommand::SelectGalleryEntry { index }],
        AppIntent::GalleryConfirmRequested => vec![AppCommand::ConfirmGallery],
        AppIntent::GalleryCancelRequested => vec![AppCommand::CloseGallery],
        AppIntent::GalleryScrollTick { dt } => vec![AppCommand::AdvanceGalleryScroll { dt }],

        // === Wand & Assets ===
        AppIntent::RegenerateWallRequested => {
            vec![AppCommand::CloseGallery, AppCommand::RegenerateWall]
        }
        AppIntent::ClearWallRequested => vec![AppCommand::CloseGallery, AppCommand::ClearWall],
        AppIntent::PreviewGenerationRequested => {
            vec![AppCommand::CloseGallery, AppCommand::GeneratePreviews]
        }

        // === Optionen ===
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}

#[cfg(test)]
mod tests;
