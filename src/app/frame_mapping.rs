//! Übersetzt die Eingabe eines Frames in geordnete Intents.

use super::{AppIntent, AppState, FrameInput};

/// Intents eines Frames in fester Reihenfolge:
/// Physik → Look → Hover → Select → Delete → Drag → Galerie → Scroll.
///
/// Solange die Galerie offen ist, ruht die Spiel-Eingabe.
pub fn intents_for_frame(state: &AppState, input: &FrameInput, dt: f32) -> Vec<AppIntent> {
    let mut intents = Vec::new();

    if input.menu_toggle_pressed {
        intents.push(AppIntent::ControlPanelToggleRequested);
    }

    if state.gallery.visible {
        intents.extend(
            input
                .navigation
                .iter()
                .map(|&direction| AppIntent::GalleryNavigateRequested { direction }),
        );
        if input.confirm_pressed {
            intents.push(AppIntent::GalleryConfirmRequested);
        }
        if input.cancel_pressed {
            intents.push(AppIntent::GalleryCancelRequested);
        }
    } else {
        intents.push(AppIntent::PhysicsStepRequested {
            dt,
            move_axes: input.move_axes,
        });
        if input.look_delta != glam::Vec2::ZERO {
            intents.push(AppIntent::CameraLookRequested {
                delta: input.look_delta,
            });
        }
        intents.push(AppIntent::PointerRaycastRequested);
        if input.select_pressed {
            intents.push(AppIntent::SelectHoveredRequested);
        }
        if input.delete_pressed {
            intents.push(AppIntent::DeleteHoveredHoldRequested);
        }
        intents.push(AppIntent::HoldDragUpdateRequested {
            primary_pressed: input.primary_pressed,
            primary_down: input.primary_down,
            dt,
        });
        if input.cancel_pressed {
            intents.push(AppIntent::PointerLockRequested { locked: false });
        }
    }

    intents.push(AppIntent::GalleryScrollTick { dt });
    intents
}
