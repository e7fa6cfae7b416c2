use crate::app::state::PointerSelector;
use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{GridDirection, HoldId, TargetId};

use super::map_intent_to_commands;

#[test]
fn session_started_locks_pointer() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::SessionStarted);

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::SetPointerLock { locked: true }
    ));
}

#[test]
fn raycast_uses_camera_center_and_selection_options() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::PointerRaycastRequested);

    assert_eq!(commands.len(), 1);
    match &commands[0] {
        AppCommand::ResolveHover {
            ray,
            max_distance,
            mask,
        } => {
            assert_eq!(ray.origin, state.view.camera.position);
            assert_eq!(*max_distance, state.options.max_selection_distance);
            assert_eq!(*mask, state.options.selection_mask);
        }
        other => panic!("Unerwarteter Command: {other:?}"),
    }
}

#[test]
fn delete_without_hovered_hold_maps_to_nothing() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::DeleteHoveredHoldRequested);

    assert!(commands.is_empty());
}

#[test]
fn delete_targets_hovered_hold() {
    let mut state = AppState::new();
    state.selector = PointerSelector::with_hovered(TargetId::Hold(HoldId(7)));

    let commands = map_intent_to_commands(&state, AppIntent::DeleteHoveredHoldRequested);

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::DeleteHold { hold: HoldId(7) }
    ));
}

#[test]
fn drag_update_carries_camera_pitch() {
    let mut state = AppState::new();
    state.view.camera.pitch_deg = 12.5;

    let commands = map_intent_to_commands(
        &state,
        AppIntent::HoldDragUpdateRequested {
            primary_pressed: true,
            primary_down: true,
            dt: 0.016,
        },
    );

    assert!(matches!(
        commands[0],
        AppCommand::UpdateHoldDrags { pitch_deg, primary_pressed: true, .. } if pitch_deg == 12.5
    ));
}

#[test]
fn regenerate_wall_closes_gallery_first() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::RegenerateWallRequested);

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::CloseGallery));
    assert!(matches!(commands[1], AppCommand::RegenerateWall));
}

#[test]
fn pointer_lock_is_refused_while_gallery_is_open() {
    let mut state = AppState::new();
    state.gallery.visible = true;

    let lock = map_intent_to_commands(&state, AppIntent::PointerLockRequested { locked: true });
    let release =
        map_intent_to_commands(&state, AppIntent::PointerLockRequested { locked: false });

    assert!(lock.is_empty());
    assert!(matches!(
        release[0],
        AppCommand::SetPointerLock { locked: false }
    ));
}

#[test]
fn gallery_navigation_maps_direction() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::GalleryNavigateRequested {
            direction: GridDirection::Left,
        },
    );

    assert!(matches!(
        commands[0],
        AppCommand::NavigateGallery {
            direction: GridDirection::Left
        }
    ));
}
