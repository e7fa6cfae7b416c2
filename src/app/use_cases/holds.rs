//! Use-Cases für platzierte Griffe: Löschen und Dreh-Drag.

use crate::app::events::AppEffect;
use crate::app::AppState;
use crate::core::{AnchorId, HoldId, TargetId};

/// Entfernt einen Griff; sein Bohrloch wird wieder sichtbar.
pub fn delete_hold(state: &mut AppState, hold: HoldId) -> Option<AnchorId> {
    let anchor = state.scene.remove_hold(hold)?;
    state.selector.forget(TargetId::Hold(hold));
    state.ui.crosshair_highlighted = state.selector.hovered().is_some();
    state.push_effect(AppEffect::HoldRemoved { hold, anchor });
    Some(anchor)
}

/// Entfernt den gehoverten Griff. Während die Galerie offen ist: No-op.
pub fn delete_hovered(state: &mut AppState) -> Option<AnchorId> {
    if state.gallery.visible {
        return None;
    }
    let hold = state.hovered_hold()?;
    delete_hold(state, hold)
}

/// Startet/aktualisiert Dreh-Drags.
///
/// Ein Druck der Primär-Taste auf einem gehoverten Griff startet den Drag;
/// alle laufenden Drags folgen der Kamera-Neigung, solange die Taste gehalten wird.
pub fn update_drags(
    state: &mut AppState,
    pitch_deg: f32,
    primary_pressed: bool,
    primary_down: bool,
    dt: f32,
) {
    if state.gallery.visible {
        return;
    }

    if primary_pressed {
        if let Some(hold) = state.hovered_hold().and_then(|id| state.scene.hold_mut(id)) {
            hold.start_rotation(pitch_deg);
        }
    }

    let settings = state.options.rotation_settings();
    for hold in state.scene.holds_mut() {
        if hold.is_rotating() {
            hold.update_rotation(pitch_deg, primary_down, settings, dt);
        }
    }
}
