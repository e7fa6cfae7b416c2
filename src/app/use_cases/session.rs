//! Use-Cases für Sitzungssteuerung: Zeiger, Kontrollpanel, Optionen.

use crate::app::events::AppEffect;
use crate::app::AppState;
use crate::core::RoomLayout;
use crate::shared::EditorOptions;

use super::{gallery, wall};

/// Fängt oder gibt den Zeiger frei; meldet nur echte Wechsel an den Host.
pub fn set_pointer_lock(state: &mut AppState, locked: bool) {
    if state.ui.pointer_locked == locked {
        return;
    }
    state.ui.pointer_locked = locked;
    state.push_effect(AppEffect::SetPointerLock { locked });
}

/// Schaltet das Kontrollpanel um.
pub fn toggle_control_panel(state: &mut AppState) {
    state.ui.control_panel_visible = !state.ui.control_panel_visible;
}

/// Schaltet den Optionen-Dialog um; geöffnet wird der Zeiger freigegeben.
pub fn toggle_options_dialog(state: &mut AppState) {
    state.ui.options_dialog_visible = !state.ui.options_dialog_visible;
    if state.ui.options_dialog_visible {
        set_pointer_lock(state, false);
    }
}

/// Markiert die Anwendung zum Beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
    state.push_effect(AppEffect::ExitRequested);
}

/// Übernimmt neue Optionen und baut betroffene Szenenteile neu auf.
///
/// Raum oder Raster geändert: Wand wird neu generiert (platzierte Griffe gehen verloren).
/// Asset-Wurzel oder Spalten geändert: Katalog und Vorlagen werden neu geladen,
/// bei offener Galerie sofort.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    let previous = std::mem::replace(&mut state.options, options);

    wall::register_materials(&mut state.scene, &state.options);
    state.scene.set_anchor_radius(state.options.bolt_hole_radius);

    if previous.asset_root != state.options.asset_root
        || previous.gallery_columns != state.options.gallery_columns
    {
        state.templates = None;
        gallery::reload_catalog(state);
    }

    let room_changed = previous.room != state.options.room;
    if room_changed {
        state
            .scene
            .set_room(RoomLayout::generate(state.options.room));
    }
    if room_changed || previous.wall_grid != state.options.wall_grid {
        wall::regenerate(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_options() -> EditorOptions {
        let mut options = EditorOptions::default();
        options.wall_grid.columns = 3;
        options.wall_grid.rows = 2;
        options
    }

    #[test]
    fn pointer_lock_effect_only_on_change() {
        let mut state = AppState::with_options(small_options());
        set_pointer_lock(&mut state, true);
        set_pointer_lock(&mut state, true);
        assert_eq!(
            state.take_effects(),
            vec![AppEffect::SetPointerLock { locked: true }]
        );
    }

    #[test]
    fn changed_grid_regenerates_wall() {
        let mut state = AppState::with_options(small_options());
        assert_eq!(state.scene.anchor_count(), 6);

        let mut options = small_options();
        options.wall_grid.rows = 4;
        apply_options(&mut state, options);
        assert_eq!(state.scene.anchor_count(), 12);
    }

    #[test]
    fn unrelated_change_keeps_wall() {
        let mut state = AppState::with_options(small_options());
        let first = state.scene.anchors().next().map(|hole| hole.id());

        let mut options = small_options();
        options.fog_end = 70.0;
        apply_options(&mut state, options);
        assert_eq!(state.scene.anchors().next().map(|hole| hole.id()), first);
    }
}
