//! Use-Cases für Raum- und Wandaufbau.

use crate::app::AppState;
use crate::core::{generate_bolt_holes, RoomLayout, RoomPartKind, Scene, BOLT_HOLE_MATERIAL};
use crate::shared::EditorOptions;

/// Baut eine leere Szene mit Raum und Quell-Materialien.
pub fn build_scene(options: &EditorOptions) -> Scene {
    let mut scene = Scene::new(RoomLayout::generate(options.room), options.bolt_hole_radius);
    register_materials(&mut scene, options);
    scene
}

/// Registriert (oder aktualisiert) die Quell-Materialien aus den Optionen.
pub fn register_materials(scene: &mut Scene, options: &EditorOptions) {
    let materials = scene.materials_mut();
    materials.register_source(RoomPartKind::Floor.material_name(), options.floor_color);
    materials.register_source(RoomPartKind::BackWall.material_name(), options.wall_color);
    materials.register_source(RoomPartKind::Ceiling.material_name(), options.ceiling_color);
    materials.register_source(BOLT_HOLE_MATERIAL, options.bolt_hole_color);
}

/// Entfernt alle Bohrlöcher und Griffe und baut das Raster neu auf.
pub fn regenerate(state: &mut AppState) {
    let Some(wall) = state.scene.room().climbing_wall().map(|part| part.bounds) else {
        log::warn!("Keine Kletterwand im Raum, Bohrlöcher werden nicht erzeugt");
        clear(state);
        return;
    };

    let specs = generate_bolt_holes(wall.center(), wall.size(), &state.options.wall_grid);
    let colors = state.options.target_colors();
    let removed = state.scene.rebuild_anchors(&specs, colors);
    state.selector.forget_all(&removed);
    state.gallery.anchor = None;
    state.ui.crosshair_highlighted = state.selector.hovered().is_some();
}

/// Leert die Wand.
pub fn clear(state: &mut AppState) {
    let removed = state.scene.clear_wall();
    state.selector.forget_all(&removed);
    state.gallery.anchor = None;
    state.ui.crosshair_highlighted = state.selector.hovered().is_some();
}
