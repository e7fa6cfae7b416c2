//! Use-Cases der Griff-Galerie: Öffnen, Navigieren, Bestätigen, Schließen.

use crate::app::events::AppEffect;
use crate::app::AppState;
use crate::core::{AnchorId, Catalog, GridDirection, HoldTemplateLibrary, SpawnResult, TargetId};
use glam::Vec3;
use std::sync::Arc;

use super::session;

/// Ergebnis von `confirm`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// Griff gesetzt (ggf. einen vorhandenen ersetzt)
    Spawned(SpawnResult),
    /// Kein Eintrag ausgewählt
    NoSelection,
    /// Kein (gültiges) Bohrloch
    NoAnchor,
    /// Zur Variante existiert keine Vorlage
    TemplateMissing { variant: String },
}

/// Lädt den Katalog beim ersten Aufruf; danach bleibt er gecacht.
pub fn ensure_catalog(state: &mut AppState) {
    if state.gallery.is_loaded() {
        return;
    }
    let dir = state.options.previews_dir();
    let catalog = Catalog::load_from_dir(&dir).unwrap_or_else(|e| {
        log::warn!("Griff-Katalog nicht verfügbar: {:#}", e);
        Catalog::default()
    });
    let columns = state.gallery_layout().columns;
    let colors = state.gallery_colors();
    state.gallery.set_catalog(Arc::new(catalog), columns, colors);
}

/// Verwirft den gecachten Katalog.
///
/// Bei offener Galerie wird sofort neu geladen; die Auswahl bleibt per
/// Variantenname erhalten, sonst fällt sie auf Eintrag 0 zurück.
pub fn reload_catalog(state: &mut AppState) {
    let previous = state.gallery.selected_entry().map(|entry| entry.name.clone());
    state.gallery.invalidate_catalog();
    if !state.gallery.visible {
        return;
    }

    ensure_catalog(state);
    let index = previous
        .and_then(|name| state.gallery.catalog().and_then(|catalog| catalog.index_of(&name)))
        .or_else(|| (!state.gallery.is_empty()).then_some(0));
    if let Some(index) = index {
        select_entry(state, index);
    }
}

/// Lädt die Griff-Vorlagen beim ersten Aufruf.
pub fn ensure_templates(state: &mut AppState) -> Arc<HoldTemplateLibrary> {
    if let Some(templates) = &state.templates {
        return Arc::clone(templates);
    }
    let dir = state.options.templates_dir();
    let library = HoldTemplateLibrary::load_from_dir(&dir).unwrap_or_else(|e| {
        log::warn!("Griff-Vorlagen nicht verfügbar: {:#}", e);
        HoldTemplateLibrary::default()
    });
    let library = Arc::new(library);
    state.templates = Some(Arc::clone(&library));
    library
}

/// Öffnet die Galerie für ein Bohrloch.
///
/// Gibt den Zeiger frei, stoppt Dreh-Drags und wählt Eintrag 0,
/// falls noch nichts ausgewählt ist.
pub fn open(state: &mut AppState, anchor: AnchorId) {
    if let Some(previous) = state.gallery.anchor.filter(|&prev| prev != anchor) {
        if state.gallery.visible {
            state.scene.deselect_anchor(previous);
        }
    }

    ensure_catalog(state);
    let anchor_name = state
        .scene
        .anchor(anchor)
        .map(|hole| hole.name().to_string())
        .unwrap_or_default();

    state.gallery.anchor = Some(anchor);
    state.gallery.anchor_name = anchor_name.clone();
    state.gallery.visible = true;
    state.scene.set_holds_enabled(false);

    if state.gallery.selected.is_none() && !state.gallery.is_empty() {
        let colors = state.gallery_colors();
        state.gallery.select(0, colors);
    }
    let layout = state.gallery_layout();
    state.gallery.update_scroll_target(layout);

    session::set_pointer_lock(state, false);
    log::info!("Galerie geöffnet für {}", anchor_name);
    state.push_effect(AppEffect::GalleryOpened { anchor_name });
}

/// Schließt die Galerie; das Bohrloch verliert seinen Selected-Zustand.
pub fn close(state: &mut AppState) {
    if !state.gallery.visible {
        return;
    }
    state.gallery.visible = false;
    if let Some(anchor) = state.gallery.anchor {
        state.scene.deselect_anchor(anchor);
    }
    state.scene.set_holds_enabled(true);
    session::set_pointer_lock(state, true);
    state.push_effect(AppEffect::GalleryClosed);
}

/// Bewegt die Auswahl um eine Zelle. Nur bei offener Galerie.
pub fn navigate(state: &mut AppState, direction: GridDirection) -> bool {
    if !state.gallery.visible {
        return false;
    }
    let colors = state.gallery_colors();
    let moved = state.gallery.navigate(direction, colors);
    if moved {
        let layout = state.gallery_layout();
        state.gallery.update_scroll_target(layout);
    }
    moved
}

/// Wählt einen Eintrag per Index (Klick auf eine Zelle).
pub fn select_entry(state: &mut AppState, index: usize) -> bool {
    let colors = state.gallery_colors();
    let selected = state.gallery.select(index, colors);
    if selected {
        let layout = state.gallery_layout();
        state.gallery.update_scroll_target(layout);
    }
    selected
}

/// Setzt einen Griff der ausgewählten Variante auf das Bohrloch der Galerie.
///
/// Bei Erfolg wird die Galerie geschlossen. Fehlt die Vorlage, bleibt sie offen.
pub fn confirm(state: &mut AppState) -> ConfirmOutcome {
    let Some(anchor) = state.gallery.anchor else {
        return ConfirmOutcome::NoAnchor;
    };
    let Some(variant) = state.gallery.selected_entry().map(|entry| entry.name.clone()) else {
        return ConfirmOutcome::NoSelection;
    };

    let templates = ensure_templates(state);
    let Some(template) = templates.get(&variant) else {
        log::error!("Keine Vorlage für Griff-Variante '{}' gefunden", variant);
        return ConfirmOutcome::TemplateMissing { variant };
    };

    let Some(result) = state.scene.spawn_hold(
        template,
        anchor,
        Vec3::from_array(state.options.spawn_offset),
        Vec3::from_array(state.options.spawn_rotation_deg),
        state.options.hold_highlight_color,
    ) else {
        log::warn!("Bohrloch {:?} existiert nicht mehr", anchor);
        return ConfirmOutcome::NoAnchor;
    };

    if let Some(old) = result.replaced {
        state.selector.forget(TargetId::Hold(old));
        state.push_effect(AppEffect::HoldRemoved { hold: old, anchor });
    }
    state.push_effect(AppEffect::HoldSpawned {
        hold: result.hold,
        anchor,
        variant,
    });

    close(state);
    ConfirmOutcome::Spawned(result)
}

/// Animiert die Scroll-Position Richtung Ziel.
pub fn advance_scroll(state: &mut AppState, dt: f32) {
    let speed = state.options.gallery_scroll_speed;
    state.gallery.advance_scroll(dt, speed);
}
