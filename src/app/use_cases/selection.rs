//! Use-Cases für Hover und Auswahl über das Fadenkreuz.

use crate::app::state::HoverTransition;
use crate::app::AppState;
use crate::core::{LayerMask, Ray, SelectOutcome};

use super::{gallery, holds};

/// Wertet den Auswahl-Strahl aus und aktualisiert Hover und Fadenkreuz.
///
/// Ein Fehltreffer ist ein normales Ergebnis.
pub fn resolve_hover(
    state: &mut AppState,
    ray: Ray,
    max_distance: f32,
    mask: LayerMask,
) -> HoverTransition {
    let hit = state
        .scene
        .raycast(&ray, max_distance, mask)
        .map(|hit| hit.target);
    let transition = state.selector.resolve(hit, &mut state.scene);
    state.ui.crosshair_highlighted = state.selector.hovered().is_some();
    transition
}

/// Löst Select auf dem gehoverten Ziel aus und führt die Folgeaktion aus.
pub fn select_hovered(state: &mut AppState) -> SelectOutcome {
    let outcome = state.selector.select(&mut state.scene);
    match outcome {
        SelectOutcome::None => {}
        SelectOutcome::OpenGallery { anchor } => gallery::open(state, anchor),
        SelectOutcome::CloseGallery => gallery::close(state),
        SelectOutcome::ReplaceHold { hold, anchor } => {
            holds::delete_hold(state, hold);
            gallery::open(state, anchor);
        }
    }
    outcome
}
