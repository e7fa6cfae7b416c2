//! Handler für Hover und Auswahl.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{LayerMask, Ray};

/// Bestimmt das Hover-Ziel für diesen Frame.
pub fn resolve_hover(state: &mut AppState, ray: Ray, max_distance: f32, mask: LayerMask) {
    use_cases::selection::resolve_hover(state, ray, max_distance, mask);
}

/// Select auf dem gehoverten Ziel.
pub fn select_hovered(state: &mut AppState) {
    let outcome = use_cases::selection::select_hovered(state);
    log::debug!("Select: {:?}", outcome);
}
