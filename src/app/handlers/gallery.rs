//! Handler für die Griff-Galerie.

use crate::app::use_cases;
use crate::app::use_cases::gallery::ConfirmOutcome;
use crate::app::AppState;
use crate::core::GridDirection;

/// Bewegt die Galerie-Auswahl.
pub fn navigate(state: &mut AppState, direction: GridDirection) {
    use_cases::gallery::navigate(state, direction);
}

/// Wählt einen Galerie-Eintrag.
pub fn select_entry(state: &mut AppState, index: usize) {
    if !use_cases::gallery::select_entry(state, index) {
        log::debug!("Galerie-Index {} außerhalb des Katalogs", index);
    }
}

/// Bestätigt die Auswahl; eine fehlende Vorlage landet in der Statuszeile.
pub fn confirm(state: &mut AppState) {
    match use_cases::gallery::confirm(state) {
        ConfirmOutcome::TemplateMissing { variant } => {
            state.ui.status_message = Some(format!("No template for hold '{variant}'"));
        }
        ConfirmOutcome::Spawned(_) => state.ui.status_message = None,
        ConfirmOutcome::NoSelection | ConfirmOutcome::NoAnchor => {}
    }
}

/// Schließt die Galerie.
pub fn close(state: &mut AppState) {
    use_cases::gallery::close(state);
}

/// Animiert die Scroll-Position.
pub fn advance_scroll(state: &mut AppState, dt: f32) {
    use_cases::gallery::advance_scroll(state, dt);
}
