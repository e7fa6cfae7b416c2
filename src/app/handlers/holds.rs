//! Handler für platzierte Griffe.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::HoldId;

/// Löscht einen Griff.
pub fn delete(state: &mut AppState, hold: HoldId) {
    if use_cases::holds::delete_hold(state, hold).is_none() {
        log::debug!("Griff {:?} existiert nicht (mehr)", hold);
    }
}

/// Aktualisiert alle Dreh-Drags.
pub fn update_drags(
    state: &mut AppState,
    pitch_deg: f32,
    primary_pressed: bool,
    primary_down: bool,
    dt: f32,
) {
    use_cases::holds::update_drags(state, pitch_deg, primary_pressed, primary_down, dt);
}
