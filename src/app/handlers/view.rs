//! Handler für Kamera und Physik-Takt.

use crate::app::use_cases;
use crate::app::AppState;

/// Führt die fälligen Physik-Schritte aus.
pub fn advance_physics(state: &mut AppState, dt: f32, move_axes: glam::Vec2) {
    let steps = use_cases::camera::advance_physics(state, dt, move_axes);
    if steps > 1 {
        log::trace!("{} Physik-Schritte in einem Frame", steps);
    }
}

/// Dreht die Kamera.
pub fn rotate_camera(state: &mut AppState, delta: glam::Vec2) {
    use_cases::camera::rotate(state, delta);
}

/// Schaltet den Optionen-Dialog um.
pub fn toggle_options_dialog(state: &mut AppState) {
    use_cases::session::toggle_options_dialog(state);
}

/// Schaltet das Kontrollpanel um.
pub fn toggle_control_panel(state: &mut AppState) {
    use_cases::session::toggle_control_panel(state);
}
