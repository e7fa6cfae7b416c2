//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::AppState;

/// Obergrenze der nachzuholenden Zeit pro Frame (s).
const MAX_ACCUMULATED_TIME: f32 = 0.25;

/// Dreht die Kamera um ein Maus-Delta (Screen-Pixel).
pub fn rotate(state: &mut AppState, delta: glam::Vec2) {
    state
        .view
        .camera
        .look(delta, state.options.look_sensitivity);
}

/// Führt alle fälligen festen Physik-Schritte aus.
///
/// Gibt die Anzahl ausgeführter Schritte zurück. Lange Frames werden auf
/// `MAX_ACCUMULATED_TIME` gekappt.
pub fn advance_physics(state: &mut AppState, dt: f32, move_axes: glam::Vec2) -> u32 {
    let fixed_dt = state.options.fixed_dt;
    if fixed_dt <= 0.0 {
        return 0;
    }

    let colliders = state.scene.colliders();
    let view = &mut state.view;
    view.physics_accumulator = (view.physics_accumulator + dt.max(0.0)).min(MAX_ACCUMULATED_TIME);

    let mut steps = 0;
    while view.physics_accumulator >= fixed_dt {
        view.camera.step_movement(
            move_axes,
            state.options.move_speed,
            state.options.collision_radius,
            fixed_dt,
            &colliders,
        );
        view.physics_accumulator -= fixed_dt;
        steps += 1;
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::EditorOptions;
    use approx::assert_relative_eq;
    use glam::Vec2;

    fn state() -> AppState {
        let mut options = EditorOptions::default();
        options.wall_grid.columns = 2;
        options.wall_grid.rows = 2;
        AppState::with_options(options)
    }

    #[test]
    fn accumulator_runs_fixed_steps() {
        let mut state = state();
        let start = state.view.camera.position;

        assert_eq!(advance_physics(&mut state, 0.01, Vec2::Y), 0);
        assert_eq!(advance_physics(&mut state, 0.065, Vec2::Y), 3);

        // 3 Schritte * 5 m/s * 0.02 s vorwärts (-Z)
        assert_relative_eq!(state.view.camera.position.z, start.z - 0.3, epsilon = 1e-4);
    }

    #[test]
    fn long_frames_are_capped() {
        let mut state = state();
        assert_eq!(advance_physics(&mut state, 10.0, Vec2::ZERO), 12);
    }

    #[test]
    fn rotate_uses_sensitivity() {
        let mut state = state();
        rotate(&mut state, Vec2::new(100.0, -50.0));
        assert_relative_eq!(state.view.camera.yaw_deg, 20.0);
        assert_relative_eq!(state.view.camera.pitch_deg, -10.0);
    }
}
