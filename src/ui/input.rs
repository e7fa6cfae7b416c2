//! Tastatur- und Maus-Eingabe → `FrameInput`.

use super::keyboard;
use crate::app::FrameInput;
use crate::shared::KeyBindings;

/// Sammelt die Eingabe eines Frames.
///
/// Maus-Look und Primärtaste zählen nur bei gefangenem Zeiger; bei freiem
/// Zeiger gehören Klicks der UI (Galerie, Kontrollpanel).
pub fn collect_frame_input(
    ctx: &egui::Context,
    bindings: &KeyBindings,
    pointer_locked: bool,
) -> FrameInput {
    ctx.input(|i| {
        let keys = keyboard::collect_key_state(i, bindings);

        let look_delta = if pointer_locked {
            mouse_motion(i)
        } else {
            glam::Vec2::ZERO
        };
        let (primary_pressed, primary_down) = if pointer_locked {
            (
                i.pointer.button_pressed(egui::PointerButton::Primary),
                i.pointer.button_down(egui::PointerButton::Primary),
            )
        } else {
            (false, false)
        };

        FrameInput {
            look_delta,
            move_axes: keys.move_axes,
            primary_pressed,
            primary_down,
            select_pressed: keys.select_pressed,
            cancel_pressed: keys.cancel_pressed,
            confirm_pressed: keys.confirm_pressed,
            delete_pressed: keys.delete_pressed,
            menu_toggle_pressed: keys.menu_toggle_pressed,
            navigation: keys.navigation,
        }
    })
}

/// Rohe Mausbewegung; bei gefangenem Zeiger liefert die Plattform nur diese.
fn mouse_motion(input: &egui::InputState) -> glam::Vec2 {
    let raw: egui::Vec2 = input
        .events
        .iter()
        .filter_map(|event| match event {
            egui::Event::MouseMoved(delta) => Some(*delta),
            _ => None,
        })
        .fold(egui::Vec2::ZERO, |sum, delta| sum + delta);

    let delta = if raw == egui::Vec2::ZERO {
        input.pointer.delta()
    } else {
        raw
    };
    glam::Vec2::new(delta.x, delta.y)
}
