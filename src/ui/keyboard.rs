//! Tastenbelegung für Bewegung, Auswahl und Galerie.
//!
//! Tastennamen kommen aus den Optionen und werden über `egui::Key::from_name` aufgelöst.

use crate::core::GridDirection;
use crate::shared::KeyBindings;

/// Abgetasteter Tastenzustand eines Frames.
#[derive(Debug, Clone, Default, PartialEq)]
pub(super) struct KeyState {
    /// (rechts, vorwärts) in [-1, 1]
    pub move_axes: glam::Vec2,
    pub select_pressed: bool,
    pub cancel_pressed: bool,
    pub confirm_pressed: bool,
    pub delete_pressed: bool,
    pub menu_toggle_pressed: bool,
    pub navigation: Vec<GridDirection>,
}

/// Löst einen Tastennamen auf; unbekannte Namen ergeben `None` und werden ignoriert.
pub(super) fn resolve_key(name: &str) -> Option<egui::Key> {
    egui::Key::from_name(name)
}

/// Alle Tastennamen der Belegung, die egui nicht kennt.
pub fn unknown_key_names(bindings: &KeyBindings) -> Vec<String> {
    [
        &bindings.forward,
        &bindings.backward,
        &bindings.left,
        &bindings.right,
        &bindings.select,
        &bindings.cancel,
        &bindings.confirm,
        &bindings.menu_toggle,
        &bindings.navigate_up,
        &bindings.navigate_down,
        &bindings.navigate_left,
        &bindings.navigate_right,
    ]
    .into_iter()
    .chain(bindings.delete.iter())
    .filter(|name| resolve_key(name).is_none())
    .cloned()
    .collect()
}

/// Liest Tastenzustand und Tasten-Flanken gemäß Belegung.
pub(super) fn collect_key_state(input: &egui::InputState, bindings: &KeyBindings) -> KeyState {
    let down = |name: &str| resolve_key(name).is_some_and(|key| input.key_down(key));
    let pressed = |name: &str| resolve_key(name).is_some_and(|key| input.key_pressed(key));

    let axis = |positive: bool, negative: bool| match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    };
    let move_axes = glam::Vec2::new(
        axis(down(&bindings.right), down(&bindings.left)),
        axis(down(&bindings.forward), down(&bindings.backward)),
    );

    // Pfeiltasten in Ereignis-Reihenfolge, damit schnelle Folgen nicht verloren gehen
    let directions = [
        (&bindings.navigate_up, GridDirection::Up),
        (&bindings.navigate_down, GridDirection::Down),
        (&bindings.navigate_left, GridDirection::Left),
        (&bindings.navigate_right, GridDirection::Right),
    ]
    .map(|(name, direction)| (resolve_key(name), direction));

    let navigation = input
        .events
        .iter()
        .filter_map(|event| match event {
            egui::Event::Key {
                key, pressed: true, ..
            } => directions
                .iter()
                .find(|(bound, _)| *bound == Some(*key))
                .map(|&(_, direction)| direction),
            _ => None,
        })
        .collect();

    KeyState {
        move_axes,
        select_pressed: pressed(&bindings.select),
        cancel_pressed: pressed(&bindings.cancel),
        confirm_pressed: pressed(&bindings.confirm),
        delete_pressed: bindings.delete.iter().any(|name| pressed(name)),
        menu_toggle_pressed: pressed(&bindings.menu_toggle),
        navigation,
    }
}
