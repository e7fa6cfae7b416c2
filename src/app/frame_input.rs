//! Pro Frame abgetastete Eingabe, engine-unabhängig.

use crate::core::GridDirection;

/// Eingabe eines Frames. `*_pressed` = Flanke in diesem Frame, `*_down` = gehalten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Maus-Delta in Screen-Pixeln (y nach unten)
    pub look_delta: glam::Vec2,
    /// (rechts, vorwärts) in [-1, 1]
    pub move_axes: glam::Vec2,
    pub primary_pressed: bool,
    pub primary_down: bool,
    pub select_pressed: bool,
    pub cancel_pressed: bool,
    pub confirm_pressed: bool,
    pub delete_pressed: bool,
    pub menu_toggle_pressed: bool,
    /// Pfeiltasten in Druck-Reihenfolge
    pub navigation: Vec<GridDirection>,
}
