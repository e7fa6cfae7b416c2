//! UI-Komponenten: Viewport, Galerie, HUD, Optionen und Input-Handling.

pub mod gallery;
pub mod hud;
pub mod input;
/// Tastenbelegung
///
/// Tastennamen aus den Optionen werden pro Frame aufgelöst und als
/// Achsen, Tasten-Flanken und Galerie-Navigation zurückgegeben.
pub mod keyboard;
pub mod options_dialog;
pub mod status;
pub mod viewport;

pub use gallery::show_gallery;
pub use hud::{paint_crosshair, show_control_panel};
pub use input::collect_frame_input;
pub use keyboard::unknown_key_names;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
pub use viewport::paint_scene;
