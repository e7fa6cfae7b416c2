//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod frame_input;
pub mod frame_mapping;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Szene, Kamera, Galerie, HUD).
pub mod state;
pub mod use_cases;

pub use crate::core::FirstPersonCamera;
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppEffect, AppIntent};
pub use frame_input::FrameInput;
pub use render_scene::build as build_render_scene;
pub use state::{
    AppState, GalleryLayout, GalleryState, HoverTransition, PointerSelector, UiState, ViewState,
};
