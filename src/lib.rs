//! Climbing Gym Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppEffect, AppIntent, AppState, FrameInput, UiState, ViewState,
};
pub use core::{
    AnchorId, BoltHole, Catalog, CatalogEntry, FirstPersonCamera, GridCoord, GridDirection,
    HoldId, HoldTemplate, HoldTemplateLibrary, RoomLayout, Scene, SelectableHold, TargetId,
};
pub use shared::{EditorOptions, RenderScene};
