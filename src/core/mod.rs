//! Core-Domänentypen: Kamera, Kollision, Raum, Wand, Ziele, Szene, Katalog.

pub mod bolt_hole;
pub mod camera;
pub mod catalog;
pub mod collision;
pub mod hold;
pub mod hold_template;
pub mod material;
pub mod preview;
pub mod room;
/// Szenen-Container für Bohrlöcher, Griffe und Materialien
///
/// Die Szene besitzt alle Ziele und ist der einzige Weg,
/// Hover-/Select-Aufrufe an ein Ziel zu dispatchen.
pub mod scene;
pub mod selectable;
pub mod wall;

pub use bolt_hole::BoltHole;
pub use camera::FirstPersonCamera;
pub use catalog::{
    grid_coord_for_index, Catalog, CatalogEntry, GridCoord, GridDirection, PreviewImage,
};
pub use collision::{Aabb, Ray, RayHit};
pub use hold::wrap_degrees;
pub use hold::{RotationSettings, SelectableHold};
pub use hold_template::{HoldTemplate, HoldTemplateLibrary};
pub use material::{MaterialHandle, MaterialStore, Rgba};
pub use preview::{generate_previews, render_preview, PreviewReport, PREVIEW_SIZE};
pub use room::{RoomDimensions, RoomLayout, RoomPart, RoomPartKind};
pub use scene::{Scene, SceneHit, SpawnResult, BOLT_HOLE_MATERIAL};
pub use selectable::{
    AnchorId, HoldId, LayerMask, Selectable, SelectOutcome, TargetColors, TargetId, TargetState,
};
pub use wall::{generate_bolt_holes, BoltHoleSpec, WallGridSettings};
