//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod gallery;
pub mod holds;
pub mod previews;
pub mod selection;
pub mod session;
pub mod wall;
