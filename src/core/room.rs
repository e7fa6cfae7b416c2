//! Raum-Generator: Boden, Decke, Kletterwand und Seitenwände als Boxen.

use super::collision::Aabb;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Stärke von Boden, Decke und Wänden in Welteinheiten.
pub const ROOM_SHELL_THICKNESS: f32 = 0.1;

/// Raumabmessungen in Welteinheiten
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomDimensions {
    /// Breite (X)
    pub width: f32,
    /// Höhe (Y)
    pub height: f32,
    /// Tiefe (Z)
    pub depth: f32,
}

/// Art eines Raumteils
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomPartKind {
    /// Boden bei y = 0
    Floor,
    /// Decke bei y = Höhe
    Ceiling,
    /// Rückwand bei z = -Tiefe/2 (Kletterwand)
    BackWall,
    /// Linke Wand bei x = -Breite/2
    LeftWall,
    /// Rechte Wand bei x = +Breite/2
    RightWall,
}

impl RoomPartKind {
    /// Name des Quell-Materials für dieses Raumteil.
    pub fn material_name(self) -> &'static str {
        match self {
            RoomPartKind::Floor => "floor",
            RoomPartKind::Ceiling => "ceiling",
            RoomPartKind::BackWall | RoomPartKind::LeftWall | RoomPartKind::RightWall => "wall",
        }
    }
}

/// Ein Raumteil mit Ausdehnung
#[derive(Debug, Clone, PartialEq)]
pub struct RoomPart {
    pub kind: RoomPartKind,
    pub bounds: Aabb,
}

/// Generierter Raum
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoomLayout {
    parts: Vec<RoomPart>,
}

impl RoomLayout {
    /// Baut Boden, Decke, Rückwand und zwei Seitenwände.
    pub fn generate(dims: RoomDimensions) -> Self {
        let RoomDimensions {
            width,
            height,
            depth,
        } = dims;
        let t = ROOM_SHELL_THICKNESS;

        let part = |kind, center: Vec3, size: Vec3| RoomPart {
            kind,
            bounds: Aabb::from_center_size(center, size),
        };

        Self {
            parts: vec![
                part(RoomPartKind::Floor, Vec3::ZERO, Vec3::new(width, t, depth)),
                part(
                    RoomPartKind::Ceiling,
                    Vec3::new(0.0, height, 0.0),
                    Vec3::new(width, t, depth),
                ),
                part(
                    RoomPartKind::BackWall,
                    Vec3::new(0.0, height / 2.0, -depth / 2.0),
                    Vec3::new(width, height, t),
                ),
                part(
                    RoomPartKind::LeftWall,
                    Vec3::new(-width / 2.0, height / 2.0, 0.0),
                    Vec3::new(t, height, depth),
                ),
                part(
                    RoomPartKind::RightWall,
                    Vec3::new(width / 2.0, height / 2.0, 0.0),
                    Vec3::new(t, height, depth),
                ),
            ],
        }
    }

    /// Alle Raumteile.
    pub fn parts(&self) -> &[RoomPart] {
        &self.parts
    }

    /// Kollisionsboxen für die Kamera.
    pub fn colliders(&self) -> Vec<Aabb> {
        self.parts.iter().map(|part| part.bounds).collect()
    }

    /// Die Kletterwand (Rückwand), falls vorhanden.
    pub fn climbing_wall(&self) -> Option<&RoomPart> {
        self.parts
            .iter()
            .find(|part| part.kind == RoomPartKind::BackWall)
    }
}
