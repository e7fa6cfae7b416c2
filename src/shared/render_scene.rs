//! Render-Szene als expliziter Übergabevertrag zwischen App und Viewport.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie zeichnet.

use crate::core::{Aabb, FirstPersonCamera, Rgba};
use glam::Vec3;

/// Raumteil mit Farbe
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPart {
    pub bounds: Aabb,
    pub color: Rgba,
}

/// Sichtbares Bohrloch
#[derive(Debug, Clone, PartialEq)]
pub struct RenderAnchor {
    pub position: Vec3,
    pub radius: f32,
    /// Farbe der eigenen Material-Instanz (Fallback: Optionen-Grundfarbe)
    pub color: Rgba,
}

/// Platzierter Griff
#[derive(Debug, Clone, PartialEq)]
pub struct RenderHold {
    pub position: Vec3,
    pub radii: Vec3,
    /// Euler-Rotation in Grad
    pub rotation_deg: Vec3,
    pub color: Rgba,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Kamera-Zustand für diesen Frame
    pub camera: FirstPersonCamera,
    /// Vertikales Sichtfeld in Grad
    pub fov_deg: f32,
    pub parts: Vec<RenderPart>,
    /// Nur unbesetzte Bohrlöcher
    pub anchors: Vec<RenderAnchor>,
    pub holds: Vec<RenderHold>,
    pub background_color: Rgba,
    pub fog_start: f32,
    pub fog_end: f32,
    /// Fadenkreuz liegt auf einem Ziel
    pub crosshair_highlighted: bool,
}

impl RenderScene {
    /// Linearer Nebel-Faktor (0 = klar, 1 = voll im Nebel).
    pub fn fog_factor(&self, distance: f32) -> f32 {
        if self.fog_end <= self.fog_start {
            return if distance >= self.fog_end { 1.0 } else { 0.0 };
        }
        ((distance - self.fog_start) / (self.fog_end - self.fog_start)).clamp(0.0, 1.0)
    }

    /// Mischt eine Farbe mit der Hintergrundfarbe nach Distanz.
    pub fn apply_fog(&self, color: Rgba, distance: f32) -> Rgba {
        let f = self.fog_factor(distance);
        let mut out = color;
        for (channel, background) in out.iter_mut().zip(self.background_color).take(3) {
            *channel += (background - *channel) * f;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn scene() -> RenderScene {
        RenderScene {
            camera: FirstPersonCamera::default(),
            fov_deg: 70.0,
            parts: Vec::new(),
            anchors: Vec::new(),
            holds: Vec::new(),
            background_color: [1.0, 1.0, 1.0, 1.0],
            fog_start: 10.0,
            fog_end: 20.0,
            crosshair_highlighted: false,
        }
    }

    #[test]
    fn fog_is_linear_between_start_and_end() {
        let s = scene();
        assert_relative_eq!(s.fog_factor(5.0), 0.0);
        assert_relative_eq!(s.fog_factor(15.0), 0.5);
        assert_relative_eq!(s.fog_factor(30.0), 1.0);
    }

    #[test]
    fn fog_blends_rgb_but_keeps_alpha() {
        let s = scene();
        let c = s.apply_fog([0.0, 0.0, 0.0, 0.5], 15.0);
        assert_relative_eq!(c[0], 0.5);
        assert_relative_eq!(c[3], 0.5);
    }
}
