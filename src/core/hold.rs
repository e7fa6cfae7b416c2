//! Platzierter Griff: Hover-Hervorhebung, Ersetzen per Select und Dreh-Drag.

use super::hold_template::HoldTemplate;
use super::material::{MaterialHandle, MaterialStore, Rgba};
use super::selectable::{AnchorId, HoldId, Selectable, SelectOutcome, TargetState};
use glam::Vec3;

/// Parameter des Dreh-Drags
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationSettings {
    /// Grad Griff-Drehung pro Grad Kamera-Neigung
    pub multiplier: f32,
    /// Glättungsgeschwindigkeit (1/s)
    pub smooth_speed: f32,
}

/// Laufender Dreh-Drag
#[derive(Debug, Clone, Copy, PartialEq)]
struct RotationDrag {
    last_pitch_deg: f32,
    target_deg: Vec3,
}

/// Bringt eine Winkeldifferenz in den Bereich (-180, 180].
pub fn wrap_degrees(delta: f32) -> f32 {
    let wrapped = delta.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Platzierter Griff auf einem Bohrloch
#[derive(Debug, Clone)]
pub struct SelectableHold {
    id: HoldId,
    variant: String,
    anchor: AnchorId,
    position: Vec3,
    rotation_deg: Vec3,
    radii: Vec3,
    collider_radius: f32,
    material: Option<MaterialHandle>,
    default_color: Rgba,
    highlight_color: Rgba,
    hovered: bool,
    enabled: bool,
    drag: Option<RotationDrag>,
}

impl SelectableHold {
    /// Erstellt einen Griff aus einer Vorlage; `init` klont das Material.
    pub fn new(
        id: HoldId,
        template: &HoldTemplate,
        anchor: AnchorId,
        position: Vec3,
        rotation_deg: Vec3,
        highlight_color: Rgba,
    ) -> Self {
        Self {
            id,
            variant: template.name.clone(),
            anchor,
            position,
            rotation_deg,
            radii: Vec3::from_array(template.radii),
            collider_radius: template.collider_radius(),
            material: None,
            default_color: template.color,
            highlight_color,
            hovered: false,
            enabled: true,
            drag: None,
        }
    }

    /// Klont das Quell-Material der Variante.
    pub fn init(&mut self, materials: &mut MaterialStore, source: &str) {
        if self.material.is_some() {
            return;
        }
        match materials.source_color(source) {
            Some(color) => {
                self.default_color = color;
                self.material = materials.instantiate(source);
            }
            None => log::warn!(
                "Griff {}: Quell-Material '{}' fehlt, Hervorhebung deaktiviert",
                self.variant,
                source
            ),
        }
    }

    /// Beendet einen laufenden Drag und gibt die Material-Instanz frei.
    pub fn dispose(&mut self, materials: &mut MaterialStore) {
        self.drag = None;
        if let Some(handle) = self.material.take() {
            materials.release(handle);
        }
    }

    pub fn id(&self) -> HoldId {
        self.id
    }

    /// Varianten-Name (Katalog-Eintrag)
    pub fn variant(&self) -> &str {
        &self.variant
    }

    /// Bohrloch, auf dem der Griff sitzt
    pub fn anchor(&self) -> AnchorId {
        self.anchor
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Euler-Rotation in Grad
    pub fn rotation_deg(&self) -> Vec3 {
        self.rotation_deg
    }

    pub fn radii(&self) -> Vec3 {
        self.radii
    }

    pub fn collider_radius(&self) -> f32 {
        self.collider_radius
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_rotating(&self) -> bool {
        self.drag.is_some()
    }

    pub fn state(&self) -> TargetState {
        if self.hovered {
            TargetState::Hovered
        } else {
            TargetState::Idle
        }
    }

    /// Aktuell gerenderte Farbe (None ohne Material).
    pub fn current_color(&self, materials: &MaterialStore) -> Option<Rgba> {
        self.material.and_then(|handle| materials.color(handle))
    }

    /// Aktiviert/deaktiviert den Griff. Deaktivieren bricht einen Drag sofort ab.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.stop_rotation();
        }
    }

    /// Startet einen Dreh-Drag mit der aktuellen Kamera-Neigung als Bezug.
    pub fn start_rotation(&mut self, camera_pitch_deg: f32) {
        if !self.enabled {
            return;
        }
        self.drag = Some(RotationDrag {
            last_pitch_deg: camera_pitch_deg,
            target_deg: self.rotation_deg,
        });
    }

    pub fn stop_rotation(&mut self) {
        self.drag = None;
    }

    /// Ein Frame des Dreh-Drags.
    ///
    /// Ohne gedrückte Primär-Taste endet der Drag im selben Aufruf. Sonst wächst
    /// die Ziel-Rotation um das Neigungs-Delta und die Rotation nähert sich ihr an.
    pub fn update_rotation(
        &mut self,
        camera_pitch_deg: f32,
        primary_down: bool,
        settings: RotationSettings,
        dt: f32,
    ) {
        if !primary_down || !self.enabled {
            self.stop_rotation();
            return;
        }
        let Some(drag) = self.drag.as_mut() else {
            return;
        };

        let delta = wrap_degrees(camera_pitch_deg - drag.last_pitch_deg);
        if delta.abs() > 0.001 {
            drag.target_deg.z += delta * settings.multiplier;
        }
        drag.last_pitch_deg = camera_pitch_deg;

        let t = (settings.smooth_speed * dt).clamp(0.0, 1.0);
        self.rotation_deg = self.rotation_deg.lerp(drag.target_deg, t);
    }

    fn apply_color(&self, materials: &mut MaterialStore, color: Rgba) {
        if let Some(handle) = self.material {
            materials.set_color(handle, color);
        }
    }
}

impl Selectable for SelectableHold {
    fn on_hover_enter(&mut self, materials: &mut MaterialStore) {
        self.hovered = true;
        self.apply_color(materials, self.highlight_color);
    }

    fn on_hover_exit(&mut self, materials: &mut MaterialStore) {
        self.hovered = false;
        self.apply_color(materials, self.default_color);
    }

    fn on_select(&mut self, _materials: &mut MaterialStore) -> SelectOutcome {
        SelectOutcome::ReplaceHold {
            hold: self.id,
            anchor: self.anchor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SETTINGS: RotationSettings = RotationSettings {
        multiplier: 8.0,
        smooth_speed: 10.0,
    };

    fn template() -> HoldTemplate {
        HoldTemplate {
            name: "jug".to_string(),
            radii: [0.2, 0.1, 0.08],
            color: [0.9, 0.3, 0.1, 1.0],
            collider_radius: None,
        }
    }

    fn hold() -> SelectableHold {
        SelectableHold::new(
            HoldId(1),
            &template(),
            AnchorId(7),
            Vec3::ZERO,
            Vec3::ZERO,
            [1.0, 0.8, 0.0, 1.0],
        )
    }

    #[test]
    fn wrap_degrees_handles_crossing() {
        assert_relative_eq!(wrap_degrees(350.0), -10.0);
        assert_relative_eq!(wrap_degrees(-350.0), 10.0);
        assert_relative_eq!(wrap_degrees(180.0), 180.0);
        assert_relative_eq!(wrap_degrees(5.0), 5.0);
    }

    #[test]
    fn drag_rotates_toward_target_smoothly() {
        let mut h = hold();
        h.start_rotation(0.0);
        h.update_rotation(2.0, true, SETTINGS, 0.05);

        // Ziel 16°, halber Weg bei smooth_speed * dt = 0.5
        assert_relative_eq!(h.rotation_deg().z, 8.0, epsilon = 1e-4);
        assert!(h.is_rotating());

        h.update_rotation(2.0, true, SETTINGS, 0.05);
        assert_relative_eq!(h.rotation_deg().z, 12.0, epsilon = 1e-4);
    }

    #[test]
    fn releasing_primary_stops_drag_same_frame() {
        let mut h = hold();
        h.start_rotation(0.0);
        h.update_rotation(10.0, false, SETTINGS, 0.05);
        assert!(!h.is_rotating());
        assert_relative_eq!(h.rotation_deg().z, 0.0);
    }

    #[test]
    fn disabling_cancels_drag() {
        let mut h = hold();
        h.start_rotation(0.0);
        h.set_enabled(false);
        assert!(!h.is_rotating());

        h.start_rotation(0.0);
        assert!(!h.is_rotating());
    }

    #[test]
    fn pitch_wrap_does_not_spin() {
        let mut h = hold();
        h.start_rotation(359.0);
        h.update_rotation(1.0, true, SETTINGS, 1.0);
        // Delta +2°, nicht -358°
        assert_relative_eq!(h.rotation_deg().z, 16.0, epsilon = 1e-4);
    }

    #[test]
    fn select_requests_replacement() {
        let mut materials = MaterialStore::new();
        let mut h = hold();
        assert_eq!(
            h.on_select(&mut materials),
            SelectOutcome::ReplaceHold {
                hold: HoldId(1),
                anchor: AnchorId(7)
            }
        );
    }

    #[test]
    fn hover_uses_private_instance() {
        let mut materials = MaterialStore::new();
        materials.register_source("hold/jug", [0.9, 0.3, 0.1, 1.0]);
        let mut a = hold();
        let mut b = hold();
        a.init(&mut materials, "hold/jug");
        b.init(&mut materials, "hold/jug");

        a.on_hover_enter(&mut materials);
        assert_eq!(a.current_color(&materials), Some([1.0, 0.8, 0.0, 1.0]));
        assert_eq!(b.current_color(&materials), Some([0.9, 0.3, 0.1, 1.0]));

        a.on_hover_exit(&mut materials);
        assert_eq!(a.current_color(&materials), Some([0.9, 0.3, 0.1, 1.0]));
    }
}
