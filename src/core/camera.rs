//! First-Person-Kamera mit Maus-Look und Kugel-Kollision.

use super::collision::{sphere_cast, Aabb, Ray};
use glam::{Vec2, Vec3};

/// Freie First-Person-Kamera (ohne Schwerkraft)
///
/// Yaw 0 / Pitch 0 blickt entlang -Z. Positiver Yaw dreht nach rechts,
/// positiver Pitch blickt nach unten.
#[derive(Debug, Clone, PartialEq)]
pub struct FirstPersonCamera {
    /// Position in Welt-Koordinaten
    pub position: Vec3,
    /// Drehung um die Hochachse in Grad
    pub yaw_deg: f32,
    /// Neigung in Grad, begrenzt auf [-90, 90]
    pub pitch_deg: f32,
}

impl FirstPersonCamera {
    /// Maximale Neigung nach oben/unten in Grad.
    pub const PITCH_LIMIT_DEG: f32 = 90.0;

    /// Erstellt eine Kamera an einer Position mit Blick entlang -Z.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            yaw_deg: 0.0,
            pitch_deg: 0.0,
        }
    }

    /// Blickrichtung (normiert, inklusive Neigung).
    pub fn forward(&self) -> Vec3 {
        let (yaw, pitch) = (self.yaw_deg.to_radians(), self.pitch_deg.to_radians());
        Vec3::new(
            yaw.sin() * pitch.cos(),
            -pitch.sin(),
            -yaw.cos() * pitch.cos(),
        )
        .normalize_or_zero()
    }

    /// Rechts-Vektor (horizontal).
    pub fn right(&self) -> Vec3 {
        let yaw = self.yaw_deg.to_radians();
        Vec3::new(yaw.cos(), 0.0, yaw.sin())
    }

    /// Oben-Vektor relativ zur Blickrichtung.
    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward()).normalize_or_zero()
    }

    /// Strahl aus der Bildschirmmitte entlang der Blickrichtung.
    pub fn center_ray(&self) -> Ray {
        Ray::new(self.position, self.forward())
    }

    /// Wendet ein Maus-Delta (Screen-Pixel, y nach unten) an.
    pub fn look(&mut self, delta: Vec2, sensitivity: f32) {
        self.yaw_deg = (self.yaw_deg + delta.x * sensitivity).rem_euclid(360.0);
        self.pitch_deg = (self.pitch_deg + delta.y * sensitivity)
            .clamp(-Self::PITCH_LIMIT_DEG, Self::PITCH_LIMIT_DEG);
    }

    /// Ein fester Physik-Schritt: Bewegung entlang rechts/vorwärts mit Kugel-Kollision.
    ///
    /// `axes.x` = horizontal (rechts positiv), `axes.y` = vertikal (vorwärts positiv).
    /// Bei Kontakt bleibt die Kamera am Kontaktpunkt stehen (kein Gleiten).
    pub fn step_movement(
        &mut self,
        axes: Vec2,
        move_speed: f32,
        collision_radius: f32,
        fixed_dt: f32,
        colliders: &[Aabb],
    ) {
        let mut movement = self.right() * axes.x + self.forward() * axes.y;
        if movement.length() > 1.0 {
            movement = movement.normalize();
        }

        let distance = movement.length() * move_speed * fixed_dt;
        if distance <= f32::EPSILON {
            return;
        }
        let direction = movement.normalize();

        match sphere_cast(self.position, collision_radius, direction, distance, colliders) {
            Some(hit) => self.position = hit.point + hit.normal * collision_radius,
            None => self.position += direction * distance,
        }
    }
}

impl Default for FirstPersonCamera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_camera_looks_along_negative_z() {
        let camera = FirstPersonCamera::default();
        let forward = camera.forward();
        assert_relative_eq!(forward.z, -1.0);
        assert_relative_eq!(camera.right().x, 1.0);
        assert_relative_eq!(camera.up().y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut camera = FirstPersonCamera::default();
        camera.look(Vec2::new(0.0, 10_000.0), 0.2);
        assert_relative_eq!(camera.pitch_deg, 90.0);
        camera.look(Vec2::new(0.0, -20_000.0), 0.2);
        assert_relative_eq!(camera.pitch_deg, -90.0);
    }

    #[test]
    fn positive_yaw_turns_right() {
        let mut camera = FirstPersonCamera::default();
        camera.look(Vec2::new(450.0, 0.0), 0.2);
        assert_relative_eq!(camera.yaw_deg, 90.0);
        assert_relative_eq!(camera.forward().x, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn diagonal_movement_is_normalized() {
        let mut camera = FirstPersonCamera::default();
        camera.step_movement(Vec2::new(1.0, 1.0), 5.0, 0.5, 0.1, &[]);
        assert_relative_eq!(camera.position.length(), 0.5, epsilon = 1e-5);
    }

    #[test]
    fn movement_stops_at_wall() {
        let wall = Aabb::from_center_size(Vec3::new(0.0, 0.0, -1.0), Vec3::new(10.0, 10.0, 0.1));
        let mut camera = FirstPersonCamera::default();
        for _ in 0..100 {
            camera.step_movement(Vec2::new(0.0, 1.0), 5.0, 0.5, 0.02, &[wall]);
        }
        // Wandfläche bei z = -0.95, Kugelradius 0.5
        assert_relative_eq!(camera.position.z, -0.45, epsilon = 1e-4);
    }

    #[test]
    fn zero_axes_do_not_move() {
        let mut camera = FirstPersonCamera::new(Vec3::new(1.0, 2.0, 3.0));
        camera.step_movement(Vec2::ZERO, 5.0, 0.5, 0.02, &[]);
        assert_eq!(camera.position, Vec3::new(1.0, 2.0, 3.0));
    }
}
