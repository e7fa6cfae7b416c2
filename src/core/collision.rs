//! Strahl- und Kollisionsgeometrie: Ray, AABB, Kugel und Sphere-Cast.

use glam::Vec3;

/// Toleranz, ab der ein Ursprung als "in der Box" gilt.
const CONTACT_TOLERANCE: f32 = 1e-4;

/// Strahl mit Ursprung und normierter Richtung
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Startpunkt in Welt-Koordinaten
    pub origin: Vec3,
    /// Normierte Richtung
    pub direction: Vec3,
}

impl Ray {
    /// Erstellt einen Strahl; die Richtung wird normiert.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Punkt im Abstand `t` entlang des Strahls.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Treffer eines Strahls oder Sphere-Casts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Abstand vom Strahl-Ursprung
    pub distance: f32,
    /// Kontaktpunkt auf der getroffenen Geometrie
    pub point: Vec3,
    /// Flächennormale am Kontaktpunkt
    pub normal: Vec3,
}

/// Achsenparallele Box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimale Ecke
    pub min: Vec3,
    /// Maximale Ecke
    pub max: Vec3,
}

impl Aabb {
    /// Erstellt eine Box aus Mittelpunkt und Gesamtgröße.
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size.abs() * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Mittelpunkt der Box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Gesamtgröße der Box.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Box um `margin` in alle Richtungen vergrößert (Minkowski-Summe mit einem Würfel).
    pub fn expanded(&self, margin: f32) -> Self {
        Self {
            min: self.min - Vec3::splat(margin),
            max: self.max + Vec3::splat(margin),
        }
    }

    /// Prüft, ob ein Punkt in der Box liegt (Ränder inklusive).
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Die acht Eckpunkte der Box.
    pub fn corners(&self) -> [Vec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            Vec3::new(a.x, a.y, a.z),
            Vec3::new(b.x, a.y, a.z),
            Vec3::new(b.x, b.y, a.z),
            Vec3::new(a.x, b.y, a.z),
            Vec3::new(a.x, a.y, b.z),
            Vec3::new(b.x, a.y, b.z),
            Vec3::new(b.x, b.y, b.z),
            Vec3::new(a.x, b.y, b.z),
        ]
    }

    /// Slab-Test gegen einen Strahl.
    ///
    /// Liegt der Ursprung deutlich in der Box, gibt es keinen Treffer,
    /// damit ein eingeklemmter Körper sich wieder herausbewegen kann.
    pub fn intersect_ray(&self, ray: &Ray, max_distance: f32) -> Option<RayHit> {
        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;
        let mut normal = Vec3::ZERO;

        for axis in 0..3 {
            let origin = ray.origin[axis];
            let dir = ray.direction[axis];
            let (lo, hi) = (self.min[axis], self.max[axis]);

            if dir.abs() < f32::EPSILON {
                if origin < lo || origin > hi {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / dir;
            let mut t1 = (lo - origin) * inv;
            let mut t2 = (hi - origin) * inv;
            let mut sign = -1.0;
            if t1 > t2 {
                std::mem::swap(&mut t1, &mut t2);
                sign = 1.0;
            }

            if t1 > t_near {
                t_near = t1;
                normal = Vec3::ZERO;
                normal[axis] = sign;
            }
            t_far = t_far.min(t2);
            if t_near > t_far {
                return None;
            }
        }

        // Kontakt auf dem Rand (Float-Rauschen nach einem Sphere-Cast) zählt als Treffer bei 0
        if t_near < -CONTACT_TOLERANCE || t_near > max_distance {
            return None;
        }
        let t_near = t_near.max(0.0);

        Some(RayHit {
            distance: t_near,
            point: ray.at(t_near),
            normal,
        })
    }
}

/// Schnitt eines Strahls mit einer Kugel (nächster Eintrittspunkt vor dem Ursprung).
pub fn intersect_sphere(ray: &Ray, center: Vec3, radius: f32, max_distance: f32) -> Option<RayHit> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.direction);
    let c = oc.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_d = discriminant.sqrt();
    let mut t = -b - sqrt_d;
    if t < 0.0 {
        // Ursprung liegt in der Kugel: Austrittspunkt zählt als Treffer
        t = -b + sqrt_d;
    }
    if t < 0.0 || t > max_distance {
        return None;
    }

    let point = ray.at(t);
    Some(RayHit {
        distance: t,
        point,
        normal: (point - center).normalize_or_zero(),
    })
}

/// Bewegt eine Kugel entlang `direction` und liefert den ersten Kontakt mit einer Box.
///
/// `point` im Ergebnis liegt auf der Box-Oberfläche; `point + normal * radius`
/// ist die Kugelmitte im Kontaktmoment.
pub fn sphere_cast(
    origin: Vec3,
    radius: f32,
    direction: Vec3,
    distance: f32,
    colliders: &[Aabb],
) -> Option<RayHit> {
    let ray = Ray::new(origin, direction);
    if ray.direction == Vec3::ZERO {
        return None;
    }

    colliders
        .iter()
        .filter_map(|collider| collider.expanded(radius).intersect_ray(&ray, distance))
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
        .map(|hit| RayHit {
            distance: hit.distance,
            point: hit.point - hit.normal * radius,
            normal: hit.normal,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ray_hits_box_front_face_with_outward_normal() {
        let aabb = Aabb::from_center_size(Vec3::new(0.0, 0.0, -5.0), Vec3::splat(2.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let hit = aabb.intersect_ray(&ray, 100.0).expect("Treffer erwartet");
        assert_relative_eq!(hit.distance, 4.0);
        assert_relative_eq!(hit.normal.z, 1.0);
        assert_relative_eq!(hit.point.z, -4.0);
    }

    #[test]
    fn ray_respects_max_distance() {
        let aabb = Aabb::from_center_size(Vec3::new(0.0, 0.0, -5.0), Vec3::splat(2.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(aabb.intersect_ray(&ray, 3.0).is_none());
    }

    #[test]
    fn ray_starting_inside_box_does_not_hit() {
        let aabb = Aabb::from_center_size(Vec3::ZERO, Vec3::splat(2.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert!(aabb.intersect_ray(&ray, 10.0).is_none());
    }

    #[test]
    fn parallel_ray_outside_slab_misses() {
        let aabb = Aabb::from_center_size(Vec3::ZERO, Vec3::splat(2.0));
        let ray = Ray::new(Vec3::new(0.0, 5.0, 5.0), Vec3::NEG_Z);
        assert!(aabb.intersect_ray(&ray, 100.0).is_none());
    }

    #[test]
    fn sphere_hit_returns_nearest_surface_point() {
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let hit = intersect_sphere(&ray, Vec3::new(0.0, 0.0, -10.0), 1.0, 100.0)
            .expect("Treffer erwartet");
        assert_relative_eq!(hit.distance, 9.0);
        assert_relative_eq!(hit.normal.z, 1.0);
    }

    #[test]
    fn sphere_offset_ray_misses() {
        let ray = Ray::new(Vec3::new(2.0, 0.0, 0.0), Vec3::NEG_Z);
        assert!(intersect_sphere(&ray, Vec3::new(0.0, 0.0, -10.0), 1.0, 100.0).is_none());
    }

    #[test]
    fn sphere_cast_stops_radius_before_wall() {
        let wall = Aabb::from_center_size(Vec3::new(0.0, 0.0, -5.0), Vec3::new(10.0, 10.0, 0.1));
        let hit = sphere_cast(Vec3::ZERO, 0.5, Vec3::NEG_Z, 10.0, &[wall]).expect("Kontakt");

        let stop = hit.point + hit.normal * 0.5;
        assert_relative_eq!(hit.point.z, -4.95, epsilon = 1e-5);
        assert_relative_eq!(stop.z, -4.45, epsilon = 1e-5);
    }

    #[test]
    fn sphere_cast_without_direction_is_none() {
        let wall = Aabb::from_center_size(Vec3::ZERO, Vec3::ONE);
        assert!(sphere_cast(Vec3::new(0.0, 0.0, 5.0), 0.5, Vec3::ZERO, 10.0, &[wall]).is_none());
    }
}
