//! Perspektivischer Software-Viewport auf Basis des egui-Painters.
//!
//! Zeichnet Raumteile, Bohrlöcher und Griffe von hinten nach vorne
//! (Maler-Algorithmus) mit linearem Nebel.

use crate::core::{FirstPersonCamera, Rgba};
use crate::shared::RenderScene;
use glam::{EulerRot, Quat, Vec2, Vec3};

/// Nahe Clip-Ebene in Welt-Einheiten.
const NEAR_PLANE: f32 = 0.05;
/// Segmente der Griff-Ellipse.
const HOLD_SEGMENTS: usize = 24;

/// Eckpunkt-Indizes der sechs Box-Flächen (siehe `Aabb::corners`).
const BOX_FACES: [([usize; 4], f32); 6] = [
    ([0, 1, 2, 3], 0.85),
    ([4, 5, 6, 7], 0.85),
    ([0, 1, 5, 4], 0.7),
    ([3, 2, 6, 7], 1.0),
    ([0, 3, 7, 4], 0.75),
    ([1, 2, 6, 5], 0.75),
];

/// Projektion Welt → Screen für einen Frame.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    position: Vec3,
    right: Vec3,
    up: Vec3,
    forward: Vec3,
    center: Vec2,
    focal: f32,
}

impl Projection {
    /// Erstellt eine Projektion für ein Viewport-Rechteck.
    pub fn new(camera: &FirstPersonCamera, fov_deg: f32, rect: egui::Rect) -> Self {
        let half_fov = (fov_deg.clamp(10.0, 170.0) * 0.5).to_radians();
        Self {
            position: camera.position,
            right: camera.right(),
            up: camera.up(),
            forward: camera.forward(),
            center: Vec2::new(rect.center().x, rect.center().y),
            focal: rect.height() * 0.5 / half_fov.tan(),
        }
    }

    /// Welt-Punkt in Kamera-Koordinaten (x rechts, y oben, z Blicktiefe).
    pub fn to_view(&self, world: Vec3) -> Vec3 {
        let rel = world - self.position;
        Vec3::new(rel.dot(self.right), rel.dot(self.up), rel.dot(self.forward))
    }

    /// Kamera-Punkt auf den Bildschirm; `None` hinter der nahen Ebene.
    pub fn view_to_screen(&self, view: Vec3) -> Option<egui::Pos2> {
        if view.z < NEAR_PLANE {
            return None;
        }
        let x = self.center.x + view.x / view.z * self.focal;
        let y = self.center.y - view.y / view.z * self.focal;
        Some(egui::pos2(x, y))
    }

    /// Welt-Punkt auf den Bildschirm.
    pub fn project(&self, world: Vec3) -> Option<egui::Pos2> {
        self.view_to_screen(self.to_view(world))
    }

    /// Bildschirm-Größe einer Welt-Länge in Tiefe `depth`.
    pub fn scale_at(&self, depth: f32) -> f32 {
        self.focal / depth.max(NEAR_PLANE)
    }
}

/// Schneidet ein Polygon (Kamera-Koordinaten) an der nahen Ebene ab.
fn clip_near(polygon: &[Vec3]) -> Vec<Vec3> {
    let mut out = Vec::with_capacity(polygon.len() + 2);
    for (i, &current) in polygon.iter().enumerate() {
        let next = polygon[(i + 1) % polygon.len()];
        let current_in = current.z >= NEAR_PLANE;
        let next_in = next.z >= NEAR_PLANE;
        if current_in {
            out.push(current);
        }
        if current_in != next_in {
            let t = (NEAR_PLANE - current.z) / (next.z - current.z);
            out.push(current + (next - current) * t);
        }
    }
    out
}

fn to_color32(color: Rgba) -> egui::Color32 {
    let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(c(color[0]), c(color[1]), c(color[2]), c(color[3]))
}

fn shade(color: Rgba, factor: f32) -> Rgba {
    [color[0] * factor, color[1] * factor, color[2] * factor, color[3]]
}

/// Zeichenbare Form mit Tiefe für die Sortierung.
struct DepthShape {
    depth: f32,
    shape: egui::Shape,
}

/// Zeichnet die Szene in das Rechteck.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    painter.rect_filled(rect, 0.0, to_color32(scene.background_color));

    let projection = Projection::new(&scene.camera, scene.fov_deg, rect);
    let mut shapes = Vec::new();

    for part in &scene.parts {
        let corners = part.bounds.corners();
        for (indices, light) in BOX_FACES {
            let view: Vec<Vec3> = indices
                .iter()
                .map(|&i| projection.to_view(corners[i]))
                .collect();
            let clipped = clip_near(&view);
            if clipped.len() < 3 {
                continue;
            }
            let points: Vec<egui::Pos2> = clipped
                .iter()
                .filter_map(|&v| projection.view_to_screen(v))
                .collect();
            let depth = clipped.iter().map(|v| v.z).sum::<f32>() / clipped.len() as f32;
            let color = scene.apply_fog(shade(part.color, light), depth);
            shapes.push(DepthShape {
                depth,
                shape: egui::Shape::convex_polygon(
                    points,
                    to_color32(color),
                    egui::Stroke::new(1.0, to_color32(shade(color, 0.8))),
                ),
            });
        }
    }

    for anchor in &scene.anchors {
        let view = projection.to_view(anchor.position);
        let Some(center) = projection.view_to_screen(view) else {
            continue;
        };
        let color = scene.apply_fog(anchor.color, view.z);
        shapes.push(DepthShape {
            depth: view.z,
            shape: egui::Shape::circle_filled(
                center,
                anchor.radius * projection.scale_at(view.z),
                to_color32(color),
            ),
        });
    }

    for hold in &scene.holds {
        let view = projection.to_view(hold.position);
        if view.z < NEAR_PLANE {
            continue;
        }
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            hold.rotation_deg.x.to_radians(),
            hold.rotation_deg.y.to_radians(),
            hold.rotation_deg.z.to_radians(),
        );
        let points: Vec<egui::Pos2> = (0..HOLD_SEGMENTS)
            .filter_map(|i| {
                let angle = i as f32 / HOLD_SEGMENTS as f32 * std::f32::consts::TAU;
                let local = Vec3::new(hold.radii.x * angle.cos(), hold.radii.y * angle.sin(), 0.0);
                projection.project(hold.position + rotation * local)
            })
            .collect();
        if points.len() < 3 {
            continue;
        }
        let color = scene.apply_fog(hold.color, view.z);
        shapes.push(DepthShape {
            depth: view.z,
            shape: egui::Shape::convex_polygon(
                points,
                to_color32(color),
                egui::Stroke::new(1.5, to_color32(shade(color, 0.6))),
            ),
        });
    }

    // Von hinten nach vorne
    shapes.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    painter.extend(shapes.into_iter().map(|s| s.shape));
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 600.0))
    }

    #[test]
    fn point_ahead_projects_to_center() {
        let camera = FirstPersonCamera::new(Vec3::new(0.0, 1.7, 5.0));
        let projection = Projection::new(&camera, 70.0, rect());

        let screen = projection
            .project(Vec3::new(0.0, 1.7, -5.0))
            .expect("Punkt vor der Kamera");
        assert_relative_eq!(screen.x, 400.0, epsilon = 1e-3);
        assert_relative_eq!(screen.y, 300.0, epsilon = 1e-3);
    }

    #[test]
    fn point_behind_camera_is_not_projected() {
        let camera = FirstPersonCamera::new(Vec3::ZERO);
        let projection = Projection::new(&camera, 70.0, rect());
        assert!(projection.project(Vec3::new(0.0, 0.0, 1.0)).is_none());
    }

    #[test]
    fn point_right_and_up_lands_right_and_up() {
        let camera = FirstPersonCamera::new(Vec3::ZERO);
        let projection = Projection::new(&camera, 70.0, rect());

        let screen = projection
            .project(Vec3::new(1.0, 1.0, -4.0))
            .expect("Punkt vor der Kamera");
        assert!(screen.x > 400.0);
        assert!(screen.y < 300.0);
    }

    #[test]
    fn clipping_keeps_front_part_only() {
        let polygon = [
            Vec3::new(-1.0, 0.0, -1.0),
            Vec3::new(1.0, 0.0, -1.0),
            Vec3::new(1.0, 0.0, 3.0),
            Vec3::new(-1.0, 0.0, 3.0),
        ];
        let clipped = clip_near(&polygon);
        assert_eq!(clipped.len(), 4);
        assert!(clipped.iter().all(|v| v.z >= NEAR_PLANE - 1e-5));
    }
}
