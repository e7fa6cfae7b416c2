//! Bohrloch-Raster auf der Kletterwand.

use glam::{UVec2, Vec3};
use serde::{Deserialize, Serialize};

/// Raster-Einstellungen der Kletterwand
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallGridSettings {
    /// Anzahl Spalten (X)
    pub columns: u32,
    /// Anzahl Zeilen (Y)
    pub rows: u32,
    /// Randabstand zu den Wandkanten
    pub padding: f32,
    /// Versatz der Bohrlöcher von der Wand-Rückseite
    pub bolt_depth: f32,
}

impl WallGridSettings {
    /// Anzahl Bohrlöcher im Raster; läuft bei großen Werten nicht über.
    pub fn hole_count(&self) -> usize {
        (self.columns as usize).saturating_mul(self.rows as usize)
    }
}

/// Berechnete Position eines Bohrlochs
#[derive(Debug, Clone, PartialEq)]
pub struct BoltHoleSpec {
    /// Anzeigename `BoltHole_<x>_<y>`
    pub name: String,
    /// Raster-Koordinate
    pub grid: UVec2,
    /// Welt-Position
    pub position: Vec3,
}

/// Anzeigename eines Bohrlochs.
pub fn bolt_hole_name(x: u32, y: u32) -> String {
    format!("BoltHole_{x}_{y}")
}

fn axis_spacing(extent: f32, padding: f32, count: u32) -> f32 {
    if count > 1 {
        (extent - 2.0 * padding) / (count - 1) as f32
    } else {
        0.0
    }
}

/// Berechnet alle Bohrlöcher einer Wand.
///
/// `wall_center` und `wall_scale` beschreiben die Wand-Box (Breite, Höhe, Stärke).
/// Reihenfolge: Spalte außen, Zeile innen.
pub fn generate_bolt_holes(
    wall_center: Vec3,
    wall_scale: Vec3,
    settings: &WallGridSettings,
) -> Vec<BoltHoleSpec> {
    let spacing_x = axis_spacing(wall_scale.x, settings.padding, settings.columns);
    let spacing_y = axis_spacing(wall_scale.y, settings.padding, settings.rows);

    let start_x = -wall_scale.x / 2.0 + settings.padding;
    let start_y = -wall_scale.y / 2.0 + settings.padding;
    let z = -wall_scale.z / 2.0 + settings.bolt_depth;

    let mut holes = Vec::with_capacity(settings.hole_count());
    for x in 0..settings.columns {
        for y in 0..settings.rows {
            holes.push(BoltHoleSpec {
                name: bolt_hole_name(x, y),
                grid: UVec2::new(x, y),
                position: wall_center
                    + Vec3::new(
                        start_x + x as f32 * spacing_x,
                        start_y + y as f32 * spacing_y,
                        z,
                    ),
            });
        }
    }
    holes
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn settings(columns: u32, rows: u32) -> WallGridSettings {
        WallGridSettings {
            columns,
            rows,
            padding: 1.0,
            bolt_depth: 0.13,
        }
    }

    #[test]
    fn grid_corners_respect_padding() {
        let holes = generate_bolt_holes(
            Vec3::new(0.0, 7.5, -10.0),
            Vec3::new(20.0, 15.0, 0.1),
            &settings(20, 30),
        );
        assert_eq!(holes.len(), 600);

        let first = &holes[0];
        assert_eq!(first.name, "BoltHole_0_0");
        assert_relative_eq!(first.position.x, -9.0);
        assert_relative_eq!(first.position.y, 1.0);
        assert_relative_eq!(first.position.z, -10.0 - 0.05 + 0.13, epsilon = 1e-5);

        let last = holes.last().expect("letztes Bohrloch");
        assert_eq!(last.name, "BoltHole_19_29");
        assert_relative_eq!(last.position.x, 9.0, epsilon = 1e-4);
        assert_relative_eq!(last.position.y, 14.0, epsilon = 1e-4);
    }

    #[test]
    fn column_major_order() {
        let holes = generate_bolt_holes(Vec3::ZERO, Vec3::new(4.0, 4.0, 0.1), &settings(2, 3));
        let names: Vec<_> = holes.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "BoltHole_0_0",
                "BoltHole_0_1",
                "BoltHole_0_2",
                "BoltHole_1_0",
                "BoltHole_1_1",
                "BoltHole_1_2"
            ]
        );
    }

    #[test]
    fn single_column_has_no_spacing() {
        let holes = generate_bolt_holes(Vec3::ZERO, Vec3::new(4.0, 4.0, 0.1), &settings(1, 2));
        assert_eq!(holes.len(), 2);
        assert_relative_eq!(holes[0].position.x, -1.0);
        assert_relative_eq!(holes[1].position.x, -1.0);
        assert!(holes.iter().all(|h| h.position.is_finite()));
    }

    #[test]
    fn hole_count_does_not_overflow_u32() {
        assert_eq!(settings(3, 4).hole_count(), 12);
        assert_eq!(
            settings(u32::MAX, 2).hole_count(),
            (u32::MAX as usize).saturating_mul(2)
        );
        assert_eq!(settings(u32::MAX, 0).hole_count(), 0);
    }

    #[test]
    fn empty_grid_yields_no_holes() {
        let holes = generate_bolt_holes(Vec3::ZERO, Vec3::ONE, &settings(0, 5));
        assert!(holes.is_empty());
    }
}
