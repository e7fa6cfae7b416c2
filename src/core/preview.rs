//! Vorschaubilder für Griff-Vorlagen: schattiertes Ellipsoid auf transparentem Grund.

use anyhow::Context;
use glam::Vec3;
use image::{Rgba as Pixel, RgbaImage};
use std::path::{Path, PathBuf};

use super::catalog::PREVIEW_SUFFIX;
use super::hold_template::{HoldTemplate, HoldTemplateLibrary};

/// Kantenlänge der Vorschaubilder in Pixeln
pub const PREVIEW_SIZE: u32 = 256;

/// Anteil der Bildhälfte, den die größte Halbachse einnimmt
const FILL_RATIO: f32 = 0.8;
const AMBIENT: f32 = 0.25;

/// Ergebnis eines Batch-Laufs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewReport {
    pub written: Vec<PathBuf>,
    pub failed: usize,
}

/// Pfad des Vorschaubilds einer Variante.
pub fn preview_path(previews_dir: &Path, variant: &str) -> PathBuf {
    previews_dir.join(format!("{variant}{PREVIEW_SUFFIX}.png"))
}

/// Rendert die Vorschau eines Templates (orthografisch, Blick entlang -Z).
pub fn render_preview(template: &HoldTemplate, size: u32) -> RgbaImage {
    let radii = Vec3::from_array(template.radii).max(Vec3::splat(1e-4));
    let half = size as f32 / 2.0;
    let scale = half * FILL_RATIO / radii.x.max(radii.y);
    let light = Vec3::new(-0.4, 0.6, 0.7).normalize();
    let [r, g, b, a] = template.color;

    RgbaImage::from_fn(size, size, |px, py| {
        // Pixel-Mitte in Objekt-Koordinaten, y nach oben
        let x = (px as f32 + 0.5 - half) / scale;
        let y = (half - py as f32 - 0.5) / scale;
        let ex = x / radii.x;
        let ey = y / radii.y;
        let d = ex * ex + ey * ey;
        if d > 1.0 {
            return Pixel([0, 0, 0, 0]);
        }
        let ez = (1.0 - d).sqrt();
        let normal = Vec3::new(ex / radii.x, ey / radii.y, ez / radii.z).normalize_or_zero();
        let shade = AMBIENT + (1.0 - AMBIENT) * normal.dot(light).max(0.0);
        let channel = |c: f32| ((c * shade).clamp(0.0, 1.0) * 255.0).round() as u8;
        Pixel([
            channel(r),
            channel(g),
            channel(b),
            (a.clamp(0.0, 1.0) * 255.0).round() as u8,
        ])
    })
}

/// Rendert und speichert die Vorschau einer Variante.
pub fn write_preview(template: &HoldTemplate, previews_dir: &Path) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(previews_dir)
        .with_context(|| format!("Verzeichnis nicht anlegbar: {}", previews_dir.display()))?;
    let path = preview_path(previews_dir, &template.name);
    render_preview(template, PREVIEW_SIZE)
        .save(&path)
        .with_context(|| format!("Vorschau nicht schreibbar: {}", path.display()))?;
    Ok(path)
}

/// Erzeugt Vorschaubilder für alle Vorlagen. Fehler pro Vorlage werden geloggt.
pub fn generate_previews(library: &HoldTemplateLibrary, previews_dir: &Path) -> PreviewReport {
    let mut report = PreviewReport::default();
    for template in library.iter() {
        match write_preview(template, previews_dir) {
            Ok(path) => {
                log::info!("Vorschau erzeugt: {}", path.display());
                report.written.push(path);
            }
            Err(e) => {
                log::error!("Vorschau für '{}' fehlgeschlagen: {:#}", template.name, e);
                report.failed += 1;
            }
        }
    }
    log::info!(
        "{} Vorschaubilder geschrieben, {} fehlgeschlagen",
        report.written.len(),
        report.failed
    );
    report
}
