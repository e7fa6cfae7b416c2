//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{RenderAnchor, RenderHold, RenderPart, RenderScene};

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let materials = state.scene.materials();
    let options = &state.options;

    let parts = state
        .scene
        .room()
        .parts()
        .iter()
        .map(|part| RenderPart {
            bounds: part.bounds,
            color: materials
                .source_color(part.kind.material_name())
                .unwrap_or(options.wall_color),
        })
        .collect();

    // Besetzte Bohrlöcher sind ausgeblendet
    let anchors = state
        .scene
        .anchors()
        .filter(|hole| hole.is_visible())
        .map(|hole| RenderAnchor {
            position: hole.position(),
            radius: options.bolt_hole_radius,
            color: hole
                .current_color(materials)
                .unwrap_or(options.bolt_hole_color),
        })
        .collect();

    let holds = state
        .scene
        .holds()
        .map(|hold| {
            let template_color = state
                .templates
                .as_ref()
                .and_then(|templates| templates.get(hold.variant()))
                .map(|template| template.color);
            RenderHold {
                position: hold.position(),
                radii: hold.radii(),
                rotation_deg: hold.rotation_deg(),
                color: hold
                    .current_color(materials)
                    .or(template_color)
                    .unwrap_or(options.hold_highlight_color),
            }
        })
        .collect();

    RenderScene {
        camera: state.view.camera.clone(),
        fov_deg: options.camera_fov_deg,
        parts,
        anchors,
        holds,
        background_color: options.background_color,
        fog_start: options.fog_start,
        fog_end: options.fog_end,
        crosshair_highlighted: state.ui.crosshair_highlighted,
    }
}
