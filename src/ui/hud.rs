//! HUD: Fadenkreuz und Kontrollpanel.

use crate::app::{AppIntent, AppState};

/// Radius des Fadenkreuzes in Pixeln.
const CROSSHAIR_SIZE: f32 = 8.0;

/// Zeichnet das Fadenkreuz in die Mitte des Viewports.
pub fn paint_crosshair(painter: &egui::Painter, rect: egui::Rect, highlighted: bool) {
    let color = if highlighted {
        egui::Color32::from_rgb(255, 220, 60)
    } else {
        egui::Color32::WHITE
    };
    let stroke = egui::Stroke::new(2.0, color);
    let c = rect.center();
    painter.line_segment(
        [c - egui::vec2(CROSSHAIR_SIZE, 0.0), c + egui::vec2(CROSSHAIR_SIZE, 0.0)],
        stroke,
    );
    painter.line_segment(
        [c - egui::vec2(0.0, CROSSHAIR_SIZE), c + egui::vec2(0.0, CROSSHAIR_SIZE)],
        stroke,
    );
    if highlighted {
        painter.circle_stroke(c, CROSSHAIR_SIZE * 1.5, stroke);
    }
}

/// Zeigt das Kontrollpanel oder den Hinweis zum Einblenden.
pub fn show_control_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let toggle_key = &state.options.key_bindings.menu_toggle;

    if !state.ui.control_panel_visible {
        egui::Area::new(egui::Id::new("control_panel_hint"))
            .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
            .interactable(false)
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(format!("Press {toggle_key} to show the control panel"))
                        .color(egui::Color32::from_gray(220)),
                );
            });
        return events;
    }

    let bindings = &state.options.key_bindings;
    egui::Window::new("Control Panel")
        .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
        .resizable(false)
        .collapsible(false)
        .show(ctx, |ui| {
            ui.label(format!(
                "Move: {}/{}/{}/{}  Look: mouse",
                bindings.forward, bindings.left, bindings.backward, bindings.right
            ));
            ui.label(format!(
                "Select: {}  Delete: {}  Rotate hold: drag with left mouse",
                bindings.select,
                bindings.delete.join("/")
            ));
            ui.label(format!(
                "Gallery: arrows, {} to place, {} to cancel",
                bindings.confirm, bindings.cancel
            ));
            ui.label(format!("{toggle_key}: hide this panel"));
            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Regenerate wall").clicked() {
                    events.push(AppIntent::RegenerateWallRequested);
                }
                if ui.button("Clear wall").clicked() {
                    events.push(AppIntent::ClearWallRequested);
                }
            });
            ui.horizontal(|ui| {
                if ui.button("Generate previews").clicked() {
                    events.push(AppIntent::PreviewGenerationRequested);
                }
                if ui.button("Options").clicked() {
                    events.push(AppIntent::OptionsDialogToggleRequested);
                }
                if ui.button("Quit").clicked() {
                    events.push(AppIntent::ExitRequested);
                }
            });
        });

    events
}
