//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let position = state.view.camera.position;
            ui.label(format!(
                "Position: ({:.1}, {:.1}, {:.1})",
                position.x, position.y, position.z
            ));

            ui.separator();

            let hovered = state.hovered_name();
            ui.label(format!("Target: {}", hovered.as_deref().unwrap_or("-")));

            ui.separator();

            ui.label(format!(
                "Holds: {} | Bolt holes: {}",
                state.hold_count(),
                state.scene.anchor_count()
            ));

            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
