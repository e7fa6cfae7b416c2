//! Optionen-Dialog für Kamera, Auswahl, Wand, Galerie und Umgebung.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.options_dialog_visible {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Options")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::RIGHT_TOP, [-10.0, 10.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Kamera ──────────────────────────────────────
                    ui.collapsing("Camera", |ui| {
                        changed |= drag(ui, "Move speed:", &mut opts.move_speed, 0.5..=30.0, 0.1);
                        changed |= drag(
                            ui,
                            "Look sensitivity (°/px):",
                            &mut opts.look_sensitivity,
                            0.01..=2.0,
                            0.01,
                        );
                        changed |= drag(
                            ui,
                            "Collision radius:",
                            &mut opts.collision_radius,
                            0.05..=2.0,
                            0.01,
                        );
                        changed |= drag(ui, "Field of view:", &mut opts.camera_fov_deg, 30.0..=120.0, 0.5);
                    });

                    // ── Auswahl ─────────────────────────────────────
                    ui.collapsing("Selection", |ui| {
                        changed |= drag(
                            ui,
                            "Max distance:",
                            &mut opts.max_selection_distance,
                            1.0..=500.0,
                            0.5,
                        );
                        changed |= drag(
                            ui,
                            "Bolt hole radius:",
                            &mut opts.bolt_hole_radius,
                            0.02..=0.5,
                            0.005,
                        );
                        changed |= color_edit(ui, "Bolt hole:", &mut opts.bolt_hole_color);
                        changed |= color_edit(ui, "Hover:", &mut opts.hover_color);
                        changed |= color_edit(ui, "Selected:", &mut opts.selected_color);
                        changed |= color_edit(ui, "Hold highlight:", &mut opts.hold_highlight_color);
                    });

                    // ── Wand ────────────────────────────────────────
                    ui.collapsing("Wall", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Grid (columns × rows):");
                            changed |= ui
                                .add(egui::DragValue::new(&mut opts.wall_grid.columns).range(0..=100))
                                .changed();
                            changed |= ui
                                .add(egui::DragValue::new(&mut opts.wall_grid.rows).range(0..=100))
                                .changed();
                        });
                        changed |= drag(ui, "Padding:", &mut opts.wall_grid.padding, 0.0..=5.0, 0.05);
                        changed |= drag(
                            ui,
                            "Bolt depth:",
                            &mut opts.wall_grid.bolt_depth,
                            0.0..=1.0,
                            0.005,
                        );
                        changed |= color_edit(ui, "Wall:", &mut opts.wall_color);
                        changed |= color_edit(ui, "Floor:", &mut opts.floor_color);
                        changed |= color_edit(ui, "Ceiling:", &mut opts.ceiling_color);
                    });

                    // ── Griffe ──────────────────────────────────────
                    ui.collapsing("Holds", |ui| {
                        changed |= drag(
                            ui,
                            "Rotation multiplier:",
                            &mut opts.rotation_multiplier,
                            0.5..=30.0,
                            0.1,
                        );
                        changed |= drag(
                            ui,
                            "Rotation smoothing:",
                            &mut opts.rotation_smooth_speed,
                            0.5..=50.0,
                            0.1,
                        );
                    });

                    // ── Galerie ─────────────────────────────────────
                    ui.collapsing("Gallery", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Columns:");
                            changed |= ui
                                .add(egui::DragValue::new(&mut opts.gallery_columns).range(1..=12))
                                .changed();
                        });
                        changed |= drag(
                            ui,
                            "Scroll speed:",
                            &mut opts.gallery_scroll_speed,
                            1.0..=50.0,
                            0.5,
                        );
                        changed |= color_edit(ui, "Cell:", &mut opts.gallery_cell_color);
                        changed |= color_edit(ui, "Selected cell:", &mut opts.gallery_cell_selected_color);
                    });

                    // ── Umgebung ────────────────────────────────────
                    ui.collapsing("Environment", |ui| {
                        changed |= color_edit(ui, "Background:", &mut opts.background_color);
                        changed |= drag(ui, "Fog start:", &mut opts.fog_start, 0.0..=200.0, 0.5);
                        changed |= drag(ui, "Fog end:", &mut opts.fog_end, 0.0..=500.0, 0.5);
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Defaults").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Close").clicked() {
                    events.push(AppIntent::OptionsDialogToggleRequested);
                }
            });
        });

    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

fn drag(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f32,
    range: std::ops::RangeInclusive<f32>,
    speed: f64,
) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::DragValue::new(value).range(range).speed(speed))
            .changed()
    })
    .inner
}

fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.color_edit_button_rgba_unmultiplied(color).changed()
    })
    .inner
}
