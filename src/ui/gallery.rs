//! Griff-Galerie als modales Fenster.

use crate::app::{AppIntent, AppState};
use crate::core::Rgba;

fn to_color32(color: Rgba) -> egui::Color32 {
    let c = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(c(color[0]), c(color[1]), c(color[2]), c(color[3]))
}

/// Zeigt die Galerie (falls offen) und gibt erzeugte Events zurück.
pub fn show_gallery(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let gallery = &state.gallery;
    if !gallery.visible {
        return events;
    }

    let layout = state.gallery_layout();
    let columns = layout.columns;
    let scroll_offset = gallery.scroll.current.clamp(0.0, 1.0) * layout.scroll_range(gallery.len());
    let content_width =
        columns as f32 * layout.item_size + columns.saturating_sub(1) as f32 * layout.spacing;

    egui::Window::new(format!("Holds for {}", gallery.anchor_name))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let Some(catalog) = gallery.catalog().filter(|catalog| !catalog.is_empty()) else {
                ui.label("No hold previews found. Use 'Generate previews' in the control panel.");
                if ui.button("Close").clicked() {
                    events.push(AppIntent::GalleryCancelRequested);
                }
                return;
            };

            egui::ScrollArea::vertical()
                .max_height(layout.viewport_height)
                .min_scrolled_width(content_width)
                .vertical_scroll_offset(scroll_offset)
                .show(ui, |ui| {
                    ui.spacing_mut().item_spacing = egui::vec2(layout.spacing, layout.spacing);
                    for (row_start, row) in gallery.cells.chunks(columns).enumerate() {
                        ui.horizontal(|ui| {
                            for (offset, cell) in row.iter().enumerate() {
                                let index = row_start * columns + offset;
                                let Some(entry) = catalog.get(index) else {
                                    continue;
                                };
                                let (rect, response) = ui.allocate_exact_size(
                                    egui::vec2(layout.item_size, layout.item_size),
                                    egui::Sense::click(),
                                );
                                ui.painter()
                                    .rect_filled(rect, 4.0, to_color32(cell.background));
                                let image_rect = rect.shrink(6.0);
                                egui::Image::new(format!(
                                    "file://{}",
                                    entry.preview.path.display()
                                ))
                                .fit_to_exact_size(image_rect.size())
                                .paint_at(ui, image_rect);
                                ui.painter().text(
                                    rect.center_bottom() - egui::vec2(0.0, 4.0),
                                    egui::Align2::CENTER_BOTTOM,
                                    &entry.name,
                                    egui::FontId::proportional(11.0),
                                    egui::Color32::WHITE,
                                );
                                if response.clicked() {
                                    events.push(AppIntent::GalleryEntryClicked { index });
                                }
                            }
                        });
                    }
                });

            ui.separator();
            ui.horizontal(|ui| {
                let selected = gallery
                    .selected_entry()
                    .map(|entry| entry.name.as_str())
                    .unwrap_or("-");
                ui.label(format!("Selected: {selected}"));
                if ui.button("Place").clicked() {
                    events.push(AppIntent::GalleryConfirmRequested);
                }
                if ui.button("Cancel").clicked() {
                    events.push(AppIntent::GalleryCancelRequested);
                }
            });
        });

    events
}
