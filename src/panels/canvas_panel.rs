use crate::app::PixelArtApp;

/// Largest edge length of the drawn canvas, in points
const MAX_CANVAS_SIDE: f32 = 600.0;

pub fn canvas_panel(app: &mut PixelArtApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Pixel Canvas");

        let available = ui.available_size();
        let side = available.x.min(available.y).min(MAX_CANVAS_SIDE).max(1.0);
        let (response, painter) =
            ui.allocate_painter(egui::vec2(side, side), egui::Sense::click_and_drag());
        let rect = response.rect;

        // Paint while the pointer is held on the canvas, so a drag colors
        // every cell it passes over.
        if response.is_pointer_button_down_on() {
            if let Some(pos) = response.interact_pointer_pos() {
                let size = app.store().grid().size();
                if let Some((row, col)) = cell_at(rect, pos, size) {
                    app.paint(row, col);
                }
            }
        }

        let grid = app.store().grid();
        let cell = side / grid.size() as f32;
        painter.rect_filled(rect, 0.0, egui::Color32::WHITE);
        for (row, col, color) in grid.cells() {
            let min = rect.min + egui::vec2(col as f32 * cell, row as f32 * cell);
            let cell_rect = egui::Rect::from_min_size(min, egui::vec2(cell, cell));
            if !color.is_background() {
                painter.rect_filled(cell_rect, 0.0, color.to_color32());
            }
            if app.show_grid {
                painter.rect_stroke(
                    cell_rect,
                    0.0,
                    egui::Stroke::new(0.5, egui::Color32::from_gray(215)),
                );
            }
        }
        painter.rect_stroke(rect, 0.0, egui::Stroke::new(2.0, egui::Color32::from_gray(90)));
    });
}

/// Maps a pointer position inside `rect` to the (row, col) of a
/// `size` x `size` grid drawn over it
pub fn cell_at(rect: egui::Rect, pos: egui::Pos2, size: usize) -> Option<(usize, usize)> {
    if !rect.contains(pos) || rect.width() <= 0.0 || rect.height() <= 0.0 {
        return None;
    }
    let col = ((pos.x - rect.min.x) / rect.width() * size as f32) as usize;
    let row = ((pos.y - rect.min.y) / rect.height() * size as f32) as usize;
    // the far edge is inside `rect` but maps to index `size`
    Some((row.min(size - 1), col.min(size - 1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_at() {
        let rect = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(300.0, 300.0));
        assert_eq!(cell_at(rect, egui::pos2(10.0, 20.0), 30), Some((0, 0)));
        assert_eq!(cell_at(rect, egui::pos2(35.0, 29.0), 30), Some((0, 2)));
        assert_eq!(cell_at(rect, egui::pos2(310.0, 320.0), 30), Some((29, 29)));
        assert_eq!(cell_at(rect, egui::pos2(5.0, 25.0), 30), None);
    }
}
