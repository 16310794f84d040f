use crate::color::Color;

/// A clickable square showing one color
pub struct ColorSwatch {
    pub color: Color,
    pub selected: bool,
    pub size: f32,
}

impl ColorSwatch {
    pub fn new(color: Color, selected: bool) -> Self {
        Self {
            color,
            selected,
            size: 28.0,
        }
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let swatch_size = egui::vec2(self.size, self.size);
        let (rect, response) = ui.allocate_exact_size(swatch_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            ui.painter().rect_filled(rect, 4.0, self.color.to_color32());

            let border = if self.selected {
                egui::Stroke::new(2.5, egui::Color32::from_rgb(34, 211, 238)) // cyan when selected
            } else if response.hovered() {
                egui::Stroke::new(1.5, egui::Color32::from_gray(160))
            } else {
                egui::Stroke::new(1.0, egui::Color32::from_gray(90))
            };
            ui.painter().rect_stroke(rect, 4.0, border);
        }

        response.on_hover_text(self.color.to_hex())
    }
}
