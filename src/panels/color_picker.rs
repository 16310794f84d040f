use crate::app::PixelArtApp;
use crate::color::Color;
use crate::components::ColorSwatch;

/// Modal-style window for picking a color outside the palette
pub fn color_picker_window(app: &mut PixelArtApp, ctx: &egui::Context) {
    egui::Window::new("Custom Color Picker")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label("Choose color:");
            let mut picked = app.selected_color().to_color32();
            if egui::color_picker::color_edit_button_srgba(
                ui,
                &mut picked,
                egui::color_picker::Alpha::Opaque,
            )
            .changed()
            {
                let color = Color::from_color32(picked);
                app.select_color(color);
                app.custom_hex = color.to_hex();
            }

            ui.add_space(8.0);
            ui.label("Or enter hex code:");
            let mut text = app.custom_hex.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut text)
                    .hint_text("#000000")
                    .font(egui::TextStyle::Monospace),
            );
            if response.changed() {
                app.set_custom_hex(&text);
            }
            ui.small("Format: #RRGGBB (e.g., #FF5733)");

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ColorSwatch::new(app.selected_color(), false).size(40.0).show(ui);
                ui.vertical(|ui| {
                    ui.monospace(app.selected_color().to_hex());
                    ui.small("Current selection");
                });
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                // the color is already applied while editing; both just close
                let used = ui.button("Use This Color").clicked();
                let cancelled = ui.button("Cancel").clicked();
                if used || cancelled {
                    app.show_color_picker = false;
                }
            });
        });
}
