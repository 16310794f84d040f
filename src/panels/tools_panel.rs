use crate::app::{PendingConfirm, PixelArtApp};
use crate::color::{Color, PALETTE};
use crate::command::Command;
use crate::components::ColorSwatch;

const PALETTE_COLUMNS: usize = 6;

pub fn tools_panel(app: &mut PixelArtApp, ctx: &egui::Context) {
    egui::SidePanel::right("tools_panel")
        .resizable(false)
        .default_width(260.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Color Palette");
                if ui.button("Custom…").on_hover_text("Custom Color Picker").clicked() {
                    app.custom_hex = app.selected_color().to_hex();
                    app.show_color_picker = true;
                }
            });

            egui::Grid::new("palette_grid")
                .num_columns(PALETTE_COLUMNS)
                .spacing([6.0, 6.0])
                .show(ui, |ui| {
                    for (i, &color) in PALETTE.iter().enumerate() {
                        let selected = app.selected_color() == color;
                        if ColorSwatch::new(color, selected).show(ui).clicked() {
                            app.select_color(color);
                        }
                        if (i + 1) % PALETTE_COLUMNS == 0 {
                            ui.end_row();
                        }
                    }
                });

            ui.horizontal(|ui| {
                ui.label("Selected color:");
                ColorSwatch::new(app.selected_color(), false).size(20.0).show(ui);
                ui.monospace(app.selected_color().to_hex());
            });

            ui.separator();
            ui.heading("Tools");

            ui.horizontal_wrapped(|ui| {
                let erasing = app.selected_color() == Color::WHITE;
                if ui.selectable_label(erasing, "Eraser").clicked() {
                    log::info!("Eraser selected");
                    app.select_color(Color::WHITE);
                }

                let can_undo = app.store().can_undo();
                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.execute(Command::Undo);
                }

                ui.toggle_value(&mut app.show_grid, "Grid");

                if ui.button("Export").clicked() {
                    app.export();
                }

                if ui.button("Clear").clicked() {
                    app.pending_confirm = Some(PendingConfirm::ClearCanvas);
                }
            });

            if let Some(notice) = app.notice() {
                ui.label(notice);
            }

            ui.separator();
            ui.heading("Stats");

            egui::Grid::new("stats_grid").num_columns(2).show(ui, |ui| {
                ui.label("Pixels painted");
                ui.label(app.store().paint_count().to_string());
                ui.end_row();

                ui.label("High score");
                ui.label(app.store().high_score().to_string());
                ui.end_row();

                ui.label("Undo steps");
                ui.label(app.store().undo_depth().to_string());
                ui.end_row();
            });

            if ui.button("Reset score").clicked() {
                app.pending_confirm = Some(PendingConfirm::ResetScore);
            }

            ui.separator();
            ui.checkbox(&mut app.show_patterns, "Show detected patterns");

            if app.show_patterns {
                let shapes = app.shapes();
                ui.label(format!("{} patterns found", shapes.len()));
                egui::ScrollArea::vertical()
                    .max_height(240.0)
                    .show(ui, |ui| {
                        for shape in shapes {
                            ui.horizontal(|ui| {
                                ColorSwatch::new(shape.color, false).size(12.0).show(ui);
                                ui.label(shape.to_string());
                            });
                        }
                    });
            }
        });
}
