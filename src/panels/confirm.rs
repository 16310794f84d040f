use crate::app::PixelArtApp;

pub fn confirm_window(app: &mut PixelArtApp, ctx: &egui::Context) {
    let Some(pending) = app.pending_confirm else {
        return;
    };

    egui::Window::new("Confirm")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label(pending.message());
            ui.horizontal(|ui| {
                if ui.button("Yes").clicked() {
                    app.confirm(true);
                }
                if ui.button("No").clicked() {
                    app.confirm(false);
                }
            });
        });
}
