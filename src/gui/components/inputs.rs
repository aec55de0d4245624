// src/gui/components/inputs.rs
//
// Run inputs: dataset, advertiser, rule table, cities dir, and the Run button.
// Text fields are copied into RunOptions when Run is pressed.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    egui::Grid::new("run_inputs")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            let gui = &mut app.state.gui;

            ui.label("Dataset");
            ui.add(egui::TextEdit::singleline(&mut gui.dataset_text).desired_width(420.0));
            ui.end_row();

            ui.label("Advertiser");
            ui.add(egui::TextEdit::singleline(&mut app.state.options.run.advertiser).desired_width(240.0));
            ui.end_row();

            ui.label("Role rules");
            ui.add(egui::TextEdit::singleline(&mut gui.rules_text).desired_width(420.0));
            ui.end_row();

            ui.label("Cities dir");
            ui.add(egui::TextEdit::singleline(&mut gui.cities_text).desired_width(420.0));
            ui.end_row();
        });

    ui.horizontal(|ui| {
        let running = app.is_running();
        let label = if running { "Running…" } else { "Run" };
        if ui.add_enabled(!running, egui::Button::new(label)).clicked() {
            let ctx = ui.ctx().clone();
            app.start_run(&ctx);
        }
    });
}
