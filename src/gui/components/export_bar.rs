// src/gui/components/export_bar.rs
use eframe::egui;

use crate::config::options::{ ExportFormat, ViewKind };
use crate::file;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        let export = &mut app.state.options.export;

        egui::ComboBox::from_id_salt("export_format")
            .selected_text(export.format.ext().to_ascii_uppercase())
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
                ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
            });

        ui.checkbox(&mut export.include_headers, "Headers");

        ui.label("Out dir");
        ui.add(egui::TextEdit::singleline(&mut app.state.gui.out_dir_text).desired_width(260.0));

        let has_data = app.reports.lock().map(|r| r.is_some()).unwrap_or(false);
        if ui.add_enabled(has_data && !app.is_running(), egui::Button::new("Export all")).clicked() {
            app.state.apply_text_fields();
            export_all(app);
        }
    });
}

fn export_all(app: &App) {
    let result = match app.reports.lock() {
        Ok(guard) => match guard.as_ref() {
            Some(reports) => file::export_reports(reports, &app.state.options.export, &ViewKind::ALL),
            None => return,
        },
        Err(_) => return,
    };

    match result {
        Ok(paths) => app.status(format!(
            "Exported {} file(s) to {}",
            paths.len(),
            app.state.options.export.out_dir().display()
        )),
        Err(e) => {
            loge!("Export: {}", e);
            app.status(format!("Export failed: {e}"));
        }
    }
}
