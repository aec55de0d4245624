// src/gui/components/data_table.rs
//
// Draws the finished table for the active view. Purely a view.

use eframe::egui::{ self, Align, Layout, RichText, TextWrapMode };
use egui_extras::{ Column, TableBuilder };

use crate::gui::app::App;
use crate::store::DataSet;

// Job Count, Population / City Count
const NUMERIC_COLS: [usize; 2] = [1, 3];
const DEFAULT_WIDTHS: [f32; 4] = [220.0, 90.0, 240.0, 110.0];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let view = app.current_view();
    let Ok(guard) = app.reports.lock() else { return };
    let Some(reports) = guard.as_ref() else {
        ui.label("No data yet. Fill in the inputs and press Run.");
        return;
    };
    let table = reports.get(view);
    if table.rows.is_empty() {
        ui.label(format!("{}: no rows", view.title()));
        return;
    }
    inner_table(ui, table, view);
}

fn inner_table(ui: &mut egui::Ui, table: &DataSet, view: crate::config::options::ViewKind) {
    let cols = table.header_count().max(table.rows.first().map(|r| r.len()).unwrap_or(0));

    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .id_salt(("table_state", view))
        .min_scrolled_height(0.0);
    for ci in 0..cols {
        let w = DEFAULT_WIDTHS.get(ci).copied().unwrap_or(80.0);
        builder = builder.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
    }

    builder
        .header(24.0, |mut header| {
            for ci in 0..cols {
                header.col(|ui| {
                    let label = table.headers.as_ref()
                        .and_then(|h| h.get(ci).cloned())
                        .unwrap_or_else(|| format!("Col {}", ci + 1));
                    ui.label(RichText::new(label).strong());
                });
            }
        })
        .body(|body| {
            body.rows(20.0, table.rows.len(), |mut row| {
                let Some(data) = table.rows.get(row.index()) else { return };
                for ci in 0..cols {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        let Some(cell) = data.get(ci) else { return };
                        if NUMERIC_COLS.contains(&ci) {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| { ui.label(cell); });
                        } else {
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(cell); });
                        }
                    });
                }
            });
        });
}
