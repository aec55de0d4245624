// src/gui/components/tabs.rs
//
// One tab per view. Switching only changes which finished table is shown;
// nothing is recomputed.

use eframe::egui;
use crate::config::options::ViewKind;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.current_view();
        for view in ViewKind::ALL {
            let selected = view == cur;
            if ui.selectable_label(selected, view.title()).clicked() && !selected {
                logf!("UI: Tab switch {:?} → {:?}", cur, view);
                app.state.gui.current_view = view;
            }
        }
    });
}
