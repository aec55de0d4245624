// src/config/state.rs
use super::options::{AppOptions, ViewKind};

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Active tab
    pub current_view: ViewKind,

    // Text fields mapped <-> AppOptions on Run/Export
    pub dataset_text: String,
    pub rules_text: String,
    pub cities_text: String,
    pub out_dir_text: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 700,
            current_view: ViewKind::Location,
            dataset_text: s!(),
            rules_text: s!(),
            cities_text: s!(),
            out_dir_text: s!(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    /// Seed the GUI text fields from the current options.
    pub fn new(options: AppOptions) -> Self {
        let gui = GuiState {
            dataset_text: options.run.dataset.to_string_lossy().into_owned(),
            rules_text: options.run.rules.to_string_lossy().into_owned(),
            cities_text: options.run.cities_dir.to_string_lossy().into_owned(),
            out_dir_text: options.export.out_dir().to_string_lossy().into_owned(),
            ..GuiState::default()
        };
        Self { options, gui }
    }

    /// Copy text fields back into options before a run or export.
    pub fn apply_text_fields(&mut self) {
        let run = &mut self.options.run;
        run.dataset = self.gui.dataset_text.trim().into();
        run.rules = self.gui.rules_text.trim().into();
        run.cities_dir = self.gui.cities_text.trim().into();
        self.options.export.set_out_dir(&self.gui.out_dir_text);
    }
}
