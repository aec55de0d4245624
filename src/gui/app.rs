// src/gui/app.rs
use std::{
    error::Error,
    sync::{ Arc, Mutex, atomic::{ AtomicBool, Ordering } },
    thread,
};

use eframe::egui;

use crate::{
    config::{
        options::{ AppOptions, ViewKind },
        state::AppState,
    },
    progress::Progress,
    report::Reports,
    runner,
};

use super::{ components, progress::GuiProgress };

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Job Roll-up",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::new(AppOptions::default()))))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // latest finished run (worker writes, UI reads)
    pub reports: Arc<Mutex<Option<Reports>>>,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,
    pub running: Arc<AtomicBool>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        logf!("Init: dataset={}, cities={}",
            state.options.run.dataset.display(),
            state.options.run.cities_dir.display());
        Self {
            state,
            reports: Arc::new(Mutex::new(None)),
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_view(&self) -> ViewKind { self.state.gui.current_view }

    #[inline]
    pub fn is_running(&self) -> bool { self.running.load(Ordering::Relaxed) }

    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Kick off a run on a worker thread. The previous reports stay on screen
    /// until the new ones land.
    pub fn start_run(&mut self, ctx: &egui::Context) {
        if self.is_running() { return; }
        self.state.apply_text_fields();

        let run_opts = self.state.options.run.clone();
        let reports = Arc::clone(&self.reports);
        let running = Arc::clone(&self.running);
        let mut progress = GuiProgress::new(Arc::clone(&self.status), ctx.clone());

        logf!("UI: Run {} as '{}'", run_opts.dataset.display(), run_opts.advertiser);
        running.store(true, Ordering::Relaxed);

        thread::spawn(move || {
            let result = runner::run(&run_opts, Some(&mut progress));
            if let Ok(new) = result {
                if let Ok(mut slot) = reports.lock() {
                    *slot = Some(new);
                }
                progress.log("Done");
            }
            running.store(false, Ordering::Relaxed);
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("inputs").show(ctx, |ui| {
            components::inputs::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status_text());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);

            ui.separator();

            components::export_bar::draw(ui, self);

            ui.separator();

            components::data_table::draw(ui, self);
        });
    }
}
