// src/gui/progress.rs
use std::sync::{ Arc, Mutex };

use eframe::egui;
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx, done: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.set_status("Loading…");
    }
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn step_done(&mut self, what: &str) {
        self.done += 1;
        self.set_status(format!("{} ({}/{})", what, self.done, self.total));
    }
    fn finish(&mut self) {
        self.ctx.request_repaint();
    }
}
