// src/progress.rs
/// Lightweight progress reporting for a run (load → views → export).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of steps (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One step finished (an input loaded, a view built, a file written).
    fn step_done(&mut self, _what: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints to stderr so stdout stays clean for table output.
#[derive(Default)]
pub struct CliProgress {
    done: usize,
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn step_done(&mut self, what: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {}", self.done, self.total, what);
    }
}
