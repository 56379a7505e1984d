// src/progress.rs
/// Lightweight progress reporting for the feed load.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called once the feed is parsed, with the number of raw rows.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called after filtering finished successfully.
    fn finish(&mut self) {}
}
