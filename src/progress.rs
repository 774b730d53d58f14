// src/progress.rs
/// Lightweight progress reporting used by long-running operations (PDF export).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one logical unit completes (e.g., a PDF page was encoded).
    fn item_done(&mut self, _index: usize) {}

    /// Called once the work is complete.
    fn finish(&mut self) {}
}
