//! Batch progress tracking across matrix files

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Matrices: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display while a batch of matrix files is analysed
pub struct ProgressManager {
    bar: ProgressBar,
    completed: usize,
    failed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager drawing to standard error
    pub fn new() -> Self {
        Self::with_bar(ProgressBar::new(0))
    }

    /// Create a progress manager that tracks counts without drawing
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::hidden())
    }

    fn with_bar(bar: ProgressBar) -> Self {
        bar.set_style(BATCH_STYLE.clone());
        Self {
            bar,
            completed: 0,
            failed: 0,
        }
    }

    /// Set the number of files in the batch
    pub fn initialize(&mut self, file_count: usize) {
        self.bar.set_length(file_count as u64);
        self.bar.set_position(0);
        self.completed = 0;
        self.failed = 0;
    }

    /// Show the file currently being analysed
    pub fn start_file(&self, path: &Path) {
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        self.bar.set_message(name);
    }

    /// Record a finished file
    pub fn complete_file(&mut self) {
        self.completed += 1;
        self.bar.inc(1);
    }

    /// Record a file whose analysis failed
    pub fn fail_file(&mut self) {
        self.failed += 1;
        self.bar.inc(1);
    }

    /// Number of files analysed successfully
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Number of files whose analysis failed
    pub const fn failed(&self) -> usize {
        self.failed
    }

    /// Number of files processed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Finalize the progress display
    pub fn finish(&self) {
        self.bar
            .finish_with_message(format!("{} analysed, {} failed", self.completed, self.failed));
    }
}
