//! Progress reporting for batch word list processing

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;

static ATTEMPT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {pos}/{len} attempts")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for batch runs
///
/// Shows a per-file attempts bar, plus an overall file bar once the batch
/// grows beyond a handful of word lists.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    attempt_bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            attempt_bar: None,
        }
    }

    /// Initialize bars for a batch of `file_count` word lists
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }
    }

    /// Start the attempts bar for one word list
    pub fn start_file(&mut self, path: &Path, attempts: usize) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let bar = match self.attempt_bar.take() {
            Some(existing) => existing,
            None => self.multi_progress.add(ProgressBar::new(attempts as u64)),
        };
        bar.set_style(ATTEMPT_STYLE.clone());
        bar.set_length(attempts as u64);
        bar.set_position(0);
        bar.set_message(display_name);
        self.attempt_bar = Some(bar);
    }

    /// Report a completed placement attempt
    pub fn update_attempt(&self, attempt: usize) {
        if let Some(ref bar) = self.attempt_bar {
            bar.set_position(attempt as u64);
        }
    }

    /// Mark the current word list done and advance the batch bar
    pub fn complete_file(&self, placed: usize, total: usize) {
        if let Some(ref bar) = self.attempt_bar {
            bar.set_message(format!("✓ {placed}/{total} words placed"));
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All word lists processed");
        }
        if let Some(ref bar) = self.attempt_bar {
            bar.finish();
        }
        let _ = self.multi_progress.clear();
    }
}
