//! Progress reporting module

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// Progress reporter for multi-file segmentation
///
/// Drawn on stderr and only when more than one file is processed, so
/// piped stdout stays clean.
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Initialize the bar for `total_files` inputs
    pub fn init_files(&mut self, total_files: u64) {
        if self.quiet || total_files < 2 {
            return;
        }

        let pb = ProgressBar::with_draw_target(Some(total_files), ProgressDrawTarget::stderr());
        match ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}")
        {
            Ok(style) => pb.set_style(style.progress_chars("##-")),
            Err(e) => log::debug!("Falling back to default progress style: {e}"),
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Update progress for a segmented file
    pub fn file_completed(&self, filename: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Segmented: {filename}"));
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_and_clear();
        }
    }

    /// Whether a bar is being drawn
    pub fn is_active(&self) -> bool {
        self.progress_bar.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_reporter_draws_nothing() {
        let mut reporter = ProgressReporter::new(true);
        reporter.init_files(10);
        assert!(!reporter.is_active());
        reporter.file_completed("a.txt");
        reporter.finish();
    }

    #[test]
    fn test_single_file_has_no_bar() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_files(1);
        assert!(!reporter.is_active());
    }

    #[test]
    fn test_multi_file_bar() {
        let mut reporter = ProgressReporter::new(false);
        reporter.init_files(3);
        assert!(reporter.is_active());
        reporter.file_completed("a.txt");
        reporter.finish();
    }
}
