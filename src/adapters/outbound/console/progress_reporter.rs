use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;

const BAR_TEMPLATE: &str = "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) - {msg}";

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Progress goes to stderr so it never mixes with anything piped from
/// stdout. One indicatif bar is shown per configuration; a new total starts
/// a new bar. In quiet mode only warnings and errors are printed.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
    quiet: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
            quiet: false,
        }
    }

    /// A reporter that suppresses progress and completion output
    pub fn quiet() -> Self {
        Self {
            progress_bar: RefCell::new(None),
            quiet: true,
        }
    }

    fn bar_for_total(&self, total: usize) -> ProgressBar {
        let mut slot = self.progress_bar.borrow_mut();
        if let Some(pb) = slot.as_ref() {
            if pb.length() == Some(total as u64) && !pb.is_finished() {
                return pb.clone();
            }
            pb.finish_and_clear();
        }

        let pb = ProgressBar::new(total as u64);
        match ProgressStyle::default_bar().template(BAR_TEMPLATE) {
            Ok(style) => pb.set_style(style.progress_chars("=>-")),
            Err(e) => tracing::debug!(error = %e, "falling back to default progress style"),
        }
        *slot = Some(pb.clone());
        pb
    }

    fn finish_bar(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if !self.quiet {
            self.finish_bar();
            eprintln!("{}", message);
        }
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        if self.quiet {
            return;
        }
        let pb = self.bar_for_total(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        self.finish_bar();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.finish_bar();
        if !self.quiet {
            eprintln!();
            eprintln!("{}", message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_creation() {
        let reporter = StderrProgressReporter::new();
        reporter.report("Test message");
        reporter.report_progress(5, 10, Some("test"));
        reporter.report_error("Test warning");
        reporter.report_completion("Test completion");
    }

    #[test]
    fn test_new_total_starts_new_bar() {
        let reporter = StderrProgressReporter::new();
        reporter.report_progress(1, 3, Some("runtime"));
        reporter.report_progress(1, 5, Some("compile"));

        let length = reporter
            .progress_bar
            .borrow()
            .as_ref()
            .and_then(ProgressBar::length);
        assert_eq!(length, Some(5));
    }

    #[test]
    fn test_quiet_reporter_creates_no_bar() {
        let reporter = StderrProgressReporter::quiet();
        reporter.report_progress(1, 3, None);
        assert!(reporter.progress_bar.borrow().is_none());
        reporter.report_completion("done");
    }
}
