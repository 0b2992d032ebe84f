/// ProgressReporter port for reporting progress during report generation
///
/// This port abstracts user-facing progress output (e.g., to stderr) so the
/// use case can be driven silently in tests and with `--quiet`.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress with a position within a known total
    ///
    /// # Arguments
    /// * `current` - Current progress value
    /// * `total` - Total expected value
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or error message
    fn report_error(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
