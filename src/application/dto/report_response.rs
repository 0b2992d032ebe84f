use std::path::PathBuf;

/// ReportResponse - Internal response DTO from the report generation use case
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportResponse {
    /// Primary document location
    pub output_path: PathBuf,
    /// Names of the configurations that got a section, in report order
    pub configurations: Vec<String>,
    /// Rows written across all sections
    pub artifacts_reported: usize,
    /// Artifacts dropped by exclusion patterns
    pub artifacts_excluded: usize,
    /// Side files written for bundled license files
    pub license_files_linked: usize,
    /// Requested configuration names that matched nothing
    pub unmatched_configurations: Vec<String>,
    /// Exclusion patterns that matched nothing
    pub unmatched_patterns: Vec<String>,
}
