use crate::adapters::outbound::html::HtmlReportWriter;
use crate::report_generation::domain::ReportMetadata;
use std::path::{Path, PathBuf};

/// Default location of the primary document, relative to the working directory
pub const DEFAULT_OUTPUT_PATH: &str = "build/reports/dependency-license/index.html";

const INDEX_FILE_NAME: &str = "index.html";

/// Factory for creating the report document writer
///
/// Decides where the primary document lands and what it is titled, then
/// hands back the HTML adapter. It belongs in the application layer as it
/// selects the infrastructure adapter based on application needs.
pub struct ReportWriterFactory;

impl ReportWriterFactory {
    /// Creates a writer for `project_name`'s report at `output`
    ///
    /// # Examples
    /// ```
    /// use dependency_license_report::application::factories::ReportWriterFactory;
    /// use dependency_license_report::report_generation::services::ReportMetadataGenerator;
    /// use std::path::Path;
    ///
    /// let metadata = ReportMetadataGenerator::generate_default_metadata();
    /// let writer = ReportWriterFactory::create(Path::new("out"), "demo", &metadata);
    /// assert_eq!(writer.path(), Path::new("out/index.html"));
    /// ```
    pub fn create(output: &Path, project_name: &str, metadata: &ReportMetadata) -> HtmlReportWriter {
        HtmlReportWriter::new(
            Self::resolve_output_path(output),
            &Self::title(project_name),
            metadata,
        )
    }

    /// Appends `index.html` to directories and to paths without an HTML extension
    ///
    /// # Examples
    /// ```
    /// use dependency_license_report::application::factories::ReportWriterFactory;
    /// use std::path::{Path, PathBuf};
    ///
    /// assert_eq!(
    ///     ReportWriterFactory::resolve_output_path(Path::new("report.HTM")),
    ///     PathBuf::from("report.HTM")
    /// );
    /// ```
    pub fn resolve_output_path(output: &Path) -> PathBuf {
        let has_html_extension = output
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
            .unwrap_or(false);

        if output.is_dir() || !has_html_extension {
            output.join(INDEX_FILE_NAME)
        } else {
            output.to_path_buf()
        }
    }

    /// Document title for a project
    pub fn title(project_name: &str) -> String {
        format!("{} Third Party Dependency License Report", project_name)
    }
}
