use crate::application::dto::{ReportRequest, ReportResponse};
use crate::ports::outbound::{
    LicenseFileRepository, MetadataRepository, ProgressReporter, ReportDocumentWriter, TextStyle,
};
use crate::report_generation::domain::{
    ArtifactRecord, ConfigurationDescriptor, LicenseRef, PomData, ProjectDescriptor,
};
use crate::report_generation::services::{ArtifactFilter, ConfigurationSelector};
use crate::shared::security::validate_relative_entry_path;
use crate::shared::Result;
use std::path::Path;

/// Column headers of every configuration table
pub const COLUMN_HEADERS: [&str; 6] = [
    "Name",
    "Version",
    "Organization",
    "License URL",
    "License",
    "Files",
];

/// GenerateReportUseCase - Core use case for license report generation
///
/// Walks the selected configurations in inventory order and writes one
/// table row per artifact. Metadata and bundled license files are looked up
/// through the injected repositories; missing information becomes an empty
/// cell. The only per-artifact failure that aborts the report is a missing
/// artifact binary.
///
/// # Type Parameters
/// * `MR` - MetadataRepository implementation
/// * `LR` - LicenseFileRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateReportUseCase<MR, LR, PR> {
    metadata_repository: MR,
    license_file_repository: LR,
    progress_reporter: PR,
}

impl<MR, LR, PR> GenerateReportUseCase<MR, LR, PR>
where
    MR: MetadataRepository,
    LR: LicenseFileRepository,
    PR: ProgressReporter,
{
    /// Creates a new GenerateReportUseCase with injected dependencies
    pub fn new(metadata_repository: MR, license_file_repository: LR, progress_reporter: PR) -> Self {
        Self {
            metadata_repository,
            license_file_repository,
            progress_reporter,
        }
    }

    /// Executes the report generation use case
    ///
    /// The writer is closed before returning, whether rendering succeeded
    /// or not.
    pub fn execute<W: ReportDocumentWriter>(
        &self,
        request: ReportRequest,
        writer: &mut W,
    ) -> Result<ReportResponse> {
        let rendered = self.render(&request, writer);
        let closed = writer.close();
        let response = rendered?;
        closed?;

        self.progress_reporter.report_completion(&format!(
            "✅ License report for {} artifact(s) written to: {}",
            response.artifacts_reported,
            response.output_path.display()
        ));
        Ok(response)
    }

    fn render<W: ReportDocumentWriter>(
        &self,
        request: &ReportRequest,
        writer: &mut W,
    ) -> Result<ReportResponse> {
        // Validate patterns before anything is written
        let filter = ArtifactFilter::new(request.exclude_patterns.clone())?;

        let selection = ConfigurationSelector::select(
            &request.inventory.configurations,
            &request.reported_configurations,
        );
        for name in &selection.unmatched_names {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Configuration '{}' does not exist in the inventory.",
                name
            ));
        }

        let mut response = ReportResponse {
            output_path: writer.document_path().to_path_buf(),
            unmatched_configurations: selection.unmatched_names.clone(),
            ..ReportResponse::default()
        };

        self.write_project_header(&request.inventory.project, writer)?;
        for configuration in &selection.selected {
            self.write_configuration(configuration, &filter, writer, &mut response)?;
        }

        response.unmatched_patterns = filter.unmatched_patterns();
        for pattern in &response.unmatched_patterns {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Exclude pattern '{}' did not match any artifacts.",
                pattern
            ));
        }

        Ok(response)
    }

    fn write_project_header<W: ReportDocumentWriter>(
        &self,
        project: &ProjectDescriptor,
        writer: &mut W,
    ) -> Result<()> {
        writer.reset_heading_level(1);
        writer.with_style(TextStyle::Header)?;
        writer.text(&project.name)?;
        if let Some(description) = &project.description {
            writer.with_style(TextStyle::Normal)?;
            writer.text(description)?;
        }
        writer.with_style(TextStyle::None)
    }

    fn write_configuration<W: ReportDocumentWriter>(
        &self,
        configuration: &ConfigurationDescriptor,
        filter: &ArtifactFilter,
        writer: &mut W,
        response: &mut ReportResponse,
    ) -> Result<()> {
        let artifacts = filter.filter_artifacts(&configuration.artifacts);
        let excluded = configuration.artifacts.len() - artifacts.len();
        if excluded > 0 {
            self.progress_reporter.report(&format!(
                "🚫 Excluded {} artifact(s) from '{}' based on filters",
                excluded, configuration.name
            ));
        }

        writer.reset_heading_level(2);
        writer.with_style(TextStyle::Header)?;
        writer.text(&configuration.name)?;
        if let Some(description) = &configuration.description {
            writer.with_style(TextStyle::Normal)?;
            writer.text(description)?;
        }

        writer.start_table()?;
        writer.start_row()?;
        for header in COLUMN_HEADERS {
            writer.header_cell(header)?;
        }
        writer.end_row()?;

        let total = artifacts.len();
        for (index, artifact) in artifacts.iter().enumerate() {
            self.progress_reporter.report_progress(
                index + 1,
                total,
                Some(&format!("{}: {}", configuration.name, artifact.coordinate())),
            );
            response.license_files_linked += self.write_artifact(artifact, writer)?;
        }

        writer.end_table()?;
        writer.line_break()?;

        response.configurations.push(configuration.name.clone());
        response.artifacts_reported += total;
        response.artifacts_excluded += excluded;
        Ok(())
    }

    /// Writes one row; returns the number of side files written
    fn write_artifact<W: ReportDocumentWriter>(
        &self,
        artifact: &ArtifactRecord,
        writer: &mut W,
    ) -> Result<usize> {
        let file = artifact.ensure_materialized()?;
        let coordinate = artifact.coordinate();

        writer.reset_heading_level(3);
        writer.start_row()?;

        writer.start_cell()?;
        writer.with_style(TextStyle::Header)?;
        writer.text(artifact.name())?;
        writer.end_cell()?;
        writer.cell(coordinate.version())?;
        writer.cell(coordinate.group())?;

        let metadata = self.metadata_repository.resolve(coordinate);
        Self::write_urls(metadata.as_deref(), writer)?;
        Self::write_licenses(metadata.as_deref(), writer)?;
        let linked = self.write_files(artifact, file, writer)?;

        writer.end_row()?;
        Ok(linked)
    }

    fn write_urls<W: ReportDocumentWriter>(metadata: Option<&PomData>, writer: &mut W) -> Result<()> {
        writer.start_cell()?;
        for (index, url) in metadata.into_iter().flat_map(|data| data.urls()).enumerate() {
            if index > 0 {
                writer.line_break()?;
            }
            writer.link(url, url)?;
        }
        writer.end_cell()
    }

    fn write_licenses<W: ReportDocumentWriter>(
        metadata: Option<&PomData>,
        writer: &mut W,
    ) -> Result<()> {
        writer.start_cell()?;
        for (index, license) in metadata.into_iter().flat_map(|data| data.licenses()).enumerate() {
            if index > 0 {
                writer.line_break()?;
            }
            Self::write_license(license, writer)?;
        }
        writer.end_cell()
    }

    fn write_license<W: ReportDocumentWriter>(license: &LicenseRef, writer: &mut W) -> Result<()> {
        match (license.name(), license.url()) {
            (name, Some(url)) => writer.link(name.unwrap_or(url), url),
            (Some(name), None) => writer.text(name),
            (None, None) => Ok(()),
        }
    }

    fn write_files<W: ReportDocumentWriter>(
        &self,
        artifact: &ArtifactRecord,
        file: &Path,
        writer: &mut W,
    ) -> Result<usize> {
        let files = self.license_file_repository.scan(file);
        let mut linked = 0;

        writer.start_cell()?;
        for (index, (entry, content)) in files.iter().enumerate() {
            if index > 0 {
                writer.line_break()?;
            }
            let relative_name = format!("{}/{}", artifact.name(), entry);
            if validate_relative_entry_path(Path::new(&relative_name)).is_err() {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Warning: Not extracting '{}' from {}: path escapes the report directory.",
                    entry,
                    artifact.coordinate()
                ));
                writer.text(entry)?;
                continue;
            }
            writer.link_to_content(entry, &relative_name, content)?;
            linked += 1;
        }
        writer.end_cell()?;

        Ok(linked)
    }
}
