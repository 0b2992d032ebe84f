mod artifact_filter;
mod configuration_selector;
mod report_metadata_generator;

pub use artifact_filter::ArtifactFilter;
pub use configuration_selector::{ConfigurationSelection, ConfigurationSelector};
pub use report_metadata_generator::{ReportMetadataGenerator, TOOL_NAME};
