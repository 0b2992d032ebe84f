use crate::report_generation::domain::ReportMetadata;
use chrono::Utc;
use uuid::Uuid;

/// Tool name stamped into every generated report
pub const TOOL_NAME: &str = "dependency-license-report";

/// ReportMetadataGenerator service for generating report metadata
pub struct ReportMetadataGenerator;

impl ReportMetadataGenerator {
    /// Generates metadata with the current UTC timestamp and a fresh report id
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> ReportMetadata {
        ReportMetadata::new(Utc::now(), tool_name, tool_version, Uuid::new_v4())
    }

    /// Generates metadata using this crate's name and compile-time version
    pub fn generate_default_metadata() -> ReportMetadata {
        Self::generate_metadata(TOOL_NAME, env!("CARGO_PKG_VERSION"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_metadata() {
        let metadata = ReportMetadataGenerator::generate_metadata("test-tool", "1.0.0");

        assert_eq!(metadata.tool_name(), "test-tool");
        assert_eq!(metadata.tool_version(), "1.0.0");
        assert!(metadata.report_urn().starts_with("urn:uuid:"));
        assert!(chrono::DateTime::parse_from_rfc3339(&metadata.timestamp()).is_ok());
    }

    #[test]
    fn test_generate_default_metadata() {
        let metadata = ReportMetadataGenerator::generate_default_metadata();
        assert_eq!(metadata.tool_name(), TOOL_NAME);
        assert_eq!(metadata.tool_version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_report_ids_are_unique() {
        let first = ReportMetadataGenerator::generate_default_metadata();
        let second = ReportMetadataGenerator::generate_default_metadata();
        assert_ne!(first.report_id(), second.report_id());

        assert_eq!(first.report_id().get_version_num(), 4);
    }
}
