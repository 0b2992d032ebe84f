use crate::report_generation::domain::DependencyInventory;

/// Configuration reported when none is requested
pub const DEFAULT_REPORTED_CONFIGURATION: &str = "runtime";

/// ReportRequest - Internal request DTO for the report generation use case
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Inventory handed over by the build tool
    pub inventory: DependencyInventory,
    /// Configuration names to report (case-insensitive)
    pub reported_configurations: Vec<String>,
    /// Patterns for excluding artifacts from the report
    pub exclude_patterns: Vec<String>,
}

impl ReportRequest {
    pub fn new(
        inventory: DependencyInventory,
        reported_configurations: Vec<String>,
        exclude_patterns: Vec<String>,
    ) -> Self {
        let reported_configurations = if reported_configurations.is_empty() {
            vec![DEFAULT_REPORTED_CONFIGURATION.to_string()]
        } else {
            reported_configurations
        };
        Self {
            inventory,
            reported_configurations,
            exclude_patterns,
        }
    }
}
