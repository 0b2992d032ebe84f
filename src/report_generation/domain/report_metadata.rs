use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

/// ReportMetadata value object: provenance stamped into a report's head.
///
/// Two runs over the same inventory produce identical tables, so the
/// generation instant and a random report id are what tell their documents
/// apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportMetadata {
    generated_at: DateTime<Utc>,
    tool_name: String,
    tool_version: String,
    report_id: Uuid,
}

impl ReportMetadata {
    pub fn new(
        generated_at: DateTime<Utc>,
        tool_name: impl Into<String>,
        tool_version: impl Into<String>,
        report_id: Uuid,
    ) -> Self {
        Self {
            generated_at,
            tool_name: tool_name.into(),
            tool_version: tool_version.into(),
            report_id,
        }
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Generation instant as RFC 3339 with whole seconds
    pub fn timestamp(&self) -> String {
        self.generated_at.to_rfc3339_opts(SecondsFormat::Secs, false)
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    /// `<tool name> <tool version>`, as shown in the generator meta tag
    pub fn generator(&self) -> String {
        format!("{} {}", self.tool_name, self.tool_version)
    }

    pub fn report_id(&self) -> Uuid {
        self.report_id
    }

    /// Report id in `urn:uuid:` form
    pub fn report_urn(&self) -> String {
        self.report_id.urn().to_string()
    }
}
