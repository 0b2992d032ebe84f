use crate::shared::error::ReportError;
use crate::shared::Result;
use std::fmt;
use std::path::{Path, PathBuf};

/// Maximum length for a single coordinate component (security limit)
const MAX_COMPONENT_LENGTH: usize = 255;

/// ModuleCoordinate value object identifying a dependency: (group, name, version).
///
/// Equality is by value; it is the key of every metadata lookup.
/// `name` and `version` become URL and file-name segments, so they must be
/// non-empty and free of path separators. `group` may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleCoordinate {
    group: String,
    name: String,
    version: String,
}

impl ModuleCoordinate {
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Result<Self> {
        let coordinate = Self {
            group: group.into(),
            name: name.into(),
            version: version.into(),
        };
        coordinate.validate()?;
        Ok(coordinate)
    }

    fn validate(&self) -> Result<()> {
        Self::validate_component(self, "group", &self.group, true)?;
        Self::validate_component(self, "name", &self.name, false)?;
        Self::validate_component(self, "version", &self.version, false)?;
        Ok(())
    }

    fn validate_component(
        coordinate: &Self,
        label: &str,
        value: &str,
        allow_empty: bool,
    ) -> Result<()> {
        let invalid = |reason: String| -> anyhow::Error {
            ReportError::InvalidCoordinate {
                coordinate: coordinate.to_string(),
                reason,
            }
            .into()
        };

        if value.is_empty() {
            if allow_empty {
                return Ok(());
            }
            return Err(invalid(format!("{} cannot be empty", label)));
        }

        if value.len() > MAX_COMPONENT_LENGTH {
            return Err(invalid(format!(
                "{} is too long ({} bytes). Maximum allowed: {} bytes",
                label,
                value.len(),
                MAX_COMPONENT_LENGTH
            )));
        }

        // Security: components end up in repository URLs and file names
        if value.contains('/') || value.contains('\\') || value == ".." || value == "." {
            return Err(invalid(format!(
                "{} contains path separators or relative path markers",
                label
            )));
        }

        if value.chars().any(|c| c.is_control() || c.is_whitespace()) {
            return Err(invalid(format!(
                "{} contains whitespace or control characters",
                label
            )));
        }

        Ok(())
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Group split into path segments (`org.example` -> `["org", "example"]`).
    /// Empty for an empty group.
    pub fn group_segments(&self) -> Vec<&str> {
        self.group.split('.').filter(|s| !s.is_empty()).collect()
    }
}

impl fmt::Display for ModuleCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}

/// ArtifactRecord - a resolved dependency and the binary backing it.
///
/// Supplied by the build tool; the report never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRecord {
    coordinate: ModuleCoordinate,
    file: PathBuf,
}

impl ArtifactRecord {
    pub fn new(coordinate: ModuleCoordinate, file: PathBuf) -> Self {
        Self { coordinate, file }
    }

    pub fn coordinate(&self) -> &ModuleCoordinate {
        &self.coordinate
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Name used for the artifact's row and side-file directory
    pub fn name(&self) -> &str {
        self.coordinate.name()
    }

    /// Ensures the backing binary exists before any license lookup runs.
    ///
    /// This is the only failure that aborts a report: without the binary no
    /// license determination is possible.
    pub fn ensure_materialized(&self) -> Result<&Path> {
        if self.file.is_file() {
            Ok(&self.file)
        } else {
            Err(ReportError::ArtifactUnavailable {
                coordinate: self.coordinate.to_string(),
                path: self.file.clone(),
            }
            .into())
        }
    }
}
