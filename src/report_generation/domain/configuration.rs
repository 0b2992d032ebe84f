use super::coordinate::ArtifactRecord;
use super::repository::RepositoryDescriptor;

/// The project the report is written for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescriptor {
    pub name: String,
    pub description: Option<String>,
}

impl ProjectDescriptor {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description: description.filter(|d| !d.trim().is_empty()),
        }
    }
}

/// A build configuration (e.g. `runtime`) and the artifacts resolved for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationDescriptor {
    pub name: String,
    pub description: Option<String>,
    pub extends_from: Vec<String>,
    pub artifacts: Vec<ArtifactRecord>,
}

impl ConfigurationDescriptor {
    pub fn new(name: impl Into<String>, artifacts: Vec<ArtifactRecord>) -> Self {
        Self {
            name: name.into(),
            description: None,
            extends_from: Vec::new(),
            artifacts,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = if description.trim().is_empty() {
            None
        } else {
            Some(description)
        };
        self
    }

    pub fn with_extends_from(mut self, extends_from: Vec<String>) -> Self {
        self.extends_from = extends_from;
        self
    }
}

/// DependencyInventory - everything the build tool hands over: the project,
/// its configured repositories, and its configurations in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyInventory {
    pub project: ProjectDescriptor,
    pub repositories: Vec<RepositoryDescriptor>,
    pub configurations: Vec<ConfigurationDescriptor>,
}

impl DependencyInventory {
    pub fn artifact_count(&self) -> usize {
        self.configurations.iter().map(|c| c.artifacts.len()).sum()
    }
}
