use crate::ports::outbound::InventoryReader;
use crate::report_generation::domain::{
    ArtifactRecord, ConfigurationDescriptor, DependencyInventory, ModuleCoordinate,
    ProjectDescriptor, RepositoryDescriptor,
};
use crate::shared::error::ReportError;
use crate::shared::security::read_checked_file;
use crate::shared::Result;
use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct InventoryFile {
    project: ProjectEntry,
    #[serde(default)]
    repositories: Vec<RepositoryDescriptor>,
    #[serde(default)]
    configurations: Vec<ConfigurationEntry>,
}

#[derive(Debug, Deserialize)]
struct ProjectEntry {
    name: String,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ConfigurationEntry {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    extends_from: Vec<String>,
    #[serde(default)]
    artifacts: Vec<ArtifactEntry>,
}

#[derive(Debug, Deserialize)]
struct ArtifactEntry {
    #[serde(default)]
    group: String,
    name: String,
    version: String,
    file: PathBuf,
}

/// FileSystemReader adapter for reading the dependency inventory
///
/// Implements the InventoryReader port over a JSON file written by the build
/// tool. Relative artifact files and local repository roots are resolved
/// against the inventory's own directory.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn into_domain(file: InventoryFile, base_dir: &Path) -> Result<DependencyInventory> {
        let configurations = file
            .configurations
            .into_iter()
            .map(|entry| -> Result<ConfigurationDescriptor> {
                let artifacts = entry
                    .artifacts
                    .into_iter()
                    .map(|artifact| -> Result<ArtifactRecord> {
                        let coordinate = ModuleCoordinate::new(
                            artifact.group,
                            artifact.name,
                            artifact.version,
                        )?;
                        Ok(ArtifactRecord::new(
                            coordinate,
                            resolve_path(base_dir, artifact.file),
                        ))
                    })
                    .collect::<Result<Vec<_>>>()
                    .with_context(|| format!("Invalid artifact in configuration '{}'", entry.name))?;

                let mut configuration = ConfigurationDescriptor::new(entry.name, artifacts)
                    .with_extends_from(entry.extends_from);
                if let Some(description) = entry.description {
                    configuration = configuration.with_description(description);
                }
                Ok(configuration)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(DependencyInventory {
            project: ProjectDescriptor::new(file.project.name, file.project.description),
            repositories: file
                .repositories
                .into_iter()
                .map(|repository| repository.resolve_relative_to(base_dir))
                .collect(),
            configurations,
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryReader for FileSystemReader {
    fn read_inventory(&self, path: &Path) -> Result<DependencyInventory> {
        if !path.exists() {
            return Err(ReportError::InventoryNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "No dependency inventory at \"{}\".\n   \
                     Export one from your build tool, or specify the correct path with the --inventory option.",
                    path.display()
                ),
            }
            .into());
        }

        let content = read_checked_file(path, "dependency inventory")?;

        let file: InventoryFile =
            serde_json::from_str(&content).map_err(|e| ReportError::InventoryParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Self::into_domain(file, base_dir).map_err(|e| {
            ReportError::InventoryParseError {
                path: path.to_path_buf(),
                details: format!("{:#}", e),
            }
            .into()
        })
    }
}

fn resolve_path(base_dir: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base_dir.join(path)
    }
}
