//! Configuration file support for dependency-license-report.
//!
//! Provides YAML-based configuration through `dependency-license-report.config.yml`
//! files, including data structures, file loading, validation, and merging
//! with command-line values.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::report_generation::domain::RepositoryDescriptor;
use crate::shared::security::read_checked_file;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "dependency-license-report.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub output: Option<PathBuf>,
    pub reported_configurations: Option<Vec<String>>,
    pub exclude_artifacts: Option<Vec<String>>,
    pub timeout_secs: Option<u64>,
    /// Appended after the inventory's repositories.
    pub repositories: Option<Vec<RepositoryDescriptor>>,
    pub cache: Option<CacheConfig>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Cache retention settings.
#[derive(Debug, Deserialize, Default)]
pub struct CacheConfig {
    pub max_entries: Option<usize>,
}

impl ConfigFile {
    pub fn max_cache_entries(&self) -> Option<usize> {
        self.cache.as_ref().and_then(|cache| cache.max_entries)
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
///
/// Relative `local_directory` roots resolve against the config file's directory.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_checked_file(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let mut config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    config.repositories = config.repositories.map(|repositories| {
        repositories
            .into_iter()
            .map(|repository| repository.resolve_relative_to(base_dir))
            .collect()
    });

    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.timeout_secs == Some(0) {
        bail!(
            "Invalid config: timeout_secs must be greater than 0.\n\n\
             💡 Hint: Remove the field to use the default of 10 seconds."
        );
    }
    if config.max_cache_entries() == Some(0) {
        bail!(
            "Invalid config: cache.max_entries must be greater than 0.\n\n\
             💡 Hint: Remove the field to keep every cached entry."
        );
    }
    if let Some(ref names) = config.reported_configurations {
        for (i, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                bail!(
                    "Invalid config: reported_configurations[{}] must not be empty.",
                    i
                );
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Settings after merging command-line values over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveSettings {
    pub output: PathBuf,
    pub reported_configurations: Vec<String>,
    pub exclude_artifacts: Vec<String>,
    pub timeout_secs: Option<u64>,
    pub max_cache_entries: Option<usize>,
    pub repositories: Vec<RepositoryDescriptor>,
}

/// Command-line values that may override the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub output: Option<PathBuf>,
    pub reported_configurations: Vec<String>,
    pub exclude_artifacts: Vec<String>,
    pub timeout_secs: Option<u64>,
}

/// Merges CLI values over config values.
///
/// Scalars from the CLI win when given. Non-empty CLI lists replace the
/// config's lists rather than extending them.
pub fn merge_settings(
    cli: CliOverrides,
    config: Option<ConfigFile>,
    default_output: &Path,
) -> EffectiveSettings {
    let config = config.unwrap_or_default();
    let max_cache_entries = config.max_cache_entries();

    let pick_list = |from_cli: Vec<String>, from_config: Option<Vec<String>>| {
        if from_cli.is_empty() {
            from_config.unwrap_or_default()
        } else {
            from_cli
        }
    };

    EffectiveSettings {
        output: cli
            .output
            .or(config.output)
            .unwrap_or_else(|| default_output.to_path_buf()),
        reported_configurations: pick_list(
            cli.reported_configurations,
            config.reported_configurations,
        ),
        exclude_artifacts: pick_list(cli.exclude_artifacts, config.exclude_artifacts),
        timeout_secs: cli.timeout_secs.or(config.timeout_secs),
        max_cache_entries,
        repositories: config.repositories.unwrap_or_default(),
    }
}
