use dependency_license_report::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Mock LicenseFileRepository for testing
#[derive(Default)]
pub struct MockLicenseFileRepository {
    pub files: HashMap<PathBuf, LicenseFiles>,
}

impl MockLicenseFileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, artifact: &Path, entry: &str, content: &str) -> Self {
        self.files
            .entry(artifact.to_path_buf())
            .or_default()
            .insert(entry.to_string(), content.to_string());
        self
    }
}

impl LicenseFileRepository for MockLicenseFileRepository {
    fn scan(&self, file: &Path) -> Arc<LicenseFiles> {
        Arc::new(self.files.get(file).cloned().unwrap_or_default())
    }
}
