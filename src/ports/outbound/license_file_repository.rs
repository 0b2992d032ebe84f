use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Matched archive entries: entry path -> decoded text, ordered by path
pub type LicenseFiles = BTreeMap<String, String>;

/// LicenseFileRepository port for license-like files bundled in an artifact
pub trait LicenseFileRepository: Send + Sync {
    /// Scans the artifact at `file` for license, notice, copying and readme
    /// entries. An unreadable archive yields an empty map.
    fn scan(&self, file: &Path) -> Arc<LicenseFiles>;
}
