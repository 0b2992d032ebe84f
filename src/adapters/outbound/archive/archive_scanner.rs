use crate::adapters::outbound::cache::{ResolutionCache, RetentionPolicy};
use crate::ports::outbound::{LicenseFileRepository, LicenseFiles};
use crate::report_generation::policies::LicenseFilePolicy;
use crate::shared::security::MAX_FILE_SIZE;
use crate::shared::Result;
use anyhow::Context;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use zip::ZipArchive;

/// ArchiveScanner adapter: extracts license-like entries from artifacts.
///
/// Results are cached per artifact path. An archive that cannot be read
/// yields an empty map; that outcome is not cached, so a later scan retries.
pub struct ArchiveScanner {
    cache: ResolutionCache<PathBuf, LicenseFiles>,
}

impl ArchiveScanner {
    pub fn new() -> Self {
        Self::with_retention(RetentionPolicy::Unbounded)
    }

    pub fn with_retention(retention: RetentionPolicy) -> Self {
        Self {
            cache: ResolutionCache::with_retention(retention),
        }
    }

    fn read_license_files(path: &Path) -> Result<LicenseFiles> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open archive {}", path.display()))?;
        let mut archive = ZipArchive::new(BufReader::new(file))
            .with_context(|| format!("{} is not a readable archive", path.display()))?;

        let mut found = LicenseFiles::new();
        for index in 0..archive.len() {
            let mut entry = archive.by_index(index)?;
            if entry.is_dir() || !LicenseFilePolicy::is_license_file(entry.name()) {
                continue;
            }
            if entry.size() > MAX_FILE_SIZE {
                tracing::debug!(entry = entry.name(), size = entry.size(), "skipping oversized entry");
                continue;
            }

            let name = entry.name().to_string();
            let bytes = read_bounded(&mut entry, MAX_FILE_SIZE)
                .with_context(|| format!("Failed to read entry {}", name))?;
            match bytes {
                Some(bytes) => {
                    found.insert(name, String::from_utf8_lossy(&bytes).into_owned());
                }
                None => tracing::debug!(entry = %name, "entry inflates past its declared size"),
            }
        }

        Ok(found)
    }
}

/// Reads at most `limit` bytes; `None` if the source holds more than that.
///
/// The size an archive entry declares is not trusted.
fn read_bounded<R: Read>(reader: &mut R, limit: u64) -> std::io::Result<Option<Vec<u8>>> {
    let mut bytes = Vec::new();
    reader.by_ref().take(limit + 1).read_to_end(&mut bytes)?;
    if bytes.len() as u64 > limit {
        return Ok(None);
    }
    Ok(Some(bytes))
}

impl Default for ArchiveScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl LicenseFileRepository for ArchiveScanner {
    fn scan(&self, file: &Path) -> Arc<LicenseFiles> {
        self.cache
            .get_or_try_compute(&file.to_path_buf(), |path| Self::read_license_files(path))
            .unwrap_or_else(|e| {
                tracing::debug!(file = %file.display(), error = %format!("{:#}", e), "archive scan failed");
                Arc::new(LicenseFiles::new())
            })
    }
}
