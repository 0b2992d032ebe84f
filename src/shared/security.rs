use crate::shared::Result;
use std::fs;
use std::path::{Component, Path};

/// Maximum file size for security (100 MB)
/// This prevents DoS attacks via excessively large input files
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - Description of the file (e.g., "dependency inventory")
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(())
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Reads a text file after the regular-file and size checks
pub fn read_checked_file(path: &Path, file_description: &str) -> Result<String> {
    validate_regular_file(path, file_description)?;

    let file_size = fs::metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?
        .len();
    validate_file_size(file_size, path, MAX_FILE_SIZE)?;

    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))
}

/// Validates that a path taken from an archive stays inside the directory it
/// is joined onto: no absolute paths, no root or drive prefixes, no `..`.
///
/// # Security
/// Guards side-file emission against zip-slip style traversal.
pub fn validate_relative_entry_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        anyhow::bail!("Security: archive entry path is empty");
    }
    if path.is_absolute() {
        anyhow::bail!(
            "Security: archive entry path {} is absolute",
            path.display()
        );
    }
    for component in path.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                anyhow::bail!(
                    "Security: archive entry path {} escapes the report directory",
                    path.display()
                );
            }
        }
    }
    Ok(())
}
