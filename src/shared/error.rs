use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish argument mistakes from
/// failures that happened while producing the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the report was written (possibly with blank cells)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable inventory, missing artifact, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for license report generation.
///
/// Missing metadata and unreadable archives are never errors; they render
/// as blank cells. Everything here aborts the run.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Dependency inventory not found: {path}\n\n💡 Hint: {suggestion}")]
    InventoryNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse dependency inventory: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the inventory is valid JSON in the documented shape")]
    InventoryParseError { path: PathBuf, details: String },

    #[error("Invalid module coordinate '{coordinate}': {reason}")]
    InvalidCoordinate { coordinate: String, reason: String },

    #[error("Artifact binary for {coordinate} is not available: {path}\n\n💡 Hint: Make sure the build tool has downloaded every resolved artifact before generating the report")]
    ArtifactUnavailable { coordinate: String, path: PathBuf },

    #[error("Report writer for {path} was used after it was closed")]
    WriterClosed { path: PathBuf },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that you have write permissions for the report directory")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Validation error for configuration and builder inputs
    #[error("Validation error: {message}")]
    Validation { message: String },
}
