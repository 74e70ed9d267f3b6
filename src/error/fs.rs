//! File system errors

use std::path::Path;

use super::BootstrapError;

/// Creates a directory creation error
pub fn create_dir_failed(path: &Path, err: &std::io::Error) -> BootstrapError {
    BootstrapError::CreateDirFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a directory read error
pub fn read_dir_failed(path: &Path, err: &std::io::Error) -> BootstrapError {
    BootstrapError::ReadDirFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a file write error
pub fn write_failed(path: &Path, reason: impl Into<String>) -> BootstrapError {
    BootstrapError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}
