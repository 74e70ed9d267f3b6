//! Subprocess and download errors

use super::BootstrapError;

/// Creates a spawn failure error
pub fn spawn_failed(program: impl Into<String>, err: &std::io::Error) -> BootstrapError {
    BootstrapError::CommandSpawnFailed {
        program: program.into(),
        reason: err.to_string(),
    }
}

/// Creates a nonzero-exit error
pub fn failed(command: impl Into<String>, status: impl ToString) -> BootstrapError {
    BootstrapError::CommandFailed {
        command: command.into(),
        status: status.to_string(),
    }
}

/// Creates a download failure error
pub fn download_failed(url: impl Into<String>, reason: impl ToString) -> BootstrapError {
    BootstrapError::DownloadFailed {
        url: url.into(),
        reason: reason.to_string(),
    }
}
