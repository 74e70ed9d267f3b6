//! Error types and handling for tumorboot
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructor helpers are grouped by error domain:
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors
//! - [`process`]: Subprocess errors

pub mod config;
pub mod fs;
pub mod process;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for tumorboot operations
#[derive(Error, Diagnostic, Debug)]
pub enum BootstrapError {
    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(tumorboot::config::not_found),
        help("Pass an existing file with --config or drop the flag to use tumorboot.yaml")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(tumorboot::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(tumorboot::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(tumorboot::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // Project errors
    #[error("Project directory not found: {path}")]
    #[diagnostic(
        code(tumorboot::project::not_found),
        help("Run tumorboot from the application directory or pass --project")
    )]
    ProjectNotFound { path: String },

    // Process errors
    #[error("Failed to start '{program}': {reason}")]
    #[diagnostic(
        code(tumorboot::process::spawn_failed),
        help("Check that the program is installed and on PATH, or set it with --python")
    )]
    CommandSpawnFailed { program: String, reason: String },

    #[error("Command failed with {status}: {command}")]
    #[diagnostic(code(tumorboot::process::failed))]
    CommandFailed { command: String, status: String },

    // HTTP errors
    #[error("Download failed: {url}: {reason}")]
    #[diagnostic(code(tumorboot::http::download_failed))]
    DownloadFailed { url: String, reason: String },

    // File system errors
    #[error("Failed to create directory: {path}: {reason}")]
    #[diagnostic(code(tumorboot::fs::create_dir_failed))]
    CreateDirFailed { path: String, reason: String },

    #[error("Failed to read directory: {path}: {reason}")]
    #[diagnostic(code(tumorboot::fs::read_dir_failed))]
    ReadDirFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(tumorboot::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(tumorboot::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for BootstrapError {
    fn from(err: std::io::Error) -> Self {
        BootstrapError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for BootstrapError {
    fn from(err: serde_yaml::Error) -> Self {
        BootstrapError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for BootstrapError {
    fn from(err: serde_json::Error) -> Self {
        BootstrapError::IoError {
            message: format!("Failed to serialize JSON: {err}"),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BootstrapError>;
