//! Command helper utilities

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{ConfigOverrides, ProjectConfig};
use crate::error::{BootstrapError, Result};
use crate::ui::{ConsoleReporter, Reporter, SilentReporter};

/// Global options shared by every command
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub project: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub verbose: bool,
    pub quiet: bool,
}

impl From<&Cli> for GlobalOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            project: cli.project.clone(),
            config: cli.config.clone(),
            verbose: cli.verbose,
            quiet: cli.quiet,
        }
    }
}

/// Resolve project path from optional argument
///
/// If a project path is provided, use it. Otherwise,
/// resolve to the current directory. The result is absolute.
pub fn resolve_project_path(project: Option<PathBuf>) -> Result<PathBuf> {
    let path = match project {
        Some(path) => path,
        None => std::env::current_dir().map_err(|e| BootstrapError::IoError {
            message: format!("Failed to get current directory: {}", e),
        })?,
    };

    if !path.is_dir() {
        return Err(BootstrapError::ProjectNotFound {
            path: path.display().to_string(),
        });
    }

    dunce::canonicalize(&path).map_err(|e| BootstrapError::IoError {
        message: format!("Failed to resolve {}: {}", path.display(), e),
    })
}

/// Project root and its effective configuration
pub fn load_project(
    options: &GlobalOptions,
    overrides: &ConfigOverrides,
) -> Result<(PathBuf, ProjectConfig)> {
    let root = resolve_project_path(options.project.clone())?;
    let mut config = ProjectConfig::load(&root, options.config.as_deref())?;
    config.apply_overrides(overrides);
    config.validate()?;
    Ok((root, config))
}

/// Reporter matching --quiet / --verbose
pub fn reporter(options: &GlobalOptions) -> Box<dyn Reporter> {
    if options.quiet {
        Box::new(SilentReporter)
    } else {
        Box::new(ConsoleReporter::new(options.verbose))
    }
}
