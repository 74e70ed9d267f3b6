//! Run command implementation
//!
//! Full bootstrap followed by the foreground application. This is what a
//! bare `tumorboot` invocation does.

use std::time::Duration;

use crate::cli::RunArgs;
use crate::commands::helpers::{GlobalOptions, load_project, reporter};
use crate::config::ConfigOverrides;
use crate::error::Result;
use crate::operations::BootstrapOperation;
use crate::process::SystemRunner;
use crate::samples::HttpFetcher;

/// Run run command, returning the application's exit code
pub fn run(options: &GlobalOptions, args: &RunArgs) -> Result<i32> {
    let (root, config) = load_project(options, &ConfigOverrides::from(args))?;
    let reporter = reporter(options);
    let fetcher = HttpFetcher::new(config.download_timeout_secs.map(Duration::from_secs))?;

    let operation =
        BootstrapOperation::new(root, &config, &SystemRunner, &fetcher, reporter.as_ref());
    let (_summary, status) = operation.run()?;

    if !status.success() {
        reporter.detail(&format!("Application finished with {status}"));
    }
    Ok(status.exit_code())
}
