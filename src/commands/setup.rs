//! Setup command implementation
//!
//! Bootstraps the project and prints a summary instead of launching.

use std::time::Duration;

use crate::cli::SetupArgs;
use crate::commands::helpers::{GlobalOptions, load_project, reporter};
use crate::config::ConfigOverrides;
use crate::error::Result;
use crate::operations::{BootstrapOperation, BootstrapSummary, EnvironmentState, SetupOutcome};
use crate::process::SystemRunner;
use crate::samples::{HttpFetcher, SampleReport};
use crate::ui::{RULE_WIDTH, Reporter};

/// Run setup command
pub fn run(options: &GlobalOptions, args: &SetupArgs) -> Result<()> {
    let (root, config) = load_project(options, &ConfigOverrides::from(args))?;
    let reporter = reporter(options);
    let fetcher = HttpFetcher::new(config.download_timeout_secs.map(Duration::from_secs))?;

    let operation =
        BootstrapOperation::new(root, &config, &SystemRunner, &fetcher, reporter.as_ref());
    let summary = operation.setup()?;

    print_summary(reporter.as_ref(), &summary, &config.app_url());
    Ok(())
}

fn print_summary(reporter: &dyn Reporter, summary: &BootstrapSummary, url: &str) {
    reporter.info("");
    reporter.info(&"=".repeat(RULE_WIDTH));
    reporter.info(&summary_line(summary));
    reporter.info(&format!("🎯 Run: tumorboot run  ({url})"));
    reporter.info(&"=".repeat(RULE_WIDTH));
}

fn summary_line(summary: &BootstrapSummary) -> String {
    let environment = match summary.environment {
        EnvironmentState::Created => "created",
        EnvironmentState::Reused => "reused",
    };
    let database = match &summary.setup {
        SetupOutcome::Succeeded => "ok".to_string(),
        SetupOutcome::Failed(status) => format!("failed ({status})"),
        SetupOutcome::NotStarted(_) => "not started".to_string(),
    };
    let samples = match &summary.samples {
        SampleReport::AlreadySeeded { existing } => format!("{existing} present"),
        SampleReport::Seeded { downloaded, failed } if failed.is_empty() => {
            format!("{} downloaded", downloaded.len())
        }
        SampleReport::Seeded { downloaded, failed } => {
            format!("{} downloaded, {} failed", downloaded.len(), failed.len())
        }
    };

    format!("✅ Setup complete: environment {environment}, database {database}, samples {samples}")
}
