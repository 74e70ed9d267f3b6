//! Console presentation layer
//!
//! This module handles:
//! - Banners and step lines printed while bootstrapping
//! - Warnings for failures that do not stop the pipeline
//! - Verbose echo of executed commands
//! - A spinner while a download is in flight
//!
//! All output goes through the [`Reporter`] trait, so the pipeline can be
//! driven silently in tests or with different verbosity from the CLI.

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Width of the `=` rule printed under banners
pub const RULE_WIDTH: usize = 50;

/// Output sink for bootstrap progress
pub trait Reporter {
    /// Prominent heading line
    fn banner(&self, message: &str);

    /// Start of a pipeline step
    fn step(&self, message: &str);

    /// Plain informational line
    fn info(&self, message: &str);

    /// Non-fatal problem, printed on stderr
    fn warn(&self, message: &str);

    /// Only shown with --verbose
    fn detail(&self, message: &str);

    /// Spinner shown for a long-running operation; hidden when not interactive
    fn spinner(&self, message: &str) -> ProgressBar {
        let _ = message;
        ProgressBar::hidden()
    }
}

/// Reporter printing styled lines to the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter {
    verbose: bool,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Reporter for ConsoleReporter {
    fn banner(&self, message: &str) {
        println!("{}", Style::new().bold().apply_to(message));
        println!("{}", "=".repeat(RULE_WIDTH));
    }

    fn step(&self, message: &str) {
        println!("{}", Style::new().cyan().apply_to(message));
    }

    fn info(&self, message: &str) {
        println!("{message}");
    }

    fn warn(&self, message: &str) {
        eprintln!("{} {}", Style::new().yellow().bold().apply_to("⚠️"), message);
    }

    fn detail(&self, message: &str) {
        if self.verbose {
            println!("  {}", Style::new().dim().apply_to(message));
        }
    }

    fn spinner(&self, message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("  {spinner:.cyan} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }
}

/// Reporter that discards everything, used for --quiet
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn banner(&self, _message: &str) {
        // No-op for silent mode
    }

    fn step(&self, _message: &str) {
        // No-op for silent mode
    }

    fn info(&self, _message: &str) {
        // No-op for silent mode
    }

    fn warn(&self, _message: &str) {
        // No-op for silent mode
    }

    fn detail(&self, _message: &str) {
        // No-op for silent mode
    }
}
