//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - run: Run and setup command arguments
//! - status: Status command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod run;
pub mod status;

pub use completions::CompletionsArgs;
pub use run::{RunArgs, SetupArgs};
pub use status::StatusArgs;

/// tumorboot - Brain Tumor Detector launcher
///
/// Prepare the Python environment and launch the web application.
#[derive(Parser, Debug)]
#[command(
    name = "tumorboot",
    author,
    args_conflicts_with_subcommands = true,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Bootstrap and launch the Brain Tumor Detector web application",
    long_about = "tumorboot creates the project's virtual environment on first use, installs \
                  requirements.txt, runs the database setup program, seeds sample images and \
                  launches the Streamlit application. Without a command it runs everything.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  tumorboot                     \x1b[90m# Bootstrap and launch\x1b[0m\n   \
                  tumorboot run --port 8600     \x1b[90m# Launch on another port\x1b[0m\n   \
                  tumorboot setup               \x1b[90m# Bootstrap without launching\x1b[0m\n   \
                  tumorboot status --json       \x1b[90m# Inspect the project\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project directory (defaults to current directory)
    #[arg(long, short = 'p', global = true, env = "TUMORBOOT_PROJECT")]
    pub project: Option<PathBuf>,

    /// Configuration file (defaults to tumorboot.yaml in the project)
    #[arg(long, short = 'c', global = true, env = "TUMORBOOT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the commands being executed
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress tumorboot's own output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Arguments for the default run when no command is given
    #[command(flatten)]
    pub run: RunArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bootstrap the project and launch the application (default)
    Run(RunArgs),

    /// Bootstrap the project without launching
    Setup(SetupArgs),

    /// Show what has been bootstrapped
    Status(StatusArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
