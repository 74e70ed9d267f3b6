use clap::Parser;

/// Arguments for the status command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show project status:\n    tumorboot status\n\n\
                  Machine readable output:\n    tumorboot status --json")]
pub struct StatusArgs {
    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}
