//! tumorboot - Brain Tumor Detector launcher
//!
//! Prepares the project's Python virtual environment, installs its
//! requirements, runs the database setup program, seeds sample images and
//! launches the Streamlit web application in the foreground.

use clap::Parser;
use miette::Diagnostic;

mod cli;
mod commands;
mod config;
mod error;
mod operations;
mod process;
mod samples;
mod ui;
mod venv;

use cli::{Cli, Commands};
use commands::helpers::GlobalOptions;
use error::BootstrapError;

fn report_error(e: &BootstrapError) {
    eprintln!("Error: {}", e);
    if let Some(help) = e.help() {
        eprintln!("  help: {}", help);
    }
}

fn main() {
    let cli = Cli::parse();
    let options = GlobalOptions::from(&cli);

    let result = match cli.command {
        None => commands::run::run(&options, &cli.run),
        Some(Commands::Run(args)) => commands::run::run(&options, &args),
        Some(Commands::Setup(args)) => commands::setup::run(&options, &args).map(|()| 0),
        Some(Commands::Status(args)) => commands::status::run(&options, &args).map(|()| 0),
        Some(Commands::Version) => commands::version::run().map(|()| 0),
        Some(Commands::Completions(args)) => commands::completions::run(&args).map(|()| 0),
    };

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            report_error(&e);
            std::process::exit(1);
        }
    }
}
