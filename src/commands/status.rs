//! Status command implementation
//!
//! Shows which parts of the project have been bootstrapped.

use console::Style;

use crate::cli::StatusArgs;
use crate::commands::helpers::{GlobalOptions, load_project};
use crate::config::ConfigOverrides;
use crate::error::Result;
use crate::operations::status::PathStatus;
use crate::operations::{StatusOperation, StatusReport};

/// Run status command
pub fn run(options: &GlobalOptions, args: &StatusArgs) -> Result<()> {
    let (root, config) = load_project(options, &ConfigOverrides::default())?;
    let report = StatusOperation::new(&root, &config).execute()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_report(&report);
    }
    Ok(())
}

fn mark(status: &PathStatus) -> String {
    if status.present {
        Style::new().green().apply_to("✓").to_string()
    } else {
        Style::new().red().apply_to("✗").to_string()
    }
}

fn display_report(report: &StatusReport) {
    println!(
        "{} {}",
        Style::new().bold().apply_to("Project:"),
        report.project.display()
    );
    println!();

    let rows = [
        ("Virtual environment", &report.venv),
        ("Interpreter", &report.interpreter),
        ("Requirements", &report.requirements),
        ("Setup script", &report.setup_script),
        ("Application", &report.app),
        ("Database", &report.database),
        ("Dataset", &report.dataset),
        ("Sample directory", &report.sample_dir),
    ];
    for (label, status) in rows {
        println!(
            "  {} {:<20} {}",
            mark(status),
            label,
            Style::new().dim().apply_to(status.path.display())
        );
    }

    println!();
    println!(
        "{} {}",
        Style::new().bold().apply_to("Sample images:"),
        report.sample_images.len()
    );
    for name in &report.sample_images {
        println!("  {}", name);
    }
    println!("{} {}", Style::new().bold().apply_to("URL:"), report.url);

    if !report.is_ready() {
        println!();
        println!("Run 'tumorboot setup' to bootstrap the project.");
    }
}
