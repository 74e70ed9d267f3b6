//! Operations module for bootstrapping and inspecting a project
//!
//! This module provides high-level operations that coordinate:
//! - BootstrapOperation: Environment, dependencies, database, samples, launch
//! - StatusOperation: Read-only report of the project layout
//!
//! The operations coordinate with:
//! - Virtual environment layout (from venv module)
//! - Subprocess execution (from process module)
//! - Sample downloads (from samples module)
//! - UI: Console reporting (from ui module)

pub mod bootstrap;
pub mod status;

pub use bootstrap::{BootstrapOperation, BootstrapSummary, EnvironmentState, SetupOutcome};
pub use status::{StatusOperation, StatusReport};
