//! Command implementations for tumorboot CLI

pub mod completions;
pub mod helpers;
pub mod run;
pub mod setup;
pub mod status;
pub mod version;
