//! Configuration file handling for tumorboot
//!
//! This module contains data structures for:
//! - `tumorboot.yaml` - Project layout, interpreter, sample images and bind address

pub mod project;

// Re-export commonly used types
pub use project::{CONFIG_FILE_NAME, ConfigOverrides, ProjectConfig, SampleImage};
