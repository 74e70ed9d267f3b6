//! Status operation
//!
//! Read-only report of what a bootstrap run has produced so far.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::ProjectConfig;
use crate::error::Result;
use crate::operations::bootstrap::resolve;
use crate::venv::VirtualEnv;

/// Extensions the application's sample picker offers
const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Presence of a file or directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathStatus {
    pub path: PathBuf,
    pub present: bool,
}

impl PathStatus {
    fn file(path: PathBuf) -> Self {
        let present = path.is_file();
        Self { path, present }
    }

    fn dir(path: PathBuf) -> Self {
        let present = path.is_dir();
        Self { path, present }
    }
}

/// Snapshot of a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub project: PathBuf,
    pub venv: PathStatus,
    pub interpreter: PathStatus,
    pub requirements: PathStatus,
    pub setup_script: PathStatus,
    pub app: PathStatus,
    pub database: PathStatus,
    pub dataset: PathStatus,
    pub sample_dir: PathStatus,
    pub sample_images: Vec<String>,
    pub url: String,
}

impl StatusReport {
    /// Whether a plain `run` would launch without creating anything
    pub fn is_ready(&self) -> bool {
        self.venv.present && self.interpreter.present && !self.sample_images.is_empty()
    }
}

/// Builds a [`StatusReport`]
pub struct StatusOperation<'a> {
    root: &'a Path,
    config: &'a ProjectConfig,
}

impl<'a> StatusOperation<'a> {
    pub fn new(root: &'a Path, config: &'a ProjectConfig) -> Self {
        Self { root, config }
    }

    pub fn execute(&self) -> Result<StatusReport> {
        let venv = VirtualEnv::new(resolve(self.root, &self.config.venv_dir));
        let sample_dir = resolve(self.root, &self.config.sample_dir);
        let sample_images = if sample_dir.is_dir() {
            list_images(&sample_dir)?
        } else {
            Vec::new()
        };

        Ok(StatusReport {
            project: self.root.to_path_buf(),
            venv: PathStatus::dir(venv.root().to_path_buf()),
            interpreter: PathStatus::file(venv.python()),
            requirements: PathStatus::file(resolve(self.root, &self.config.requirements)),
            setup_script: PathStatus::file(resolve(self.root, &self.config.setup_script)),
            app: PathStatus::file(resolve(self.root, &self.config.app)),
            database: PathStatus::file(resolve(self.root, &self.config.database)),
            dataset: PathStatus::dir(resolve(self.root, &self.config.dataset_dir)),
            sample_dir: PathStatus::dir(sample_dir),
            sample_images,
            url: self.config.app_url(),
        })
    }
}

fn list_images(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let is_image = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()));
        if is_image {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}
