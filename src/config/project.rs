//! Project configuration (tumorboot.yaml) data structures
//!
//! Every field has a compiled-in default that reproduces the stock
//! Brain Tumor Detector layout, so the file is optional. Values are layered:
//! defaults, then the YAML file, then command line overrides.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, config as config_error};

/// Name of the configuration file looked up in the project root
pub const CONFIG_FILE_NAME: &str = "tumorboot.yaml";

#[cfg(windows)]
const DEFAULT_PYTHON: &str = "python";
#[cfg(not(windows))]
const DEFAULT_PYTHON: &str = "python3";

/// A remote sample image seeded into the sample directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleImage {
    /// File name inside the sample directory
    pub name: String,

    /// URL fetched with HTTP GET
    pub url: String,
}

impl SampleImage {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Project configuration (tumorboot.yaml)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Interpreter used to create the virtual environment
    pub python: String,

    /// Virtual environment directory
    pub venv_dir: PathBuf,

    /// Dependency manifest passed to `pip install -r`
    pub requirements: PathBuf,

    /// Database setup program, run with the environment's interpreter
    pub setup_script: PathBuf,

    /// Directory seeded with sample images when empty
    pub sample_dir: PathBuf,

    /// Sample images downloaded into `sample_dir`
    pub samples: Vec<SampleImage>,

    /// Streamlit application entry point
    pub app: PathBuf,

    /// Address the application binds to
    pub address: String,

    /// Port the application binds to
    pub port: u16,

    /// Per-download timeout; no timeout when unset
    pub download_timeout_secs: Option<u64>,

    /// Database file created by the setup program
    pub database: PathBuf,

    /// Optional Kaggle dataset directory imported by the setup program
    pub dataset_dir: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            python: DEFAULT_PYTHON.to_string(),
            venv_dir: PathBuf::from("venv"),
            requirements: PathBuf::from("requirements.txt"),
            setup_script: PathBuf::from("setup_database.py"),
            sample_dir: PathBuf::from("sample_images"),
            samples: vec![
                SampleImage::new(
                    "brain_tumor_sample.jpg",
                    "https://upload.wikimedia.org/wikipedia/commons/5/5f/Hirnmetastase_MRT-T1_KM.jpg",
                ),
                SampleImage::new(
                    "normal_brain_sample.jpg",
                    "https://upload.wikimedia.org/wikipedia/commons/1/1a/MRI_head_side.jpg",
                ),
            ],
            app: PathBuf::from("tumor_app.py"),
            address: "localhost".to_string(),
            port: 8501,
            download_timeout_secs: None,
            database: PathBuf::from("data/tumor_cases.db"),
            dataset_dir: PathBuf::from("data/dataset"),
        }
    }
}

/// Values given on the command line or through environment variables
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub python: Option<String>,
    pub port: Option<u16>,
}

impl ProjectConfig {
    /// Load configuration for a project
    ///
    /// An explicit path must exist. Without one, `tumorboot.yaml` in the
    /// project root is used when present and the defaults otherwise.
    pub fn load(project_root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                let path = if path.is_absolute() {
                    path.to_path_buf()
                } else {
                    project_root.join(path)
                };
                if !path.is_file() {
                    return Err(config_error::not_found(path.display().to_string()));
                }
                path
            }
            None => {
                let path = project_root.join(CONFIG_FILE_NAME);
                if !path.is_file() {
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = std::fs::read_to_string(&path)
            .map_err(|e| config_error::read_failed(path.display().to_string(), e.to_string()))?;
        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| config_error::parse_failed(path.display().to_string(), e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command line overrides on top of file values
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(ref python) = overrides.python {
            self.python.clone_from(python);
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
    }

    /// Check the configuration before any command is run
    pub fn validate(&self) -> Result<()> {
        if self.python.trim().is_empty() {
            return Err(config_error::invalid("python must not be empty"));
        }
        if self.port == 0 {
            return Err(config_error::invalid("port must be nonzero"));
        }
        if self.address.trim().is_empty() {
            return Err(config_error::invalid("address must not be empty"));
        }

        for (field, path) in [
            ("venv_dir", &self.venv_dir),
            ("requirements", &self.requirements),
            ("setup_script", &self.setup_script),
            ("sample_dir", &self.sample_dir),
            ("app", &self.app),
        ] {
            if path.as_os_str().is_empty() {
                return Err(config_error::invalid(format!("{field} must not be empty")));
            }
        }

        let mut seen = HashSet::new();
        for sample in &self.samples {
            if !is_plain_file_name(&sample.name) {
                return Err(config_error::invalid(format!(
                    "sample name '{}' must be a plain file name",
                    sample.name
                )));
            }
            if !seen.insert(sample.name.as_str()) {
                return Err(config_error::invalid(format!(
                    "duplicate sample name '{}'",
                    sample.name
                )));
            }
        }

        Ok(())
    }

    /// URL the launched application is reachable at
    pub fn app_url(&self) -> String {
        format!("http://{}:{}", self.address, self.port)
    }
}

fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(std::path::Component::Normal(_)), None)
    ) && !name.contains(['/', '\\'])
}
