//! Python virtual environment layout and activation
//!
//! Activation is applied per child command instead of mutating this
//! process's environment: every command built by [`VirtualEnv::python_command`]
//! carries `VIRTUAL_ENV`, a `PATH` with the environment's bin directory in
//! front, and has `PYTHONHOME` removed, which is what `activate` does.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::process::CommandSpec;

#[cfg(windows)]
const BIN_DIR: &str = "Scripts";
#[cfg(not(windows))]
const BIN_DIR: &str = "bin";

#[cfg(windows)]
const PYTHON_EXE: &str = "python.exe";
#[cfg(not(windows))]
const PYTHON_EXE: &str = "python";

/// A virtual environment rooted at a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualEnv {
    root: PathBuf,
}

impl VirtualEnv {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Existence of the root directory is the only state check
    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }

    pub fn bin_dir(&self) -> PathBuf {
        self.root.join(BIN_DIR)
    }

    pub fn python(&self) -> PathBuf {
        self.bin_dir().join(PYTHON_EXE)
    }

    /// `<base_python> -m venv <root>`
    pub fn create_command(&self, base_python: &str, current_dir: &Path) -> CommandSpec {
        CommandSpec::new(base_python, current_dir)
            .args(["-m", "venv"])
            .arg(&self.root)
    }

    /// Environment variables that activate this environment for a child
    pub fn activation_env(&self) -> Vec<(OsString, Option<OsString>)> {
        self.activation_env_with_path(std::env::var_os("PATH").as_deref())
    }

    fn activation_env_with_path(
        &self,
        inherited_path: Option<&OsStr>,
    ) -> Vec<(OsString, Option<OsString>)> {
        let mut entries = vec![self.bin_dir()];
        if let Some(path) = inherited_path {
            entries.extend(std::env::split_paths(path));
        }
        // An unjoinable inherited PATH leaves only the environment's bin directory
        let path = std::env::join_paths(&entries)
            .unwrap_or_else(|_| self.bin_dir().into_os_string());

        vec![
            (
                OsString::from("VIRTUAL_ENV"),
                Some(self.root.clone().into_os_string()),
            ),
            (OsString::from("PATH"), Some(path)),
            (OsString::from("PYTHONHOME"), None),
        ]
    }

    /// Command run with this environment's interpreter, activated
    pub fn python_command<I, S>(&self, args: I, current_dir: &Path) -> CommandSpec
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        CommandSpec::new(self.python(), current_dir)
            .args(args)
            .envs(self.activation_env())
    }
}
