//! Subprocess execution
//!
//! Every external tool (interpreter, pip, the setup program, the web
//! application) is described by a [`CommandSpec`] and executed through the
//! [`CommandRunner`] trait. Commands run synchronously with inherited stdio.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Result, process as process_error};

/// Description of a child process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: OsString,
    pub args: Vec<OsString>,
    /// Variables set on the child; a `None` value removes the variable
    pub envs: Vec<(OsString, Option<OsString>)>,
    pub current_dir: PathBuf,
}

impl CommandSpec {
    pub fn new(program: impl AsRef<OsStr>, current_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.as_ref().to_os_string(),
            args: Vec::new(),
            envs: Vec::new(),
            current_dir: current_dir.into(),
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    pub fn envs(mut self, envs: Vec<(OsString, Option<OsString>)>) -> Self {
        self.envs.extend(envs);
        self
    }

    /// Whether any argument equals `needle`
    pub fn has_arg(&self, needle: &str) -> bool {
        self.args.iter().any(|a| a == needle)
    }

    /// Environment value the child will see for `key`, if set explicitly
    pub fn env_value(&self, key: &str) -> Option<&OsStr> {
        self.envs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    fn program_display(&self) -> String {
        Path::new(&self.program).display().to_string()
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program_display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Exit status of a finished child process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// Exit code; `None` when the child was terminated by a signal
    pub code: Option<i32>,
}

impl CommandStatus {
    pub const SUCCESS: Self = Self { code: Some(0) };

    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(self) -> bool {
        self.code == Some(0)
    }

    /// Exit code to propagate from this process
    pub fn exit_code(self) -> i32 {
        self.code.unwrap_or(1)
    }
}

impl From<std::process::ExitStatus> for CommandStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {code}"),
            None => write!(f, "termination by signal"),
        }
    }
}

/// Runs child processes to completion
pub trait CommandRunner {
    /// Spawn the command and wait for it to exit
    fn run(&self, spec: &CommandSpec) -> Result<CommandStatus>;
}

/// Runner backed by `std::process::Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandStatus> {
        let mut command = Command::new(&spec.program);
        command.args(&spec.args).current_dir(&spec.current_dir);
        for (key, value) in &spec.envs {
            match value {
                Some(value) => command.env(key, value),
                None => command.env_remove(key),
            };
        }

        let status = command
            .status()
            .map_err(|e| process_error::spawn_failed(spec.program_display(), &e))?;
        Ok(status.into())
    }
}

/// Turn a failed exit status into an error
pub fn ensure_success(spec: &CommandSpec, status: CommandStatus) -> Result<()> {
    if status.success() {
        Ok(())
    } else {
        Err(process_error::failed(spec.to_string(), status))
    }
}
