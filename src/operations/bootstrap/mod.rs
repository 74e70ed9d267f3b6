//! Bootstrap pipeline
//!
//! Fixed, strictly sequential steps:
//! 1. startup banner
//! 2. create or reuse the virtual environment
//! 3. install the dependency manifest (fatal on failure)
//! 4. run the database setup program (failure only warns)
//! 5. ensure the sample directory exists
//! 6. seed samples when the directory is empty (failures only warn)
//! 7. launch the web application in the foreground


use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::config::ProjectConfig;
use crate::error::Result;
use crate::process::{CommandRunner, CommandSpec, CommandStatus, ensure_success};
use crate::samples::{SampleFetcher, SampleReport, seed_samples};
use crate::ui::Reporter;
use crate::venv::VirtualEnv;

pub const STARTUP_BANNER: &str = "🧠 Starting Brain Tumor Detector...";

/// What happened to the virtual environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvironmentState {
    Created,
    Reused,
}

/// Result of the database setup program
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupOutcome {
    Succeeded,
    Failed(CommandStatus),
    NotStarted(String),
}

/// Everything steps 1-6 did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapSummary {
    pub environment: EnvironmentState,
    pub setup: SetupOutcome,
    pub samples: SampleReport,
}

/// Drives the bootstrap pipeline for one project
pub struct BootstrapOperation<'a> {
    root: PathBuf,
    config: &'a ProjectConfig,
    venv: VirtualEnv,
    runner: &'a dyn CommandRunner,
    fetcher: &'a dyn SampleFetcher,
    reporter: &'a dyn Reporter,
}

impl<'a> BootstrapOperation<'a> {
    /// `root` should be absolute; it becomes the working directory of every child
    pub fn new(
        root: impl Into<PathBuf>,
        config: &'a ProjectConfig,
        runner: &'a dyn CommandRunner,
        fetcher: &'a dyn SampleFetcher,
        reporter: &'a dyn Reporter,
    ) -> Self {
        let root = root.into();
        let venv = VirtualEnv::new(root.join(&config.venv_dir));
        Self {
            root,
            config,
            venv,
            runner,
            fetcher,
            reporter,
        }
    }

    fn exec(&self, spec: &CommandSpec) -> Result<CommandStatus> {
        self.reporter.detail(&format!("$ {spec}"));
        self.runner.run(spec)
    }

    fn exec_checked(&self, spec: &CommandSpec) -> Result<()> {
        let status = self.exec(spec)?;
        ensure_success(spec, status)
    }

    /// Step 2: create the environment on first run, reuse it afterwards
    pub fn prepare_environment(&self) -> Result<EnvironmentState> {
        if self.venv.exists() {
            self.reporter.step("Activating virtual environment...");
            self.reporter
                .detail(&format!("VIRTUAL_ENV={}", self.venv.root().display()));
            return Ok(EnvironmentState::Reused);
        }

        self.reporter.step("Creating virtual environment...");
        self.exec_checked(&self.venv.create_command(&self.config.python, &self.root))?;

        self.reporter.step("Upgrading pip...");
        self.exec_checked(
            &self
                .venv
                .python_command(["-m", "pip", "install", "--upgrade", "pip"], &self.root),
        )?;

        Ok(EnvironmentState::Created)
    }

    /// Step 3: install the dependency manifest
    pub fn install_requirements(&self) -> Result<()> {
        self.reporter.step("Installing dependencies...");
        let args: [&OsStr; 5] = [
            OsStr::new("-m"),
            OsStr::new("pip"),
            OsStr::new("install"),
            OsStr::new("-r"),
            self.config.requirements.as_os_str(),
        ];
        self.exec_checked(&self.venv.python_command(args, &self.root))
    }

    /// Step 4: run the database setup program; never fails the pipeline
    pub fn setup_database(&self) -> SetupOutcome {
        self.reporter.step("Setting up database...");
        let spec = self
            .venv
            .python_command([self.config.setup_script.as_os_str()], &self.root);

        match self.exec(&spec) {
            Ok(status) if status.success() => SetupOutcome::Succeeded,
            Ok(status) => {
                self.reporter.warn(&format!(
                    "Database setup finished with {status}; continuing"
                ));
                SetupOutcome::Failed(status)
            }
            Err(e) => {
                self.reporter
                    .warn(&format!("Database setup could not be started: {e}; continuing"));
                SetupOutcome::NotStarted(e.to_string())
            }
        }
    }

    /// Steps 5 and 6: ensure the sample directory and seed it when empty
    pub fn prepare_samples(&self) -> Result<SampleReport> {
        seed_samples(
            &self.sample_dir(),
            &self.config.samples,
            self.fetcher,
            self.reporter,
        )
    }

    /// Steps 1 through 6
    pub fn setup(&self) -> Result<BootstrapSummary> {
        self.reporter.banner(STARTUP_BANNER);

        let environment = self.prepare_environment()?;
        self.install_requirements()?;
        let setup = self.setup_database();
        let samples = self.prepare_samples()?;

        Ok(BootstrapSummary {
            environment,
            setup,
            samples,
        })
    }

    /// Command that starts the web application
    pub fn launch_command(&self) -> CommandSpec {
        let port = self.config.port.to_string();
        let args: [&OsStr; 8] = [
            OsStr::new("-m"),
            OsStr::new("streamlit"),
            OsStr::new("run"),
            self.config.app.as_os_str(),
            OsStr::new("--server.port"),
            OsStr::new(&port),
            OsStr::new("--server.address"),
            OsStr::new(&self.config.address),
        ];
        self.venv.python_command(args, &self.root)
    }

    /// Step 7: run the web application in the foreground until it exits
    pub fn launch(&self) -> Result<CommandStatus> {
        self.reporter.info("");
        self.reporter.banner(&format!(
            "🚀 Launching Brain Tumor Detector at {}",
            self.config.app_url()
        ));
        self.reporter.info("Press Ctrl+C to stop");
        self.exec(&self.launch_command())
    }

    /// Full pipeline; returns the application's exit status
    pub fn run(&self) -> Result<(BootstrapSummary, CommandStatus)> {
        let summary = self.setup()?;
        let status = self.launch()?;
        Ok((summary, status))
    }

    fn sample_dir(&self) -> PathBuf {
        resolve(&self.root, &self.config.sample_dir)
    }
}

/// Join `path` onto `root` unless it is already absolute
pub fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
