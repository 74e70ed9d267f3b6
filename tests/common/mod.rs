//! Common test utilities for tumorboot integration tests

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread::JoinHandle;

use assert_cmd::Command;
use tempfile::TempDir;

/// Body served for every sample image by [`ImageServer`]
pub const FAKE_IMAGE: &[u8] = b"\xff\xd8\xff\xe0fake-jpeg";

/// Stand-in for a Python interpreter
///
/// Appends its arguments to `$TUMORBOOT_FAKE_LOG`. `-m venv DIR` creates
/// `DIR/bin/python` as a copy of itself; exit codes for pip, the setup
/// program and the app come from `FAKE_PIP_EXIT`, `FAKE_SETUP_EXIT` and
/// `FAKE_APP_EXIT`.
const FAKE_PYTHON: &str = r#"#!/bin/sh
echo "$*" >> "$TUMORBOOT_FAKE_LOG"
if [ "$1" = "-m" ] && [ "$2" = "venv" ]; then
    mkdir -p "$3/bin" && cp "$0" "$3/bin/python"
    exit $?
fi
if [ "$1" = "-m" ] && [ "$2" = "pip" ] && [ "$4" = "-r" ]; then
    exit "${FAKE_PIP_EXIT:-0}"
fi
if [ "$1" = "-m" ] && [ "$2" = "pip" ]; then
    exit 0
fi
if [ "$1" = "-m" ] && [ "$2" = "streamlit" ]; then
    echo "fake streamlit on $6"
    exit "${FAKE_APP_EXIT:-0}"
fi
exit "${FAKE_SETUP_EXIT:-0}"
"#;

/// A project directory laid out like the Brain Tumor Detector
pub struct TestProject {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
    /// Temporary directory holding the fake interpreter and its log
    pub tools: TempDir,
}

impl TestProject {
    /// Create a new project with requirements, setup program and app
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let tools = TempDir::new().expect("Failed to create tools directory");
        let path = temp.path().to_path_buf();
        let project = Self { temp, path, tools };

        project.write_file("requirements.txt", "streamlit\npandas\npillow\n");
        project.write_file("setup_database.py", "print('setup')\n");
        project.write_file("tumor_app.py", "import streamlit as st\n");
        project
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Install the fake interpreter and return its path
    #[cfg(unix)]
    pub fn fake_python(&self) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.tools.path().join("python3");
        if !path.exists() {
            std::fs::write(&path, FAKE_PYTHON).expect("Failed to write fake python");
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
                .expect("Failed to make fake python executable");
        }
        path
    }

    /// File the fake interpreter appends its invocations to
    pub fn log_path(&self) -> PathBuf {
        self.tools.path().join("calls.log")
    }

    /// Invocations recorded by the fake interpreter, one per line
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.log_path())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Write tumorboot.yaml pointing at the fake interpreter and the given sample URLs
    #[cfg(unix)]
    pub fn write_config(&self, sample_urls: &[(&str, &str)]) {
        let mut yaml = format!("python: {}\n", self.fake_python().display());
        yaml.push_str("download_timeout_secs: 5\n");
        yaml.push_str("samples:\n");
        for (name, url) in sample_urls {
            yaml.push_str(&format!("  - name: {name}\n    url: {url}\n"));
        }
        self.write_file("tumorboot.yaml", &yaml);
    }

    /// Number of entries in the sample directory
    pub fn sample_count(&self) -> usize {
        std::fs::read_dir(self.path.join("sample_images"))
            .map(|entries| entries.count())
            .unwrap_or(0)
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// tumorboot command running inside `project` with a clean environment
pub fn tumorboot_cmd_for_project(project: &TestProject) -> Command {
    let mut cmd = tumorboot_cmd();
    cmd.current_dir(&project.path)
        .env("TUMORBOOT_FAKE_LOG", project.log_path());
    cmd
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn tumorboot_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tumorboot").expect("tumorboot binary");
    for var in [
        "TUMORBOOT_PROJECT",
        "TUMORBOOT_CONFIG",
        "TUMORBOOT_PYTHON",
        "TUMORBOOT_PORT",
        "FAKE_PIP_EXIT",
        "FAKE_SETUP_EXIT",
        "FAKE_APP_EXIT",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

/// Minimal HTTP server answering a fixed number of GET requests
///
/// Paths containing `missing` get a 404; everything else gets [`FAKE_IMAGE`].
pub struct ImageServer {
    pub base_url: String,
    handle: Option<JoinHandle<Vec<String>>>,
}

impl ImageServer {
    pub fn start(requests: usize) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind test server");
        let base_url = format!(
            "http://{}",
            listener.local_addr().expect("Failed to read local address")
        );

        let handle = std::thread::spawn(move || {
            let mut paths = Vec::new();
            for stream in listener.incoming().take(requests) {
                let Ok(mut stream) = stream else { continue };
                let path = read_request_path(&mut stream);
                let response: Vec<u8> = if path.contains("missing") {
                    b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                        .to_vec()
                } else {
                    let mut r = format!(
                        "HTTP/1.1 200 OK\r\nContent-Type: image/jpeg\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                        FAKE_IMAGE.len()
                    )
                    .into_bytes();
                    r.extend_from_slice(FAKE_IMAGE);
                    r
                };
                let _ = stream.write_all(&response);
                let _ = stream.flush();
                paths.push(path);
            }
            paths
        });

        Self {
            base_url,
            handle: Some(handle),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Paths requested so far; waits for the configured number of requests
    pub fn finish(mut self) -> Vec<String> {
        self.handle
            .take()
            .map(|h| h.join().expect("test server panicked"))
            .unwrap_or_default()
    }
}

fn read_request_path(stream: &mut std::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    let request = String::from_utf8_lossy(&buf);
    request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or_default()
        .to_string()
}

/// URL nothing listens on
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1/unreachable.jpg";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_creation() {
        let project = TestProject::new();
        assert!(project.file_exists("requirements.txt"));
        assert!(project.file_exists("setup_database.py"));
        assert!(project.file_exists("tumor_app.py"));
        assert_eq!(project.sample_count(), 0);
    }

    #[test]
    fn test_calls_empty_before_any_run() {
        let project = TestProject::new();
        assert!(project.calls().is_empty());
    }
}
