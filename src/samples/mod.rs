//! Sample image seeding
//!
//! The sample directory is seeded only when it has no entries at all. Each
//! download is independent: a failure is reported and the next sample is
//! still attempted.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::SampleImage;
use crate::error::{Result, fs as fs_error, process as process_error};
use crate::ui::Reporter;

/// Fetches a remote resource into a local file
pub trait SampleFetcher {
    /// Download `url` into `dest`, returning the number of bytes written
    fn fetch(&self, url: &str, dest: &Path) -> Result<u64>;
}

/// Blocking HTTP GET fetcher
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Build a fetcher; `timeout` of `None` waits indefinitely
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("tumorboot/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| process_error::download_failed("<client>", e))?;
        Ok(Self { client })
    }
}

impl SampleFetcher for HttpFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<u64> {
        let mut response = self
            .client
            .get(url)
            .send()
            .map_err(|e| process_error::download_failed(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(process_error::download_failed(url, format!("HTTP {status}")));
        }

        // Renamed into place only once the body is complete
        let dir = dest.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = tempfile::NamedTempFile::new_in(dir)
            .map_err(|e| fs_error::write_failed(dest, e.to_string()))?;
        let written = response
            .copy_to(&mut tmp)
            .map_err(|e| process_error::download_failed(url, e))?;
        tmp.flush()
            .map_err(|e| fs_error::write_failed(dest, e.to_string()))?;
        tmp.persist(dest)
            .map_err(|e| fs_error::write_failed(dest, e.error.to_string()))?;

        Ok(written)
    }
}

/// Outcome of the seeding step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleReport {
    /// Directory already had entries; nothing was fetched
    AlreadySeeded { existing: usize },
    /// Downloads were attempted
    Seeded {
        downloaded: Vec<String>,
        failed: Vec<String>,
    },
}

impl SampleReport {
    pub fn downloaded_count(&self) -> usize {
        match self {
            SampleReport::AlreadySeeded { .. } => 0,
            SampleReport::Seeded { downloaded, .. } => downloaded.len(),
        }
    }
}

/// Whether `dir` has no entries
pub fn is_empty_dir(dir: &Path) -> Result<bool> {
    let mut entries = std::fs::read_dir(dir).map_err(|e| fs_error::read_dir_failed(dir, &e))?;
    Ok(entries.next().is_none())
}

fn count_entries(dir: &Path) -> Result<usize> {
    let entries = std::fs::read_dir(dir).map_err(|e| fs_error::read_dir_failed(dir, &e))?;
    Ok(entries.count())
}

/// Create the sample directory and seed it when empty
pub fn seed_samples(
    dir: &Path,
    samples: &[SampleImage],
    fetcher: &dyn SampleFetcher,
    reporter: &dyn Reporter,
) -> Result<SampleReport> {
    std::fs::create_dir_all(dir).map_err(|e| fs_error::create_dir_failed(dir, &e))?;

    if !is_empty_dir(dir)? {
        let existing = count_entries(dir)?;
        reporter.detail(&format!(
            "{} already has {existing} entries, skipping downloads",
            dir.display()
        ));
        return Ok(SampleReport::AlreadySeeded { existing });
    }

    reporter.step("Downloading sample images...");

    let mut downloaded = Vec::new();
    let mut failed = Vec::new();
    for sample in samples {
        reporter.info(&format!("  Downloading {}...", sample.name));
        let dest: PathBuf = dir.join(&sample.name);

        let pb = reporter.spinner(&sample.url);
        let result = fetcher.fetch(&sample.url, &dest);
        pb.finish_and_clear();

        match result {
            Ok(bytes) => {
                reporter.detail(&format!("{} ({bytes} bytes)", dest.display()));
                downloaded.push(sample.name.clone());
            }
            Err(e) => {
                reporter.warn(&format!("Could not download {}: {e}", sample.name));
                failed.push(sample.name.clone());
            }
        }
    }

    Ok(SampleReport::Seeded { downloaded, failed })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::testing::RecordingReporter;
    use std::cell::RefCell;
    use tempfile::TempDir;

    /// Writes the URL as file content; URLs containing "fail" error out
    #[derive(Default)]
    struct FakeFetcher {
        calls: RefCell<Vec<String>>,
    }

    impl SampleFetcher for FakeFetcher {
        fn fetch(&self, url: &str, dest: &Path) -> Result<u64> {
            self.calls.borrow_mut().push(url.to_string());
            if url.contains("fail") {
                return Err(process_error::download_failed(url, "connection refused"));
            }
            std::fs::write(dest, url).unwrap();
            Ok(url.len() as u64)
        }
    }

    fn samples() -> Vec<SampleImage> {
        vec![
            SampleImage::new("tumor.jpg", "http://127.0.0.1/tumor.jpg"),
            SampleImage::new("normal.jpg", "http://127.0.0.1/normal.jpg"),
        ]
    }

    #[test]
    fn test_is_empty_dir() {
        let temp = TempDir::new().unwrap();
        assert!(is_empty_dir(temp.path()).unwrap());

        std::fs::write(temp.path().join("a.jpg"), "x").unwrap();
        assert!(!is_empty_dir(temp.path()).unwrap());
    }

    #[test]
    fn test_is_empty_dir_missing_is_error() {
        let temp = TempDir::new().unwrap();
        assert!(is_empty_dir(&temp.path().join("missing")).is_err());
    }

    #[test]
    fn test_seeds_missing_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("sample_images");
        let fetcher = FakeFetcher::default();
        let reporter = RecordingReporter::default();

        let report = seed_samples(&dir, &samples(), &fetcher, &reporter).unwrap();

        assert_eq!(
            report,
            SampleReport::Seeded {
                downloaded: vec!["tumor.jpg".to_string(), "normal.jpg".to_string()],
                failed: vec![],
            }
        );
        assert!(dir.join("tumor.jpg").exists());
        assert!(dir.join("normal.jpg").exists());
        assert_eq!(fetcher.calls.borrow().len(), 2);
        assert!(reporter.contains("Downloading sample images..."));
        assert!(reporter.contains("Downloading tumor.jpg..."));
    }

    #[test]
    fn test_non_empty_directory_skips_downloads() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("sample_images");
        std::fs::create_dir(&dir).unwrap();
        std::fs::write(dir.join("mine.png"), "x").unwrap();
        let fetcher = FakeFetcher::default();
        let reporter = RecordingReporter::default();

        let report = seed_samples(&dir, &samples(), &fetcher, &reporter).unwrap();

        assert_eq!(report, SampleReport::AlreadySeeded { existing: 1 });
        assert!(fetcher.calls.borrow().is_empty());
        assert!(!reporter.contains("Downloading"));
    }

    #[test]
    fn test_any_entry_counts_as_seeded() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("sample_images");
        std::fs::create_dir_all(dir.join("nested")).unwrap();
        let fetcher = FakeFetcher::default();

        let report =
            seed_samples(&dir, &samples(), &fetcher, &RecordingReporter::default()).unwrap();

        assert_eq!(report.downloaded_count(), 0);
        assert!(fetcher.calls.borrow().is_empty());
    }

    #[test]
    fn test_failed_download_is_swallowed() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("sample_images");
        let fetcher = FakeFetcher::default();
        let reporter = RecordingReporter::default();
        let samples = vec![
            SampleImage::new("first.jpg", "http://127.0.0.1/fail.jpg"),
            SampleImage::new("second.jpg", "http://127.0.0.1/ok.jpg"),
        ];

        let report = seed_samples(&dir, &samples, &fetcher, &reporter).unwrap();

        assert_eq!(
            report,
            SampleReport::Seeded {
                downloaded: vec!["second.jpg".to_string()],
                failed: vec!["first.jpg".to_string()],
            }
        );
        assert!(!dir.join("first.jpg").exists());
        assert!(dir.join("second.jpg").exists());
        assert_eq!(reporter.warnings().len(), 1);
        assert!(reporter.warnings()[0].contains("first.jpg"));
    }

    #[test]
    fn test_http_fetcher_unreachable_host() {
        let temp = TempDir::new().unwrap();
        let fetcher = HttpFetcher::new(Some(Duration::from_secs(5))).unwrap();
        let dest = temp.path().join("a.jpg");

        // Port 1 on loopback is not listening
        let result = fetcher.fetch("http://127.0.0.1:1/a.jpg", &dest);

        assert!(result.is_err());
        assert!(!dest.exists());
        assert!(is_empty_dir(temp.path()).unwrap());
    }
}
