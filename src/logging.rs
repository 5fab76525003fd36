//! Logging setup for batch runs.
//!
//! Batch runs log to stderr and to a timestamped file under the run's log
//! directory. The directory keeps the five most recent log files; older
//! ones are deleted before a new file is opened. Verbosity follows the
//! usual `RUST_LOG` environment variable and defaults to `info`.

use crate::error::Result;
use chrono::Local;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Prefix of the per-run log file names.
const LOG_PREFIX: &str = "workorder_processing_";

/// Maximum number of log files kept in the log directory.
const MAX_LOG_FILES: usize = 5;

/// Initialize logging to stderr and a fresh timestamped file.
///
/// Creates `log_dir` when missing, rotates old log files, and installs
/// the global logger. Returns the path of the new log file. Calling this
/// more than once keeps the first logger and is not an error.
pub fn init(log_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(log_dir)?;
    rotate_logs(log_dir, MAX_LOG_FILES)?;

    let log_path = log_dir.join(format!(
        "{}{}.log",
        LOG_PREFIX,
        Local::now().format("%Y%m%d_%H%M%S")
    ));
    let file = File::create(&log_path)?;

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(Tee::new(file))))
        .format_timestamp_secs()
        .try_init();

    Ok(log_path)
}

/// Delete the oldest rotated log files until fewer than `max` remain.
///
/// Age is by modification time; ties fall back to file name, which sorts
/// older timestamped names first.
fn rotate_logs(log_dir: &Path, max: usize) -> Result<()> {
    let mut logs: Vec<(SystemTime, PathBuf)> = Vec::new();
    for entry in fs::read_dir(log_dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !(name.starts_with(LOG_PREFIX) && name.ends_with(".log")) {
            continue;
        }
        let modified = entry.metadata()?.modified()?;
        logs.push((modified, entry.path()));
    }
    logs.sort();

    let mut remaining = logs.len();
    for (_, path) in logs {
        if remaining < max {
            break;
        }
        fs::remove_file(&path)?;
        remaining -= 1;
    }
    Ok(())
}

/// Writer that duplicates every log record to stderr and the log file.
struct Tee {
    file: File,
}

impl Tee {
    fn new(file: File) -> Self {
        Self { file }
    }
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        self.file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, b"log").unwrap();
        path
    }

    #[test]
    fn test_rotation_removes_oldest_files() {
        let dir = tempfile::tempdir().unwrap();
        for index in 1..=6 {
            touch(dir.path(), &format!("{}2024010{}_120000.log", LOG_PREFIX, index));
        }
        touch(dir.path(), "unrelated.txt");

        rotate_logs(dir.path(), MAX_LOG_FILES).unwrap();

        let mut kept: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        kept.sort();

        // Two rotated files go (6 -> 4), leaving room for the next run's file.
        assert_eq!(kept.len(), 5);
        assert!(!kept.contains(&format!("{}20240101_120000.log", LOG_PREFIX)));
        assert!(!kept.contains(&format!("{}20240102_120000.log", LOG_PREFIX)));
        assert!(kept.contains(&"unrelated.txt".to_string()));
    }

    #[test]
    fn test_rotation_keeps_small_directories_intact() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), &format!("{}20240101_120000.log", LOG_PREFIX));
        rotate_logs(dir.path(), MAX_LOG_FILES).unwrap();
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_init_creates_log_dir_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("log");
        let log_path = init(&log_dir).unwrap();
        assert!(log_path.exists());
        assert!(log_path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with(LOG_PREFIX));
    }
}
