//! Log File Sink
//!
//! Appends a plain-text transcript of the run to a timestamped file.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Local};
use regex::Regex;

use crate::domain::ports::{AuditEvent, AuditEventSink};

use super::text;

/// `~/Documents`, falling back to the home directory
pub fn default_log_dir() -> Option<PathBuf> {
    dirs::document_dir().or_else(dirs::home_dir)
}

pub fn log_file_name(at: DateTime<Local>) -> String {
    format!("sysaudit_{}.log", at.format("%Y-%m-%d_%H-%M-%S"))
}

/// Remove terminal escape sequences
pub fn strip_ansi(line: &str) -> String {
    static ANSI: OnceLock<Option<Regex>> = OnceLock::new();
    match ANSI.get_or_init(|| Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").ok()) {
        Some(re) => re.replace_all(line, "").into_owned(),
        None => line.to_string(),
    }
}

/// Event sink writing the run log.
///
/// Write failures are reported once and then ignored; the run continues.
pub struct LogFileSink {
    path: PathBuf,
    file: Mutex<File>,
    failed: Mutex<bool>,
}

impl LogFileSink {
    /// Create `<dir>/sysaudit_<timestamp>.log`
    pub fn create(dir: &Path) -> io::Result<Self> {
        Self::create_at(dir, Local::now())
    }

    pub fn create_at(dir: &Path, at: DateTime<Local>) -> io::Result<Self> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(log_file_name(at));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        tracing::info!(path = %path.display(), "writing run log");
        Ok(Self {
            path,
            file: Mutex::new(file),
            failed: Mutex::new(false),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one line, stripped of color codes
    pub fn append(&self, line: &str) {
        let result = match self.file.lock() {
            Ok(mut file) => writeln!(file, "{}", strip_ansi(line)),
            Err(_) => return,
        };

        if let Err(e) = result {
            if let Ok(mut failed) = self.failed.lock() {
                if !*failed {
                    tracing::warn!(path = %self.path.display(), error = %e, "failed to write run log");
                    *failed = true;
                }
            }
        }
    }
}

impl AuditEventSink for LogFileSink {
    fn on_event(&self, event: &AuditEvent) {
        for line in text::render(event) {
            self.append(&line);
        }
    }
}
