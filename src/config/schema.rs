//! Configuration schema definitions.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::level::Severity;

/// Settings read by the engine on every call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Directory receiving daily files. No directory means no file output.
    pub directory: Option<PathBuf>,

    /// Least severe level still emitted.
    pub minimum_severity: Severity,

    /// Text placed before the date in file names.
    pub file_name_prefix: String,

    /// Text placed after the date in file names.
    pub file_name_postfix: String,

    /// Prefix every message with `Thread #<id>`.
    pub include_thread_id: bool,

    /// Write colored lines to stdout.
    pub write_to_console: bool,

    /// Append lines to the daily file.
    pub write_to_file: bool,

    /// Render minute and second one higher than the real value (historic clock format).
    pub legacy_clock: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            directory: None,
            minimum_severity: Severity::Warning,
            file_name_prefix: String::new(),
            file_name_postfix: String::new(),
            include_thread_id: false,
            write_to_console: false,
            write_to_file: true,
            legacy_clock: true,
        }
    }
}

impl LoggerConfig {
    /// True if a call at `severity` would reach at least one sink.
    pub fn enables(&self, severity: Severity) -> bool {
        severity.passes(self.minimum_severity) && (self.write_to_console || self.write_to_file)
    }

    /// The configured directory, if file output is possible at all.
    pub fn file_directory(&self) -> Option<&Path> {
        if !self.write_to_file {
            return None;
        }
        self.directory
            .as_deref()
            .filter(|dir| !dir.as_os_str().is_empty())
    }
}

/// Per-user default log directory (`<data_local_dir>/daylog/logs`), or `./logs`.
pub fn default_directory() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("daylog").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Create `dir` and its parents if missing.
pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    std::fs::create_dir_all(dir)
}
