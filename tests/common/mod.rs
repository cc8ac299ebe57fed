//! Shared utilities for integration tests.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use daylog::record::Moment;
use daylog::{Dispatcher, LoggerConfig, Severity};

static GLOBAL: Mutex<()> = Mutex::new(());

/// Serialize tests that replace the process-wide configuration.
#[allow(dead_code)]
pub fn lock_global() -> MutexGuard<'static, ()> {
    GLOBAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[allow(dead_code)]
pub fn day(year: i32, month: u32, day: u32) -> Moment {
    Moment { year, month, day, hour: 9, minute: 15, second: 30 }
}

/// Config writing to `dir` only, letting everything through.
#[allow(dead_code)]
pub fn file_config(dir: &Path) -> LoggerConfig {
    LoggerConfig {
        directory: Some(dir.to_path_buf()),
        minimum_severity: Severity::Trace,
        ..LoggerConfig::default()
    }
}

/// Dispatcher capturing console output in memory.
#[allow(dead_code)]
pub fn console_dispatcher(minimum_severity: Severity) -> Dispatcher<Vec<u8>> {
    let config = LoggerConfig {
        minimum_severity,
        write_to_console: true,
        write_to_file: false,
        ..LoggerConfig::default()
    };
    Dispatcher::new(config, Vec::new())
}

/// Console output split into lines.
#[allow(dead_code)]
pub fn console_lines(dispatcher: Dispatcher<Vec<u8>>) -> Vec<String> {
    String::from_utf8(dispatcher.into_console())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

/// Sorted file names in `dir`.
#[allow(dead_code)]
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
