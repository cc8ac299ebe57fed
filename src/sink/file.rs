//! Date-named file sink.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::record::{LogRecord, Moment, FIELD_SEPARATOR};
use crate::sink::Sink;

/// File name for records emitted at `now`.
///
/// A failed time lookup (zero year) falls back to `<prefix>General<postfix>.log`.
pub fn daily_file_name(prefix: &str, postfix: &str, now: &Moment) -> String {
    if now.is_zero() {
        return format!("{}General{}.log", prefix, postfix);
    }
    format!(
        "{}{:04}_{:02}_{:02}{}.log",
        prefix, now.year, now.month, now.day, postfix
    )
}

/// Render the file form of a record (no color), including the trailing newline.
pub fn file_line(record: &LogRecord) -> String {
    format!(
        "{clock}{sep}[{label}]{sep}{message}\n",
        clock = record.clock,
        label = record.label,
        message = record.message,
        sep = FIELD_SEPARATOR,
    )
}

/// Appends records to the daily file under `directory`.
#[derive(Debug, Clone, Copy)]
pub struct FileSink<'a> {
    directory: &'a Path,
    prefix: &'a str,
    postfix: &'a str,
}

impl<'a> FileSink<'a> {
    pub fn new(directory: &'a Path, prefix: &'a str, postfix: &'a str) -> Self {
        Self { directory, prefix, postfix }
    }

    pub fn path_for(&self, now: &Moment) -> PathBuf {
        self.directory
            .join(daily_file_name(self.prefix, self.postfix, now))
    }

    /// Open in append mode, write one line, flush and close.
    pub fn append(&self, now: &Moment, record: &LogRecord) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.path_for(now))?;
        file.write_all(file_line(record).as_bytes())?;
        file.flush()
    }
}

impl Sink for FileSink<'_> {
    fn write(&mut self, now: &Moment, record: &LogRecord) {
        let _ = self.append(now, record);
    }
}
