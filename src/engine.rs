//! Formatting and dispatch engine.
//!
//! # Data Flow
//! ```text
//! (severity, call site, template, args)
//!     → template::validate       reject placeholder/argument mismatch
//!     → LoggerConfig::enables    severity gate, sink check
//!     → template::render         message body
//!     → RecordBuilder            clock, label, thread id, call site, function
//!     → sinks                    console and/or daily file
//! ```
//!
//! # Design Decisions
//! - The gate runs before the clock is read; a filtered call has no side effects
//! - `Dispatcher` owns its config snapshot, console writer and clock, so the whole
//!   pipeline runs without global state in tests
//! - The global entry reads the latest config once per call

use std::borrow::Cow;
use std::io::{self, Write};
use std::sync::Arc;

use crate::config::global;
use crate::config::LoggerConfig;
use crate::error::LogError;
use crate::level::Severity;
use crate::record::{CallSite, LogRecord, Moment, RecordBuilder};
use crate::sink::{ConsoleSink, FileSink, Sink};
use crate::template;

/// Source of the current local time.
pub type Clock = fn() -> Moment;

/// Runs records from one config snapshot to its sinks.
pub struct Dispatcher<W: Write> {
    config: Arc<LoggerConfig>,
    console: ConsoleSink<W>,
    clock: Clock,
}

impl Dispatcher<io::Stdout> {
    /// Dispatcher writing to stdout with the latest global config.
    pub fn from_global() -> Self {
        Self::new(global::current(), io::stdout())
    }
}

impl<W: Write> Dispatcher<W> {
    pub fn new(config: impl Into<Arc<LoggerConfig>>, console: W) -> Self {
        Self {
            config: config.into(),
            console: ConsoleSink::new(console),
            clock: Moment::now,
        }
    }

    /// Replace the time source.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn console(&self) -> &W {
        self.console.get_ref()
    }

    pub fn into_console(self) -> W {
        self.console.into_inner()
    }

    /// True if a record at `severity` would be written anywhere.
    pub fn enabled(&self, severity: Severity) -> bool {
        self.config.enables(severity)
    }

    /// Validate, gate, render and write one record.
    ///
    /// Only a placeholder/argument mismatch is reported; sink failures are absorbed.
    pub fn dispatch<S: AsRef<str>>(
        &mut self,
        severity: Severity,
        site: &CallSite<'_>,
        template: &str,
        args: &[S],
    ) -> Result<(), LogError> {
        template::validate(template, args.len())?;
        self.dispatch_checked(severity, site, template, args)
    }

    /// Like `dispatch`, for callers that already verified the argument count.
    #[doc(hidden)]
    pub fn dispatch_checked<S: AsRef<str>>(
        &mut self,
        severity: Severity,
        site: &CallSite<'_>,
        template: &str,
        args: &[S],
    ) -> Result<(), LogError> {
        if !self.enabled(severity) {
            return Ok(());
        }

        let body = template::render(template, args)?;
        let now = (self.clock)();
        let record = RecordBuilder {
            include_thread_id: self.config.include_thread_id,
            legacy_clock: self.config.legacy_clock,
        }
        .build(severity, now, site, &body);

        self.write(&now, &record);
        Ok(())
    }

    fn write(&mut self, now: &Moment, record: &LogRecord) {
        if self.config.write_to_console {
            self.console.write(now, record);
        }
        if let Some(dir) = self.config.file_directory() {
            FileSink::new(dir, &self.config.file_name_prefix, &self.config.file_name_postfix)
                .write(now, record);
        }
    }
}

/// True if the global config lets `severity` through to any sink.
pub fn enabled(severity: Severity) -> bool {
    global::current().enables(severity)
}

/// Dispatch through the global config to stdout and the daily file.
///
/// The template is only known at run time here, so the placeholder count is checked
/// before anything else and a mismatch is returned as an error.
pub fn log(
    severity: Severity,
    site: &CallSite<'_>,
    template: &str,
    args: &[Cow<'_, str>],
) -> Result<(), LogError> {
    Dispatcher::from_global().dispatch(severity, site, template, args)
}
