//! Log record assembly.
//!
//! # Layout
//! ```text
//! [Thread #<id>\t\t]<file:line padded to 64>\t\t<function padded to 32>\t\t<message>
//! ```
//! The severity label is padded to 12 and the clock is `HH:MM:SS`; both are placed by the
//! sinks, around the assembled message above.
//!
//! # Design Decisions
//! - Padding only extends, never truncates
//! - A failed local-time lookup yields an all-zero `Moment` instead of an error
//! - In legacy clock mode minute and second are rendered one higher than the real
//!   value with no carry past 59 (`12:59:59` prints as `12:60:60`)

use std::cell::Cell;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{Datelike, Local, TimeZone, Timelike};

use crate::level::Severity;

/// Minimum width of the severity label.
pub const SEVERITY_WIDTH: usize = 12;
/// Minimum width of the `file:line` field.
pub const CALL_SITE_WIDTH: usize = 64;
/// Minimum width of the function name field.
pub const FUNCTION_WIDTH: usize = 32;
/// Separator between record fields.
pub const FIELD_SEPARATOR: &str = "\t\t";

/// Broken-down local time. `year == 0` marks a failed lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Moment {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl Moment {
    /// The fallback value used when local time is unavailable.
    pub const fn zero() -> Self {
        Self {
            year: 0,
            month: 0,
            day: 0,
            hour: 0,
            minute: 0,
            second: 0,
        }
    }

    /// Current local time, or `Moment::zero()` if it cannot be determined.
    pub fn now() -> Self {
        let Ok(elapsed) = SystemTime::now().duration_since(UNIX_EPOCH) else {
            return Self::zero();
        };
        let Ok(secs) = i64::try_from(elapsed.as_secs()) else {
            return Self::zero();
        };
        match Local.timestamp_opt(secs, 0).single() {
            Some(local) => Self::from_datetime(&local),
            None => Self::zero(),
        }
    }

    pub fn from_datetime<T: Datelike + Timelike>(dt: &T) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
        }
    }

    pub const fn is_zero(&self) -> bool {
        self.year == 0
    }

    /// `HH:MM:SS`, with the legacy minute/second offset when `legacy` is set.
    pub fn clock_text(&self, legacy: bool) -> String {
        let offset = u32::from(legacy);
        format!(
            "{:02}:{:02}:{:02}",
            self.hour,
            self.minute + offset,
            self.second + offset
        )
    }
}

static NEXT_THREAD_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static THREAD_ID: Cell<u64> = const { Cell::new(0) };
}

/// Small integer identifying the calling thread, assigned on first use.
pub fn current_thread_id() -> u64 {
    THREAD_ID.with(|id| {
        if id.get() == 0 {
            id.set(NEXT_THREAD_ID.fetch_add(1, Ordering::Relaxed));
        }
        id.get()
    })
}

/// Where a record was emitted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite<'a> {
    pub file: &'a str,
    pub line: u32,
    pub function: &'a str,
}

impl<'a> CallSite<'a> {
    pub const fn new(file: &'a str, line: u32, function: &'a str) -> Self {
        Self { file, line, function }
    }

    /// File name without directories, joined with the line number.
    pub fn location(&self) -> String {
        let name = self.file.rsplit(['/', '\\']).next().unwrap_or(self.file);
        format!("{}:{}", name, self.line)
    }
}

/// Severity label padded to `SEVERITY_WIDTH`.
pub fn severity_label(severity: Severity) -> String {
    format!("{:<width$}", severity.as_str(), width = SEVERITY_WIDTH)
}

/// One assembled line, alive for a single dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub severity: Severity,
    pub clock: String,
    pub label: String,
    pub message: String,
}

/// Builds a `LogRecord` from its parts.
#[derive(Debug, Clone, Copy)]
pub struct RecordBuilder {
    pub include_thread_id: bool,
    pub legacy_clock: bool,
}

impl RecordBuilder {
    pub fn build(&self, severity: Severity, now: Moment, site: &CallSite<'_>, body: &str) -> LogRecord {
        let mut message = String::with_capacity(CALL_SITE_WIDTH + FUNCTION_WIDTH + body.len() + 24);
        if self.include_thread_id {
            message.push_str(&format!("Thread #{}{}", current_thread_id(), FIELD_SEPARATOR));
        }
        message.push_str(&format!(
            "{:<site_width$}{sep}{:<fn_width$}{sep}",
            site.location(),
            site.function,
            site_width = CALL_SITE_WIDTH,
            fn_width = FUNCTION_WIDTH,
            sep = FIELD_SEPARATOR,
        ));
        message.push_str(body);

        LogRecord {
            severity,
            clock: now.clock_text(self.legacy_clock),
            label: severity_label(severity),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn moment(h: u32, m: u32, s: u32) -> Moment {
        Moment { year: 2024, month: 3, day: 9, hour: h, minute: m, second: s }
    }

    #[test]
    fn test_legacy_clock_offsets_minute_and_second() {
        assert_eq!(moment(7, 5, 9).clock_text(true), "07:06:10");
        assert_eq!(moment(12, 59, 59).clock_text(true), "12:60:60");
        assert_eq!(moment(7, 5, 9).clock_text(false), "07:05:09");
    }

    #[test]
    fn test_zero_moment() {
        let zero = Moment::zero();
        assert!(zero.is_zero());
        assert_eq!(zero, Moment::default());
        assert_eq!(zero.clock_text(true), "00:01:01");
        assert!(!Moment::now().is_zero());
    }

    #[test]
    fn test_from_datetime() {
        let dt = NaiveDate::from_ymd_opt(2023, 12, 31)
            .and_then(|d| d.and_hms_opt(23, 4, 5))
            .unwrap();
        assert_eq!(
            Moment::from_datetime(&dt),
            Moment { year: 2023, month: 12, day: 31, hour: 23, minute: 4, second: 5 }
        );
    }

    #[test]
    fn test_call_site_strips_directories() {
        assert_eq!(CallSite::new("src/engine/mod.rs", 42, "f").location(), "mod.rs:42");
        assert_eq!(CallSite::new(r"C:\work\app\main.cpp", 7, "f").location(), "main.cpp:7");
        assert_eq!(CallSite::new("lib.rs", 1, "f").location(), "lib.rs:1");
    }

    #[test]
    fn test_field_widths() {
        for level in Severity::EMITTABLE {
            assert!(severity_label(level).len() >= SEVERITY_WIDTH);
        }
        assert_eq!(severity_label(Severity::Error), "Error       ");

        let builder = RecordBuilder { include_thread_id: false, legacy_clock: true };
        let site = CallSite::new("a/b.rs", 3, "run");
        let record = builder.build(Severity::Warning, moment(1, 2, 3), &site, "hi");
        let fields: Vec<&str> = record.message.split(FIELD_SEPARATOR).collect();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].len(), CALL_SITE_WIDTH);
        assert!(fields[0].starts_with("b.rs:3 "));
        assert_eq!(fields[1].len(), FUNCTION_WIDTH);
        assert!(fields[1].starts_with("run "));
        assert_eq!(fields[2], "hi");
        assert_eq!(record.clock, "01:03:04");
    }

    #[test]
    fn test_padding_never_truncates() {
        let long_name = "f".repeat(40);
        let long_file = format!("{}.rs", "x".repeat(80));
        let builder = RecordBuilder { include_thread_id: false, legacy_clock: false };
        let site = CallSite::new(&long_file, 10, &long_name);
        let record = builder.build(Severity::Error, Moment::zero(), &site, "");
        let fields: Vec<&str> = record.message.split(FIELD_SEPARATOR).collect();
        assert_eq!(fields[0], format!("{}:10", long_file));
        assert_eq!(fields[1], long_name);
    }

    #[test]
    fn test_thread_id_prefix() {
        let builder = RecordBuilder { include_thread_id: true, legacy_clock: true };
        let site = CallSite::new("m.rs", 1, "main");
        let record = builder.build(Severity::Error, Moment::zero(), &site, "x");
        let expected = format!("Thread #{}\t\t", current_thread_id());
        assert!(record.message.starts_with(&expected));
    }

    #[test]
    fn test_thread_ids_differ_between_threads() {
        let here = current_thread_id();
        assert_eq!(here, current_thread_id());
        let there = std::thread::spawn(current_thread_id).join().unwrap();
        assert_ne!(here, there);
    }
}
