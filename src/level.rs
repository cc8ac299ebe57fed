//! Severity levels.
//!
//! # Ordering
//! ```text
//! Disabled(0) < Critical(1) < Error(2) < Warning(3) < Information(4) < Debug(5) < Trace(6)
//! ```
//! A lower ordinal is more severe. A message passes a threshold when its ordinal is
//! less than or equal to the threshold's, so a `Disabled` threshold lets nothing through.
//!
//! # Design Decisions
//! - Parsing is total: unknown text maps to `Disabled` instead of an error
//! - Parsing is case-insensitive and accepts `info`/`warn` shorthands
//! - Serde goes through the same parser so config files can never fail on a level name

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// ANSI reset sequence emitted after every colored label.
pub const RESET_COLOR: &str = "\x1b[0m";

/// Message severity.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Severity {
    #[default]
    Disabled = 0,
    Critical = 1,
    Error = 2,
    Warning = 3,
    Information = 4,
    Debug = 5,
    Trace = 6,
}

impl Severity {
    /// The six levels a message can actually be emitted at, most severe first.
    pub const EMITTABLE: [Severity; 6] = [
        Severity::Critical,
        Severity::Error,
        Severity::Warning,
        Severity::Information,
        Severity::Debug,
        Severity::Trace,
    ];

    /// Parse a level name. Never fails; unrecognized text yields `Disabled`.
    pub fn parse(text: &str) -> Self {
        match text.trim().to_ascii_lowercase().as_str() {
            "trace" => Severity::Trace,
            "debug" => Severity::Debug,
            "info" | "information" => Severity::Information,
            "warn" | "warning" => Severity::Warning,
            "error" => Severity::Error,
            "critical" => Severity::Critical,
            _ => Severity::Disabled,
        }
    }

    /// Canonical display name; `Disabled` has none and renders as `"Unknown"`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "Trace",
            Severity::Debug => "Debug",
            Severity::Information => "Information",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Critical => "Critical",
            Severity::Disabled => "Unknown",
        }
    }

    /// Ordinal rank used by the threshold comparison.
    pub const fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// True if a message at `self` passes the `threshold` filter.
    pub const fn passes(&self, threshold: Severity) -> bool {
        !matches!(self, Severity::Disabled) && self.ordinal() <= threshold.ordinal()
    }

    /// ANSI color for the console bracket; empty for levels without one.
    pub const fn color_code(&self) -> &'static str {
        match self {
            Severity::Debug => "\x1b[36m",
            Severity::Information => "\x1b[32m",
            Severity::Warning => "\x1b[33m",
            Severity::Error => "\x1b[31m",
            Severity::Critical => "\x1b[41m",
            Severity::Trace | Severity::Disabled => "",
        }
    }
}

impl From<u8> for Severity {
    fn from(val: u8) -> Self {
        match val {
            1 => Severity::Critical,
            2 => Severity::Error,
            3 => Severity::Warning,
            4 => Severity::Information,
            5 => Severity::Debug,
            6 => Severity::Trace,
            _ => Severity::Disabled,
        }
    }
}

impl From<&str> for Severity {
    fn from(text: &str) -> Self {
        Severity::parse(text)
    }
}

impl From<String> for Severity {
    fn from(text: String) -> Self {
        Severity::parse(&text)
    }
}

impl From<Severity> for &'static str {
    fn from(level: Severity) -> Self {
        level.as_str()
    }
}

impl FromStr for Severity {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Severity::parse(s))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
