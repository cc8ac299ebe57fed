//! Output sinks.
//!
//! # Data Flow
//! ```text
//! LogRecord
//!     → console.rs (stdout, colored severity bracket, flushed per line)
//!     → file.rs    (<dir>/<prefix><YYYY>_<MM>_<DD><postfix>.log, opened per line)
//! ```
//!
//! # Design Decisions
//! - Sink failures are swallowed; a broken sink never affects the caller or other sinks
//! - No locking: concurrent callers may interleave bytes on either sink
//! - No persistent file handle; every record opens, appends, flushes and closes

pub mod console;
pub mod file;

use crate::record::{LogRecord, Moment};

pub use console::ConsoleSink;
pub use file::FileSink;

/// A destination for assembled records.
pub trait Sink {
    /// Write one record. Errors are absorbed by the sink.
    fn write(&mut self, now: &Moment, record: &LogRecord);
}
