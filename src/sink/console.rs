//! Terminal sink.

use std::io::Write;

use crate::level::RESET_COLOR;
use crate::record::{LogRecord, Moment, FIELD_SEPARATOR};
use crate::sink::Sink;

/// Render the console form of a record, including the trailing newline.
pub fn console_line(record: &LogRecord) -> String {
    format!(
        "{clock}{sep}[{color}{label}]{reset}{sep}{message}\n",
        clock = record.clock,
        color = record.severity.color_code(),
        label = record.label,
        reset = RESET_COLOR,
        message = record.message,
        sep = FIELD_SEPARATOR,
    )
}

/// Writes colored lines to any `Write`, normally stdout.
#[derive(Debug)]
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Sink for ConsoleSink<W> {
    fn write(&mut self, _now: &Moment, record: &LogRecord) {
        let line = console_line(record);
        let _ = self.out.write_all(line.as_bytes());
        let _ = self.out.flush();
    }
}
