//! Errors surfaced by the formatting engine.
//!
//! Only a template/argument mismatch aborts a call. Time lookup and sink failures are
//! recovered where they happen and never reach the caller.

use thiserror::Error;

/// Errors that can occur while dispatching a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogError {
    /// The template's placeholder count differs from the number of arguments.
    #[error("template has {placeholders} placeholder(s) but {arguments} argument(s) were supplied")]
    TemplateArgumentMismatch { placeholders: usize, arguments: usize },
}
