//! Configuration validation.
//!
//! # Responsibilities
//! - File-name prefix and postfix must stay inside the log directory
//! - A configured directory must not be empty text
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LoggerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::LoggerConfig;

/// A single semantic problem in a config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must not contain path separators or NUL: {value:?}")]
    InvalidFileNamePart { field: &'static str, value: String },

    #[error("directory is set but empty")]
    EmptyDirectory,
}

fn check_name_part(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    if value.contains(['/', '\\', '\0']) {
        errors.push(ValidationError::InvalidFileNamePart {
            field,
            value: value.to_string(),
        });
    }
}

/// Validate `config`, collecting every problem found.
pub fn validate_config(config: &LoggerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_name_part("file_name_prefix", &config.file_name_prefix, &mut errors);
    check_name_part("file_name_postfix", &config.file_name_postfix, &mut errors);

    if let Some(dir) = &config.directory {
        if dir.as_os_str().is_empty() {
            errors.push(ValidationError::EmptyDirectory);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
