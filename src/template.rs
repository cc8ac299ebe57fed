//! Message templates: placeholder counting and substitution.
//!
//! # Syntax
//! - `{}` is a placeholder, replaced by the next argument in call order
//! - `{{` renders a literal `{`, `}}` a literal `}`
//! - a lone brace that forms none of these pairs is dropped
//!
//! # Design Decisions
//! - Counting is a naive adjacent-pair scan over the raw text and is a `const fn`,
//!   so the logging macros reject mismatches at compile time
//! - Rendering re-checks the argument cursor and fails instead of panicking
//! - Pairs never overlap: once two characters form a pair, scanning restarts fresh

use crate::error::LogError;

/// Count `{}` occurrences by scanning the raw bytes once, left to right.
///
/// `"{{}}"` counts one: only the inner `{` `}` are adjacent.
pub const fn placeholder_count(template: &str) -> usize {
    let bytes = template.as_bytes();
    let mut count = 0;
    let mut i = 1;
    while i < bytes.len() {
        if bytes[i] == b'}' && bytes[i - 1] == b'{' {
            count += 1;
        }
        i += 1;
    }
    count
}

/// Check that `template` takes exactly `arguments` arguments.
pub fn validate(template: &str, arguments: usize) -> Result<(), LogError> {
    let placeholders = placeholder_count(template);
    if placeholders != arguments {
        return Err(LogError::TemplateArgumentMismatch { placeholders, arguments });
    }
    Ok(())
}

/// Substitute pre-stringified `args` into `template`.
pub fn render<S: AsRef<str>>(template: &str, args: &[S]) -> Result<String, LogError> {
    let mut out = String::with_capacity(template.len() + args.iter().map(|a| a.as_ref().len()).sum::<usize>());
    let mut cursor = 0;
    let mut prev: Option<char> = None;

    for c in template.chars() {
        match (prev, c) {
            (Some('{'), '{') => {
                out.push('{');
                prev = None;
            }
            (Some('}'), '}') => {
                out.push('}');
                prev = None;
            }
            (Some('{'), '}') => {
                let Some(arg) = args.get(cursor) else {
                    return Err(LogError::TemplateArgumentMismatch {
                        placeholders: placeholder_count(template),
                        arguments: args.len(),
                    });
                };
                out.push_str(arg.as_ref());
                cursor += 1;
                prev = None;
            }
            (_, '{') | (_, '}') => prev = Some(c),
            _ => {
                out.push(c);
                prev = Some(c);
            }
        }
    }

    Ok(out)
}

/// A template whose placeholder count has been computed once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template<'a> {
    text: &'a str,
    placeholders: usize,
}

impl<'a> Template<'a> {
    pub const fn new(text: &'a str) -> Self {
        Self {
            text,
            placeholders: placeholder_count(text),
        }
    }

    pub const fn text(&self) -> &'a str {
        self.text
    }

    pub const fn placeholders(&self) -> usize {
        self.placeholders
    }

    /// Reject an argument list of the wrong length before any rendering happens.
    pub fn check(&self, arguments: usize) -> Result<(), LogError> {
        if self.placeholders != arguments {
            return Err(LogError::TemplateArgumentMismatch {
                placeholders: self.placeholders,
                arguments,
            });
        }
        Ok(())
    }

    pub fn render<S: AsRef<str>>(&self, args: &[S]) -> Result<String, LogError> {
        render(self.text, args)
    }
}
