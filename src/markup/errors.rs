//! Markup error types
//!
//! A [`MarkupError`] describes one malformed command line. These are never
//! fatal: the interpreter reports the error, skips the line and carries on
//! with the rest of the page.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    /// Command header is not terminated by `:`
    #[error("line {line}: `{command}` command is missing its ':' delimiter")]
    MissingDelimiter {
        command: &'static str,
        line: usize,
    },

    #[error("line {line}: `{command}` expects {expected} field(s), got {got}")]
    FieldCount {
        command: &'static str,
        expected: &'static str,
        got: usize,
        line: usize,
    },

    #[error("line {line}: `{command}` field '{field}' is not a valid number")]
    InvalidNumber {
        command: &'static str,
        field: String,
        line: usize,
    },

    #[error("line {line}: `{command}` colour '{value}' is not RGB or RRGGBB hex")]
    InvalidColour {
        command: &'static str,
        value: String,
        line: usize,
    },

    #[error("line {line}: `{command}` direction '{value}' is not one of r, l, u, d")]
    InvalidDirection {
        command: &'static str,
        value: String,
        line: usize,
    },

    /// Coordinate or size beyond [`MAX_EXTENT`](super::command::MAX_EXTENT)
    #[error("line {line}: `{command}` field '{field}' is out of range")]
    OutOfRange {
        command: &'static str,
        field: String,
        line: usize,
    },

    #[error("line {line}: `{command}` length must be at least 1")]
    ZeroLength {
        command: &'static str,
        line: usize,
    },
}

impl MarkupError {
    /// 1-based line number within the page
    pub fn line(&self) -> usize {
        match self {
            MarkupError::MissingDelimiter { line, .. }
            | MarkupError::FieldCount { line, .. }
            | MarkupError::InvalidNumber { line, .. }
            | MarkupError::InvalidColour { line, .. }
            | MarkupError::InvalidDirection { line, .. }
            | MarkupError::OutOfRange { line, .. }
            | MarkupError::ZeroLength { line, .. } => *line,
        }
    }
}
