//! Slide markup decoding
//!
//! This module turns raw page lines into typed commands:
//! - [`command`]: the ordered prefix table and [`Command`] variants
//! - [`errors`]: per-line [`MarkupError`] diagnostics
//!
//! # Grammar
//!
//! A page is plain text split on newlines. Lines starting with `#` are
//! comments. Any other line is checked against the prefix table; a match
//! produces a command whose comma-separated fields sit between the prefix
//! and the first `:`, and whose free-form payload is everything after it.
//! Unmatched lines are continuation data for the active text/code mode.

pub mod command;
pub mod errors;

pub use command::{parse_line, Command, ParsedLine, COMMANDS, MAX_EXTENT};
pub use errors::MarkupError;
