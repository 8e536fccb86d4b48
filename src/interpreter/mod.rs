//! Page interpreter
//!
//! This module executes slide markup against a host platform:
//! - [`engine`]: [`PageInterpreter`], the line-by-line dispatcher
//! - [`state`]: continuation mode and cursor, reset for every page
//!
//! # Execution Model
//!
//! A page is re-interpreted from scratch on every visit; nothing is cached
//! between renders except the selected text palette, which mirrors a host
//! register. Un-prefixed lines are drawn as text or highlighted code when a
//! `txt` or `code` command has opened the matching continuation mode, and
//! dropped otherwise.

pub mod engine;
pub mod state;

pub use engine::{PageInterpreter, DEFAULT_COLUMNS, TITLE_ROW};
pub use state::{InterpreterState, Mode};
