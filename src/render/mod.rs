//! Stateless renderers that expand markup geometry into host primitives
//!
//! - [`shapes`]: bordered boxes with optional background fill, and arrows
//! - [`highlight`]: tokenizer and drawer for highlighted code lines

pub mod highlight;
pub mod shapes;

pub use highlight::{draw_code, tokenize, CodePalettes, Token, TokenKind};
pub use shapes::{draw_arrow, draw_rect};
