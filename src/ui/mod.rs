//! Terminal host built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four parts:
//!
//! - **[`host`]**: [`TerminalHost`], the [`Platform`] implementation that owns
//!   the terminal, paces frames and turns key presses into button samples
//! - **[`screen`]**: the emulated tile plane and its glyph set
//! - **[`images`]**: text-art images loaded from disk
//! - **[`theme`]**: terminal chrome colours and the power-on palette
//!
//! [`Platform`]: crate::platform::Platform

pub mod host;
pub mod images;
pub mod screen;
pub mod theme;

pub use host::{HostOptions, TerminalHost};
pub use images::ImageStore;
pub use screen::TileScreen;
