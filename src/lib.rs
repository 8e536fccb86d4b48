//! # Introduction
//!
//! tileshow is a slideshow interpreter for tile-based consoles. A deck is a
//! plain-text file of pages separated by `---` lines; each page is a short
//! program of drawing commands that is re-interpreted every time the page is
//! shown. Navigation comes from a controller pad, one button edge at a time.
//!
//! ## Execution pipeline
//!
//! ```text
//! Deck file → Deck → Page → markup::parse_line → Command → PageInterpreter → Platform
//!                                                                              ↑
//!                         Presentation ← NavCommand ← EdgeDetector ← read_buttons
//! ```
//!
//! 1. [`markup`]: prefix table decoding one line into a typed [`markup::Command`].
//! 2. [`interpreter`]: executes a page, tracking the text/code continuation mode.
//! 3. [`render`]: box, arrow and syntax-highlighting helpers built on host
//!    primitives.
//! 4. [`presentation`]: deck storage, page index, edge detection and the
//!    main loop.
//! 5. [`platform`]: the [`platform::Platform`] trait every host implements,
//!    plus a recording fake for tests.
//! 6. [`ui`]: a ratatui terminal host that emulates the console on a desktop.
//!
//! ## Markup at a glance
//!
//! ```text
//! title: Pattern matching
//! txt,2,4: First line
//! continues here
//! rect,1,10,20,5,6:
//! tarrow,10,15,d,3:
//! code,2,12:
//! case value
//! pause:
//! ```

pub mod config;
pub mod error;
pub mod interpreter;
pub mod logging;
pub mod markup;
pub mod platform;
pub mod presentation;
pub mod render;
pub mod ui;
