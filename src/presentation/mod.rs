//! Deck navigation and the top-level slideshow loop
//!
//! - [`deck`]: page storage, parsed from `---`-separated source
//! - [`state`]: page index, progress start and timer baseline
//! - [`input`]: edge-triggered pad decoding into [`NavCommand`]s
//! - [`controller`]: [`Presentation`], which ties the pieces together
//!
//! Navigation clamps at both ends of the deck: moving forward from the last
//! page (or back from the first) re-renders the same page.

pub mod controller;
pub mod deck;
pub mod input;
pub mod state;

pub use controller::{Presentation, PresentationOptions};
pub use deck::{Deck, Page, PAGE_SEPARATOR};
pub use input::{EdgeDetector, NavCommand};
pub use state::PresentationState;
