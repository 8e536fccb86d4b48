//! Presentation controller
//!
//! Owns the deck and drives the top-level loop:
//!
//! ```text
//! clear → render page → (page directive | wait for input) → apply → repeat
//! ```

use tracing::{debug, info, warn};

use super::deck::Deck;
use super::input::{EdgeDetector, NavCommand};
use super::state::PresentationState;
use crate::interpreter::{PageInterpreter, DEFAULT_COLUMNS};
use crate::platform::Platform;
use crate::render::CodePalettes;

/// Knobs the controller needs from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentationOptions {
    /// Controller port used for navigation
    pub port: u8,
    pub palettes: CodePalettes,
    /// Plane width in tiles, used to centre titles
    pub columns: i32,
}

impl Default for PresentationOptions {
    fn default() -> Self {
        PresentationOptions {
            port: 0,
            palettes: CodePalettes::default(),
            columns: DEFAULT_COLUMNS,
        }
    }
}

/// The running slideshow
pub struct Presentation {
    deck: Deck,
    state: PresentationState,
    input: EdgeDetector,
    interpreter: PageInterpreter,
}

impl Presentation {
    pub fn new(deck: Deck, options: PresentationOptions) -> Self {
        let state = PresentationState::new(deck.len());
        Presentation {
            deck,
            state,
            input: EdgeDetector::new(options.port),
            interpreter: PageInterpreter::new(options.palettes, options.columns),
        }
    }

    pub fn state(&self) -> &PresentationState {
        &self.state
    }

    pub fn interpreter(&self) -> &PageInterpreter {
        &self.interpreter
    }

    /// Show the first page and loop until the host asks to quit
    pub fn run<P: Platform + ?Sized>(&mut self, host: &mut P) {
        info!(pages = self.deck.len(), "presentation starting");
        self.start();
        while !host.should_quit() {
            if self.cycle(host).is_none() {
                break;
            }
        }
        info!(index = ?self.state.index(), "presentation stopped");
    }

    /// Leave the "before first page" state
    pub fn start(&mut self) {
        if self.state.index().is_none() {
            self.state.advance();
        }
    }

    /// One clear → render → navigate iteration.
    ///
    /// Returns the command that was applied, or `None` if the host quit
    /// before one arrived.
    pub fn cycle<P: Platform + ?Sized>(&mut self, host: &mut P) -> Option<NavCommand> {
        host.clear_screen();

        let directive = self.render_current(host);
        let command = match directive {
            Some(command) => command,
            None => self.input.wait_cmd(host)?,
        };

        let before = self.state.index();
        self.state.apply(command);
        debug!(?command, ?before, after = ?self.state.index(), "navigation");
        Some(command)
    }

    /// Interpret the current page and refresh the progress indicator
    fn render_current<P: Platform + ?Sized>(&mut self, host: &mut P) -> Option<NavCommand> {
        let page = self.state.index().and_then(|index| self.deck.page(index));
        let directive = match page {
            Some(page) => {
                let directive = self.interpreter.render(
                    page.text(),
                    host,
                    &mut self.input,
                    &mut self.state,
                );
                let skipped = self.interpreter.diagnostics().len();
                if skipped > 0 {
                    warn!(index = ?self.state.index(), skipped, "page has malformed lines");
                }
                directive
            }
            None => None,
        };

        match self.state.progress() {
            Some((done, total)) => host.show_progress(done, total),
            None if self.state.start_index().is_some() => host.hide_progress(),
            None => {}
        }

        directive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Buttons, RecordingPlatform};

    #[test]
    fn test_start_shows_first_page() {
        let deck = Deck::parse("a\n---\nb");
        let mut presentation = Presentation::new(deck, PresentationOptions::default());
        assert_eq!(presentation.state().index(), None);
        presentation.start();
        assert_eq!(presentation.state().index(), Some(0));
    }

    #[test]
    fn test_cycle_applies_pressed_command() {
        let mut host = RecordingPlatform::with_presses([Buttons::START]);
        let deck = Deck::parse("a\n---\nb");
        let mut presentation = Presentation::new(deck, PresentationOptions::default());
        presentation.start();
        assert_eq!(presentation.cycle(&mut host), Some(NavCommand::Forward));
        assert_eq!(presentation.state().index(), Some(1));
    }
}
