//! Edge-triggered navigation input
//!
//! The pad is sampled once per frame. A button counts as pressed only on the
//! frame its bit goes from 0 to 1, so holding a button produces a single
//! navigation command no matter how long it stays down.

use crate::platform::{Buttons, Platform};

/// Navigation directive produced by input or by a page command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavCommand {
    Forward,
    Back,
    Reload,
}

/// Tracks the previous pad sample for one controller port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeDetector {
    port: u8,
    previous: Buttons,
}

impl EdgeDetector {
    pub fn new(port: u8) -> Self {
        EdgeDetector {
            port,
            previous: Buttons::empty(),
        }
    }

    /// Record `current` and return the buttons that went down since the
    /// previous sample.
    pub fn edge(&mut self, current: Buttons) -> Buttons {
        let pressed = current & !self.previous;
        self.previous = current;
        pressed
    }

    /// Map freshly pressed buttons to a command.
    ///
    /// Priority is fixed: Start/Confirm, then Cancel, then Aux.
    pub fn command_for(pressed: Buttons) -> Option<NavCommand> {
        if pressed.intersects(Buttons::START | Buttons::CONFIRM) {
            Some(NavCommand::Forward)
        } else if pressed.contains(Buttons::CANCEL) {
            Some(NavCommand::Back)
        } else if pressed.contains(Buttons::AUX) {
            Some(NavCommand::Reload)
        } else {
            None
        }
    }

    /// Feed one sample and decode it
    pub fn observe(&mut self, current: Buttons) -> Option<NavCommand> {
        let pressed = self.edge(current);
        Self::command_for(pressed)
    }

    /// Sample the host pad once without waiting
    pub fn poll<P: Platform + ?Sized>(&mut self, host: &mut P) -> Option<NavCommand> {
        let current = host.read_buttons(self.port);
        self.observe(current)
    }

    /// Block, frame by frame, until a navigation edge shows up.
    ///
    /// Returns `None` only when the host asks to quit.
    pub fn wait_cmd<P: Platform + ?Sized>(&mut self, host: &mut P) -> Option<NavCommand> {
        loop {
            if let Some(command) = self.poll(host) {
                return Some(command);
            }
            if host.should_quit() {
                return None;
            }
            host.wait_for_frame();
        }
    }
}

impl Default for EdgeDetector {
    fn default() -> Self {
        Self::new(0)
    }
}
