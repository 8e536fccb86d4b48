// Per-render interpreter state

use crate::platform::PaletteId;

/// How un-prefixed lines are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Un-prefixed lines are dropped
    #[default]
    None,
    /// Un-prefixed lines are drawn as text, optionally over a background
    Text { bg: Option<PaletteId> },
    /// Un-prefixed lines go through the code highlighter
    Code,
}

/// Continuation mode plus the cursor for the next continuation line.
///
/// Reset at the start of every page; any recognised command clears the
/// mode and only `txt` / `code` set it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InterpreterState {
    pub mode: Mode,
    pub cursor_x: i32,
    pub cursor_y: i32,
}

impl InterpreterState {
    pub fn reset(&mut self) {
        *self = InterpreterState::default();
    }

    pub fn clear_mode(&mut self) {
        self.mode = Mode::None;
    }

    /// Enter `mode` with the cursor on the row below `(x, y)`
    pub fn enter(&mut self, mode: Mode, x: i32, y: i32) {
        self.mode = mode;
        self.cursor_x = x;
        self.cursor_y = y.saturating_add(1);
    }

    /// Current cursor position, moving the cursor down one row
    pub fn next_row(&mut self) -> (i32, i32) {
        let position = (self.cursor_x, self.cursor_y);
        self.cursor_y = self.cursor_y.saturating_add(1);
        position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_down_from_header() {
        let mut state = InterpreterState::default();
        state.enter(Mode::Code, 4, 7);
        assert_eq!(state.next_row(), (4, 8));
        assert_eq!(state.next_row(), (4, 9));
        state.reset();
        assert_eq!(state, InterpreterState::default());
    }

    #[test]
    fn test_cursor_stops_at_last_row() {
        let mut state = InterpreterState::default();
        state.enter(Mode::Text { bg: None }, 0, i32::MAX - 1);
        assert_eq!(state.next_row(), (0, i32::MAX));
        assert_eq!(state.next_row(), (0, i32::MAX));
    }
}
