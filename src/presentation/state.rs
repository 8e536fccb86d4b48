// Presentation-wide navigation state

use super::input::NavCommand;

/// Page position and the page-level indicators controlled from markup.
///
/// Lives for the whole run; only navigation and the progress and timer
/// commands mutate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationState {
    /// `None` until the first forward step
    index: Option<usize>,
    page_count: usize,
    /// First page of the current sub-section, for the progress display
    start_index: Option<usize>,
    timer_baseline: u64,
    timer_visible: bool,
}

impl PresentationState {
    pub fn new(page_count: usize) -> Self {
        PresentationState {
            index: None,
            page_count,
            start_index: None,
            timer_baseline: 0,
            timer_visible: false,
        }
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Step to the next page, holding at the last one
    pub fn advance(&mut self) {
        if self.page_count == 0 {
            return;
        }
        let last = self.page_count - 1;
        self.index = Some(match self.index {
            None => 0,
            Some(index) => (index + 1).min(last),
        });
    }

    /// Step to the previous page, holding at the first one
    pub fn retreat(&mut self) {
        if let Some(index) = self.index {
            self.index = Some(index.saturating_sub(1));
        }
    }

    pub fn apply(&mut self, command: NavCommand) {
        match command {
            NavCommand::Forward => self.advance(),
            NavCommand::Back => self.retreat(),
            NavCommand::Reload => {}
        }
    }

    /// Mark the current page as the start of a progress sub-section
    pub fn mark_start(&mut self) {
        self.start_index = Some(self.index.unwrap_or(0));
    }

    pub fn start_index(&self) -> Option<usize> {
        self.start_index
    }

    /// Drop the start marker so no progress is shown
    pub fn clear_start(&mut self) {
        self.start_index = None;
    }

    /// `(done, total)` pages of the current sub-section, counting the
    /// current page as done. `None` until a start index is marked, and on
    /// pages before it.
    pub fn progress(&self) -> Option<(usize, usize)> {
        let start = self.start_index?;
        let index = self.index.unwrap_or(0);
        if index < start {
            return None;
        }
        let total = self.page_count.saturating_sub(start);
        Some((index - start + 1, total))
    }

    pub fn reset_timer(&mut self, frame: u64) {
        self.timer_baseline = frame;
        self.timer_visible = true;
    }

    pub fn hide_timer(&mut self) {
        self.timer_visible = false;
    }

    pub fn timer_baseline(&self) -> u64 {
        self.timer_baseline
    }

    pub fn timer_visible(&self) -> bool {
        self.timer_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_clamps_at_both_ends() {
        let mut state = PresentationState::new(3);
        state.advance();
        let mut seen = vec![state.index()];
        for command in [
            NavCommand::Back,
            NavCommand::Forward,
            NavCommand::Forward,
            NavCommand::Forward,
        ] {
            state.apply(command);
            seen.push(state.index());
        }
        assert_eq!(seen, vec![Some(0), Some(0), Some(1), Some(2), Some(2)]);
    }

    #[test]
    fn test_starts_before_first_page() {
        let mut state = PresentationState::new(2);
        assert_eq!(state.index(), None);
        state.retreat();
        assert_eq!(state.index(), None);
        state.advance();
        assert_eq!(state.index(), Some(0));
    }

    #[test]
    fn test_empty_deck_never_moves() {
        let mut state = PresentationState::new(0);
        state.advance();
        state.retreat();
        assert_eq!(state.index(), None);
    }

    #[test]
    fn test_reload_keeps_index() {
        let mut state = PresentationState::new(4);
        state.advance();
        state.advance();
        state.apply(NavCommand::Reload);
        assert_eq!(state.index(), Some(1));
    }

    #[test]
    fn test_progress_counts_from_marked_start() {
        let mut state = PresentationState::new(10);
        assert_eq!(state.progress(), None);
        state.advance();
        state.advance();
        state.advance();
        state.mark_start();
        assert_eq!(state.index(), Some(2));
        assert_eq!(state.progress(), Some((1, 8)));
        state.advance();
        assert_eq!(state.progress(), Some((2, 8)));
        state.retreat();
        state.retreat();
        assert_eq!(state.index(), Some(1));
        assert_eq!(state.progress(), None);
    }

    #[test]
    fn test_clear_start_drops_progress() {
        let mut state = PresentationState::new(4);
        state.advance();
        state.mark_start();
        assert_eq!(state.progress(), Some((1, 4)));
        state.clear_start();
        assert_eq!(state.start_index(), None);
        assert_eq!(state.progress(), None);
    }

    #[test]
    fn test_timer_flags() {
        let mut state = PresentationState::new(1);
        state.reset_timer(120);
        assert!(state.timer_visible());
        assert_eq!(state.timer_baseline(), 120);
        state.hide_timer();
        assert!(!state.timer_visible());
    }
}
