// Scripted host used by tests and headless runs

use super::{
    Attachment, Buttons, Corner, Direction, Orientation, PaletteId, Platform, QuoteSide, Rgb,
};
use std::collections::VecDeque;

/// A single primitive call observed by [`RecordingPlatform`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCall {
    Clear,
    Text {
        x: i32,
        y: i32,
        text: String,
        palette: PaletteId,
    },
    Rule {
        x: i32,
        y: i32,
        orientation: Orientation,
    },
    Corner { x: i32, y: i32, corner: Corner },
    Arrowhead {
        x: i32,
        y: i32,
        direction: Direction,
    },
    Junction {
        x: i32,
        y: i32,
        direction: Direction,
    },
    Quote {
        x: i32,
        y: i32,
        side: QuoteSide,
        palette: PaletteId,
    },
    Image { x: i32, y: i32, name: String },
    Background {
        x: i32,
        y: i32,
        palette: PaletteId,
        attachment: Attachment,
    },
    PaletteColour { id: PaletteId, colour: Rgb },
    Backdrop { id: PaletteId },
    RenderBackground,
    ScrollBackground { step: i32 },
    TitleScreen,
    DemoGame,
    Progress { done: usize, total: usize },
    HideProgress,
    Timer { baseline_frame: u64 },
    HideTimer,
    Sound,
    Sleep { frames: u32 },
}

/// Fake host that records draw calls and replays a button script.
///
/// Each call to [`Platform::wait_for_frame`] advances to the next scripted
/// sample. Once the script runs out the pad reads as released and
/// [`Platform::should_quit`] turns true, which ends the presentation loop.
#[derive(Debug, Clone, Default)]
pub struct RecordingPlatform {
    pub calls: Vec<DrawCall>,
    script: VecDeque<Buttons>,
    current: Buttons,
    text_palette: PaletteId,
    frames: u64,
    exhausted: bool,
}

impl RecordingPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host whose pad reports `samples` on successive frames.
    ///
    /// The first sample is visible before any frame wait.
    pub fn with_script<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = Buttons>,
    {
        let mut script: VecDeque<Buttons> = samples.into_iter().collect();
        let current = script.pop_front();
        RecordingPlatform {
            exhausted: current.is_none(),
            current: current.unwrap_or_default(),
            script,
            ..Self::default()
        }
    }

    /// Script that presses each of `presses` for one frame, with a released
    /// frame in between so every press is a fresh edge.
    pub fn with_presses<I>(presses: I) -> Self
    where
        I: IntoIterator<Item = Buttons>,
    {
        let mut samples = Vec::new();
        for press in presses {
            samples.push(press);
            samples.push(Buttons::empty());
        }
        Self::with_script(samples)
    }

    /// Drop recorded calls, keeping the script position
    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    /// Text drawn since the last clear, in call order
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&DrawCall) -> bool) -> usize {
        self.calls.iter().filter(|call| pred(call)).count()
    }
}

impl Platform for RecordingPlatform {
    fn clear_screen(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        self.calls.push(DrawCall::Text {
            x,
            y,
            text: text.to_string(),
            palette: self.text_palette,
        });
    }

    fn draw_rule(&mut self, x: i32, y: i32, orientation: Orientation) {
        self.calls.push(DrawCall::Rule { x, y, orientation });
    }

    fn draw_corner(&mut self, x: i32, y: i32, corner: Corner) {
        self.calls.push(DrawCall::Corner { x, y, corner });
    }

    fn draw_arrowhead(&mut self, x: i32, y: i32, direction: Direction) {
        self.calls.push(DrawCall::Arrowhead { x, y, direction });
    }

    fn draw_junction(&mut self, x: i32, y: i32, direction: Direction) {
        self.calls.push(DrawCall::Junction { x, y, direction });
    }

    fn draw_quote(&mut self, x: i32, y: i32, side: QuoteSide) {
        self.calls.push(DrawCall::Quote {
            x,
            y,
            side,
            palette: self.text_palette,
        });
    }

    fn draw_image(&mut self, x: i32, y: i32, name: &str) {
        self.calls.push(DrawCall::Image {
            x,
            y,
            name: name.to_string(),
        });
    }

    fn set_background(&mut self, x: i32, y: i32, palette: PaletteId, attachment: Attachment) {
        self.calls.push(DrawCall::Background {
            x,
            y,
            palette,
            attachment,
        });
    }

    fn set_palette_colour(&mut self, id: PaletteId, colour: Rgb) {
        self.calls.push(DrawCall::PaletteColour { id, colour });
    }

    fn set_text_palette(&mut self, id: PaletteId) {
        self.text_palette = id;
    }

    fn set_backdrop(&mut self, id: PaletteId) {
        self.calls.push(DrawCall::Backdrop { id });
    }

    fn render_background(&mut self) {
        self.calls.push(DrawCall::RenderBackground);
    }

    fn scroll_background(&mut self, step: i32) {
        self.calls.push(DrawCall::ScrollBackground { step });
    }

    fn title_screen(&mut self) {
        self.calls.push(DrawCall::TitleScreen);
    }

    fn run_demo_game(&mut self) {
        self.calls.push(DrawCall::DemoGame);
    }

    fn show_progress(&mut self, done: usize, total: usize) {
        self.calls.push(DrawCall::Progress { done, total });
    }

    fn hide_progress(&mut self) {
        self.calls.push(DrawCall::HideProgress);
    }

    fn show_timer(&mut self, baseline_frame: u64) {
        self.calls.push(DrawCall::Timer { baseline_frame });
    }

    fn hide_timer(&mut self) {
        self.calls.push(DrawCall::HideTimer);
    }

    fn play_sound(&mut self) {
        self.calls.push(DrawCall::Sound);
    }

    fn sleep_raw(&mut self, frames: u32) {
        self.calls.push(DrawCall::Sleep { frames });
        self.frames += u64::from(frames);
    }

    fn read_buttons(&mut self, _port: u8) -> Buttons {
        self.current
    }

    fn wait_for_frame(&mut self) {
        self.frames += 1;
        match self.script.pop_front() {
            Some(sample) => self.current = sample,
            None => {
                self.current = Buttons::empty();
                self.exhausted = true;
            }
        }
    }

    fn frame_count(&self) -> u64 {
        self.frames
    }

    fn should_quit(&self) -> bool {
        self.exhausted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_advances_per_frame() {
        let mut host = RecordingPlatform::with_script([Buttons::START, Buttons::CANCEL]);
        assert_eq!(host.read_buttons(0), Buttons::START);
        host.wait_for_frame();
        assert_eq!(host.read_buttons(0), Buttons::CANCEL);
        assert!(!host.should_quit());
        host.wait_for_frame();
        assert_eq!(host.read_buttons(0), Buttons::empty());
        assert!(host.should_quit());
        assert_eq!(host.frame_count(), 2);
    }

    #[test]
    fn test_empty_script_quits_immediately() {
        let host = RecordingPlatform::with_script([]);
        assert!(host.should_quit());
    }

    #[test]
    fn test_text_records_active_palette() {
        let mut host = RecordingPlatform::new();
        host.set_text_palette(3);
        host.draw_text(1, 2, "hi");
        assert_eq!(
            host.calls,
            vec![DrawCall::Text {
                x: 1,
                y: 2,
                text: "hi".to_string(),
                palette: 3
            }]
        );
    }
}
