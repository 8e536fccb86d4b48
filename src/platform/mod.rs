//! Host platform capability surface
//!
//! Everything the slideshow core needs from the machine it runs on is
//! expressed through the [`Platform`] trait: tile drawing primitives, palette
//! control, the per-frame wait and the controller port read. The core never
//! touches hardware (or a terminal) directly.
//!
//! - [`Platform`]: one method per primitive
//! - [`Buttons`]: controller bitmask in the console's register layout
//! - [`recording`]: a scripted fake host that records every call

pub mod recording;

pub use recording::{DrawCall, RecordingPlatform};

use bitflags::bitflags;

bitflags! {
    /// Controller button state, one bit per button.
    ///
    /// The layout matches the pad register: the low nibble is the d-pad,
    /// followed by the three face buttons and Start.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Buttons: u8 {
        const UP      = 0b0000_0001;
        const DOWN    = 0b0000_0010;
        const LEFT    = 0b0000_0100;
        const RIGHT   = 0b0000_1000;
        const CANCEL  = 0b0001_0000;
        const AUX     = 0b0010_0000;
        const CONFIRM = 0b0100_0000;
        const START   = 0b1000_0000;
    }
}

impl Default for Buttons {
    fn default() -> Self {
        Buttons::empty()
    }
}

/// Travel direction for arrows and junction branches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    /// Unit step `(dx, dy)` in tile coordinates (y grows downwards)
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    /// Orientation of a plain rule drawn while travelling this way
    pub fn orientation(self) -> Orientation {
        match self {
            Direction::Right | Direction::Left => Orientation::Horizontal,
            Direction::Up | Direction::Down => Orientation::Vertical,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuoteSide {
    Open,
    Close,
}

/// Which part of a tile a background fill attaches to.
///
/// Edge tiles of a box only carry fill on the side facing the interior, so
/// the fill sits under the border glyph without bleeding past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attachment {
    /// Whole tile (box interior, text backgrounds)
    Full,
    /// Fill in the top half; used on a box's bottom edge
    Top,
    /// Fill in the bottom half; used on a box's top edge
    Bottom,
    /// Fill in the left half; used on a box's right edge
    Left,
    /// Fill in the right half; used on a box's left edge
    Right,
    /// Corner tile of a box, tagged with which corner it is
    Corner(Corner),
}

/// 24-bit colour as stored in a palette slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Parse `RGB` or `RRGGBB` hex (no leading `#`)
    pub fn from_hex(text: &str) -> Option<Self> {
        if !text.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let expanded: String = match text.len() {
            3 => text.chars().flat_map(|c| [c, c]).collect(),
            6 => text.to_string(),
            _ => return None,
        };
        let value = u32::from_str_radix(&expanded, 16).ok()?;
        Some(Rgb::new((value >> 16) as u8, (value >> 8) as u8, value as u8))
    }
}

/// Palette slot identifier
pub type PaletteId = u8;

/// Primitive operations provided by the host.
///
/// Coordinates are tile coordinates and may fall outside the visible plane;
/// implementations clip.
pub trait Platform {
    fn clear_screen(&mut self);

    fn draw_text(&mut self, x: i32, y: i32, text: &str);
    fn draw_rule(&mut self, x: i32, y: i32, orientation: Orientation);
    fn draw_corner(&mut self, x: i32, y: i32, corner: Corner);
    fn draw_arrowhead(&mut self, x: i32, y: i32, direction: Direction);
    /// T-junction where a branch leaves an existing line heading `direction`
    fn draw_junction(&mut self, x: i32, y: i32, direction: Direction);
    fn draw_quote(&mut self, x: i32, y: i32, side: QuoteSide);
    fn draw_image(&mut self, x: i32, y: i32, name: &str);

    fn set_background(&mut self, x: i32, y: i32, palette: PaletteId, attachment: Attachment);
    fn set_palette_colour(&mut self, id: PaletteId, colour: Rgb);
    fn set_text_palette(&mut self, id: PaletteId);
    fn set_backdrop(&mut self, id: PaletteId);

    /// Draw the full-plane background layer
    fn render_background(&mut self);
    /// Scroll the background layer by `step` tiles
    fn scroll_background(&mut self, step: i32);
    /// Show the full-screen title card
    fn title_screen(&mut self);
    /// Hand the screen to the bundled mini-game until it yields
    fn run_demo_game(&mut self);

    fn show_progress(&mut self, done: usize, total: usize);
    fn hide_progress(&mut self);
    /// Show the elapsed-time indicator counting from `baseline_frame`
    fn show_timer(&mut self, baseline_frame: u64);
    fn hide_timer(&mut self);

    fn play_sound(&mut self);
    fn sleep_raw(&mut self, frames: u32);

    fn read_buttons(&mut self, port: u8) -> Buttons;
    /// Block until the next display refresh boundary
    fn wait_for_frame(&mut self);
    /// Frames elapsed since the host started
    fn frame_count(&self) -> u64;

    /// Whether the host wants the presentation loop to stop.
    ///
    /// Console hardware never quits; desktop hosts and test doubles do.
    fn should_quit(&self) -> bool {
        false
    }
}
