use crate::platform::{PaletteId, Rgb};
use ratatui::style::Color;

pub struct Theme {
    pub status_bg: Color,
    pub status_fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub frame: Color,     // Border around the tile plane
}

pub const DEFAULT_THEME: Theme = Theme {
    status_bg: Color::Rgb(50, 50, 70),
    status_fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    frame: Color::Rgb(108, 112, 134),
};

/// Power-on palette, indexed by palette id.
///
/// Slots 0-3 line up with the default code highlighting palettes
/// (plain, keyword, identifier, string).
pub const DEFAULT_PALETTE: [(PaletteId, Rgb); 16] = [
    (0, Rgb::new(0xEE, 0xEE, 0xEE)),  // plain text
    (1, Rgb::new(0x89, 0xB4, 0xFA)),  // keywords
    (2, Rgb::new(0xF9, 0xE2, 0xAF)),  // identifiers
    (3, Rgb::new(0xFA, 0xB3, 0x87)),  // strings
    (4, Rgb::new(0x1E, 0x1E, 0x2E)),  // backdrop
    (5, Rgb::new(0x31, 0x32, 0x44)),
    (6, Rgb::new(0x45, 0x47, 0x5A)),
    (7, Rgb::new(0xA6, 0xE3, 0xA1)),
    (8, Rgb::new(0xF3, 0x8B, 0xA8)),
    (9, Rgb::new(0x94, 0xE2, 0xD5)),
    (10, Rgb::new(0xF5, 0xC2, 0xE7)),
    (11, Rgb::new(0xCB, 0xA6, 0xF7)),
    (12, Rgb::new(0x6C, 0x70, 0x86)),
    (13, Rgb::new(0x00, 0x00, 0x00)),
    (14, Rgb::new(0x88, 0x00, 0x00)),
    (15, Rgb::new(0xFF, 0xFF, 0xFF)),
];

/// Palette id used as the backdrop until `bgcol` changes it
pub const DEFAULT_BACKDROP: PaletteId = 4;

pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}
