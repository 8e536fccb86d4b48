//! Tile plane emulation
//!
//! [`TileScreen`] stands in for the console's character plane: a fixed grid
//! of tiles, each holding one glyph with a foreground and an optional
//! background palette id. Palette ids are resolved to colours only when the
//! plane is turned into ratatui [`Line`]s for display.
//!
//! # Glyphs
//!
//! Box-drawing primitives map onto single Unicode characters:
//!
//! ```text
//! ─ │ ┌ ┐ └ ┘   rules and corners
//! ├ ┤ ┬ ┴       junctions (named by the direction the branch leaves in)
//! ▶ ◀ ▲ ▼       arrowheads
//! “ ”           quotes around string literals
//! ```

use crate::platform::{Corner, Direction, Orientation, PaletteId, QuoteSide, Rgb};
use crate::ui::theme::{to_color, DEFAULT_BACKDROP, DEFAULT_PALETTE};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};
use rustc_hash::FxHashMap;

/// Character drawn on empty tiles while the background layer is shown
const BACKGROUND_DOT: char = '·';

pub fn rule_glyph(orientation: Orientation) -> char {
    match orientation {
        Orientation::Horizontal => '─',
        Orientation::Vertical => '│',
    }
}

pub fn corner_glyph(corner: Corner) -> char {
    match corner {
        Corner::TopLeft => '┌',
        Corner::TopRight => '┐',
        Corner::BottomLeft => '└',
        Corner::BottomRight => '┘',
    }
}

pub fn junction_glyph(direction: Direction) -> char {
    match direction {
        Direction::Right => '├',
        Direction::Left => '┤',
        Direction::Down => '┬',
        Direction::Up => '┴',
    }
}

pub fn arrowhead_glyph(direction: Direction) -> char {
    match direction {
        Direction::Right => '▶',
        Direction::Left => '◀',
        Direction::Up => '▲',
        Direction::Down => '▼',
    }
}

pub fn quote_glyph(side: QuoteSide) -> char {
    match side {
        QuoteSide::Open => '“',
        QuoteSide::Close => '”',
    }
}

/// One character cell of the plane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub symbol: char,
    pub fg: PaletteId,
    pub bg: Option<PaletteId>,
}

impl Tile {
    const BLANK: Tile = Tile {
        symbol: ' ',
        fg: 0,
        bg: None,
    };
}

/// Emulated character plane with its palette
#[derive(Debug, Clone)]
pub struct TileScreen {
    columns: u16,
    rows: u16,
    tiles: Vec<Tile>,
    palette: FxHashMap<PaletteId, Rgb>,
    text_palette: PaletteId,
    backdrop: PaletteId,
    background_visible: bool,
    scroll: i32,
}

impl TileScreen {
    pub fn new(columns: u16, rows: u16) -> Self {
        TileScreen {
            columns,
            rows,
            tiles: vec![Tile::BLANK; columns as usize * rows as usize],
            palette: DEFAULT_PALETTE.iter().copied().collect(),
            text_palette: 0,
            backdrop: DEFAULT_BACKDROP,
            background_visible: false,
            scroll: 0,
        }
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= i32::from(self.columns) || y >= i32::from(self.rows) {
            return None;
        }
        Some(y as usize * self.columns as usize + x as usize)
    }

    pub fn tile(&self, x: i32, y: i32) -> Option<Tile> {
        self.index(x, y).map(|i| self.tiles[i])
    }

    /// Blank every tile and drop the background layer
    pub fn clear(&mut self) {
        self.tiles.fill(Tile::BLANK);
        self.background_visible = false;
    }

    /// Place a glyph under the current text palette; off-plane writes are
    /// ignored.
    pub fn put(&mut self, x: i32, y: i32, symbol: char) {
        let fg = self.text_palette;
        if let Some(i) = self.index(x, y) {
            let tile = &mut self.tiles[i];
            tile.symbol = symbol;
            tile.fg = fg;
        }
    }

    pub fn put_str(&mut self, x: i32, y: i32, text: &str) {
        for (offset, ch) in text.chars().enumerate() {
            self.put(x + offset as i32, y, ch);
        }
    }

    pub fn fill(&mut self, x: i32, y: i32, palette: PaletteId) {
        if let Some(i) = self.index(x, y) {
            self.tiles[i].bg = Some(palette);
        }
    }

    pub fn set_colour(&mut self, id: PaletteId, colour: Rgb) {
        self.palette.insert(id, colour);
    }

    pub fn colour(&self, id: PaletteId) -> Color {
        self.palette
            .get(&id)
            .copied()
            .map(to_color)
            .unwrap_or(Color::Reset)
    }

    pub fn set_text_palette(&mut self, id: PaletteId) {
        self.text_palette = id;
    }

    pub fn set_backdrop(&mut self, id: PaletteId) {
        self.backdrop = id;
    }

    pub fn show_background(&mut self) {
        self.background_visible = true;
    }

    pub fn scroll_background(&mut self, step: i32) {
        self.background_visible = true;
        self.scroll = self.scroll.wrapping_add(step);
    }

    fn background_symbol(&self, x: i32, y: i32) -> char {
        if self.background_visible && (x + self.scroll).rem_euclid(4) == 0 && y % 2 == 0 {
            BACKGROUND_DOT
        } else {
            ' '
        }
    }

    /// Full-plane title card
    pub fn title_card(&mut self, title: &str) {
        self.clear();
        let width = i32::from(self.columns);
        let height = i32::from(self.rows);
        let banner = format!("  {}  ", title);
        let banner_width = banner.chars().count() as i32;
        let x = ((width - banner_width) / 2).max(0);
        let y = height / 2;

        for col in 0..width {
            self.put(col, y - 2, '═');
            self.put(col, y + 2, '═');
        }
        self.put_str(x, y, &banner);
        let hint = "press start";
        self.put_str(((width - hint.len() as i32) / 2).max(0), height - 3, hint);
    }

    /// Plane contents as styled lines, one per row
    pub fn lines(&self) -> Vec<Line<'static>> {
        let backdrop = self.colour(self.backdrop);
        let mut lines = Vec::with_capacity(self.rows as usize);

        for y in 0..i32::from(self.rows) {
            let mut spans: Vec<Span<'static>> = Vec::new();
            let mut run = String::new();
            let mut run_style = Style::default();

            for x in 0..i32::from(self.columns) {
                let Some(tile) = self.tile(x, y) else {
                    continue;
                };
                let symbol = if tile == Tile::BLANK {
                    self.background_symbol(x, y)
                } else {
                    tile.symbol
                };
                let style = Style::default()
                    .fg(self.colour(tile.fg))
                    .bg(tile.bg.map(|id| self.colour(id)).unwrap_or(backdrop));

                if style != run_style && !run.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut run), run_style));
                }
                run_style = style;
                run.push(symbol);
            }
            if !run.is_empty() {
                spans.push(Span::styled(run, run_style));
            }
            lines.push(Line::from(spans));
        }

        lines
    }

    /// Plain-text dump of the plane, for tests and logs
    pub fn text_rows(&self) -> Vec<String> {
        (0..i32::from(self.rows))
            .map(|y| {
                (0..i32::from(self.columns))
                    .filter_map(|x| self.tile(x, y).map(|t| t.symbol))
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }
}
