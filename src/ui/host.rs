//! Terminal implementation of the host platform
//!
//! [`TerminalHost`] emulates the console on a desktop terminal: drawing goes
//! to a [`TileScreen`], every frame wait repaints the screen through
//! ratatui, and key presses are latched into controller button samples.
//!
//! Terminals report key presses rather than held state, so each press holds
//! its button down for exactly one frame. That keeps the edge detector
//! seeing one clean 0→1 transition per keystroke.

use crate::platform::{
    Attachment, Buttons, Corner, Direction, Orientation, PaletteId, Platform, QuoteSide, Rgb,
};
use crate::ui::images::ImageStore;
use crate::ui::screen::{
    arrowhead_glyph, corner_glyph, junction_glyph, quote_glyph, rule_glyph, TileScreen,
};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io::{self, Write};
use std::time::{Duration, Instant};
use tracing::{debug, error};

/// Width of the progress bar in the status line
const PROGRESS_BAR_CELLS: usize = 12;

/// Map a key to the pad button it emulates
pub fn button_for_key(code: KeyCode) -> Option<Buttons> {
    match code {
        KeyCode::Up => Some(Buttons::UP),
        KeyCode::Down => Some(Buttons::DOWN),
        KeyCode::Left => Some(Buttons::LEFT),
        KeyCode::Right => Some(Buttons::RIGHT),
        KeyCode::Enter => Some(Buttons::START),
        KeyCode::Char(' ') | KeyCode::Char('c') => Some(Buttons::CONFIRM),
        KeyCode::Backspace | KeyCode::Char('x') => Some(Buttons::CANCEL),
        KeyCode::Char('r') => Some(Buttons::AUX),
        _ => None,
    }
}

fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Format elapsed frames as `mm:ss`
pub fn format_elapsed(frames: u64, fps: u32) -> String {
    let seconds = frames / u64::from(fps.max(1));
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Settings for a [`TerminalHost`]
#[derive(Debug, Clone)]
pub struct HostOptions {
    pub columns: u16,
    pub rows: u16,
    pub fps: u32,
    /// Text shown on the title card
    pub title: String,
    pub palette: Vec<(PaletteId, Rgb)>,
}

/// Desktop stand-in for the console
pub struct TerminalHost<B: Backend> {
    terminal: Terminal<B>,
    screen: TileScreen,
    images: ImageStore,
    title: String,
    fps: u32,
    frame_duration: Duration,
    next_frame: Instant,
    frames: u64,
    pending: Buttons,
    current: Buttons,
    progress: Option<(usize, usize)>,
    timer_baseline: Option<u64>,
    quit: bool,
}

impl<B: Backend> TerminalHost<B> {
    pub fn new(terminal: Terminal<B>, options: HostOptions, images: ImageStore) -> Self {
        let mut screen = TileScreen::new(options.columns, options.rows);
        for (id, colour) in &options.palette {
            screen.set_colour(*id, *colour);
        }
        let fps = options.fps.max(1);
        let frame_duration = Duration::from_secs(1) / fps;

        TerminalHost {
            terminal,
            screen,
            images,
            title: options.title,
            fps,
            frame_duration,
            next_frame: Instant::now() + frame_duration,
            frames: 0,
            pending: Buttons::empty(),
            current: Buttons::empty(),
            progress: None,
            timer_baseline: None,
            quit: false,
        }
    }

    pub fn screen(&self) -> &TileScreen {
        &self.screen
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// Repaint the terminal from the tile plane
    pub fn present(&mut self) -> io::Result<()> {
        let status = self.status_line();
        let screen = &self.screen;
        self.terminal.draw(|frame| render_frame(frame, screen, &status))?;
        Ok(())
    }

    fn status_line(&self) -> Line<'static> {
        let mut spans = Vec::new();

        if let Some((done, total)) = self.progress {
            let filled = if total == 0 {
                0
            } else {
                (done.min(total) * PROGRESS_BAR_CELLS) / total
            };
            spans.push(Span::styled(
                format!(" {}/{} ", done, total),
                Style::default()
                    .bg(DEFAULT_THEME.primary)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(
                    " {}{} ",
                    "█".repeat(filled),
                    "░".repeat(PROGRESS_BAR_CELLS - filled)
                ),
                Style::default().fg(DEFAULT_THEME.primary),
            ));
        }

        if let Some(baseline) = self.timer_baseline {
            spans.push(Span::styled(
                format!(" {} ", format_elapsed(self.frames.saturating_sub(baseline), self.fps)),
                Style::default()
                    .bg(DEFAULT_THEME.secondary)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        spans.push(Span::styled(
            " enter/space: next  x: back  r: reload  q: quit ",
            Style::default().fg(DEFAULT_THEME.comment),
        ));

        Line::from(spans)
    }

    /// Drain terminal events until the frame deadline
    fn pump_events(&mut self) -> io::Result<()> {
        loop {
            let now = Instant::now();
            if now >= self.next_frame {
                self.next_frame = (self.next_frame + self.frame_duration).max(now);
                return Ok(());
            }
            if event::poll(self.next_frame - now)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if is_quit_key(&key) {
            debug!("quit requested");
            self.quit = true;
        } else if let Some(button) = button_for_key(key.code) {
            self.pending |= button;
        }
    }
}

/// Lay out the bordered plane and the status line, centred in the terminal
fn render_frame(frame: &mut Frame, screen: &TileScreen, status: &Line<'static>) {
    let area = frame.area();
    let width = (screen.columns() + 2).min(area.width);
    let height = (screen.rows() + 2).min(area.height.saturating_sub(1));
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height.saturating_sub(height + 1)) / 2;

    let plane_area = Rect::new(x, y, width, height);
    let status_y = (y + height).min(area.bottom().saturating_sub(1));
    let status_area = Rect::new(area.x, status_y, area.width, 1);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.frame));
    frame.render_widget(Paragraph::new(screen.lines()).block(block), plane_area);

    let status = Paragraph::new(status.clone())
        .style(
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.status_fg),
        )
        .alignment(Alignment::Center);
    frame.render_widget(status, status_area);
}

impl<B: Backend> Platform for TerminalHost<B> {
    fn clear_screen(&mut self) {
        self.screen.clear();
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        self.screen.put_str(x, y, text);
    }

    fn draw_rule(&mut self, x: i32, y: i32, orientation: Orientation) {
        self.screen.put(x, y, rule_glyph(orientation));
    }

    fn draw_corner(&mut self, x: i32, y: i32, corner: Corner) {
        self.screen.put(x, y, corner_glyph(corner));
    }

    fn draw_arrowhead(&mut self, x: i32, y: i32, direction: Direction) {
        self.screen.put(x, y, arrowhead_glyph(direction));
    }

    fn draw_junction(&mut self, x: i32, y: i32, direction: Direction) {
        self.screen.put(x, y, junction_glyph(direction));
    }

    fn draw_quote(&mut self, x: i32, y: i32, side: QuoteSide) {
        self.screen.put(x, y, quote_glyph(side));
    }

    fn draw_image(&mut self, x: i32, y: i32, name: &str) {
        match self.images.get(name) {
            Some(rows) => {
                for (dy, row) in rows.iter().enumerate() {
                    self.screen.put_str(x, y + dy as i32, row);
                }
            }
            None => {
                debug!(name, "image not found, drawing placeholder");
                self.screen.put_str(x, y, &format!("[{}]", name));
            }
        }
    }

    // A terminal cell has a single background colour, so every attachment
    // fills the whole tile.
    fn set_background(&mut self, x: i32, y: i32, palette: PaletteId, _attachment: Attachment) {
        self.screen.fill(x, y, palette);
    }

    fn set_palette_colour(&mut self, id: PaletteId, colour: Rgb) {
        self.screen.set_colour(id, colour);
    }

    fn set_text_palette(&mut self, id: PaletteId) {
        self.screen.set_text_palette(id);
    }

    fn set_backdrop(&mut self, id: PaletteId) {
        self.screen.set_backdrop(id);
    }

    fn render_background(&mut self) {
        self.screen.show_background();
    }

    fn scroll_background(&mut self, step: i32) {
        self.screen.scroll_background(step);
    }

    fn title_screen(&mut self) {
        let title = self.title.clone();
        self.screen.title_card(&title);
    }

    fn run_demo_game(&mut self) {
        self.screen.clear();
        let rows = i32::from(self.screen.rows());
        self.screen.put_str(2, rows / 2, "demo game is only available on hardware");
    }

    fn show_progress(&mut self, done: usize, total: usize) {
        self.progress = Some((done, total));
    }

    fn hide_progress(&mut self) {
        self.progress = None;
    }

    fn show_timer(&mut self, baseline_frame: u64) {
        self.timer_baseline = Some(baseline_frame);
    }

    fn hide_timer(&mut self) {
        self.timer_baseline = None;
    }

    fn play_sound(&mut self) {
        let mut stdout = io::stdout();
        if let Err(err) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
            debug!(%err, "terminal bell failed");
        }
    }

    fn sleep_raw(&mut self, frames: u32) {
        for _ in 0..frames {
            if self.quit {
                break;
            }
            self.wait_for_frame();
        }
    }

    fn read_buttons(&mut self, port: u8) -> Buttons {
        if port == 0 {
            self.current
        } else {
            Buttons::empty()
        }
    }

    fn wait_for_frame(&mut self) {
        if let Err(err) = self.present() {
            error!(%err, "failed to draw frame");
            self.quit = true;
            return;
        }
        if let Err(err) = self.pump_events() {
            error!(%err, "failed to read terminal events");
            self.quit = true;
            return;
        }
        self.current = std::mem::take(&mut self.pending);
        self.frames += 1;
    }

    fn frame_count(&self) -> u64 {
        self.frames
    }

    fn should_quit(&self) -> bool {
        self.quit
    }
}
