//! Page interpreter
//!
//! Walks one page line by line, decoding each line through the markup
//! table and dispatching the resulting [`Command`] to the renderers or the
//! host. Commands that hand control to the viewer (`pause`, `titlescreen`,
//! `demogame`, `scroll`) may end the page early with a navigation directive.

use std::ops::ControlFlow;

use tracing::{debug, trace, warn};

use super::state::{InterpreterState, Mode};
use crate::markup::{parse_line, Command, MarkupError, ParsedLine};
use crate::platform::{Attachment, PaletteId, Platform};
use crate::presentation::{EdgeDetector, NavCommand, PresentationState};
use crate::render::{draw_arrow, draw_code, draw_rect, CodePalettes};

/// Row the `title` command draws on
pub const TITLE_ROW: i32 = 1;

/// Default plane width in tiles
pub const DEFAULT_COLUMNS: i32 = 40;

/// Outcome of executing one command
type Flow = ControlFlow<Option<NavCommand>>;

/// Interprets page markup against a [`Platform`]
#[derive(Debug, Clone)]
pub struct PageInterpreter {
    state: InterpreterState,
    palettes: CodePalettes,
    /// Text palette selected by `txtpal`; survives across pages like the
    /// host register it mirrors
    text_palette: PaletteId,
    columns: i32,
    diagnostics: Vec<MarkupError>,
}

impl PageInterpreter {
    pub fn new(palettes: CodePalettes, columns: i32) -> Self {
        PageInterpreter {
            state: InterpreterState::default(),
            palettes,
            text_palette: palettes.plain,
            columns,
            diagnostics: Vec::new(),
        }
    }

    pub fn state(&self) -> &InterpreterState {
        &self.state
    }

    /// Malformed lines skipped during the last render
    pub fn diagnostics(&self) -> &[MarkupError] {
        &self.diagnostics
    }

    /// Render one page.
    ///
    /// Returns the navigation directive of a command that ended the page
    /// early, or `None` when every line was processed (or the host quit
    /// while a command was waiting for input).
    pub fn render<P: Platform + ?Sized>(
        &mut self,
        page: &str,
        host: &mut P,
        input: &mut EdgeDetector,
        presentation: &mut PresentationState,
    ) -> Option<NavCommand> {
        self.state.reset();
        self.diagnostics.clear();

        for (index, raw) in page.split('\n').enumerate() {
            let line_no = index + 1;
            match parse_line(raw, line_no) {
                Ok(ParsedLine::Comment) => {}
                Ok(ParsedLine::Continuation(text)) => self.continue_line(host, text),
                Ok(ParsedLine::Command(command)) => {
                    trace!(line = line_no, ?command, "executing");
                    self.state.clear_mode();
                    if let ControlFlow::Break(directive) =
                        self.execute(command, host, input, presentation)
                    {
                        debug!(line = line_no, ?directive, "page ended early");
                        return directive;
                    }
                }
                Err(err) => {
                    warn!(%err, "skipping malformed command");
                    self.diagnostics.push(err);
                }
            }
        }

        None
    }

    fn continue_line<P: Platform + ?Sized>(&mut self, host: &mut P, text: &str) {
        match self.state.mode {
            Mode::None => {}
            Mode::Text { bg } => {
                let (x, y) = self.state.next_row();
                self.draw_text(host, x, y, bg, text);
            }
            Mode::Code => {
                let (x, y) = self.state.next_row();
                self.draw_code(host, x, y, text);
            }
        }
    }

    fn draw_text<P: Platform + ?Sized>(
        &self,
        host: &mut P,
        x: i32,
        y: i32,
        bg: Option<PaletteId>,
        text: &str,
    ) {
        if let Some(palette) = bg {
            for column in 0..text.chars().count() as i32 {
                host.set_background(x + column, y, palette, Attachment::Full);
            }
        }
        host.draw_text(x, y, text);
    }

    fn draw_code<P: Platform + ?Sized>(&self, host: &mut P, x: i32, y: i32, code: &str) {
        draw_code(host, code, x, y, &self.palettes);
        host.set_text_palette(self.text_palette);
    }

    fn execute<P: Platform + ?Sized>(
        &mut self,
        command: Command,
        host: &mut P,
        input: &mut EdgeDetector,
        presentation: &mut PresentationState,
    ) -> Flow {
        match command {
            Command::Title { text } => {
                let width = text.chars().count() as i32;
                let x = ((self.columns - width) / 2).max(0);
                host.draw_text(x, TITLE_ROW, &text);
            }
            Command::Text { x, y, bg, text } => {
                self.draw_text(host, x, y, bg, &text);
                self.state.enter(Mode::Text { bg }, x, y);
            }
            Command::SetColour { id, colour } => host.set_palette_colour(id, colour),
            Command::TextPalette { id } => {
                self.text_palette = id;
                host.set_text_palette(id);
            }
            Command::Pause => {
                return match input.wait_cmd(host) {
                    Some(NavCommand::Forward) => ControlFlow::Continue(()),
                    other => ControlFlow::Break(other),
                };
            }
            Command::Image { x, y, name } => host.draw_image(x, y, &name),
            Command::Code { x, y, code } => {
                self.draw_code(host, x, y, &code);
                self.state.enter(Mode::Code, x, y);
            }
            Command::Rect {
                x,
                y,
                width,
                height,
                bg,
            } => draw_rect(host, x, y, width, height, bg),
            Command::Arrow {
                x,
                y,
                direction,
                length,
                junction,
            } => draw_arrow(host, x, y, direction, length, junction),
            Command::Backdrop { id } => host.set_backdrop(id),
            Command::SleepRaw { frames } => host.sleep_raw(frames),
            Command::TitleScreen => {
                host.title_screen();
                return ControlFlow::Break(input.wait_cmd(host));
            }
            Command::DemoGame => {
                host.run_demo_game();
                return ControlFlow::Break(input.wait_cmd(host));
            }
            Command::Scroll => return ControlFlow::Break(scroll_until_input(host, input)),
            Command::RenderBackground => host.render_background(),
            Command::InitProgress => {
                presentation.mark_start();
                if let Some((done, total)) = presentation.progress() {
                    host.show_progress(done, total);
                }
            }
            Command::HideProgress => {
                presentation.clear_start();
                host.hide_progress();
            }
            Command::ResetTimer => {
                presentation.reset_timer(host.frame_count());
                host.show_timer(presentation.timer_baseline());
            }
            Command::HideTimer => {
                presentation.hide_timer();
                host.hide_timer();
            }
            Command::PlaySound => host.play_sound(),
        }

        ControlFlow::Continue(())
    }
}

impl Default for PageInterpreter {
    fn default() -> Self {
        Self::new(CodePalettes::default(), DEFAULT_COLUMNS)
    }
}

/// Scroll the background one tile per frame until a navigation edge
fn scroll_until_input<P: Platform + ?Sized>(
    host: &mut P,
    input: &mut EdgeDetector,
) -> Option<NavCommand> {
    loop {
        if let Some(command) = input.poll(host) {
            return Some(command);
        }
        if host.should_quit() {
            return None;
        }
        host.scroll_background(1);
        host.wait_for_frame();
    }
}
