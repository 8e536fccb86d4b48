//! Line decoding for slide markup
//!
//! Every line of a page is either a comment, a command or continuation data.
//! Commands are recognised by an ordered prefix table ([`COMMANDS`]); the
//! first prefix that matches decides which constructor builds the
//! [`Command`]. Lines that match nothing are handed back verbatim as
//! [`ParsedLine::Continuation`] so the interpreter can apply the active mode.

use super::errors::MarkupError;
use crate::platform::{Direction, PaletteId, Rgb};
use std::ops::RangeInclusive;

/// Largest coordinate magnitude, box size or arrow length a command accepts
pub const MAX_EXTENT: i32 = i16::MAX as i32;

/// A decoded markup command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `title: <text>`
    Title { text: String },
    /// `txt,<x>,<y>[,<bg>]: <text>`
    Text {
        x: i32,
        y: i32,
        bg: Option<PaletteId>,
        text: String,
    },
    /// `setcolour,<id>,<hexRGB>:`
    SetColour { id: PaletteId, colour: Rgb },
    /// `txtpal,<id>:`
    TextPalette { id: PaletteId },
    /// `pause:`
    Pause,
    /// `image,<x>,<y>,<name>:`
    Image { x: i32, y: i32, name: String },
    /// `code,<x>,<y>: <code>`
    Code { x: i32, y: i32, code: String },
    /// `rect,<x>,<y>,<w>,<h>[,<bg>]:`
    Rect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        bg: Option<PaletteId>,
    },
    /// `arrow,...:` and `tarrow,...:` (the latter starts at a junction)
    Arrow {
        x: i32,
        y: i32,
        direction: Direction,
        length: u32,
        junction: bool,
    },
    /// `bgcol,<hexId>:`
    Backdrop { id: PaletteId },
    /// `sleep_raw,<frames>:`
    SleepRaw { frames: u32 },
    TitleScreen,
    DemoGame,
    RenderBackground,
    Scroll,
    InitProgress,
    HideProgress,
    ResetTimer,
    HideTimer,
    PlaySound,
}

/// Classification of one raw page line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine<'a> {
    /// `#`-prefixed line
    Comment,
    Command(Command),
    /// No prefix matched; meaning depends on the continuation mode
    Continuation(&'a str),
}

/// Split header of a matched command line
struct Header<'a> {
    name: &'static str,
    fields: Vec<&'a str>,
    payload: &'a str,
    line: usize,
}

type Constructor = fn(&Header<'_>) -> Result<Command, MarkupError>;

/// One row of the dispatch table
pub struct CommandSpec {
    /// Line prefix including its delimiter, so `txt,` never captures `txtpal,`
    pub prefix: &'static str,
    pub name: &'static str,
    build: Constructor,
}

impl CommandSpec {
    const fn new(prefix: &'static str, name: &'static str, build: Constructor) -> Self {
        CommandSpec {
            prefix,
            name,
            build,
        }
    }
}

/// Ordered prefix table; first match wins.
pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec::new("title:", "title", build_title),
    CommandSpec::new("txtpal,", "txtpal", build_text_palette),
    CommandSpec::new("txt,", "txt", build_text),
    CommandSpec::new("setcolour,", "setcolour", build_set_colour),
    CommandSpec::new("pause:", "pause", build_pause),
    CommandSpec::new("image,", "image", build_image),
    CommandSpec::new("code,", "code", build_code),
    CommandSpec::new("rect,", "rect", build_rect),
    CommandSpec::new("tarrow,", "tarrow", build_junction_arrow),
    CommandSpec::new("arrow,", "arrow", build_plain_arrow),
    CommandSpec::new("bgcol,", "bgcol", build_backdrop),
    CommandSpec::new("sleep_raw,", "sleep_raw", build_sleep),
    CommandSpec::new("titlescreen:", "titlescreen", build_title_screen),
    CommandSpec::new("demogame:", "demogame", build_demo_game),
    CommandSpec::new("renderbg:", "renderbg", build_render_background),
    CommandSpec::new("scroll:", "scroll", build_scroll),
    CommandSpec::new("initprogress:", "initprogress", build_init_progress),
    CommandSpec::new("hideprogress:", "hideprogress", build_hide_progress),
    CommandSpec::new("resettimer:", "resettimer", build_reset_timer),
    CommandSpec::new("hidetimer:", "hidetimer", build_hide_timer),
    CommandSpec::new("playsound:", "playsound", build_play_sound),
];

/// Decode a single page line.
///
/// `line_no` is 1-based and only used for diagnostics. The payload of a
/// command is everything after the first `:`, minus one leading space, and
/// is never split further.
pub fn parse_line(line: &str, line_no: usize) -> Result<ParsedLine<'_>, MarkupError> {
    let line = line.strip_suffix('\r').unwrap_or(line);

    if line.starts_with('#') {
        return Ok(ParsedLine::Comment);
    }

    let Some(spec) = COMMANDS.iter().find(|spec| line.starts_with(spec.prefix)) else {
        return Ok(ParsedLine::Continuation(line));
    };

    let (head, payload) = line
        .split_once(':')
        .ok_or(MarkupError::MissingDelimiter {
            command: spec.name,
            line: line_no,
        })?;

    let header = Header {
        name: spec.name,
        fields: head.split(',').skip(1).map(str::trim).collect(),
        payload: payload.strip_prefix(' ').unwrap_or(payload),
        line: line_no,
    };

    (spec.build)(&header).map(ParsedLine::Command)
}

impl Header<'_> {
    fn expect_fields(
        &self,
        min: usize,
        max: usize,
        expected: &'static str,
    ) -> Result<(), MarkupError> {
        let got = self.fields.len();
        if got < min || got > max {
            return Err(MarkupError::FieldCount {
                command: self.name,
                expected,
                got,
                line: self.line,
            });
        }
        Ok(())
    }

    fn number<T: std::str::FromStr>(&self, index: usize) -> Result<T, MarkupError> {
        let field = self.fields[index];
        field.parse().map_err(|_| MarkupError::InvalidNumber {
            command: self.name,
            field: field.to_string(),
            line: self.line,
        })
    }

    fn optional_number<T: std::str::FromStr>(
        &self,
        index: usize,
    ) -> Result<Option<T>, MarkupError> {
        match self.fields.get(index) {
            Some(field) if !field.is_empty() => self.number(index).map(Some),
            _ => Ok(None),
        }
    }

    /// Tile coordinate, limited to `-MAX_EXTENT..=MAX_EXTENT`
    fn coordinate(&self, index: usize) -> Result<i32, MarkupError> {
        let value: i32 = self.number(index)?;
        self.within(index, value, -MAX_EXTENT..=MAX_EXTENT)
    }

    /// Box size or arrow length, limited to `0..=MAX_EXTENT`
    fn extent(&self, index: usize) -> Result<i32, MarkupError> {
        let value: i32 = self.number(index)?;
        self.within(index, value, 0..=MAX_EXTENT)
    }

    fn within(
        &self,
        index: usize,
        value: i32,
        range: RangeInclusive<i32>,
    ) -> Result<i32, MarkupError> {
        if range.contains(&value) {
            Ok(value)
        } else {
            Err(MarkupError::OutOfRange {
                command: self.name,
                field: self.fields[index].to_string(),
                line: self.line,
            })
        }
    }

    fn hex_id(&self, index: usize) -> Result<PaletteId, MarkupError> {
        let field = self.fields[index];
        let digits = field
            .strip_prefix("0x")
            .or_else(|| field.strip_prefix("0X"))
            .unwrap_or(field);
        PaletteId::from_str_radix(digits, 16).map_err(|_| MarkupError::InvalidNumber {
            command: self.name,
            field: field.to_string(),
            line: self.line,
        })
    }

    fn direction(&self, index: usize) -> Result<Direction, MarkupError> {
        let field = self.fields[index];
        match field.to_ascii_lowercase().as_str() {
            "r" | "right" => Ok(Direction::Right),
            "l" | "left" => Ok(Direction::Left),
            "u" | "up" => Ok(Direction::Up),
            "d" | "down" => Ok(Direction::Down),
            _ => Err(MarkupError::InvalidDirection {
                command: self.name,
                value: field.to_string(),
                line: self.line,
            }),
        }
    }
}

fn build_title(header: &Header<'_>) -> Result<Command, MarkupError> {
    Ok(Command::Title {
        text: header.payload.to_string(),
    })
}

fn build_text(header: &Header<'_>) -> Result<Command, MarkupError> {
    header.expect_fields(2, 3, "2 or 3")?;
    Ok(Command::Text {
        x: header.coordinate(0)?,
        y: header.coordinate(1)?,
        bg: header.optional_number(2)?,
        text: header.payload.to_string(),
    })
}

fn build_text_palette(header: &Header<'_>) -> Result<Command, MarkupError> {
    header.expect_fields(1, 1, "1")?;
    Ok(Command::TextPalette {
        id: header.number(0)?,
    })
}

fn build_set_colour(header: &Header<'_>) -> Result<Command, MarkupError> {
    header.expect_fields(2, 2, "2")?;
    let raw = header.fields[1];
    let colour = Rgb::from_hex(raw.trim_start_matches('#')).ok_or_else(|| {
        MarkupError::InvalidColour {
            command: header.name,
            value: raw.to_string(),
            line: header.line,
        }
    })?;
    Ok(Command::SetColour {
        id: header.number(0)?,
        colour,
    })
}

fn build_image(header: &Header<'_>) -> Result<Command, MarkupError> {
    header.expect_fields(3, 3, "3")?;
    Ok(Command::Image {
        x: header.coordinate(0)?,
        y: header.coordinate(1)?,
        name: header.fields[2].to_string(),
    })
}

fn build_code(header: &Header<'_>) -> Result<Command, MarkupError> {
    header.expect_fields(2, 2, "2")?;
    Ok(Command::Code {
        x: header.coordinate(0)?,
        y: header.coordinate(1)?,
        code: header.payload.to_string(),
    })
}

fn build_rect(header: &Header<'_>) -> Result<Command, MarkupError> {
    header.expect_fields(4, 5, "4 or 5")?;
    Ok(Command::Rect {
        x: header.coordinate(0)?,
        y: header.coordinate(1)?,
        width: header.extent(2)?,
        height: header.extent(3)?,
        bg: header.optional_number(4)?,
    })
}

fn build_arrow(header: &Header<'_>, junction: bool) -> Result<Command, MarkupError> {
    header.expect_fields(4, 4, "4")?;
    let length = header.extent(3)?;
    if length == 0 {
        return Err(MarkupError::ZeroLength {
            command: header.name,
            line: header.line,
        });
    }
    Ok(Command::Arrow {
        x: header.coordinate(0)?,
        y: header.coordinate(1)?,
        direction: header.direction(2)?,
        length: length.unsigned_abs(),
        junction,
    })
}

fn build_junction_arrow(header: &Header<'_>) -> Result<Command, MarkupError> {
    build_arrow(header, true)
}

fn build_plain_arrow(header: &Header<'_>) -> Result<Command, MarkupError> {
    build_arrow(header, false)
}

fn build_backdrop(header: &Header<'_>) -> Result<Command, MarkupError> {
    header.expect_fields(1, 1, "1")?;
    Ok(Command::Backdrop {
        id: header.hex_id(0)?,
    })
}

fn build_sleep(header: &Header<'_>) -> Result<Command, MarkupError> {
    header.expect_fields(1, 1, "1")?;
    Ok(Command::SleepRaw {
        frames: header.number(0)?,
    })
}

// Commands without fields ignore anything between the prefix and the ':'

fn build_pause(_: &Header<'_>) -> Result<Command, MarkupError> {
    Ok(Command::Pause)
}

fn build_title_screen(_: &Header<'_>) -> Result<Command, MarkupError> {
    Ok(Command::TitleScreen)
}

fn build_demo_game(_: &Header<'_>) -> Result<Command, MarkupError> {
    Ok(Command::DemoGame)
}

fn build_render_background(_: &Header<'_>) -> Result<Command, MarkupError> {
    Ok(Command::RenderBackground)
}

fn build_scroll(_: &Header<'_>) -> Result<Command, MarkupError> {
    Ok(Command::Scroll)
}

fn build_init_progress(_: &Header<'_>) -> Result<Command, MarkupError> {
    Ok(Command::InitProgress)
}

fn build_hide_progress(_: &Header<'_>) -> Result<Command, MarkupError> {
    Ok(Command::HideProgress)
}

fn build_reset_timer(_: &Header<'_>) -> Result<Command, MarkupError> {
    Ok(Command::ResetTimer)
}

fn build_hide_timer(_: &Header<'_>) -> Result<Command, MarkupError> {
    Ok(Command::HideTimer)
}

fn build_play_sound(_: &Header<'_>) -> Result<Command, MarkupError> {
    Ok(Command::PlaySound)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(line: &str) -> Command {
        match parse_line(line, 1) {
            Ok(ParsedLine::Command(cmd)) => cmd,
            other => panic!("expected command for {:?}, got {:?}", line, other),
        }
    }

    #[test]
    fn test_payload_splits_on_first_delimiter_only() {
        assert_eq!(
            command("txt,5,10:hello:world"),
            Command::Text {
                x: 5,
                y: 10,
                bg: None,
                text: "hello:world".to_string()
            }
        );
    }

    #[test]
    fn test_single_leading_space_is_dropped() {
        assert_eq!(
            command("title:  Two spaces"),
            Command::Title {
                text: " Two spaces".to_string()
            }
        );
    }

    #[test]
    fn test_text_with_background() {
        assert_eq!(
            command("txt,1,2,3: hi"),
            Command::Text {
                x: 1,
                y: 2,
                bg: Some(3),
                text: "hi".to_string()
            }
        );
    }

    #[test]
    fn test_txtpal_is_not_captured_by_txt() {
        assert_eq!(command("txtpal,2:"), Command::TextPalette { id: 2 });
    }

    #[test]
    fn test_tarrow_and_arrow() {
        assert_eq!(
            command("tarrow,4,5,d,3:"),
            Command::Arrow {
                x: 4,
                y: 5,
                direction: Direction::Down,
                length: 3,
                junction: true
            }
        );
        assert_eq!(
            command("arrow,0,0,left,2:"),
            Command::Arrow {
                x: 0,
                y: 0,
                direction: Direction::Left,
                length: 2,
                junction: false
            }
        );
    }

    #[test]
    fn test_setcolour_short_and_long_hex() {
        assert_eq!(
            command("setcolour,1,0E0:"),
            Command::SetColour {
                id: 1,
                colour: Rgb::new(0x00, 0xEE, 0x00)
            }
        );
        assert_eq!(
            command("setcolour,4,#12AB34:"),
            Command::SetColour {
                id: 4,
                colour: Rgb::new(0x12, 0xAB, 0x34)
            }
        );
    }

    #[test]
    fn test_bgcol_is_hex() {
        assert_eq!(command("bgcol,1f:"), Command::Backdrop { id: 0x1f });
    }

    #[test]
    fn test_rect_optional_palette() {
        assert_eq!(
            command("rect,1,2,10,4:"),
            Command::Rect {
                x: 1,
                y: 2,
                width: 10,
                height: 4,
                bg: None
            }
        );
        assert_eq!(
            command("rect,1,2,10,4,6:"),
            Command::Rect {
                x: 1,
                y: 2,
                width: 10,
                height: 4,
                bg: Some(6)
            }
        );
    }

    #[test]
    fn test_comment_and_continuation() {
        assert_eq!(parse_line("# txt,1,1: no", 1), Ok(ParsedLine::Comment));
        assert_eq!(
            parse_line("just words", 1),
            Ok(ParsedLine::Continuation("just words"))
        );
        assert_eq!(parse_line("", 1), Ok(ParsedLine::Continuation("")));
    }

    #[test]
    fn test_carriage_return_is_stripped() {
        assert_eq!(command("pause:\r"), Command::Pause);
        assert_eq!(
            parse_line("line\r", 1),
            Ok(ParsedLine::Continuation("line"))
        );
    }

    #[test]
    fn test_missing_delimiter_is_reported() {
        assert_eq!(
            parse_line("txt,5,10 hello", 7),
            Err(MarkupError::MissingDelimiter {
                command: "txt",
                line: 7
            })
        );
    }

    #[test]
    fn test_bad_fields_are_reported() {
        assert!(matches!(
            parse_line("rect,1,2:", 1),
            Err(MarkupError::FieldCount { got: 2, .. })
        ));
        assert!(matches!(
            parse_line("txt,a,2: x", 1),
            Err(MarkupError::InvalidNumber { ref field, .. }) if field == "a"
        ));
        assert!(matches!(
            parse_line("arrow,1,1,sideways,2:", 1),
            Err(MarkupError::InvalidDirection { .. })
        ));
        assert!(matches!(
            parse_line("arrow,1,1,r,0:", 3),
            Err(MarkupError::ZeroLength { line: 3, .. })
        ));
        assert!(matches!(
            parse_line("setcolour,1,XYZ:", 1),
            Err(MarkupError::InvalidColour { .. })
        ));
    }

    #[test]
    fn test_oversized_geometry_is_reported() {
        assert!(matches!(
            parse_line("rect,1,0,2147483647,1:", 2),
            Err(MarkupError::OutOfRange { ref field, line: 2, .. }) if field == "2147483647"
        ));
        assert!(matches!(
            parse_line("txt,0,2147483647: a", 1),
            Err(MarkupError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_line("arrow,2147483000,0,r,1000:", 1),
            Err(MarkupError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_line("tarrow,0,0,r,40000:", 1),
            Err(MarkupError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_line("rect,0,0,-3,2:", 1),
            Err(MarkupError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_geometry_limits_are_inclusive() {
        assert_eq!(
            command("rect,-32767,0,32767,0:"),
            Command::Rect {
                x: -MAX_EXTENT,
                y: 0,
                width: MAX_EXTENT,
                height: 0,
                bg: None
            }
        );
    }

    #[test]
    fn test_hideprogress_command() {
        assert_eq!(command("hideprogress:"), Command::HideProgress);
    }

    #[test]
    fn test_every_prefix_ends_with_delimiter() {
        for spec in COMMANDS {
            assert!(
                spec.prefix.ends_with(':') || spec.prefix.ends_with(','),
                "prefix {} has no delimiter",
                spec.prefix
            );
        }
    }
}
