//! Code snippet highlighting
//!
//! A line of code is first split on `"` into alternating unquoted and quoted
//! fragments. Unquoted fragments are cut into maximal word / whitespace runs
//! and each word is classified; quoted fragments are drawn as string
//! literals with quote glyphs around them. Every run is drawn at a running
//! column offset from the line origin.

use crate::platform::{PaletteId, Platform, QuoteSide};

/// Words highlighted with the keyword palette (exact match only)
pub const RESERVED_WORDS: &[&str] = &[
    "alias", "and", "begin", "break", "case", "class", "def", "do", "else", "elsif", "end",
    "ensure", "false", "for", "if", "in", "loop", "module", "next", "nil", "not", "or", "redo",
    "rescue", "retry", "return", "self", "super", "then", "true", "undef", "unless", "until",
    "when", "while", "yield",
];

/// Palette slots used for each token class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePalettes {
    pub plain: PaletteId,
    pub keyword: PaletteId,
    pub identifier: PaletteId,
    pub string: PaletteId,
}

impl Default for CodePalettes {
    fn default() -> Self {
        CodePalettes {
            plain: 0,
            keyword: 1,
            identifier: 2,
            string: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Word starting with an uppercase ASCII letter (constants, classes)
    Identifier,
    Keyword,
    /// Any other word
    Plain,
    Whitespace,
    /// Body of a quoted literal, drawn between quote glyphs
    Literal,
}

/// A classified run and the column it starts at (relative to the origin)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub offset: i32,
}

impl Token<'_> {
    pub fn palette(&self, palettes: &CodePalettes) -> PaletteId {
        match self.kind {
            TokenKind::Identifier => palettes.identifier,
            TokenKind::Keyword => palettes.keyword,
            TokenKind::Plain | TokenKind::Whitespace => palettes.plain,
            TokenKind::Literal => palettes.string,
        }
    }
}

/// Split a line into quote-delimited fragments.
///
/// Even positions are code, odd positions are literal bodies.
pub fn fragments(line: &str) -> Vec<&str> {
    line.split('"').collect()
}

fn classify(word: &str) -> TokenKind {
    if word.starts_with(|c: char| c.is_ascii_uppercase()) {
        TokenKind::Identifier
    } else if RESERVED_WORDS.contains(&word) {
        TokenKind::Keyword
    } else {
        TokenKind::Plain
    }
}

/// Tokenize one line of code.
///
/// Literal tokens carry the column of their body; the opening quote sits one
/// column to the left and the closing quote right after the body.
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut offset: i32 = 0;

    for (index, fragment) in fragments(line).into_iter().enumerate() {
        if index % 2 == 1 {
            tokens.push(Token {
                kind: TokenKind::Literal,
                text: fragment,
                offset: offset + 1,
            });
            offset += fragment.chars().count() as i32 + 2;
            continue;
        }

        let mut run_start = 0;
        let mut run_is_space = None;
        for (pos, ch) in fragment.char_indices() {
            let is_space = ch == ' ';
            match run_is_space {
                Some(prev) if prev != is_space => {
                    let run = &fragment[run_start..pos];
                    tokens.push(run_token(run, prev, offset));
                    offset += run.chars().count() as i32;
                    run_start = pos;
                }
                _ => {}
            }
            run_is_space = Some(is_space);
        }
        if let Some(is_space) = run_is_space {
            let run = &fragment[run_start..];
            tokens.push(run_token(run, is_space, offset));
            offset += run.chars().count() as i32;
        }
    }

    tokens
}

fn run_token(run: &str, is_space: bool, offset: i32) -> Token<'_> {
    Token {
        kind: if is_space {
            TokenKind::Whitespace
        } else {
            classify(run)
        },
        text: run,
        offset,
    }
}

/// Draw a highlighted line of code with its origin at `(x, y)`.
///
/// Leaves the text palette set to whatever the last token used; callers
/// that care restore their own palette afterwards.
pub fn draw_code<P: Platform + ?Sized>(
    host: &mut P,
    line: &str,
    x: i32,
    y: i32,
    palettes: &CodePalettes,
) {
    for token in tokenize(line) {
        host.set_text_palette(token.palette(palettes));
        if token.kind == TokenKind::Literal {
            host.draw_quote(x + token.offset - 1, y, QuoteSide::Open);
            host.draw_text(x + token.offset, y, token.text);
            let close = token.offset + token.text.chars().count() as i32;
            host.draw_quote(x + close, y, QuoteSide::Close);
        } else {
            host.draw_text(x + token.offset, y, token.text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{DrawCall, RecordingPlatform};

    #[test]
    fn test_fragments_alternate_code_and_literal() {
        assert_eq!(fragments(r#"draw "hi" end"#), vec!["draw ", "hi", " end"]);
        assert_eq!(fragments("no quotes"), vec!["no quotes"]);
        assert_eq!(fragments(r#""""#), vec!["", "", ""]);
    }

    #[test]
    fn test_word_classification() {
        let tokens = tokenize(r#"draw "hi" end"#);
        let kinds: Vec<_> = tokens.iter().map(|t| (t.text, t.kind, t.offset)).collect();
        assert_eq!(
            kinds,
            vec![
                ("draw", TokenKind::Plain, 0),
                (" ", TokenKind::Whitespace, 4),
                ("hi", TokenKind::Literal, 6),
                (" ", TokenKind::Whitespace, 9),
                ("end", TokenKind::Keyword, 10),
            ]
        );
    }

    #[test]
    fn test_uppercase_wins_over_keyword_list() {
        let tokens = tokenize("MegaMrbc.draw_text if");
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[2].kind, TokenKind::Keyword);
    }

    #[test]
    fn test_keywords_need_exact_match() {
        let tokens = tokenize("ending endless end");
        let kinds: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind != TokenKind::Whitespace)
            .map(|t| t.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Plain, TokenKind::Plain, TokenKind::Keyword]
        );
    }

    #[test]
    fn test_space_runs_are_maximal() {
        let tokens = tokenize("  a   b");
        let texts: Vec<_> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["  ", "a", "   ", "b"]);
        assert_eq!(tokens[3].offset, 6);
    }

    #[test]
    fn test_draw_code_emits_quotes_under_string_palette() {
        let mut host = RecordingPlatform::new();
        let palettes = CodePalettes::default();
        draw_code(&mut host, r#"draw "hi" end"#, 2, 5, &palettes);

        assert_eq!(
            host.calls,
            vec![
                DrawCall::Text {
                    x: 2,
                    y: 5,
                    text: "draw".into(),
                    palette: 0,
                },
                DrawCall::Text {
                    x: 6,
                    y: 5,
                    text: " ".into(),
                    palette: 0,
                },
                DrawCall::Quote {
                    x: 7,
                    y: 5,
                    side: QuoteSide::Open,
                    palette: 3,
                },
                DrawCall::Text {
                    x: 8,
                    y: 5,
                    text: "hi".into(),
                    palette: 3,
                },
                DrawCall::Quote {
                    x: 10,
                    y: 5,
                    side: QuoteSide::Close,
                    palette: 3,
                },
                DrawCall::Text {
                    x: 11,
                    y: 5,
                    text: " ".into(),
                    palette: 0,
                },
                DrawCall::Text {
                    x: 12,
                    y: 5,
                    text: "end".into(),
                    palette: 1,
                },
            ]
        );
    }

    #[test]
    fn test_offset_restarts_per_call() {
        let mut host = RecordingPlatform::new();
        let palettes = CodePalettes::default();
        draw_code(&mut host, "abc", 0, 0, &palettes);
        draw_code(&mut host, "def", 0, 1, &palettes);
        assert!(matches!(&host.calls[1], DrawCall::Text { x: 0, y: 1, .. }));
    }
}
