// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Terminal rendering of scanned lines.

use std::fmt::Write;

use owo_colors::{OwoColorize, Style};
use spacey_linescan::patterns::OperatorClass;
use spacey_linescan::{LineScanner, ScannedLine, Token, TokenKind, scan_text};

/// Paints tokens with ANSI colors.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    underline_hyperlinks: bool,
}

impl Painter {
    pub fn new(underline_hyperlinks: bool) -> Self {
        Self {
            underline_hyperlinks,
        }
    }

    fn style(&self, token: &Token<'_>) -> Style {
        let style = match token.kind {
            TokenKind::ReservedWord | TokenKind::ReservedWord2 => Style::new().magenta().bold(),
            TokenKind::DataType | TokenKind::Function => Style::new().cyan(),
            TokenKind::LiteralBoolean => Style::new().blue(),
            TokenKind::LiteralNumberDecimalInt
            | TokenKind::LiteralNumberHex
            | TokenKind::LiteralNumberFloat => Style::new().yellow(),
            TokenKind::LiteralStringDoubleQuote | TokenKind::LiteralChar => Style::new().green(),
            TokenKind::Regex => Style::new().bright_red(),
            TokenKind::CommentMultiline | TokenKind::CommentEol => Style::new().dimmed(),
            TokenKind::Separator => Style::new().yellow(),
            TokenKind::Operator => Style::new().cyan(),
            TokenKind::ErrorStringDouble
            | TokenKind::ErrorChar
            | TokenKind::ErrorNumberFormat
            | TokenKind::ErrorIdentifier => Style::new().red().underline(),
            TokenKind::Identifier | TokenKind::Whitespace | TokenKind::Null => Style::new(),
        };

        if token.hyperlink && self.underline_hyperlinks {
            style.underline()
        } else {
            style
        }
    }

    /// Paint a single token.
    pub fn paint_token(&self, token: &Token<'_>) -> String {
        if !token.kind.is_paintable() || token.text.is_empty() {
            return String::new();
        }
        token.text.style(self.style(token)).to_string()
    }

    /// Paint every token of a line.
    pub fn paint_line(&self, line: &ScannedLine<'_>) -> String {
        line.iter().map(|token| self.paint_token(token)).collect()
    }

    /// Paint a whole text, one scanned line per source line.
    pub fn paint_text(&self, scanner: &LineScanner, text: &str) -> String {
        scan_text(scanner, text)
            .map(|line| self.paint_line(&line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Format the tokens of one line, one per row, followed by the line's
/// continuation code. Assignment operators and hyperlinks are tagged.
///
/// ```text
/// 3 reserved_word 20..23 "var"
/// 3 operator 26..27 "=" assign
/// 3 continuation None
/// ```
pub fn dump_line(number: usize, line: &ScannedLine<'_>) -> String {
    let mut out = String::new();
    for token in line {
        let _ = write!(
            out,
            "{number} {} {}..{} {:?}",
            token.kind.name(),
            token.span.start,
            token.span.end,
            token.text
        );
        if token.operator_class() == Some(OperatorClass::Assignment) {
            out.push_str(" assign");
        }
        if token.hyperlink {
            out.push_str(" link");
        }
        out.push('\n');
    }
    let _ = writeln!(out, "{number} continuation {:?}", line.continuation());
    out
}

/// Dump every line of a text.
pub fn dump_text(scanner: &LineScanner, text: &str) -> String {
    scan_text(scanner, text)
        .enumerate()
        .map(|(index, line)| dump_line(index + 1, &line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use spacey_linescan::ContinuationCode;

    /// Remove ANSI escape sequences
    fn strip_ansi(painted: &str) -> String {
        let mut plain = String::new();
        let mut chars = painted.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                plain.push(c);
            }
        }
        plain
    }

    #[test]
    fn test_painting_keeps_text() {
        let scanner = LineScanner::default();
        let source = "var s = \"a\"; /* x\n y */ f(0x1F) // http://example.com";
        let painted = Painter::new(true).paint_text(&scanner, source);
        assert_ne!(painted, source);
        assert_eq!(strip_ansi(&painted), source);
    }

    #[test]
    fn test_keywords_are_colored() {
        let line = LineScanner::default().scan_line("return", ContinuationCode::None, 0);
        let painted = Painter::new(true).paint_token(&line.tokens()[0]);
        assert!(painted.contains("\x1b["));
        assert_eq!(strip_ansi(&painted), "return");
    }

    #[test]
    fn test_hyperlink_underline_toggle() {
        let line = LineScanner::default().scan_line("// www.a.org", ContinuationCode::None, 0);
        let link = line.iter().find(|t| t.hyperlink).copied().unwrap();
        let comment = line.tokens()[0];

        let underlined = Painter::new(true).paint_token(&link);
        let plain = Painter::new(false).paint_token(&link);
        assert_ne!(underlined, plain);
        assert_eq!(plain, Painter::new(false).paint_token(&comment).replace("// ", "www.a.org"));
    }

    #[test]
    fn test_end_marker_paints_nothing() {
        let line = LineScanner::default().scan_line("", ContinuationCode::None, 0);
        assert_eq!(Painter::new(true).paint_line(&line), "");
    }

    #[test]
    fn test_dump_line() {
        let line = LineScanner::default().scan_line("a /* b", ContinuationCode::None, 10);
        assert_eq!(
            dump_line(2, &line),
            "2 identifier 10..11 \"a\"\n\
             2 whitespace 11..12 \" \"\n\
             2 comment_multiline 12..16 \"/* b\"\n\
             2 continuation InBlockComment\n"
        );
    }

    #[test]
    fn test_dump_tags_assignment_operators() {
        let line = LineScanner::default().scan_line("a += b == c", ContinuationCode::None, 0);
        let dump = dump_line(1, &line);
        assert!(dump.contains("1 operator 2..4 \"+=\" assign\n"));
        assert!(dump.contains("1 operator 7..9 \"==\"\n"));
    }

    #[test]
    fn test_dump_text_numbers_lines() {
        let dump = dump_text(&LineScanner::default(), "x\n// www.a.org");
        assert!(dump.starts_with("1 identifier 0..1 \"x\"\n"));
        assert!(dump.contains("2 comment_eol 5..14 \"www.a.org\" link\n"));
        assert!(dump.ends_with("2 continuation None\n"));
    }
}
