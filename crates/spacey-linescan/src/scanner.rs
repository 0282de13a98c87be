// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! The line scanner.
//!
//! A line is scanned by a small state machine. The initial mode runs every
//! pattern at the cursor and emits the longest match; openers of quoted
//! literals and comments switch to the handler for that construct, which
//! either returns to the initial mode or ends the line with a continuation
//! code for the next one.
//!
//! Scanning stops at the first `\n`. Text after it belongs to the next line.

use tracing::trace;

use crate::config::ScannerConfig;
use crate::constructs::{Quote, scan_block_comment, scan_line_comment, scan_quoted};
use crate::continuation::ContinuationCode;
use crate::error::Result;
use crate::patterns::{error_identifier, identifier, number, operator, separator, whitespace};
use crate::regex::{regex_can_follow, regex_literal};
use crate::tables::classify_word;
use crate::token::{ScannedLine, Span, Token, TokenKind};

/// Where scanning currently is within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    Initial,
    Quoted { quote: Quote, start: usize, valid: bool },
    BlockComment { start: usize },
    LineComment { start: usize },
}

impl Mode {
    fn seeded(continuation: ContinuationCode) -> Self {
        match continuation {
            ContinuationCode::None => Mode::Initial,
            ContinuationCode::InBlockComment => Mode::BlockComment { start: 0 },
            ContinuationCode::InDoubleQuoteString { valid } => Mode::Quoted {
                quote: Quote::Double,
                start: 0,
                valid,
            },
            ContinuationCode::InCharLiteral { valid } => Mode::Quoted {
                quote: Quote::Single,
                start: 0,
                valid,
            },
        }
    }
}

/// What a mode handler wants to happen next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transition {
    /// Continue in the initial mode at this offset
    Resume(usize),
    /// Switch to a construct whose body starts at this offset
    Enter(Mode, usize),
    /// The line is done
    End(ContinuationCode),
}

/// Collects the tokens of one line, converting line offsets to document
/// offsets.
pub(crate) struct Emitter<'a> {
    line: &'a str,
    offset: usize,
    tokens: Vec<Token<'a>>,
}

impl<'a> Emitter<'a> {
    pub(crate) fn new(line: &'a str, offset: usize) -> Self {
        Self {
            line,
            offset,
            tokens: Vec::new(),
        }
    }

    pub(crate) fn line(&self) -> &'a str {
        self.line
    }

    /// Adds `line[start..end]`. Empty ranges are dropped.
    pub(crate) fn push(&mut self, kind: TokenKind, start: usize, end: usize) {
        if start < end {
            let token = Token::new(kind, self.span(start, end), &self.line[start..end]);
            self.tokens.push(token);
        }
    }

    pub(crate) fn push_hyperlink(&mut self, kind: TokenKind, start: usize, end: usize) {
        if start < end {
            let token = Token::hyperlink(kind, self.span(start, end), &self.line[start..end]);
            self.tokens.push(token);
        }
    }

    /// Adds the zero-width `Null` marker at the end of the line.
    pub(crate) fn push_end_marker(&mut self) {
        let end = self.line.len();
        let token = Token::new(TokenKind::Null, self.span(end, end), &self.line[end..]);
        self.tokens.push(token);
    }

    pub(crate) fn last_significant(&self) -> Option<&Token<'a>> {
        self.tokens.iter().rev().find(|t| t.is_significant())
    }

    pub(crate) fn finish(self) -> Vec<Token<'a>> {
        self.tokens
    }

    fn span(&self, start: usize, end: usize) -> Span {
        Span::new(start + self.offset, end + self.offset)
    }
}

/// Initial-mode rules, in declaration order. On equal match lengths the
/// earlier rule wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    Word,
    Whitespace,
    DoubleQuote,
    SingleQuote,
    EmptyBlockComment,
    BlockCommentStart,
    LineCommentStart,
    Regex,
    Separator,
    Operator,
    DecimalInt,
    HexInt,
    Float,
    MalformedNumber,
    ErrorIdentifier,
}

fn prefix_len(rest: &str, prefix: &str) -> usize {
    if rest.starts_with(prefix) { prefix.len() } else { 0 }
}

/// The winning rule at the start of `rest`, or `None` if nothing matches.
fn longest_match(rest: &str) -> Option<(Rule, usize)> {
    let numbers = number(rest);
    let candidates = [
        (Rule::Word, identifier(rest)),
        (Rule::Whitespace, whitespace(rest)),
        (Rule::DoubleQuote, prefix_len(rest, "\"")),
        (Rule::SingleQuote, prefix_len(rest, "'")),
        (Rule::EmptyBlockComment, prefix_len(rest, "/**/")),
        (Rule::BlockCommentStart, prefix_len(rest, "/*")),
        (Rule::LineCommentStart, prefix_len(rest, "//")),
        (Rule::Regex, regex_literal(rest)),
        (Rule::Separator, separator(rest)),
        (Rule::Operator, operator(rest)),
        (Rule::DecimalInt, numbers.decimal),
        (Rule::HexInt, numbers.hex),
        (Rule::Float, numbers.float),
        (Rule::MalformedNumber, numbers.malformed),
        (Rule::ErrorIdentifier, error_identifier(rest)),
    ];

    let mut best: Option<(Rule, usize)> = None;
    for (rule, len) in candidates {
        if len > best.map_or(0, |(_, best_len)| best_len) {
            best = Some((rule, len));
        }
    }
    best
}

/// Scans single lines of JavaScript for highlighting.
///
/// # Example
///
/// ```
/// use spacey_linescan::{ContinuationCode, LineScanner, TokenKind};
///
/// let scanner = LineScanner::default();
/// let line = scanner.scan_line("let x = /ab+c/g;", ContinuationCode::None, 0);
/// let kinds: Vec<_> = line.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds[0], TokenKind::ReservedWord);
/// assert!(kinds.contains(&TokenKind::Regex));
/// assert_eq!(line.continuation(), ContinuationCode::None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LineScanner {
    config: ScannerConfig,
}

impl LineScanner {
    /// Creates a scanner with the given configuration.
    pub fn new(config: ScannerConfig) -> Self {
        Self { config }
    }

    /// Creates a scanner from the process-wide configuration.
    pub fn from_current_config() -> Self {
        Self::new(ScannerConfig::current())
    }

    /// Returns the scanner configuration.
    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Scans one line.
    ///
    /// `continuation` is the code the previous line ended with and
    /// `line_start_offset` the document offset of the first byte of `text`.
    pub fn scan_line<'a>(
        &self,
        text: &'a str,
        continuation: ContinuationCode,
        line_start_offset: usize,
    ) -> ScannedLine<'a> {
        let line = text.find('\n').map_or(text, |end| &text[..end]);
        let mut out = Emitter::new(line, line_start_offset);

        let mut mode = Mode::seeded(continuation);
        let mut pos = 0;
        let next = loop {
            let transition = match mode {
                Mode::Initial => self.scan_initial(&mut out, pos),
                Mode::Quoted { quote, start, valid } => {
                    scan_quoted(&mut out, quote, start, pos, valid)
                }
                Mode::BlockComment { start } => scan_block_comment(&mut out, start, pos),
                Mode::LineComment { start } => scan_line_comment(&mut out, start),
            };

            match transition {
                Transition::Resume(resume) => {
                    mode = Mode::Initial;
                    pos = resume;
                }
                Transition::Enter(construct, body) => {
                    mode = construct;
                    pos = body;
                }
                Transition::End(code) => break code,
            }
        };

        let tokens = out.finish();
        trace!(
            offset = line_start_offset,
            tokens = tokens.len(),
            continuation = ?next,
            "scanned line"
        );
        ScannedLine::new(tokens, next)
    }

    /// Scans one line, taking the previous line's state as a raw code.
    pub fn scan_line_raw<'a>(
        &self,
        text: &'a str,
        continuation: i32,
        line_start_offset: usize,
    ) -> Result<ScannedLine<'a>> {
        let continuation = ContinuationCode::from_raw(continuation)?;
        Ok(self.scan_line(text, continuation, line_start_offset))
    }

    fn scan_initial(&self, out: &mut Emitter<'_>, mut pos: usize) -> Transition {
        let line = out.line();

        loop {
            let rest = &line[pos..];
            let Some(first) = rest.chars().next() else {
                out.push_end_marker();
                return Transition::End(ContinuationCode::None);
            };

            let Some((rule, mut len)) = longest_match(rest) else {
                // Nothing matches: the character stands alone as an error
                out.push(TokenKind::ErrorIdentifier, pos, pos + first.len_utf8());
                pos += first.len_utf8();
                continue;
            };

            let end = pos + len;
            match rule {
                Rule::Word => {
                    let kind = classify_word(&rest[..len], &self.config.language_version);
                    out.push(kind, pos, end);
                }
                Rule::Whitespace => out.push(TokenKind::Whitespace, pos, end),
                Rule::DoubleQuote => {
                    let quoted = Mode::Quoted {
                        quote: Quote::Double,
                        start: pos,
                        valid: true,
                    };
                    return Transition::Enter(quoted, end);
                }
                Rule::SingleQuote => {
                    let quoted = Mode::Quoted {
                        quote: Quote::Single,
                        start: pos,
                        valid: true,
                    };
                    return Transition::Enter(quoted, end);
                }
                Rule::EmptyBlockComment => out.push(TokenKind::CommentMultiline, pos, end),
                Rule::BlockCommentStart => {
                    return Transition::Enter(Mode::BlockComment { start: pos }, end);
                }
                Rule::LineCommentStart => {
                    return Transition::Enter(Mode::LineComment { start: pos }, end);
                }
                Rule::Regex => {
                    if regex_can_follow(out.last_significant()) {
                        out.push(TokenKind::Regex, pos, end);
                    } else {
                        // Division: keep the `/` and rescan what follows it
                        len = 1;
                        out.push(TokenKind::Operator, pos, pos + len);
                    }
                }
                Rule::Separator => out.push(TokenKind::Separator, pos, end),
                Rule::Operator => out.push(TokenKind::Operator, pos, end),
                Rule::DecimalInt => out.push(TokenKind::LiteralNumberDecimalInt, pos, end),
                Rule::HexInt => out.push(TokenKind::LiteralNumberHex, pos, end),
                Rule::Float => out.push(TokenKind::LiteralNumberFloat, pos, end),
                Rule::MalformedNumber => out.push(TokenKind::ErrorNumberFormat, pos, end),
                Rule::ErrorIdentifier => out.push(TokenKind::ErrorIdentifier, pos, end),
            }
            pos += len;
        }
    }
}

/// Scans one line with the process-wide configuration.
pub fn scan_line(
    text: &str,
    continuation: ContinuationCode,
    line_start_offset: usize,
) -> ScannedLine<'_> {
    LineScanner::from_current_config().scan_line(text, continuation, line_start_offset)
}

/// Scans one line with the process-wide configuration, taking the previous
/// line's state as a raw code.
pub fn scan_line_raw(
    text: &str,
    continuation: i32,
    line_start_offset: usize,
) -> Result<ScannedLine<'_>> {
    LineScanner::from_current_config().scan_line_raw(text, continuation, line_start_offset)
}

/// The line comment delimiters: an opener and no closer.
pub fn line_comment_delimiters() -> (&'static str, Option<&'static str>) {
    ("//", None)
}

/// Returns true if a line ending in `token` should indent the next line.
pub fn should_indent_next_line_after(token: &Token<'_>) -> bool {
    token.kind == TokenKind::Separator && (token.is_single_char('{') || token.is_single_char('('))
}
