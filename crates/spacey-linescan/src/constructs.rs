// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Handlers for constructs that can span lines.
//!
//! Each handler starts either at an opener found in the initial mode or at
//! the start of a line whose previous line ended inside the construct, and
//! reports where initial scanning resumes or which state the next line
//! starts in.

use crate::continuation::ContinuationCode;
use crate::patterns::{hex_digits, url};
use crate::scanner::{Emitter, Transition};
use crate::token::TokenKind;

/// The two quote styles, which share one set of escape rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Quote {
    Double,
    Single,
}

impl Quote {
    fn delimiter(self) -> u8 {
        match self {
            Quote::Double => b'"',
            Quote::Single => b'\'',
        }
    }

    fn kind(self, valid: bool) -> TokenKind {
        match (self, valid) {
            (Quote::Double, true) => TokenKind::LiteralStringDoubleQuote,
            (Quote::Double, false) => TokenKind::ErrorStringDouble,
            (Quote::Single, true) => TokenKind::LiteralChar,
            (Quote::Single, false) => TokenKind::ErrorChar,
        }
    }

    fn continuation(self, valid: bool) -> ContinuationCode {
        match self {
            Quote::Double => ContinuationCode::InDoubleQuoteString { valid },
            Quote::Single => ContinuationCode::InCharLiteral { valid },
        }
    }
}

/// Scans a quoted literal whose token begins at `start`, reading the body
/// from `body`.
pub(crate) fn scan_quoted(
    out: &mut Emitter<'_>,
    quote: Quote,
    start: usize,
    body: usize,
    mut valid: bool,
) -> Transition {
    let bytes = out.line().as_bytes();
    let len = bytes.len();
    let delimiter = quote.delimiter();
    let mut i = body;

    while i < len {
        let b = bytes[i];
        if b == delimiter {
            out.push(quote.kind(valid), start, i + 1);
            return Transition::Resume(i + 1);
        }
        if b != b'\\' {
            i += 1;
            continue;
        }

        match bytes.get(i + 1) {
            // Line continuation
            None => {
                out.push(quote.kind(valid), start, len);
                return Transition::End(quote.continuation(valid));
            }
            Some(b'u') => {
                if hex_digits(&bytes[i + 2..len.min(i + 6)]) == 4 {
                    i += 6;
                } else {
                    valid = false;
                    i += 2;
                }
            }
            Some(b'x') => {
                if hex_digits(&bytes[i + 2..len.min(i + 4)]) == 2 {
                    i += 4;
                } else {
                    valid = false;
                    i += 2;
                }
            }
            Some(_) => i += 2,
        }
    }

    // Unterminated: the rest of the line is one error token
    out.push(quote.kind(false), start, len);
    Transition::End(ContinuationCode::None)
}

/// Scans a block comment whose token begins at `start`, reading the body
/// from `body`.
pub(crate) fn scan_block_comment(out: &mut Emitter<'_>, start: usize, body: usize) -> Transition {
    let line = out.line();
    let mut segment = start;
    let mut i = body;

    while let Some(ch) = line[i..].chars().next() {
        if line[i..].starts_with("*/") {
            out.push(TokenKind::CommentMultiline, segment, i + 2);
            return Transition::Resume(i + 2);
        }

        let link = url(&line[i..], true);
        if link > 0 {
            out.push(TokenKind::CommentMultiline, segment, i);
            out.push_hyperlink(TokenKind::CommentMultiline, i, i + link);
            i += link;
            segment = i;
        } else {
            i += ch.len_utf8();
        }
    }

    out.push(TokenKind::CommentMultiline, segment, line.len());
    Transition::End(ContinuationCode::InBlockComment)
}

/// Scans a `//` comment starting at `start` to the end of the line.
pub(crate) fn scan_line_comment(out: &mut Emitter<'_>, start: usize) -> Transition {
    let line = out.line();
    let mut segment = start;
    let mut i = start + 2;

    while let Some(ch) = line[i..].chars().next() {
        let link = url(&line[i..], false);
        if link > 0 {
            out.push(TokenKind::CommentEol, segment, i);
            out.push_hyperlink(TokenKind::CommentEol, i, i + link);
            i += link;
            segment = i;
        } else {
            i += ch.len_utf8();
        }
    }

    out.push(TokenKind::CommentEol, segment, line.len());
    out.push_end_marker();
    Transition::End(ContinuationCode::None)
}
