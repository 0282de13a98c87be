// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Regular expression literals versus division.
//!
//! The `/` character can start:
//! - Division: `a / b`
//! - Division assignment: `a /= b`
//! - Single-line comment: `// comment`
//! - Multi-line comment: `/* comment */`
//! - Regular expression: `/pattern/flags`
//!
//! Comments are matched by their own rules. For the remaining cases the
//! scanner first matches a `/.../flags` shape with [`regex_literal`], then
//! asks [`regex_can_follow`] whether the previous significant token on the
//! line leaves room for an operand. If it does not, only the `/` becomes an
//! operator and the rest of the text is scanned again.

use crate::token::{Token, TokenKind};

/// Regex literal at the start of `rest`, or `0`.
///
/// The first body character may not be `*`, `/` or a line break; the body
/// may not contain an unescaped `/` or a line break; flags are `g`, `i`, `m`.
pub fn regex_literal(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    if bytes.first() != Some(&b'/') {
        return 0;
    }

    let mut i = 1;
    match bytes.get(i) {
        None | Some(b'*' | b'/' | b'\n') => return 0,
        _ => {}
    }

    loop {
        match bytes.get(i) {
            None | Some(b'\n') => return 0,
            Some(b'\\') => match rest[i + 1..].chars().next() {
                None | Some('\n') => return 0,
                Some(escaped) => i += 1 + escaped.len_utf8(),
            },
            Some(b'/') => {
                i += 1;
                break;
            }
            Some(_) => i += 1,
        }
    }

    while matches!(bytes.get(i), Some(b'g' | b'i' | b'm')) {
        i += 1;
    }
    i
}

/// Returns true if a regex literal may start after `previous`, the last
/// token on the line that is not whitespace or a comment.
///
/// A regex is an operand, so it cannot directly follow another operand:
/// identifiers, literals, closing brackets, postfix `++`/`--` and value
/// keywords such as `this`.
pub fn regex_can_follow(previous: Option<&Token<'_>>) -> bool {
    let Some(token) = previous else {
        return true;
    };

    match token.kind {
        TokenKind::Identifier
        | TokenKind::Function
        | TokenKind::DataType
        | TokenKind::LiteralBoolean
        | TokenKind::LiteralNumberDecimalInt
        | TokenKind::LiteralNumberHex
        | TokenKind::LiteralNumberFloat
        | TokenKind::LiteralStringDoubleQuote
        | TokenKind::LiteralChar
        | TokenKind::Regex
        | TokenKind::ErrorStringDouble
        | TokenKind::ErrorChar
        | TokenKind::ErrorNumberFormat
        | TokenKind::ErrorIdentifier => false,
        TokenKind::Separator => !matches!(token.text, ")" | "]" | "}"),
        TokenKind::Operator => !matches!(token.text, "++" | "--"),
        TokenKind::ReservedWord => !matches!(token.text, "this" | "null" | "NaN" | "Infinity"),
        TokenKind::ReservedWord2
        | TokenKind::Whitespace
        | TokenKind::CommentMultiline
        | TokenKind::CommentEol
        | TokenKind::Null => true,
    }
}
