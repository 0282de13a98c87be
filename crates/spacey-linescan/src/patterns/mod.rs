// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Pattern matchers for the initial scanning mode.
//!
//! Every matcher looks at the rest of the line and returns how many bytes it
//! would consume, `0` meaning no match. The scanner runs all of them at the
//! cursor and keeps the longest, so matchers never look at each other.
//!
//! - `numbers` - decimal, hex/octal, float and malformed numbers
//! - `operators` - assignment and non-assignment operators
//! - `url` - URLs inside comments

pub mod numbers;
pub mod operators;
pub mod url;

use unicode_xid::UnicodeXID;

pub use numbers::{NumberMatch, number};
pub use operators::{OperatorClass, operator, operator_class};
pub use url::url;

/// Checks if a character can start an identifier.
pub fn is_id_start(ch: char) -> bool {
    ch == '_' || ch == '$' || ch.is_xid_start()
}

/// Checks if a character can continue an identifier.
pub fn is_id_continue(ch: char) -> bool {
    ch == '_' || ch == '$' || ch.is_xid_continue()
}

/// Checks if a character can appear in an error-identifier run.
///
/// Everything is a non-separator except whitespace, line breaks, quotes and
/// the characters that make up separators and operators.
pub fn is_non_separator(ch: char) -> bool {
    !matches!(
        ch,
        ' ' | '\t'
            | '\u{c}'
            | '\r'
            | '\n'
            | '('
            | ')'
            | '{'
            | '}'
            | '['
            | ']'
            | ';'
            | ','
            | '.'
            | '='
            | '>'
            | '<'
            | '!'
            | '~'
            | '?'
            | ':'
            | '+'
            | '-'
            | '*'
            | '/'
            | '&'
            | '|'
            | '^'
            | '%'
            | '"'
            | '\''
    )
}

/// Identifier: a start character followed by continue characters or
/// `\uXXXX` escapes.
pub fn identifier(rest: &str) -> usize {
    let mut end = match rest.chars().next() {
        Some(ch) if is_id_start(ch) => ch.len_utf8(),
        _ => return 0,
    };

    loop {
        let tail = &rest[end..];
        match tail.chars().next() {
            Some(ch) if is_id_continue(ch) => end += ch.len_utf8(),
            Some('\\') if unicode_escape_len(tail) > 0 => end += unicode_escape_len(tail),
            _ => return end,
        }
    }
}

/// `\uXXXX` at the start of `rest`: 6 bytes, or `0`.
fn unicode_escape_len(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    if bytes.len() >= 6 && bytes[0] == b'\\' && bytes[1] == b'u' && hex_digits(&bytes[2..6]) == 4 {
        6
    } else {
        0
    }
}

/// Number of leading ASCII hex digits in `bytes`.
pub fn hex_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_hexdigit()).count()
}

/// Whitespace: spaces, tabs and form feeds.
pub fn whitespace(rest: &str) -> usize {
    rest.bytes()
        .take_while(|b| matches!(b, b' ' | b'\t' | b'\x0c'))
        .count()
}

/// Separator: one of `( ) { } [ ] ; , .`.
pub fn separator(rest: &str) -> usize {
    match rest.as_bytes().first() {
        Some(b'(' | b')' | b'{' | b'}' | b'[' | b']' | b';' | b',' | b'.') => 1,
        _ => 0,
    }
}

/// Error identifier: a run of non-separator characters.
pub fn error_identifier(rest: &str) -> usize {
    rest.chars()
        .take_while(|&ch| is_non_separator(ch))
        .map(char::len_utf8)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier() {
        assert_eq!(identifier("foo bar"), 3);
        assert_eq!(identifier("_bar1+"), 5);
        assert_eq!(identifier("$elem."), 5);
        assert_eq!(identifier("1abc"), 0);
        assert_eq!(identifier(""), 0);
    }

    #[test]
    fn test_identifier_unicode() {
        assert_eq!(identifier("héllo!"), "héllo".len());
        assert_eq!(identifier("日本 x"), "日本".len());
    }

    #[test]
    fn test_identifier_unicode_escape() {
        assert_eq!(identifier("a\\u0041b c"), 8);
        // An escape cannot start an identifier
        assert_eq!(identifier("\\u0041"), 0);
        // Short escapes end the identifier
        assert_eq!(identifier("a\\u00"), 1);
    }

    #[test]
    fn test_whitespace() {
        assert_eq!(whitespace("  \t x"), 4);
        assert_eq!(whitespace("\x0cx"), 1);
        assert_eq!(whitespace("x "), 0);
        assert_eq!(whitespace("\n"), 0);
    }

    #[test]
    fn test_separator() {
        for s in ["(", ")", "{", "}", "[", "]", ";", ",", "."] {
            assert_eq!(separator(s), 1, "{s}");
        }
        assert_eq!(separator("+"), 0);
        assert_eq!(separator(""), 0);
    }

    #[test]
    fn test_error_identifier() {
        assert_eq!(error_identifier("#foo bar"), 4);
        assert_eq!(error_identifier("abc#def;"), 7);
        assert_eq!(error_identifier("@x.y"), 2);
        assert_eq!(error_identifier("(x"), 0);
        assert_eq!(error_identifier("\\"), 1);
    }
}
