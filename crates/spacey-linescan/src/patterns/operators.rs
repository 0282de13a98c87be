// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Operator matching.
//!
//! Multi-character operators are recognized by looking ahead from the first
//! character, one function per leading character.
//!
//! | First | Function | Variants |
//! |-------|----------|----------|
//! | `+` | `scan_plus` | `+`, `++`, `+=` |
//! | `-` | `scan_minus` | `-`, `--`, `-=` |
//! | `*` | `scan_star` | `*`, `**`, `*=`, `**=` |
//! | `/` | `scan_slash` | `/`, `/=` |
//! | `%` | `scan_percent` | `%`, `%=` |
//! | `<` | `scan_less_than` | `<`, `<=`, `<<`, `<<=` |
//! | `>` | `scan_greater_than` | `>`, `>=`, `>>`, `>>>`, `>>=`, `>>>=` |
//! | `=` | `scan_equal` | `=`, `==`, `===`, `=>` |
//! | `!` | `scan_bang` | `!`, `!=`, `!==` |
//! | `&` | `scan_ampersand` | `&`, `&&`, `&=`, `&&=` |
//! | `\|` | `scan_pipe` | `\|`, `\|\|`, `\|=`, `\|\|=` |
//! | `^` | `scan_caret` | `^`, `^=` |
//! | `?` | `scan_question` | `?`, `?.`, `??`, `??=` |
//! | `.` | `scan_dot` | `...` |
//! | `~`, `:` | | single character |

/// Whether an operator stores into its left operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorClass {
    /// `=`, `+=`, `>>>=`, ...
    Assignment,
    /// Everything else
    NonAssignment,
}

/// Length of the operator at the start of `rest`, `0` if there is none.
pub fn operator(rest: &str) -> usize {
    let bytes = rest.as_bytes();
    let Some(first) = bytes.first() else {
        return 0;
    };
    match first {
        b'+' => scan_plus(bytes),
        b'-' => scan_minus(bytes),
        b'*' => scan_star(bytes),
        b'/' => scan_slash(bytes),
        b'%' => scan_percent(bytes),
        b'<' => scan_less_than(bytes),
        b'>' => scan_greater_than(bytes),
        b'=' => scan_equal(bytes),
        b'!' => scan_bang(bytes),
        b'&' => scan_ampersand(bytes),
        b'|' => scan_pipe(bytes),
        b'^' => scan_caret(bytes),
        b'?' => scan_question(bytes),
        b'.' => scan_dot(bytes),
        b'~' | b':' => 1,
        _ => 0,
    }
}

/// Classifies operator text, or `None` if `text` is not an operator.
pub fn operator_class(text: &str) -> Option<OperatorClass> {
    match text {
        "=" | "+=" | "-=" | "*=" | "/=" | "%=" | "**=" | "<<=" | ">>=" | ">>>=" | "&=" | "|="
        | "^=" | "&&=" | "||=" | "??=" => Some(OperatorClass::Assignment),
        "+" | "-" | "*" | "/" | "%" | "**" | "++" | "--" | "<" | ">" | "<=" | ">=" | "<<"
        | ">>" | ">>>" | "==" | "!=" | "===" | "!==" | "=>" | "!" | "~" | "&" | "|" | "^"
        | "&&" | "||" | "??" | "?" | "?." | ":" | "..." => Some(OperatorClass::NonAssignment),
        _ => None,
    }
}

fn at(bytes: &[u8], index: usize) -> Option<u8> {
    bytes.get(index).copied()
}

fn scan_plus(bytes: &[u8]) -> usize {
    match at(bytes, 1) {
        Some(b'+' | b'=') => 2,
        _ => 1,
    }
}

fn scan_minus(bytes: &[u8]) -> usize {
    match at(bytes, 1) {
        Some(b'-' | b'=') => 2,
        _ => 1,
    }
}

fn scan_star(bytes: &[u8]) -> usize {
    match at(bytes, 1) {
        Some(b'*') => {
            if at(bytes, 2) == Some(b'=') {
                3
            } else {
                2
            }
        }
        Some(b'=') => 2,
        _ => 1,
    }
}

fn scan_slash(bytes: &[u8]) -> usize {
    match at(bytes, 1) {
        Some(b'=') => 2,
        _ => 1,
    }
}

fn scan_percent(bytes: &[u8]) -> usize {
    if at(bytes, 1) == Some(b'=') { 2 } else { 1 }
}

fn scan_less_than(bytes: &[u8]) -> usize {
    match at(bytes, 1) {
        Some(b'<') => {
            if at(bytes, 2) == Some(b'=') {
                3
            } else {
                2
            }
        }
        Some(b'=') => 2,
        _ => 1,
    }
}

fn scan_greater_than(bytes: &[u8]) -> usize {
    match at(bytes, 1) {
        Some(b'>') => match at(bytes, 2) {
            Some(b'>') => {
                if at(bytes, 3) == Some(b'=') {
                    4
                } else {
                    3
                }
            }
            Some(b'=') => 3,
            _ => 2,
        },
        Some(b'=') => 2,
        _ => 1,
    }
}

fn scan_equal(bytes: &[u8]) -> usize {
    match at(bytes, 1) {
        Some(b'=') => {
            if at(bytes, 2) == Some(b'=') {
                3
            } else {
                2
            }
        }
        Some(b'>') => 2,
        _ => 1,
    }
}

fn scan_bang(bytes: &[u8]) -> usize {
    match at(bytes, 1) {
        Some(b'=') => {
            if at(bytes, 2) == Some(b'=') {
                3
            } else {
                2
            }
        }
        _ => 1,
    }
}

fn scan_ampersand(bytes: &[u8]) -> usize {
    match at(bytes, 1) {
        Some(b'&') => {
            if at(bytes, 2) == Some(b'=') {
                3
            } else {
                2
            }
        }
        Some(b'=') => 2,
        _ => 1,
    }
}

fn scan_pipe(bytes: &[u8]) -> usize {
    match at(bytes, 1) {
        Some(b'|') => {
            if at(bytes, 2) == Some(b'=') {
                3
            } else {
                2
            }
        }
        Some(b'=') => 2,
        _ => 1,
    }
}

fn scan_caret(bytes: &[u8]) -> usize {
    if at(bytes, 1) == Some(b'=') { 2 } else { 1 }
}

fn scan_question(bytes: &[u8]) -> usize {
    match at(bytes, 1) {
        Some(b'?') => {
            if at(bytes, 2) == Some(b'=') {
                3
            } else {
                2
            }
        }
        // `a?.5:b` is a conditional, not optional chaining
        Some(b'.') if !at(bytes, 2).is_some_and(|b| b.is_ascii_digit()) => 2,
        _ => 1,
    }
}

/// Only the spread operator; a lone `.` is a separator.
fn scan_dot(bytes: &[u8]) -> usize {
    if bytes.starts_with(b"...") { 3 } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(src: &str) -> &str {
        &src[..operator(src)]
    }

    #[test]
    fn test_plus_operators() {
        assert_eq!(op("+"), "+");
        assert_eq!(op("++x"), "++");
        assert_eq!(op("+="), "+=");
    }

    #[test]
    fn test_minus_operators() {
        assert_eq!(op("-"), "-");
        assert_eq!(op("--"), "--");
        assert_eq!(op("-=1"), "-=");
    }

    #[test]
    fn test_star_operators() {
        assert_eq!(op("*"), "*");
        assert_eq!(op("**"), "**");
        assert_eq!(op("*="), "*=");
        assert_eq!(op("**="), "**=");
    }

    #[test]
    fn test_shift_operators() {
        assert_eq!(op("<<"), "<<");
        assert_eq!(op("<<="), "<<=");
        assert_eq!(op(">>"), ">>");
        assert_eq!(op(">>>"), ">>>");
        assert_eq!(op(">>>="), ">>>=");
        assert_eq!(op(">>="), ">>=");
    }

    #[test]
    fn test_equality_operators() {
        assert_eq!(op("="), "=");
        assert_eq!(op("=="), "==");
        assert_eq!(op("===="), "===");
        assert_eq!(op("=>"), "=>");
        assert_eq!(op("!"), "!");
        assert_eq!(op("!="), "!=");
        assert_eq!(op("!=="), "!==");
    }

    #[test]
    fn test_logical_operators() {
        assert_eq!(op("&&"), "&&");
        assert_eq!(op("&&="), "&&=");
        assert_eq!(op("||"), "||");
        assert_eq!(op("|"), "|");
        assert_eq!(op("^="), "^=");
    }

    #[test]
    fn test_question_operators() {
        assert_eq!(op("?"), "?");
        assert_eq!(op("?.x"), "?.");
        assert_eq!(op("?.5"), "?");
        assert_eq!(op("??"), "??");
        assert_eq!(op("??="), "??=");
    }

    #[test]
    fn test_dot_is_only_spread() {
        assert_eq!(op("..."), "...");
        assert_eq!(operator("."), 0);
        assert_eq!(operator(".."), 0);
    }

    #[test]
    fn test_not_operators() {
        assert_eq!(operator("("), 0);
        assert_eq!(operator("a"), 0);
        assert_eq!(operator(""), 0);
    }

    #[test]
    fn test_operator_classes() {
        for text in ["=", "+=", ">>>=", "??=", "&&="] {
            assert_eq!(operator_class(text), Some(OperatorClass::Assignment), "{text}");
        }
        for text in ["==", "+", "=>", "!==", "..."] {
            assert_eq!(operator_class(text), Some(OperatorClass::NonAssignment), "{text}");
        }
        assert_eq!(operator_class("=<"), None);
        assert_eq!(operator_class(op("%=1")), Some(OperatorClass::Assignment));
        assert_eq!(operator_class(op("++i")), Some(OperatorClass::NonAssignment));
    }
}
