// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Classification tables for identifier-shaped lexemes.
//!
//! Every word the identifier pattern matches is looked up here, exactly and
//! case-sensitively. Words missing from every table are plain identifiers.
//!
//! | Table | Kind |
//! |-------|------|
//! | ECMA keywords, reserved-for-future words, `NaN`, `Infinity` | `ReservedWord` |
//! | `return` | `ReservedWord2` |
//! | primitive type names | `DataType` |
//! | `true`, `false` | `LiteralBoolean` |
//! | global functions | `Function` |
//! | `each` (1.6), `let` (1.7) | `ReservedWord` when the version allows it |

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::config::LanguageVersion;
use crate::token::TokenKind;

const KEYWORDS: &[&str] = &[
    "break", "continue", "delete", "else", "for", "function", "if", "in", "new", "this", "typeof",
    "var", "void", "while", "with",
];

const FUTURE_RESERVED_WORDS: &[&str] = &[
    "abstract",
    "case",
    "catch",
    "class",
    "const",
    "debugger",
    "default",
    "do",
    "enum",
    "export",
    "extends",
    "final",
    "finally",
    "goto",
    "implements",
    "import",
    "instanceof",
    "interface",
    "native",
    "package",
    "private",
    "protected",
    "public",
    "static",
    "super",
    "switch",
    "synchronized",
    "throw",
    "throws",
    "transient",
    "try",
    "volatile",
    "null",
];

const GLOBAL_CONSTANTS: &[&str] = &["NaN", "Infinity"];

const CONTROL_FLOW_KEYWORDS: &[&str] = &["return"];

const DATA_TYPES: &[&str] = &[
    "boolean", "byte", "char", "double", "float", "int", "long", "short",
];

const BOOLEANS: &[&str] = &["true", "false"];

const FUNCTIONS: &[&str] = &[
    "eval",
    "parseInt",
    "parseFloat",
    "escape",
    "unescape",
    "isNaN",
    "isFinite",
];

/// Keywords that only exist from a given language version on.
const VERSION_GATED: &[(&str, &str)] = &[("each", "1.6"), ("let", "1.7")];

#[derive(Debug, Clone, Copy)]
enum Entry {
    Fixed(TokenKind),
    Since(&'static str),
}

static TABLE: LazyLock<FxHashMap<&'static str, Entry>> = LazyLock::new(|| {
    let fixed = [
        (KEYWORDS, TokenKind::ReservedWord),
        (FUTURE_RESERVED_WORDS, TokenKind::ReservedWord),
        (GLOBAL_CONSTANTS, TokenKind::ReservedWord),
        (CONTROL_FLOW_KEYWORDS, TokenKind::ReservedWord2),
        (DATA_TYPES, TokenKind::DataType),
        (BOOLEANS, TokenKind::LiteralBoolean),
        (FUNCTIONS, TokenKind::Function),
    ];

    let mut table = FxHashMap::default();
    for (words, kind) in fixed {
        for word in words {
            table.insert(*word, Entry::Fixed(kind));
        }
    }
    for (word, since) in VERSION_GATED {
        table.insert(*word, Entry::Since(*since));
    }
    table
});

/// Classifies a word already matched by the identifier pattern.
pub fn classify_word(word: &str, version: &LanguageVersion) -> TokenKind {
    match TABLE.get(word) {
        Some(Entry::Fixed(kind)) => *kind,
        Some(Entry::Since(required)) if version.supports(required) => TokenKind::ReservedWord,
        Some(Entry::Since(_)) | None => TokenKind::Identifier,
    }
}

/// Returns the version a gated keyword needs, or `None` for ungated words.
pub fn required_version(word: &str) -> Option<&'static str> {
    match TABLE.get(word) {
        Some(Entry::Since(required)) => Some(*required),
        _ => None,
    }
}

/// Every word the tables know about, in no particular order.
///
/// Used by completion in interactive hosts.
pub fn known_words() -> impl Iterator<Item = &'static str> {
    TABLE.keys().copied()
}
