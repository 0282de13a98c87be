// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # spacey-linescan
//!
//! An incremental, line-oriented JavaScript scanner for syntax highlighting.
//!
//! ## Overview
//!
//! Editors repaint one line at a time. This crate turns a single line of
//! source text into classified tokens and reports a [`ContinuationCode`]
//! describing the construct the line ended inside, if any:
//! - Block comments that run past the end of the line
//! - String and character literals continued with a trailing backslash
//!
//! Feeding that code into the scan of the next line is all the state an
//! editor needs to keep. Malformed input never fails a scan; it shows up as
//! one of the `Error*` token kinds instead.
//!
//! ## Quick Start
//!
//! ```rust
//! use spacey_linescan::{ContinuationCode, LineScanner, TokenKind};
//!
//! let scanner = LineScanner::default();
//! let first = scanner.scan_line("x = 1; /* start", ContinuationCode::None, 0);
//! assert_eq!(first.continuation(), ContinuationCode::InBlockComment);
//!
//! let second = scanner.scan_line("end */ y", first.continuation(), 16);
//! assert_eq!(second.tokens()[0].kind, TokenKind::CommentMultiline);
//! assert_eq!(second.tokens()[0].span.start, 16);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod continuation;
pub mod document;
pub mod error;
pub mod patterns;
pub mod regex;
pub mod scanner;
pub mod tables;
pub mod token;

mod constructs;

// Re-exports for convenience
pub use config::{LanguageVersion, ScannerConfig, language_version, set_language_version};
pub use continuation::ContinuationCode;
pub use document::{LineStates, ScanText, scan_text};
pub use error::{Result, ScanError};
pub use scanner::{
    LineScanner, line_comment_delimiters, scan_line, scan_line_raw, should_indent_next_line_after,
};
pub use token::{ScannedLine, Span, Token, TokenKind};
