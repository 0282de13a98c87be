// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Error types for the line scanner.
//!
//! Malformed source text is never an error: it is reported through the
//! `Error*` token kinds. These errors only cover caller contract violations.

use thiserror::Error;

/// Result type for scanner configuration and boundary operations.
pub type Result<T> = std::result::Result<T, ScanError>;

/// Errors raised when a caller hands the scanner something it cannot use.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// A raw continuation code that does not name any lexical state
    #[error("invalid continuation code {0}")]
    InvalidContinuation(i32),

    /// A language version that is empty or not made of digits and dots
    #[error("invalid language version '{0}'")]
    InvalidVersion(String),
}
