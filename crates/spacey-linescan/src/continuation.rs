// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Lexical state carried from the end of one line to the start of the next.

use crate::error::{Result, ScanError};

/// The state a line leaves behind for the line after it.
///
/// Anything other than [`ContinuationCode::None`] means the line ended inside
/// a construct that the next line must resume: a block comment, or a string
/// or character literal whose last character was a backslash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContinuationCode {
    /// The line ended in ordinary code
    #[default]
    None,
    /// The line ended inside a `/* ... */` comment
    InBlockComment,
    /// The line ended on a `\` inside a double-quoted string
    InDoubleQuoteString {
        /// False once the string has seen a malformed escape
        valid: bool,
    },
    /// The line ended on a `\` inside a single-quoted literal
    InCharLiteral {
        /// False once the literal has seen a malformed escape
        valid: bool,
    },
}

impl ContinuationCode {
    /// Returns true if the next line starts in ordinary code.
    pub fn is_none(&self) -> bool {
        matches!(self, ContinuationCode::None)
    }

    /// Returns the integer form used by hosts that keep per-line state as
    /// plain integers.
    ///
    /// | Code | State |
    /// |------|-------|
    /// | 0 | none |
    /// | 1 | block comment |
    /// | 2 / 3 | double-quoted string, valid / invalid |
    /// | 4 / 5 | single-quoted literal, valid / invalid |
    pub fn to_raw(self) -> i32 {
        match self {
            ContinuationCode::None => 0,
            ContinuationCode::InBlockComment => 1,
            ContinuationCode::InDoubleQuoteString { valid: true } => 2,
            ContinuationCode::InDoubleQuoteString { valid: false } => 3,
            ContinuationCode::InCharLiteral { valid: true } => 4,
            ContinuationCode::InCharLiteral { valid: false } => 5,
        }
    }

    /// Decodes the integer form produced by [`ContinuationCode::to_raw`].
    ///
    /// Unknown codes are a contract violation and are rejected instead of
    /// being mapped to a guessed state.
    pub fn from_raw(raw: i32) -> Result<Self> {
        match raw {
            0 => Ok(ContinuationCode::None),
            1 => Ok(ContinuationCode::InBlockComment),
            2 => Ok(ContinuationCode::InDoubleQuoteString { valid: true }),
            3 => Ok(ContinuationCode::InDoubleQuoteString { valid: false }),
            4 => Ok(ContinuationCode::InCharLiteral { valid: true }),
            5 => Ok(ContinuationCode::InCharLiteral { valid: false }),
            _ => Err(ScanError::InvalidContinuation(raw)),
        }
    }
}

impl TryFrom<i32> for ContinuationCode {
    type Error = ScanError;

    fn try_from(raw: i32) -> Result<Self> {
        Self::from_raw(raw)
    }
}

impl From<ContinuationCode> for i32 {
    fn from(code: ContinuationCode) -> Self {
        code.to_raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ContinuationCode; 6] = [
        ContinuationCode::None,
        ContinuationCode::InBlockComment,
        ContinuationCode::InDoubleQuoteString { valid: true },
        ContinuationCode::InDoubleQuoteString { valid: false },
        ContinuationCode::InCharLiteral { valid: true },
        ContinuationCode::InCharLiteral { valid: false },
    ];

    #[test]
    fn test_raw_codes_are_distinct() {
        let raws: Vec<i32> = ALL.iter().map(|c| c.to_raw()).collect();
        assert_eq!(raws, vec![0, 1, 2, 3, 4, 5]);
        for code in ALL {
            assert_eq!(ContinuationCode::from_raw(code.to_raw()), Ok(code));
        }
    }

    #[test]
    fn test_unknown_raw_code_fails() {
        assert_eq!(
            ContinuationCode::from_raw(6),
            Err(ScanError::InvalidContinuation(6))
        );
        assert_eq!(
            ContinuationCode::try_from(-1),
            Err(ScanError::InvalidContinuation(-1))
        );
    }

    #[test]
    fn test_default_is_none() {
        assert!(ContinuationCode::default().is_none());
        assert!(!ContinuationCode::InBlockComment.is_none());
        assert_eq!(i32::from(ContinuationCode::InBlockComment), 1);
    }
}
