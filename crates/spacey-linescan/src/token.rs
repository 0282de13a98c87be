// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Token definitions for the line scanner.

use crate::continuation::ContinuationCode;
use crate::patterns::{OperatorClass, operator_class};

/// A span in the document, in absolute byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if this span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// The highlighting class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Plain identifier
    Identifier,
    /// Keyword or reserved word
    ReservedWord,
    /// Control-flow keyword that hosts treat specially (`return`)
    ReservedWord2,
    /// Primitive type name (`int`, `boolean`, ...)
    DataType,
    /// Built-in global function (`eval`, `parseInt`, ...)
    Function,
    /// Run of spaces, tabs and form feeds
    Whitespace,
    /// Bracket, parenthesis, brace, `;`, `,` or `.`
    Separator,
    /// Operator, assignment or not
    Operator,
    /// `true` or `false`
    LiteralBoolean,
    /// Decimal integer, optionally suffixed with `l`/`L`
    LiteralNumberDecimalInt,
    /// Hexadecimal or octal-looking integer
    LiteralNumberHex,
    /// Floating point number
    LiteralNumberFloat,
    /// Double-quoted string
    LiteralStringDoubleQuote,
    /// Single-quoted literal
    LiteralChar,
    /// `/* ... */` comment, or the part of one on this line
    CommentMultiline,
    /// `// ...` comment
    CommentEol,
    /// Regular expression literal
    Regex,
    /// Unterminated or malformed double-quoted string
    ErrorStringDouble,
    /// Unterminated or malformed single-quoted literal
    ErrorChar,
    /// Number followed directly by garbage (`123abc`)
    ErrorNumberFormat,
    /// Text no other rule accepts
    ErrorIdentifier,
    /// Zero-width end-of-line marker
    Null,
}

impl TokenKind {
    /// Returns true if this token is a keyword.
    pub fn is_keyword(&self) -> bool {
        matches!(self, TokenKind::ReservedWord | TokenKind::ReservedWord2)
    }

    /// Returns true if this token is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::LiteralBoolean
                | TokenKind::LiteralNumberDecimalInt
                | TokenKind::LiteralNumberHex
                | TokenKind::LiteralNumberFloat
                | TokenKind::LiteralStringDoubleQuote
                | TokenKind::LiteralChar
                | TokenKind::Regex
        )
    }

    /// Returns true if this token is a comment.
    pub fn is_comment(&self) -> bool {
        matches!(self, TokenKind::CommentMultiline | TokenKind::CommentEol)
    }

    /// Returns true if this token marks malformed source.
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            TokenKind::ErrorStringDouble
                | TokenKind::ErrorChar
                | TokenKind::ErrorNumberFormat
                | TokenKind::ErrorIdentifier
        )
    }

    /// Returns true if this token carries text worth painting.
    pub fn is_paintable(&self) -> bool {
        !matches!(self, TokenKind::Null)
    }

    /// Returns true if editors should highlight other occurrences of this
    /// token when the caret rests on it.
    pub fn marks_occurrences(&self) -> bool {
        matches!(self, TokenKind::Identifier | TokenKind::Function)
    }

    /// Returns a stable snake_case name, used in token dumps.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::ReservedWord => "reserved_word",
            TokenKind::ReservedWord2 => "reserved_word_2",
            TokenKind::DataType => "data_type",
            TokenKind::Function => "function",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Separator => "separator",
            TokenKind::Operator => "operator",
            TokenKind::LiteralBoolean => "literal_boolean",
            TokenKind::LiteralNumberDecimalInt => "literal_number_decimal_int",
            TokenKind::LiteralNumberHex => "literal_number_hex",
            TokenKind::LiteralNumberFloat => "literal_number_float",
            TokenKind::LiteralStringDoubleQuote => "literal_string_double_quote",
            TokenKind::LiteralChar => "literal_char",
            TokenKind::CommentMultiline => "comment_multiline",
            TokenKind::CommentEol => "comment_eol",
            TokenKind::Regex => "regex",
            TokenKind::ErrorStringDouble => "error_string_double",
            TokenKind::ErrorChar => "error_char",
            TokenKind::ErrorNumberFormat => "error_number_format",
            TokenKind::ErrorIdentifier => "error_identifier",
            TokenKind::Null => "null",
        }
    }
}

/// A token produced by the scanner.
///
/// `text` borrows from the line the caller handed in; no token text is ever
/// copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The kind of token
    pub kind: TokenKind,
    /// The span in the document
    pub span: Span,
    /// The source text covered by the token
    pub text: &'a str,
    /// True for a URL found inside a comment
    pub hyperlink: bool,
}

impl<'a> Token<'a> {
    /// Creates a new token.
    pub fn new(kind: TokenKind, span: Span, text: &'a str) -> Self {
        Self {
            kind,
            span,
            text,
            hyperlink: false,
        }
    }

    /// Creates a navigable URL token inside a comment of kind `kind`.
    pub fn hyperlink(kind: TokenKind, span: Span, text: &'a str) -> Self {
        Self {
            kind,
            span,
            text,
            hyperlink: true,
        }
    }

    /// Returns true if the token text is exactly `ch`.
    pub fn is_single_char(&self, ch: char) -> bool {
        let mut chars = self.text.chars();
        chars.next() == Some(ch) && chars.next().is_none()
    }

    /// Returns true if this token is neither whitespace, a comment, nor the
    /// end-of-line marker.
    pub fn is_significant(&self) -> bool {
        !matches!(self.kind, TokenKind::Whitespace | TokenKind::Null) && !self.kind.is_comment()
    }

    /// Whether an operator token assigns, `None` for other tokens.
    pub fn operator_class(&self) -> Option<OperatorClass> {
        if self.kind == TokenKind::Operator {
            operator_class(self.text)
        } else {
            None
        }
    }
}

/// The result of scanning one line: its tokens, in order, and the state the
/// next line starts in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedLine<'a> {
    tokens: Vec<Token<'a>>,
    continuation: ContinuationCode,
}

impl<'a> ScannedLine<'a> {
    /// Creates a scanned line from its parts.
    pub fn new(tokens: Vec<Token<'a>>, continuation: ContinuationCode) -> Self {
        Self {
            tokens,
            continuation,
        }
    }

    /// The tokens in ascending offset order.
    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    /// The state the next line starts in.
    pub fn continuation(&self) -> ContinuationCode {
        self.continuation
    }

    /// Iterates over the tokens.
    pub fn iter(&self) -> std::slice::Iter<'_, Token<'a>> {
        self.tokens.iter()
    }

    /// Number of tokens, including the end-of-line marker.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the scan produced no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The token at `index`.
    pub fn get(&self, index: usize) -> Option<&Token<'a>> {
        self.tokens.get(index)
    }

    /// The first token of the line.
    pub fn first(&self) -> Option<&Token<'a>> {
        self.tokens.first()
    }

    /// The last token of the line.
    pub fn last(&self) -> Option<&Token<'a>> {
        self.tokens.last()
    }

    /// The token following the one at `index`.
    pub fn next_of(&self, index: usize) -> Option<&Token<'a>> {
        self.tokens.get(index.checked_add(1)?)
    }

    /// The last token that is not whitespace, a comment or the end marker.
    pub fn last_significant(&self) -> Option<&Token<'a>> {
        self.tokens.iter().rev().find(|t| t.is_significant())
    }

    /// Splits the line into its tokens and continuation code.
    pub fn into_parts(self) -> (Vec<Token<'a>>, ContinuationCode) {
        (self.tokens, self.continuation)
    }
}

impl<'a> IntoIterator for ScannedLine<'a> {
    type Item = Token<'a>;
    type IntoIter = std::vec::IntoIter<Token<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'s, 'a> IntoIterator for &'s ScannedLine<'a> {
    type Item = &'s Token<'a>;
    type IntoIter = std::slice::Iter<'s, Token<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_class() {
        let plus_assign = Token::new(TokenKind::Operator, Span::new(2, 4), "+=");
        assert_eq!(plus_assign.operator_class(), Some(OperatorClass::Assignment));

        let arrow = Token::new(TokenKind::Operator, Span::new(0, 2), "=>");
        assert_eq!(arrow.operator_class(), Some(OperatorClass::NonAssignment));

        let paren = Token::new(TokenKind::Separator, Span::new(0, 1), "(");
        assert_eq!(paren.operator_class(), None);
    }

    #[test]
    fn test_span_len() {
        let span = Span::new(5, 15);
        assert_eq!(span.len(), 10);
        assert!(!span.is_empty());
        assert!(Span::new(5, 5).is_empty());
    }

    #[test]
    fn test_is_keyword() {
        assert!(TokenKind::ReservedWord.is_keyword());
        assert!(TokenKind::ReservedWord2.is_keyword());
        assert!(!TokenKind::Identifier.is_keyword());
        assert!(!TokenKind::DataType.is_keyword());
    }

    #[test]
    fn test_is_literal() {
        assert!(TokenKind::LiteralBoolean.is_literal());
        assert!(TokenKind::LiteralNumberHex.is_literal());
        assert!(TokenKind::Regex.is_literal());
        assert!(!TokenKind::ErrorStringDouble.is_literal());
        assert!(!TokenKind::Operator.is_literal());
    }

    #[test]
    fn test_is_error() {
        for kind in [
            TokenKind::ErrorStringDouble,
            TokenKind::ErrorChar,
            TokenKind::ErrorNumberFormat,
            TokenKind::ErrorIdentifier,
        ] {
            assert!(kind.is_error(), "{kind:?}");
            assert!(!kind.is_literal(), "{kind:?}");
        }
        assert!(!TokenKind::Null.is_error());
    }

    #[test]
    fn test_marks_occurrences() {
        assert!(TokenKind::Identifier.marks_occurrences());
        assert!(TokenKind::Function.marks_occurrences());
        assert!(!TokenKind::ReservedWord.marks_occurrences());
    }

    #[test]
    fn test_single_char() {
        let token = Token::new(TokenKind::Separator, Span::new(0, 1), "(");
        assert!(token.is_single_char('('));
        assert!(!token.is_single_char(')'));

        let token = Token::new(TokenKind::Operator, Span::new(0, 2), "==");
        assert!(!token.is_single_char('='));
    }

    #[test]
    fn test_last_significant_skips_trivia() {
        let line = ScannedLine::new(
            vec![
                Token::new(TokenKind::Identifier, Span::new(0, 1), "a"),
                Token::new(TokenKind::Whitespace, Span::new(1, 2), " "),
                Token::new(TokenKind::CommentMultiline, Span::new(2, 7), "/**/ "),
                Token::new(TokenKind::Null, Span::new(7, 7), ""),
            ],
            ContinuationCode::None,
        );
        assert_eq!(line.last_significant().map(|t| t.text), Some("a"));
        assert_eq!(line.next_of(0).map(|t| t.kind), Some(TokenKind::Whitespace));
        assert!(line.next_of(3).is_none());
        assert!(line.next_of(usize::MAX).is_none());
    }

    #[test]
    fn test_names_are_unique() {
        let kinds = [
            TokenKind::Identifier,
            TokenKind::ReservedWord,
            TokenKind::ReservedWord2,
            TokenKind::DataType,
            TokenKind::Function,
            TokenKind::Whitespace,
            TokenKind::Separator,
            TokenKind::Operator,
            TokenKind::LiteralBoolean,
            TokenKind::LiteralNumberDecimalInt,
            TokenKind::LiteralNumberHex,
            TokenKind::LiteralNumberFloat,
            TokenKind::LiteralStringDoubleQuote,
            TokenKind::LiteralChar,
            TokenKind::CommentMultiline,
            TokenKind::CommentEol,
            TokenKind::Regex,
            TokenKind::ErrorStringDouble,
            TokenKind::ErrorChar,
            TokenKind::ErrorNumberFormat,
            TokenKind::ErrorIdentifier,
            TokenKind::Null,
        ];
        let names: std::collections::HashSet<_> = kinds.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), kinds.len());
    }
}
