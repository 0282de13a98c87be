// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Numeric literal matching.
//!
//! ```text
//! 42   0   7L           -> decimal int
//! 0xFF 0x1fL 017 0      -> hex (octal-looking forms share the kind)
//! 3.14 3. .5 1e10 2f    -> float
//! 3.14e-2d              -> float with exponent and suffix
//! 123xyz 0x 019         -> malformed number
//! ```
//!
//! A number followed directly by non-separator characters is one malformed
//! token covering the whole run. Because the scanner picks the longest match,
//! `123xyz` beats the `123` integer.

use super::{error_identifier, is_non_separator};

/// Match lengths of every numeric alternative at one position.
///
/// A length of `0` means the alternative does not match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberMatch {
    /// `0 | [1-9][0-9]*`, optional `l`/`L`
    pub decimal: usize,
    /// `0[xX][0-9a-fA-F]+ | 0[0-7]*`, optional `l`/`L`
    pub hex: usize,
    /// Any of the float forms
    pub float: usize,
    /// A number followed by non-separator characters
    pub malformed: usize,
}

/// Matches every numeric alternative at the start of `rest`.
///
/// Each form is scanned forward once, the way a hand-written lexer reads a
/// number. The malformed run only depends on the last valid end that is
/// followed by a non-separator, so the error run is walked once.
pub fn number(rest: &str) -> NumberMatch {
    let first = rest.as_bytes().first();
    if !first.is_some_and(|b| b.is_ascii_digit() || *b == b'.') {
        return NumberMatch::default();
    }

    let mut scan = NumberScan {
        rest,
        bytes: rest.as_bytes(),
        tail_from: 0,
    };
    let decimal = scan.decimal();
    let hex = scan.hex();
    let float = scan.float();

    let malformed = match scan.tail_from {
        0 => 0,
        from => from + error_identifier(&rest[from..]),
    };

    NumberMatch {
        decimal,
        hex,
        float,
        malformed,
    }
}

struct NumberScan<'a> {
    rest: &'a str,
    bytes: &'a [u8],
    /// Largest valid end directly followed by a non-separator, `0` if none
    tail_from: usize,
}

impl NumberScan<'_> {
    /// Records that every end in `first..=last` completes a valid lexeme.
    fn accept(&mut self, longest: &mut usize, first: usize, last: usize) {
        if first > last {
            return;
        }
        *longest = (*longest).max(last);

        // Ends are ASCII positions, so every slice lands on a char boundary
        let mut end = last;
        while end >= first && end > self.tail_from {
            if self.rest[end..].chars().next().is_some_and(is_non_separator) {
                self.tail_from = end;
                return;
            }
            end -= 1;
        }
    }

    fn at(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    fn is_long_suffix(&self, index: usize) -> bool {
        matches!(self.at(index), Some(b'l' | b'L'))
    }

    fn is_float_suffix(&self, index: usize) -> bool {
        matches!(self.at(index), Some(b'f' | b'F' | b'd' | b'D'))
    }

    fn digits(&self, from: usize) -> usize {
        count_while(self.bytes, from, |b| b.is_ascii_digit())
    }

    /// `0 | [1-9][0-9]*`, optional `l`/`L`
    fn decimal(&mut self) -> usize {
        let mut longest = 0;
        let end = match self.at(0) {
            Some(b'0') => 1,
            Some(b'1'..=b'9') => self.digits(0),
            _ => return 0,
        };
        self.accept(&mut longest, 1, end);
        if self.is_long_suffix(end) {
            self.accept(&mut longest, end + 1, end + 1);
        }
        longest
    }

    /// `0[xX][0-9a-fA-F]+ | 0[0-7]*`, optional `l`/`L`
    fn hex(&mut self) -> usize {
        let mut longest = 0;
        if self.at(0) != Some(b'0') {
            return 0;
        }

        let octal_end = 1 + count_while(self.bytes, 1, |b| (b'0'..=b'7').contains(&b));
        self.accept(&mut longest, 1, octal_end);
        if self.is_long_suffix(octal_end) {
            self.accept(&mut longest, octal_end + 1, octal_end + 1);
        }

        if matches!(self.at(1), Some(b'x' | b'X')) {
            let hex_end = 2 + count_while(self.bytes, 2, |b| b.is_ascii_hexdigit());
            if hex_end > 2 {
                self.accept(&mut longest, 3, hex_end);
                if self.is_long_suffix(hex_end) {
                    self.accept(&mut longest, hex_end + 1, hex_end + 1);
                }
            }
        }
        longest
    }

    /// `[0-9]+ . [0-9]* tail?`, `. [0-9]+ tail?` or `[0-9]+ tail`, where
    /// tail is `[fFdD]` or `[eE][+-]?[0-9]+[fFdD]?`
    fn float(&mut self) -> usize {
        let mut longest = 0;
        let int_digits = self.digits(0);

        if self.at(int_digits) == Some(b'.') {
            let frac_start = int_digits + 1;
            let frac_end = frac_start + self.digits(frac_start);
            // A bare `.` needs at least one fraction digit
            let first = if int_digits > 0 { frac_start } else { frac_start + 1 };
            if first <= frac_end {
                self.accept(&mut longest, first, frac_end);
                self.float_tail(&mut longest, frac_end);
            }
        } else if int_digits > 0 {
            self.float_tail(&mut longest, int_digits);
        }
        longest
    }

    fn float_tail(&mut self, longest: &mut usize, at: usize) {
        if self.is_float_suffix(at) {
            self.accept(longest, at + 1, at + 1);
            return;
        }
        if !matches!(self.at(at), Some(b'e' | b'E')) {
            return;
        }

        let mut exponent = at + 1;
        if matches!(self.at(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_end = exponent + self.digits(exponent);
        if exponent_end > exponent {
            self.accept(longest, exponent + 1, exponent_end);
            if self.is_float_suffix(exponent_end) {
                self.accept(longest, exponent_end + 1, exponent_end + 1);
            }
        }
    }
}

fn count_while(bytes: &[u8], from: usize, pred: impl Fn(u8) -> bool) -> usize {
    bytes
        .get(from..)
        .map_or(0, |tail| tail.iter().take_while(|&&b| pred(b)).count())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(decimal: usize, hex: usize, float: usize, malformed: usize) -> NumberMatch {
        NumberMatch {
            decimal,
            hex,
            float,
            malformed,
        }
    }

    #[test]
    fn test_decimal() {
        // `4` followed by `2` also reads as malformed; the decimal rule wins
        // the tie in the scanner
        assert_eq!(number("42;"), m(2, 0, 0, 2));
        assert_eq!(number("7L "), m(2, 0, 0, 2));
        assert_eq!(number("9"), m(1, 0, 0, 0));
    }

    #[test]
    fn test_zero_matches_decimal_and_hex() {
        assert_eq!(number("0"), m(1, 1, 0, 0));
    }

    #[test]
    fn test_hex() {
        assert_eq!(number("0xFF)").hex, 4);
        assert_eq!(number("0X1fL").hex, 5);
        assert_eq!(number("0xFF").malformed, 4);
    }

    #[test]
    fn test_octal_looking() {
        let found = number("017");
        assert_eq!(found.decimal, 1);
        assert_eq!(found.hex, 3);
        assert_eq!(found.malformed, 3);
    }

    #[test]
    fn test_float_forms() {
        assert_eq!(number("3.14").float, 4);
        assert_eq!(number("3.14e10").float, 7);
        assert_eq!(number("3.").float, 2);
        assert_eq!(number(".5").float, 2);
        assert_eq!(number(".5e-3").float, 5);
        assert_eq!(number("1e10").float, 4);
        assert_eq!(number("1E+5d").float, 5);
        assert_eq!(number("2f").float, 2);
        assert_eq!(number("2.5D").float, 4);
        assert_eq!(number("1.e5").float, 4);
    }

    #[test]
    fn test_not_float() {
        assert_eq!(number(".").float, 0);
        assert_eq!(number(".e5").float, 0);
        assert_eq!(number("1e").float, 0);
        assert_eq!(number("1e+").float, 0);
        assert_eq!(number("abc"), NumberMatch::default());
    }

    #[test]
    fn test_malformed_is_longest() {
        assert_eq!(number("123xyz"), m(3, 0, 0, 6));
        assert_eq!(number("123xyz;").malformed, 6);
        assert_eq!(number("0x"), m(1, 1, 0, 2));
        assert_eq!(number("019"), m(1, 2, 0, 3));
        assert_eq!(number("1.5x").malformed, 4);
        assert_eq!(number("1#").malformed, 2);
    }

    #[test]
    fn test_separators_end_numbers() {
        assert_eq!(number("1+2"), m(1, 0, 0, 0));
        assert_eq!(number("1.5.3").float, 3);
        assert_eq!(number("x = 1"), NumberMatch::default());
    }

    #[test]
    fn test_long_digit_run_is_one_pass() {
        let digits = "7".repeat(100_000);
        assert_eq!(number(&digits), m(100_000, 0, 0, 100_000));

        let with_tail = format!("{digits}xyz");
        assert_eq!(number(&with_tail), m(100_000, 0, 0, 100_003));
    }

    #[test]
    fn test_exponent_stops_at_suffix() {
        assert_eq!(number("1e5"), m(1, 0, 3, 3));
        assert_eq!(number("1e5dx").malformed, 5);
        assert_eq!(number("0x1FLg"), m(1, 5, 0, 6));
    }
}
