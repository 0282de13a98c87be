// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Whole-document helpers on top of the line scanner.
//!
//! An editor keeps the continuation code each line ended with. After an
//! edit it re-scans from the edited line and keeps going only while the
//! outgoing code differs from the cached one; [`LineStates`] is that cache.

use std::ops::Range;

use tracing::debug;

use crate::continuation::ContinuationCode;
use crate::scanner::LineScanner;
use crate::token::ScannedLine;

/// Scans every line of `text`, threading continuation codes from line to
/// line. Lines are split on `\n`; a trailing `\r` is left out of the line.
pub fn scan_text<'s, 'a>(scanner: &'s LineScanner, text: &'a str) -> ScanText<'s, 'a> {
    ScanText {
        scanner,
        lines: text.split('\n'),
        offset: 0,
        continuation: ContinuationCode::None,
    }
}

/// Iterator returned by [`scan_text`].
#[derive(Debug)]
pub struct ScanText<'s, 'a> {
    scanner: &'s LineScanner,
    lines: std::str::Split<'a, char>,
    offset: usize,
    continuation: ContinuationCode,
}

impl<'a> Iterator for ScanText<'_, 'a> {
    type Item = ScannedLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = self.lines.next()?;
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        let scanned = self.scanner.scan_line(line, self.continuation, self.offset);
        self.offset += raw.len() + 1;
        self.continuation = scanned.continuation();
        Some(scanned)
    }
}

/// Per-line cache of the continuation code each line ends with.
///
/// `None` marks a line that has not been scanned yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineStates {
    states: Vec<Option<ContinuationCode>>,
}

impl LineStates {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the cache for every line of `lines`.
    pub fn scan_all(scanner: &LineScanner, lines: &[&str]) -> Self {
        let mut states = Self::new();
        let mut continuation = ContinuationCode::None;
        for line in lines {
            continuation = scanner.scan_line(line, continuation, 0).continuation();
            states.states.push(Some(continuation));
        }
        states
    }

    /// Number of lines in the cache.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns true if the cache holds no lines.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// The code `line` ended with when it was last scanned.
    pub fn outgoing(&self, line: usize) -> Option<ContinuationCode> {
        self.states.get(line).copied().flatten()
    }

    /// The code `line` starts in: the previous line's outgoing code.
    pub fn incoming(&self, line: usize) -> ContinuationCode {
        match line.checked_sub(1) {
            Some(previous) => self.outgoing(previous).unwrap_or_default(),
            None => ContinuationCode::None,
        }
    }

    /// Makes room for `count` new lines before `at`.
    pub fn insert_lines(&mut self, at: usize, count: usize) {
        let at = at.min(self.states.len());
        self.states.splice(at..at, std::iter::repeat_n(None, count));
    }

    /// Forgets the lines in `range`.
    pub fn remove_lines(&mut self, range: Range<usize>) {
        let end = range.end.min(self.states.len());
        let start = range.start.min(end);
        self.states.drain(start..end);
    }

    /// Re-scans from `first` after an edit, stopping at the first line
    /// whose outgoing code matches the cached one.
    ///
    /// `lines` is the whole document after the edit. Returns the lines that
    /// were re-scanned, which are the lines a host has to repaint.
    pub fn rescan_from(
        &mut self,
        scanner: &LineScanner,
        first: usize,
        lines: &[&str],
    ) -> Range<usize> {
        self.states.resize(lines.len(), None);
        if first >= lines.len() {
            return first..first;
        }

        let mut incoming = self.incoming(first);
        let mut line = first;
        while line < lines.len() {
            let outgoing = scanner.scan_line(lines[line], incoming, 0).continuation();
            let cached = self.states[line].replace(outgoing);
            line += 1;
            if cached == Some(outgoing) {
                break;
            }
            incoming = outgoing;
        }

        debug!(first, end = line, "rescanned lines");
        first..line
    }
}
