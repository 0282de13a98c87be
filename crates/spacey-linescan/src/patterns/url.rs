// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! URL detection inside comments.
//!
//! ```text
//! http://example.com/a?b=c   https://...   ftp://...   file:///tmp/x
//! www.example.com
//! ```
//!
//! After the prefix, the URL takes the longest run of URL characters that
//! ends on a letter, digit, `/` or `$`, so trailing punctuation such as the
//! full stop in `see http://x.org.` stays comment text.

const PREFIXES: &[&str] = &["http://", "https://", "ftp://", "file://", "www."];

fn is_url_char(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'_' | b'-'
                | b'.'
                | b'~'
                | b':'
                | b'/'
                | b'?'
                | b'#'
                | b'['
                | b']'
                | b'@'
                | b'!'
                | b'$'
                | b'&'
                | b'\''
                | b'('
                | b')'
                | b'*'
                | b'+'
                | b','
                | b';'
                | b'='
                | b'%'
        )
}

fn is_url_end_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'/' || b == b'$'
}

/// URL at the start of `rest`, or `0`.
///
/// With `stop_at_comment_end`, the URL never swallows a `*/`.
pub fn url(rest: &str, stop_at_comment_end: bool) -> usize {
    let Some(prefix) = PREFIXES.iter().find(|p| rest.starts_with(**p)) else {
        return 0;
    };

    let bytes = rest.as_bytes();
    let mut end = prefix.len();
    let mut i = end;
    while i < bytes.len() && is_url_char(bytes[i]) {
        if stop_at_comment_end && bytes[i] == b'*' && bytes.get(i + 1) == Some(&b'/') {
            break;
        }
        if is_url_end_char(bytes[i]) {
            end = i + 1;
        }
        i += 1;
    }
    end
}
