//! Line scanner integration tests
//!
//! Scans realistic snippets the way an editor does: line by line, feeding
//! each line's continuation code into the next.

use spacey_linescan::{
    ContinuationCode, LineScanner, ScannedLine, TokenKind, scan_text, should_indent_next_line_after,
};

/// Scan a multi-line snippet and collect each line's kinds and texts
fn scan_lines(source: &str) -> Vec<(Vec<(TokenKind, String)>, ContinuationCode)> {
    let scanner = LineScanner::default();
    scan_text(&scanner, source)
        .map(|line| {
            let tokens = line.iter().map(|t| (t.kind, t.text.to_string())).collect();
            (tokens, line.continuation())
        })
        .collect()
}

fn only_line(source: &str) -> ScannedLine<'_> {
    LineScanner::default().scan_line(source, ContinuationCode::None, 0)
}

#[test]
fn test_block_comment_round_trip() {
    let lines = scan_lines("/* line1\nline2 */");
    assert_eq!(lines[0].0, vec![(TokenKind::CommentMultiline, "/* line1".to_string())]);
    assert_eq!(lines[0].1, ContinuationCode::InBlockComment);
    assert_eq!(lines[1].0[0], (TokenKind::CommentMultiline, "line2 */".to_string()));
    assert_eq!(lines[1].1, ContinuationCode::None);
}

#[test]
fn test_comment_spanning_many_lines() {
    let lines = scan_lines("a = 1; /**\n * Docs for b.\n *\n */\nb();");
    let codes: Vec<_> = lines.iter().map(|(_, code)| *code).collect();
    assert_eq!(
        codes,
        vec![
            ContinuationCode::InBlockComment,
            ContinuationCode::InBlockComment,
            ContinuationCode::InBlockComment,
            ContinuationCode::None,
            ContinuationCode::None,
        ]
    );
    assert_eq!(lines[4].0[0], (TokenKind::Identifier, "b".to_string()));
}

#[test]
fn test_string_continued_with_backslash() {
    let lines = scan_lines("var s = \"one \\\ntwo\";");
    assert_eq!(
        lines[0].1,
        ContinuationCode::InDoubleQuoteString { valid: true }
    );
    assert_eq!(
        lines[0].0.last(),
        Some(&(TokenKind::LiteralStringDoubleQuote, "\"one \\".to_string()))
    );
    assert_eq!(lines[1].0[0], (TokenKind::LiteralStringDoubleQuote, "two\"".to_string()));
    assert_eq!(lines[1].0[1], (TokenKind::Separator, ";".to_string()));
    assert_eq!(lines[1].1, ContinuationCode::None);
}

#[test]
fn test_invalid_escape_carries_to_next_line() {
    let lines = scan_lines("'\\u1\\\nx'");
    assert_eq!(lines[0].1, ContinuationCode::InCharLiteral { valid: false });
    assert_eq!(lines[1].0[0], (TokenKind::ErrorChar, "x'".to_string()));
}

#[test]
fn test_unicode_escapes_in_strings() {
    let line = only_line(r#""\u12""#);
    assert_eq!(line.tokens()[0].kind, TokenKind::ErrorStringDouble);

    let line = only_line(r#""ሴ""#);
    assert_eq!(line.tokens()[0].kind, TokenKind::LiteralStringDoubleQuote);
}

#[test]
fn test_unterminated_string() {
    let line = only_line("\"abc");
    assert_eq!(line.len(), 1);
    assert_eq!(line.tokens()[0].kind, TokenKind::ErrorStringDouble);
    assert_eq!(line.tokens()[0].text, "\"abc");
    assert_eq!(line.continuation(), ContinuationCode::None);
}

#[test]
fn test_regex_and_division() {
    let line = only_line("x = /abc/;");
    let regex: Vec<_> = line
        .iter()
        .filter(|t| t.kind == TokenKind::Regex)
        .map(|t| t.text)
        .collect();
    assert_eq!(regex, vec!["/abc/"]);

    let line = only_line("a/b/c");
    let slashes: Vec<_> = line.iter().filter(|t| t.text == "/").map(|t| t.kind).collect();
    assert_eq!(slashes, vec![TokenKind::Operator, TokenKind::Operator]);
}

#[test]
fn test_regex_in_call_arguments() {
    let line = only_line("s.replace(/\\s+/g, ' ')");
    assert!(
        line.iter()
            .any(|t| t.kind == TokenKind::Regex && t.text == "/\\s+/g")
    );
}

#[test]
fn test_regex_after_return() {
    let line = only_line("return /x/.test(s);");
    assert_eq!(line.tokens()[2].kind, TokenKind::Regex);
    assert_eq!(line.tokens()[2].text, "/x/");
}

#[test]
fn test_numbers() {
    let kinds = |src: &str| only_line(src).tokens()[0].kind;
    assert_eq!(kinds("0xFF"), TokenKind::LiteralNumberHex);
    assert_eq!(kinds("3.14e10"), TokenKind::LiteralNumberFloat);
    assert_eq!(kinds("123xyz"), TokenKind::ErrorNumberFormat);
    assert_eq!(kinds("10L"), TokenKind::LiteralNumberDecimalInt);
    assert_eq!(kinds("1.5f"), TokenKind::LiteralNumberFloat);
}

#[test]
fn test_hyperlinks_in_comments() {
    let line = only_line("// docs: https://example.com/guide.");
    let links: Vec<_> = line.iter().filter(|t| t.hyperlink).map(|t| t.text).collect();
    assert_eq!(links, vec!["https://example.com/guide"]);
    assert!(line.iter().all(|t| t.kind == TokenKind::CommentEol || t.kind == TokenKind::Null));
}

#[test]
fn test_hyperlink_in_continued_block_comment() {
    let lines = scan_lines("/*\n see www.example.org */ x");
    let (tokens, _) = &lines[1];
    assert_eq!(tokens[0], (TokenKind::CommentMultiline, " see ".to_string()));
    assert_eq!(tokens[1], (TokenKind::CommentMultiline, "www.example.org".to_string()));
    assert_eq!(tokens[2], (TokenKind::CommentMultiline, " */".to_string()));
}

#[test]
fn test_function_declaration() {
    let line = only_line("function add(a, b) {");
    let kinds: Vec<_> = line.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::ReservedWord,
            TokenKind::Whitespace,
            TokenKind::Identifier,
            TokenKind::Separator,
            TokenKind::Identifier,
            TokenKind::Separator,
            TokenKind::Whitespace,
            TokenKind::Identifier,
            TokenKind::Separator,
            TokenKind::Whitespace,
            TokenKind::Separator,
            TokenKind::Null,
        ]
    );
    assert!(
        line.last_significant()
            .is_some_and(should_indent_next_line_after)
    );
}

#[test]
fn test_spans_are_contiguous() {
    let source = "if (a >= 0x1F && b !== 'c') { /* ok */ return \"y\"; } // end";
    let line = LineScanner::default().scan_line(source, ContinuationCode::None, 40);
    let mut expected = 40;
    for token in &line {
        assert_eq!(token.span.start, expected, "{token:?}");
        assert_eq!(&source[token.span.start - 40..token.span.end - 40], token.text);
        expected = token.span.end;
    }
    assert_eq!(expected, 40 + source.len());
}

#[test]
fn test_long_digit_run_is_one_token() {
    let digits = "1".repeat(100_000);
    let line = only_line(&digits);
    assert_eq!(line.len(), 2);
    assert_eq!(line.tokens()[0].kind, TokenKind::LiteralNumberDecimalInt);
    assert_eq!(line.tokens()[0].text.len(), 100_000);
    assert_eq!(line.tokens()[1].kind, TokenKind::Null);
}

#[test]
fn test_long_expression_line() {
    let source = "1+".repeat(50_000);
    let line = only_line(&source);
    assert_eq!(line.len(), 100_001);
    for pair in line.tokens()[..100_000].chunks(2) {
        assert_eq!((pair[0].kind, pair[0].text), (TokenKind::LiteralNumberDecimalInt, "1"));
        assert_eq!((pair[1].kind, pair[1].text), (TokenKind::Operator, "+"));
    }
    assert_eq!(line.continuation(), ContinuationCode::None);
}
