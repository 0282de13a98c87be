// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Interactive token explorer.
//!
//! Input is highlighted live by the line scanner while it is typed. An
//! entered snippet is answered with its token dump.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Config, Editor, Helper};
use spacey_linescan::{
    LanguageVersion, LineScanner, ScannerConfig, TokenKind, scan_text, set_language_version,
    tables,
};
use tracing::debug;

use crate::error::Result;
use crate::render::{Painter, dump_text};

/// REPL configuration constants
const HISTORY_FILE: &str = ".spacey_hl_history";
const MAX_HISTORY_SIZE: usize = 1000;

/// REPL commands that can be executed with a dot prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Exit,
    Clear,
    Version,
    Lang,
    Load,
}

impl ReplCommand {
    /// Parse a REPL command from input string
    pub fn parse(input: &str) -> Option<(Self, Option<&str>)> {
        let input = input.trim();
        let rest = input.strip_prefix('.')?;

        let mut parts = rest.splitn(2, char::is_whitespace);
        let cmd = parts.next()?.to_lowercase();
        let arg = parts.next().map(str::trim).filter(|arg| !arg.is_empty());

        match cmd.as_str() {
            "help" | "h" | "?" => Some((ReplCommand::Help, arg)),
            "exit" | "quit" | "q" => Some((ReplCommand::Exit, arg)),
            "clear" | "cls" => Some((ReplCommand::Clear, arg)),
            "version" | "v" => Some((ReplCommand::Version, arg)),
            "lang" => Some((ReplCommand::Lang, arg)),
            "load" | "l" => Some((ReplCommand::Load, arg)),
            _ => None,
        }
    }

    /// Get all available commands for help/completion
    pub fn all_commands() -> &'static [(&'static str, &'static str)] {
        &[
            (".help", "Show this help message"),
            (".exit", "Exit the REPL"),
            (".clear", "Clear the screen"),
            (".version", "Show version information"),
            (".lang [version]", "Show or set the language version"),
            (".load <file>", "Highlight a JavaScript file"),
        ]
    }
}

/// Helper for rustyline: scanner-driven highlighting, completion and
/// multi-line detection
struct HighlightHelper {
    scanner: LineScanner,
    painter: Painter,
    /// Known words and REPL commands for completion
    words: Vec<String>,
}

impl HighlightHelper {
    fn new(scanner: LineScanner, painter: Painter) -> Self {
        let mut words: Vec<String> = tables::known_words().map(String::from).collect();
        words.extend(
            ReplCommand::all_commands()
                .iter()
                .filter_map(|(cmd, _)| cmd.split_whitespace().next())
                .map(String::from),
        );
        words.sort();
        words.dedup();

        Self {
            scanner,
            painter,
            words,
        }
    }

    /// Find the start of the word ending at `pos`
    fn word_start(line: &str, pos: usize) -> usize {
        line[..pos]
            .rfind(|c: char| !c.is_alphanumeric() && c != '_' && c != '$' && c != '.')
            .map(|i| i + 1)
            .unwrap_or(0)
    }
}

impl Completer for HighlightHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let start = Self::word_start(line, pos);
        let word = &line[start..pos];
        if word.is_empty() {
            return Ok((pos, vec![]));
        }

        let matches: Vec<Pair> = self
            .words
            .iter()
            .filter(|candidate| candidate.starts_with(word))
            .map(|candidate| Pair {
                display: candidate.clone(),
                replacement: candidate[word.len()..].to_string(),
            })
            .collect();

        Ok((pos, matches))
    }
}

impl Hinter for HighlightHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<Self::Hint> {
        if pos < line.len() {
            return None;
        }

        let word = &line[Self::word_start(line, pos)..];
        if word.len() < 2 {
            return None;
        }

        self.words
            .iter()
            .find(|candidate| candidate.starts_with(word) && candidate.len() > word.len())
            .map(|candidate| candidate[word.len()..].to_string().dimmed().to_string())
    }
}

impl Highlighter for HighlightHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if ReplCommand::parse(line).is_some() {
            return Cow::Owned(line.cyan().to_string());
        }
        Cow::Owned(self.painter.paint_text(&self.scanner, line))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Validator for HighlightHelper {
    fn validate(&self, ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        if needs_more_input(&self.scanner, ctx.input()) {
            Ok(ValidationResult::Incomplete)
        } else {
            Ok(ValidationResult::Valid(None))
        }
    }
}

impl Helper for HighlightHelper {}

/// Returns true if `input` stops inside a comment or continued literal,
/// leaves brackets open, or ends on a token that expects an operand.
fn needs_more_input(scanner: &LineScanner, input: &str) -> bool {
    if ReplCommand::parse(input).is_some() {
        return false;
    }

    let mut depth = 0usize;
    let mut last_line = None;
    for line in scan_text(scanner, input) {
        for token in line.iter().filter(|t| t.kind == TokenKind::Separator) {
            match token.text {
                "(" | "[" | "{" => depth += 1,
                // Stray closers are left for the reader to spot
                ")" | "]" | "}" => depth = depth.saturating_sub(1),
                _ => {}
            }
        }
        last_line = Some(line);
    }

    let Some(last_line) = last_line else {
        return false;
    };
    if !last_line.continuation().is_none() || depth > 0 {
        return true;
    }

    last_line.last_significant().is_some_and(|token| {
        token.kind == TokenKind::Operator
            || (token.kind == TokenKind::Separator && token.text == ",")
    })
}

/// The interactive token explorer
pub struct Repl {
    editor: Editor<HighlightHelper, DefaultHistory>,
    history_path: PathBuf,
    scanner: LineScanner,
    painter: Painter,
}

impl Repl {
    /// Create a new REPL instance
    pub fn new(scanner: LineScanner, painter: Painter) -> Result<Self> {
        let config = Config::builder()
            .history_ignore_dups(true)?
            .history_ignore_space(true)
            .max_history_size(MAX_HISTORY_SIZE)?
            .auto_add_history(true)
            .build();

        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(HighlightHelper::new(scanner.clone(), painter)));

        // Determine history file path
        let history_path = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("spacey")
            .join(HISTORY_FILE);

        if let Some(parent) = history_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(err) = editor.load_history(&history_path) {
            debug!(path = %history_path.display(), %err, "no history loaded");
        }

        Ok(Self {
            editor,
            history_path,
            scanner,
            painter,
        })
    }

    /// Run the REPL main loop
    pub fn run(&mut self) -> Result<()> {
        self.print_banner();

        loop {
            let prompt = format!("{} ", "spacey-hl>".bright_green().bold());

            match self.editor.readline(&prompt) {
                Ok(input) => {
                    if input.trim().is_empty() {
                        continue;
                    }

                    if let Some((cmd, arg)) = ReplCommand::parse(&input) {
                        match self.execute_command(cmd, arg) {
                            CommandResult::Continue => continue,
                            CommandResult::Exit => break,
                        }
                    }

                    print!("{}", dump_text(&self.scanner, &input));
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}", "^C".dimmed());
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("{}", "^D".dimmed());
                    break;
                }
                Err(err) => {
                    let _ = self.editor.save_history(&self.history_path);
                    return Err(err.into());
                }
            }
        }

        if let Err(err) = self.editor.save_history(&self.history_path) {
            debug!(path = %self.history_path.display(), %err, "history not saved");
        }

        println!();
        println!("{}", "Goodbye!".bright_cyan());
        Ok(())
    }

    fn print_banner(&self) {
        let version = env!("CARGO_PKG_VERSION");
        println!();
        println!(
            "  {} {} {}",
            "spacey-hl".bright_cyan().bold(),
            "v".dimmed(),
            version.bright_yellow()
        );
        println!(
            "  {} {}",
            "language version".dimmed(),
            self.scanner.config().language_version.yellow()
        );
        println!(
            "  {} {} {}",
            "Type".dimmed(),
            ".help".cyan(),
            "for available commands".dimmed()
        );
        println!();
    }

    fn execute_command(&mut self, cmd: ReplCommand, arg: Option<&str>) -> CommandResult {
        match cmd {
            ReplCommand::Help => self.print_help(),
            ReplCommand::Exit => return CommandResult::Exit,
            ReplCommand::Clear => print!("\x1B[2J\x1B[H"),
            ReplCommand::Version => self.print_version(),
            ReplCommand::Lang => match arg {
                Some(version) => self.set_language(version),
                None => println!("{}", self.scanner.config().language_version.yellow()),
            },
            ReplCommand::Load => match arg {
                Some(path) => self.load_file(Path::new(path)),
                None => eprintln!(
                    "{}: {} {}",
                    "Error".red().bold(),
                    ".load".cyan(),
                    "requires a file path".dimmed()
                ),
            },
        }
        CommandResult::Continue
    }

    fn set_language(&mut self, version: &str) {
        let parsed = match LanguageVersion::parse(version) {
            Ok(parsed) => parsed,
            Err(err) => {
                eprintln!("{}: {}", "Error".red().bold(), err);
                return;
            }
        };

        if let Err(err) = set_language_version(parsed.as_str()) {
            eprintln!("{}: {}", "Error".red().bold(), err);
            return;
        }
        self.scanner = LineScanner::new(ScannerConfig::new(parsed.clone()));
        if let Some(helper) = self.editor.helper_mut() {
            helper.scanner = self.scanner.clone();
        }
        println!("{} {}", "language version".dimmed(), parsed.yellow());
    }

    fn print_help(&self) {
        println!();
        println!("{}", "REPL Commands:".white().bold());
        println!();

        for (cmd, desc) in ReplCommand::all_commands() {
            println!("  {:18} {}", cmd.cyan(), desc.dimmed());
        }

        println!();
        println!("{}", "Keyboard Shortcuts:".white().bold());
        println!();
        println!("  {:18} {}", "Ctrl+C".yellow(), "Cancel current input".dimmed());
        println!("  {:18} {}", "Ctrl+D".yellow(), "Exit REPL".dimmed());
        println!("  {:18} {}", "Tab".yellow(), "Autocomplete".dimmed());
        println!();
    }

    fn print_version(&self) {
        println!();
        println!("{}: {}", "spacey-hl".bright_cyan().bold(), env!("CARGO_PKG_VERSION").yellow());
        println!(
            "{}: {}",
            "language".dimmed(),
            self.scanner.config().language_version
        );
        println!();
    }

    fn load_file(&self, path: &Path) {
        match std::fs::read_to_string(path) {
            Ok(source) => println!("{}", self.painter.paint_text(&self.scanner, &source)),
            Err(err) => eprintln!(
                "{}: cannot read '{}': {}",
                "Error".red().bold(),
                path.display().cyan(),
                err
            ),
        }
    }
}

/// Result of executing a REPL command
enum CommandResult {
    Continue,
    Exit,
}
