// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! spacey-hl - terminal syntax highlighter for JavaScript
//!
//! ## Features
//!
//! - Highlights files with the incremental line scanner
//! - Dumps token streams with document offsets and continuation codes
//! - Interactive REPL with live highlighting and history

mod config;
mod error;
mod render;
mod repl;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use spacey_linescan::{LineScanner, set_language_version};
use tracing::debug;

use crate::config::HighlightConfig;
use crate::error::{HighlightError, Result};
use crate::render::{Painter, dump_text};

#[derive(Parser)]
#[command(
    name = "spacey-hl",
    about = "Syntax highlighter and token explorer for JavaScript",
    version,
    author = "Pegasus Heavy Industries"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Language version gating `each` (1.6) and `let` (1.7)
    #[arg(long, global = true, value_name = "VERSION")]
    language_version: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print files with syntax highlighting
    Highlight {
        /// JavaScript files to print
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Print the token stream of a file
    Tokens {
        /// JavaScript file to scan
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("spacey_hl=debug,spacey_linescan=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("spacey_hl=warn,spacey_linescan=warn")
            .init();
    }

    let mut config = HighlightConfig::load(cli.config.as_deref())?;
    if let Some(version) = cli.language_version {
        config.language_version = version;
    }

    let scanner = LineScanner::new(config.scanner_config()?);
    set_language_version(&config.language_version)?;
    debug!(?config, "starting");

    let painter = Painter::new(config.underline_hyperlinks);

    match cli.command {
        Some(Command::Highlight { files }) => {
            for file in &files {
                let source = read_source(file).await?;
                if files.len() > 1 {
                    println!("{}", file.display().bright_cyan().bold());
                }
                let body = source.strip_suffix('\n').unwrap_or(&source);
                println!("{}", painter.paint_text(&scanner, body));
            }
        }
        Some(Command::Tokens { file }) => {
            let source = read_source(&file).await?;
            print!("{}", dump_text(&scanner, &source));
        }
        None => {
            let mut repl = repl::Repl::new(scanner, painter)?;
            repl.run()?;
        }
    }

    Ok(())
}

/// Read a source file asynchronously.
async fn read_source(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| HighlightError::ReadSource {
            path: path.to_path_buf(),
            source,
        })
}
