// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Error types for the highlighter CLI

use std::path::PathBuf;

use rustyline::error::ReadlineError;
use spacey_linescan::ScanError;
use thiserror::Error;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum HighlightError {
    /// Scanner configuration error
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Source file could not be read
    #[error("Cannot read '{}': {source}", path.display())]
    ReadSource {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// File system error
    #[error("File system error: {0}")]
    Fs(#[from] std::io::Error),

    /// Config file is not valid TOML or has the wrong shape
    #[error("Invalid config file '{}': {source}", path.display())]
    Config {
        /// Config file that failed
        path: PathBuf,
        /// Parse error
        source: toml::de::Error,
    },

    /// Explicitly requested config file does not exist
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// Line editor failure
    #[error("REPL error: {0}")]
    Readline(#[from] ReadlineError),
}
