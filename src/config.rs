// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Configuration management for spacey-hl.
//!
//! Settings come from `highlight.toml` in the user config directory (or the
//! file named by `--config`); command-line flags are applied on top.
//!
//! ```toml
//! language_version = "1.6"
//! underline_hyperlinks = false
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use spacey_linescan::{LanguageVersion, ScannerConfig};
use tracing::debug;

use crate::error::{HighlightError, Result};

/// Configuration for the highlighter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Language version gating `each` and `let`
    pub language_version: String,

    /// Whether URLs in comments are underlined
    pub underline_hyperlinks: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            language_version: LanguageVersion::DEFAULT.to_string(),
            underline_hyperlinks: true,
        }
    }
}

impl HighlightConfig {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// used if present and built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if !path.exists() => Err(HighlightError::ConfigNotFound(path.to_path_buf())),
            Some(path) => Self::load_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::load_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content).map_err(|source| HighlightError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Build the scanner configuration, validating the language version.
    pub fn scanner_config(&self) -> Result<ScannerConfig> {
        let version = LanguageVersion::parse(&self.language_version)?;
        Ok(ScannerConfig::new(version))
    }
}

/// Get the default config path.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("spacey").join("highlight.toml"))
}
