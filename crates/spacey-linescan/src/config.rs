// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Scanner configuration and the process-wide language version.
//!
//! A [`LineScanner`](crate::LineScanner) takes its [`ScannerConfig`]
//! explicitly. The process-wide version exists for hosts that configure the
//! language once at startup and then call [`scan_line`](crate::scan_line);
//! it is read once per call, and concurrent writers simply race (last write
//! wins).

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use parking_lot::RwLock;
use tracing::debug;

use crate::error::{Result, ScanError};

/// A JavaScript language version such as `"1.7"`.
///
/// Versions are compared as plain strings, so `"1.10"` sorts before `"1.7"`.
/// Only the version-gated keywords look at it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageVersion(String);

impl LanguageVersion {
    /// The version assumed when nothing is configured.
    pub const DEFAULT: &'static str = "1.7";

    /// Parses a version string made of ASCII digits and dots.
    pub fn parse(version: &str) -> Result<Self> {
        let version = version.trim();
        let starts_with_digit = version.bytes().next().is_some_and(|b| b.is_ascii_digit());
        let well_formed = version.bytes().all(|b| b.is_ascii_digit() || b == b'.');

        if starts_with_digit && well_formed {
            Ok(Self(version.to_string()))
        } else {
            Err(ScanError::InvalidVersion(version.to_string()))
        }
    }

    /// Returns the version text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this version is at least `required`.
    pub fn supports(&self, required: &str) -> bool {
        self.0.as_str() >= required
    }
}

impl Default for LanguageVersion {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl FromStr for LanguageVersion {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for LanguageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Configuration for a [`LineScanner`](crate::LineScanner).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Version used to gate `each` and `let`
    pub language_version: LanguageVersion,
}

impl ScannerConfig {
    /// Creates a configuration for the given language version.
    pub fn new(language_version: LanguageVersion) -> Self {
        Self { language_version }
    }

    /// Snapshots the process-wide configuration.
    pub fn current() -> Self {
        Self::new(language_version())
    }

    /// Replaces the language version.
    pub fn with_language_version(mut self, language_version: LanguageVersion) -> Self {
        self.language_version = language_version;
        self
    }
}

static LANGUAGE_VERSION: LazyLock<RwLock<LanguageVersion>> =
    LazyLock::new(|| RwLock::new(LanguageVersion::default()));

/// Sets the process-wide language version.
///
/// The previous version is kept if `version` does not parse.
pub fn set_language_version(version: &str) -> Result<()> {
    let version = LanguageVersion::parse(version)?;
    debug!(version = %version, "language version changed");
    *LANGUAGE_VERSION.write() = version;
    Ok(())
}

/// Returns the process-wide language version.
pub fn language_version() -> LanguageVersion {
    LANGUAGE_VERSION.read().clone()
}
