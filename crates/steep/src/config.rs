// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run configuration, loadable from a `steep.toml`.
//!
//! Every field has a default, so an empty (or missing) file is a valid
//! configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::Context as _;
use serde::Deserialize;
use termcolor::ColorChoice;

/// Centralized default values for configuration.
pub mod defaults {
    /// Default async-completion timeout in milliseconds.
    pub const TIMEOUT_MS: u64 = 5000;

    /// Default color mode for the text reporter.
    pub const COLOR: &str = "auto";
}

/// Configuration for a suite run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// How long the runner waits for an async case's completion signal
    /// before failing it.
    pub timeout_ms: u64,

    /// Stop executing further cases after the first failure.
    pub fail_fast: bool,

    /// Color mode for the text reporter: "auto" | "always" | "never".
    pub color: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            timeout_ms: defaults::TIMEOUT_MS,
            fail_fast: false,
            color: defaults::COLOR.to_string(),
        }
    }
}

impl RunConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: RunConfig =
            toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Map the configured color mode onto termcolor's choice. Unknown
    /// values fall back to auto.
    pub fn color_choice(&self) -> ColorChoice {
        match self.color.as_str() {
            "always" => ColorChoice::Always,
            "never" => ColorChoice::Never,
            _ => ColorChoice::Auto,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
