//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::MatchCase;

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Base directory for relative paths
    pub base_dir: Option<PathBuf>,

    /// Match search patterns case-sensitively
    pub case_sensitive: Option<bool>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, or defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config file at {}", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/filepaths/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("filepaths")
            .join("config.toml")
    }

    /// Resolve the base directory, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--base` argument
    /// 2. Config file `base_dir` setting
    /// 3. None (caller uses the working directory)
    pub fn base_dir(&self, cli_base: Option<&PathBuf>) -> Option<PathBuf> {
        cli_base.cloned().or_else(|| self.base_dir.clone())
    }

    /// Resolve the match case, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--case-sensitive` / `--ignore-case`
    /// 2. Config file `case_sensitive` setting
    /// 3. Case-insensitive
    pub fn match_case(&self, cli_case_sensitive: Option<bool>) -> MatchCase {
        MatchCase::from_sensitive(
            cli_case_sensitive
                .or(self.case_sensitive)
                .unwrap_or(false),
        )
    }
}
