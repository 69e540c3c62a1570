//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Export folder used when the config file names none.
pub const DEFAULT_EXPORT_DIR: &str = "latex-exports";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default vault root
    pub dir: Option<PathBuf>,

    /// Where exports are written, relative to the vault root unless absolute
    pub export_dir: Option<PathBuf>,

    /// Preamble used when neither the style nor the folder provides one
    pub default_preamble: Option<String>,

    /// Explicit pandoc binary
    pub pandoc_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/notetex/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("notetex")
            .join("config.toml")
    }

    /// Resolve the vault root, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--dir` argument
    /// 2. Config file `dir` setting
    /// 3. Current working directory
    pub fn vault_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        cli_dir
            .cloned()
            .or_else(|| self.dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Resolve the export folder against the vault root.
    pub fn export_dir(&self, vault_dir: &Path) -> PathBuf {
        let dir = self
            .export_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_DIR));
        if dir.is_absolute() {
            dir
        } else {
            vault_dir.join(dir)
        }
    }

    /// The pandoc path to try first: CLI flag, then config.
    pub fn pandoc_path(&self, cli_pandoc: Option<&PathBuf>) -> Option<PathBuf> {
        cli_pandoc.cloned().or_else(|| self.pandoc_path.clone())
    }

    pub fn default_preamble(&self) -> Option<&str> {
        self.default_preamble
            .as_deref()
            .filter(|path| !path.trim().is_empty())
    }
}
