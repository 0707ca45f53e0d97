//! Configuration for the bidsite CLI.
//!
//! Provides the [`BidsiteConfig`] struct that loads from TOML files,
//! environment variables, and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `BIDSITE_CONFIG` environment variable
//! 3. XDG default: `~/.config/bidsite/config.toml`
//! 4. Built-in defaults
//!
//! Environment variables such as `BIDSITE_CONTENT_DIR` override file values.

use std::path::PathBuf;

use bidsite_core::{Error, Result};
use confyg::{Confygery, env};
use serde::{Deserialize, Serialize};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "BIDSITE_CONFIG";

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration for the bidsite CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BidsiteConfig {
    /// Content directory and index settings.
    pub content: ContentConfig,
}

/// Content directory and index settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory holding the Markdown articles.
    pub dir: String,
    /// Path of the JSON index file.
    pub index_file: String,
    /// File names left out of the index.
    pub exclude: Vec<String>,
    /// Excerpt length in characters.
    pub excerpt_length: usize,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: "markdown".to_string(),
            index_file: "markdown/index.json".to_string(),
            exclude: vec!["README.md".to_string()],
            excerpt_length: 200,
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl BidsiteConfig {
    /// Load configuration from file, environment, and defaults.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                log::debug!("Loading config from {}", path.display());
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            } else if config_path.is_some() {
                return Err(Error::config(format!(
                    "Config file does not exist: {}",
                    path.display()
                )));
            }
        }

        let mut env_opts = env::Options::with_top_level("BIDSITE");
        env_opts.add_section("content");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        Ok(config)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }

        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("bidsite").join("config.toml"))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Content directory as a path.
    pub fn content_dir(&self) -> PathBuf {
        PathBuf::from(&self.content.dir)
    }

    /// Index file as a path.
    pub fn index_path(&self) -> PathBuf {
        PathBuf::from(&self.content.index_file)
    }
}
