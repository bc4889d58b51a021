//! Configuration: defaults, TOML file, environment, CLI precedence.
//!
//! Precedence, lowest to highest: hardcoded defaults → config file
//! (`~/.config/jxv/config.toml` or `--config`) → `JXV_*` environment
//! variables → CLI arguments.

pub mod keybindings;

pub use keybindings::KeyBindings;

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Default maximum XML element nesting accepted by the parser.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Default width of the outline pane, as a percentage of the terminal.
pub const DEFAULT_TREE_PANE_PERCENT: u16 = 40;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields optional; unset fields fall back to defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Maximum XML nesting depth accepted by the parser.
    #[serde(default)]
    pub max_depth: Option<usize>,

    /// Outline pane width as a percentage (10–90).
    #[serde(default)]
    pub tree_pane_percent: Option<u16>,

    /// Path to the tracing log file.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Fully resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Maximum XML nesting depth accepted by the parser.
    pub max_depth: usize,
    /// Outline pane width as a percentage of the terminal width.
    pub tree_pane_percent: u16,
    /// Where tracing output goes.
    pub log_file_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            tree_pane_percent: DEFAULT_TREE_PANE_PERCENT,
            log_file_path: default_log_path(),
        }
    }
}

/// Default log location: `~/.local/share/jxv/jxv.log` (platform dirs), with
/// a temp-dir fallback when no home directory is available.
fn default_log_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("jxv")
        .join("jxv.log")
}

/// Locate and parse the config file.
///
/// An explicit `--config` path must exist and parse; a missing default path
/// is simply no config.
///
/// # Errors
///
/// [`ConfigError`] when the file cannot be read or is not valid TOML.
pub fn load_config_file(explicit: Option<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = match explicit {
        Some(path) => path,
        None => {
            let Some(base) = dirs::config_dir() else {
                return Ok(None);
            };
            let path = base.join("jxv").join("config.toml");
            if !path.exists() {
                return Ok(None);
            }
            path
        }
    };

    let text = std::fs::read_to_string(&path).map_err(|err| ConfigError::ReadError {
        path: path.clone(),
        reason: err.to_string(),
    })?;
    let parsed: ConfigFile = toml::from_str(&text).map_err(|err| ConfigError::ParseError {
        path,
        reason: err.to_string(),
    })?;
    Ok(Some(parsed))
}

/// Merge a config file over the defaults.
pub fn merge_config(file: Option<ConfigFile>) -> AppConfig {
    let mut config = AppConfig::default();
    let Some(file) = file else {
        return config;
    };
    if let Some(depth) = file.max_depth {
        config.max_depth = depth;
    }
    if let Some(percent) = file.tree_pane_percent {
        config.tree_pane_percent = percent;
    }
    if let Some(path) = file.log_file_path {
        config.log_file_path = path;
    }
    config
}

/// Apply `JXV_*` environment overrides.
///
/// Recognized: `JXV_MAX_DEPTH`, `JXV_LOG_FILE`. Unparseable values are
/// ignored rather than fatal.
pub fn apply_env_overrides(mut config: AppConfig) -> AppConfig {
    if let Ok(raw) = std::env::var("JXV_MAX_DEPTH") {
        if let Ok(depth) = raw.parse::<usize>() {
            config.max_depth = depth;
        }
    }
    if let Ok(raw) = std::env::var("JXV_LOG_FILE") {
        if !raw.is_empty() {
            config.log_file_path = PathBuf::from(raw);
        }
    }
    config
}

/// Apply CLI argument overrides (highest precedence).
pub fn apply_cli_overrides(
    mut config: AppConfig,
    max_depth: Option<usize>,
    tree_pane_percent: Option<u16>,
) -> AppConfig {
    if let Some(depth) = max_depth {
        config.max_depth = depth;
    }
    if let Some(percent) = tree_pane_percent {
        config.tree_pane_percent = percent.clamp(10, 90);
    }
    config
}
