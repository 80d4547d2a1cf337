//! Callbook configuration.
//!
//! Loaded from `~/.callbook/config.toml`. Everything in it is optional;
//! a missing file means defaults.

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

/// Callbook configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Where call data lives. Defaults to `~/.callbook/`.
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Load config from `~/.callbook/config.toml`.
    /// A missing file yields defaults; an unreadable or invalid one errors.
    pub fn load() -> Result<Self, String> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };

        let contents = match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(format!("failed to read {}: {e}", path.display())),
        };

        toml::from_str(&contents).map_err(|e| format!("invalid config at {}: {e}", path.display()))
    }

    /// The config file path: `~/.callbook/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".callbook").join("config.toml"))
    }
}
