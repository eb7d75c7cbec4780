//! User configuration loaded from `config.toml`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(
        "invalid thousands separator {:?} in {}: digits and '.' are not allowed",
        separator,
        path.display()
    )]
    InvalidSeparator { path: PathBuf, separator: char },
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub clipboard: ClipboardConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Thousands separator used by the readout.
    pub separator: char,
    /// Draw the button grid under the readout.
    pub show_keypad: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            separator: ',',
            show_keypad: true,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Copy each successful `=` result to the system clipboard.
    pub copy_on_evaluate: bool,
}

impl Config {
    /// Default location: `$XDG_CONFIG_HOME/calcpad/config.toml`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("calcpad")
            .join("config.toml")
    }

    /// Load the config at `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let separator = config.display.separator;
        if !is_valid_separator(separator) {
            return Err(ConfigError::InvalidSeparator {
                path: path.to_path_buf(),
                separator,
            });
        }

        Ok(config)
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

/// A separator must not be mistaken for part of the number.
fn is_valid_separator(separator: char) -> bool {
    !separator.is_ascii_digit() && separator != '.'
}
