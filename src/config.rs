use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::display::{DEFAULT_DATE_TAGS, DEFAULT_HIDDEN_TAGS};
use crate::exif::ByteOrder;

/// Top-level configuration for exif-dump.
///
/// Controls how payloads are decoded and which tags are shown.
///
/// # Loading
///
/// ```rust,no_run
/// use exif_dump::config::{ByteOrderSetting, Config};
///
/// // From a JSON file
/// let config = Config::load(Some("config.json".as_ref())).unwrap();
///
/// // Or use defaults and customize
/// let mut config = Config::default();
/// config.decode.byte_order = ByteOrderSetting::Big;
/// config.decode.lint = true;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Payload decoding options.
    pub decode: DecodeConfig,
    /// Presentation options.
    pub display: DisplayConfig,
}

/// Payload decoding options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeConfig {
    /// Byte order for multi-byte values. `auto` uses the order declared by the file.
    pub byte_order: ByteOrderSetting,
    /// If `true`, collect and log diagnostics about dropped bytes and registry mismatches.
    pub lint: bool,
}

/// Presentation options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Tag ids that are decoded but never printed.
    pub hidden_tags: Vec<u16>,
    /// Tag ids tried in order when picking the date shown for an image.
    pub date_tags: Vec<u16>,
    /// If `true`, wait for Enter after each image.
    pub pause_between_files: bool,
}

/// Byte order override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrderSetting {
    /// Use the order found in the file's TIFF header.
    #[default]
    Auto,
    Little,
    Big,
}

impl ByteOrderSetting {
    /// Pick the byte order to decode with, given the one the file declared.
    pub fn resolve(self, detected: ByteOrder) -> ByteOrder {
        match self {
            Self::Auto => detected,
            Self::Little => ByteOrder::Little,
            Self::Big => ByteOrder::Big,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            hidden_tags: DEFAULT_HIDDEN_TAGS.to_vec(),
            date_tags: DEFAULT_DATE_TAGS.to_vec(),
            pause_between_files: false,
        }
    }
}

impl Config {
    /// Resolve the config file path, next to the executable.
    pub fn config_path() -> Result<PathBuf> {
        let exe_path = std::env::current_exe().context("Failed to get executable path")?;
        let exe_dir = exe_path
            .parent()
            .context("Failed to get executable directory")?;
        Ok(exe_dir.join("config.json"))
    }

    /// Load config from the given path, or from the default location.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };

        if !config_path.exists() {
            log::debug!(
                "Config file not found at {}. Using defaults.",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).context("Failed to read config file")?;
        let config: Config =
            serde_json::from_str(&contents).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Save config to the given path, or to the default location.
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&config_path, contents).context("Failed to write config file")?;
        log::info!("Config saved to {}", config_path.display());
        Ok(())
    }
}
