//! Optional defaults from `~/.config/secure-url/config.toml`.
//!
//! ```toml
//! base = "https://app.example/"
//!
//! [options]
//! mode = "relax"
//! keepPort = false
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::options::{Options, RawOptions};

/// Configuration file contents. Every entry is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecureUrlConfig {
    /// Trusted base used when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    /// Raw option bag; validated by [`SecureUrlConfig::options`].
    #[serde(default)]
    pub options: RawOptions,
}

impl SecureUrlConfig {
    pub fn options(&self) -> Result<Options> {
        Ok(self.options.validate()?)
    }
}

/// Location of the config file, whether or not it exists.
pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("secure-url")?;
    Ok(xdg_dirs.get_config_home().join("secure-url").join("config.toml"))
}

/// Load the config file, or defaults if there is none. Nothing is written.
pub fn load_or_default() -> Result<SecureUrlConfig> {
    let path = config_path()?;
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(SecureUrlConfig::default());
    }
    load_from(&path)
}

/// Load and validate an explicit config file.
pub fn load_from(path: &Path) -> Result<SecureUrlConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: SecureUrlConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    cfg.options()
        .with_context(|| format!("invalid options in {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
