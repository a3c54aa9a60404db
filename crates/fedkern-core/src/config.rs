use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::fetch::CurlOptions;

/// Global configuration loaded from `~/.config/fedkern/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FedkernConfig {
    /// Directory holding cached listings (None = current directory).
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,
    /// Continue with the next version when one fails, and report failures at the end.
    #[serde(default)]
    pub keep_going: bool,
    /// libcurl connect timeout in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Overall request timeout in seconds; 0 disables it.
    #[serde(default)]
    pub timeout_secs: u64,
}

fn default_connect_timeout_secs() -> u64 {
    30
}

impl Default for FedkernConfig {
    fn default() -> Self {
        Self {
            cache_dir: None,
            keep_going: false,
            connect_timeout_secs: default_connect_timeout_secs(),
            timeout_secs: 0,
        }
    }
}

impl FedkernConfig {
    pub fn curl_options(&self) -> CurlOptions {
        CurlOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            timeout: (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs)),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fedkern")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FedkernConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FedkernConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FedkernConfig = toml::from_str(&data)?;
    Ok(cfg)
}
