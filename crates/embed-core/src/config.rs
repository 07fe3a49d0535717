use crate::widget::ListType;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Transport timeouts for fetching widget resources (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportConfig {
    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            request_timeout_secs: 30,
        }
    }
}

impl TransportConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Global configuration loaded from `~/.config/pretix-embed/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmbedConfig {
    /// Default list display type for widgets that don't specify one.
    #[serde(default)]
    pub list_type: ListType,
    /// Skip SSL verification inside the embedded widget (passed through as an attribute).
    #[serde(default)]
    pub skip_ssl_check: bool,
    /// Always open the ticket shop in a new tab instead of an iframe overlay.
    #[serde(default)]
    pub disable_iframe: bool,
    /// Optional transport timeouts; if missing, built-in defaults are used.
    #[serde(default)]
    pub transport: Option<TransportConfig>,
}

impl EmbedConfig {
    /// Effective transport settings (config section or defaults).
    pub fn transport(&self) -> TransportConfig {
        self.transport.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pretix-embed")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<EmbedConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = EmbedConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: EmbedConfig = toml::from_str(&data)?;
    Ok(cfg)
}
