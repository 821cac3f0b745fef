use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Request headers sent while following redirects (optional `[http]` section).
///
/// Some link shorteners refuse clients that do not look like a browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    pub user_agent: String,
    pub accept: String,
    pub accept_language: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
            accept: "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8".to_string(),
            accept_language: "en-US,en;q=0.5".to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/urlpeek/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlpeekConfig {
    /// Follow HTTP redirects during analysis. Off = wrapper decoding and parsing only.
    pub follow_redirects: bool,
    /// Seconds allowed for the TCP/TLS connect phase.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for the whole redirect chain.
    pub timeout_secs: u64,
    /// Maximum redirect hops before giving up.
    pub max_redirects: u32,
    /// Optional header overrides; if missing, browser-like defaults are used.
    #[serde(default)]
    pub http: Option<HttpConfig>,
}

impl Default for UrlpeekConfig {
    fn default() -> Self {
        Self {
            follow_redirects: true,
            connect_timeout_secs: 15,
            timeout_secs: 30,
            max_redirects: 10,
            http: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlpeek")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlpeekConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Like `load_or_init` with an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<UrlpeekConfig> {
    if !path.exists() {
        let default_cfg = UrlpeekConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)
            .with_context(|| format!("writing default config to {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: UrlpeekConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}
