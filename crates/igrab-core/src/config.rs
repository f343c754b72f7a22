use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User-Agent sent with the post page fetch. The target server varies its
/// markup by client identification; this literal value is known to produce
/// the server-rendered meta tags the resolver depends on.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/65.0.3325.181 Safari/537.36";

const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 15;

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_connect_timeout_secs() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

/// Global configuration loaded from `~/.config/igrab/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IgrabConfig {
    /// User-Agent for the page fetch (the media transfer uses curl's default).
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Directory downloaded files land in (None = current directory).
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    /// Connect timeout for the page fetch, in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for IgrabConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            download_dir: None,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("igrab")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<IgrabConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = IgrabConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: IgrabConfig = toml::from_str(&data)?;
    Ok(cfg)
}
