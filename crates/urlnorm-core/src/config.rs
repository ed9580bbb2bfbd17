use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How the CLI prints parsed URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `component: value` line per part.
    #[default]
    Text,
    /// One JSON object per URL.
    Json,
}

/// CLI configuration loaded from `~/.config/urlnorm/config.toml`.
///
/// The parser itself has no knobs; this only shapes how the CLI reports results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlnormConfig {
    /// Default output format for `urlnorm parse` when `--format` is not given.
    #[serde(default)]
    pub output: OutputFormat,
    /// Keep processing the remaining URLs after an invalid one (exit status is still non-zero).
    #[serde(default = "default_keep_going")]
    pub keep_going: bool,
}

fn default_keep_going() -> bool {
    true
}

impl Default for UrlnormConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            keep_going: default_keep_going(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlnorm")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from the XDG config dir, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlnormConfig> {
    load_or_init_at(&config_path()?)
}

/// Load configuration from `path`, creating a default file there if none exists.
pub fn load_or_init_at(path: &Path) -> Result<UrlnormConfig> {
    if !path.exists() {
        let default_cfg = UrlnormConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)
            .with_context(|| format!("failed to write default config {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_at(path)
}

/// Load configuration from an existing file at `path`. A missing file is an error.
pub fn load_at(path: &Path) -> Result<UrlnormConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: UrlnormConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
