use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Optional settings from ~/.config/uplift/config.toml.
///
/// Everything has a working default: a missing or unreadable config file
/// never stops the app.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Quote source file (a JSON array of quotes, or `text|author` lines).
    pub quotes_file: Option<String>,

    /// Inbox provider name (an `uplift-inbox-<name>` binary on PATH).
    pub inbox_provider: Option<String>,
}

/// Get the config directory path (~/.config/uplift)
pub fn config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("uplift");
    Ok(config_dir)
}

/// Get the config file path (~/.config/uplift/config.toml)
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Get the data directory path (~/.local/share/uplift or platform
/// equivalent), holding favorites.json and schedule.json.
pub fn data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .context("Could not determine data directory")?
        .join("uplift");
    Ok(data_dir)
}

/// Load config.toml, degrading to defaults when the file is missing or
/// unreadable.
pub fn load_config() -> Config {
    let Ok(path) = config_path() else {
        return Config::default();
    };

    std::fs::read_to_string(&path)
        .ok()
        .and_then(|contents| toml::from_str(&contents).ok())
        .unwrap_or_default()
}

/// The configured quote source path, with ~ expanded.
pub fn quotes_path(config: &Config) -> Option<PathBuf> {
    config.quotes_file.as_deref().map(expand_path)
}

/// Expand ~ in paths to the home directory
pub fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
