use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use shipdash_core::DEFAULT_PREVIEW_DAYS;
use std::path::{Path, PathBuf};

const CONFIG_ENV: &str = "SHIPDASH_CONFIG";
const ENDPOINT_ENV: &str = "SHIPDASH_ENDPOINT";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/shipments";
pub const DEFAULT_PER_DAY: usize = 3;
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. SHIPDASH_CONFIG environment variable (with tilde expansion)
/// 3. System config directory (recommended default)
/// 4. ~/.shipdash/config.toml (fallback for systems without a config directory)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    let env_path = std::env::var(CONFIG_ENV).ok();
    pick_config_path(explicit_path, env_path.as_deref())
}

fn pick_config_path(explicit_path: Option<&str>, env_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Some(path) = env_path.filter(|p| !p.is_empty()) {
        return Ok(expand_tilde(path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("shipdash").join(CONFIG_FILENAME));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".shipdash").join(CONFIG_FILENAME));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or system config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// `http(s)://` URL or local JSON file (`file://` URL or plain path)
    pub endpoint: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub window_days: usize,
    /// Rows listed under each day before collapsing into "and N more"
    pub per_day: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_PREVIEW_DAYS,
            per_day: DEFAULT_PER_DAY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub page_size: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub table: TableConfig,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    /// Missing files yield the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        resolve_config_path(None)
    }

    /// Endpoint to fetch from: explicit override, then SHIPDASH_ENDPOINT, then the file.
    pub fn resolve_endpoint(&self, explicit: Option<&str>) -> String {
        let env_endpoint = std::env::var(ENDPOINT_ENV).ok();
        self.pick_endpoint(explicit, env_endpoint.as_deref())
    }

    fn pick_endpoint(&self, explicit: Option<&str>, env_endpoint: Option<&str>) -> String {
        explicit
            .or(env_endpoint)
            .filter(|e| !e.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.source.endpoint.clone())
    }
}
