use crate::types::SourceFormat;
use anyhow::{bail, Result};
use phaseline_engine::ColumnMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Hourly refresh window, matching the source dashboard's cadence.
pub const DEFAULT_TTL_SECS: u64 = 3600;

/// Resolve the workspace directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. PHASELINE_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.phaseline (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("PHASELINE_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("phaseline"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".phaseline"));
    }

    bail!("could not determine workspace path: no HOME directory or XDG data directory found")
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

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SourceConfig {
    /// Snapshot file exported from the hosted sheet.
    pub path: Option<PathBuf>,
    /// Explicit format; inferred from the file extension when absent.
    #[serde(default)]
    pub format: Option<SourceFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: DEFAULT_TTL_SECS,
        }
    }
}

fn default_ttl_secs() -> u64 {
    DEFAULT_TTL_SECS
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    /// Column title overrides for retitled sheets.
    #[serde(default)]
    pub columns: ColumnMap,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.source.path.is_none());
        assert_eq!(config.cache.ttl_secs, DEFAULT_TTL_SECS);
        assert_eq!(config.columns, ColumnMap::default());
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.source.path = Some(PathBuf::from("/exports/projects.csv"));
        config.cache.ttl_secs = 60;
        config.columns.manager = "Project Manager".to_string();

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(
            loaded.source.path.as_deref(),
            Some(Path::new("/exports/projects.csv"))
        );
        assert_eq!(loaded.cache.ttl_secs, 60);
        assert_eq!(loaded.columns.manager, "Project Manager");
        assert_eq!(loaded.columns.name, "Project Name");

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert!(config.source.path.is_none());

        Ok(())
    }

    #[test]
    fn test_partial_config_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[source]\npath = \"a.csv\"\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.cache.ttl_secs, DEFAULT_TTL_SECS);
        assert_eq!(config.columns, ColumnMap::default());

        Ok(())
    }
}
