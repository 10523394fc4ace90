use anyhow::{Context, Result};
use rolltally_sdk::{DEFAULT_IGNORED_PARTICIPANTS, ExtractOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration for rolltally
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Speakers whose entries are never counted (exact match)
    #[serde(default = "default_ignored_participants")]
    pub ignored_participants: Vec<String>,

    /// Participants left out of reports and clipboard text
    #[serde(default)]
    pub hidden_participants: Vec<String>,
}

fn default_ignored_participants() -> Vec<String> {
    DEFAULT_IGNORED_PARTICIPANTS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            ignored_participants: default_ignored_participants(),
            hidden_participants: Vec::new(),
        }
    }
}

impl Config {
    /// Load config from a specific path. A missing file means defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }

    /// Save config to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default config file path (~/.rolltally/config.toml)
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;

        Ok(home.join(".rolltally").join("config.toml"))
    }

    /// Resolve the path from `--config`, falling back to the default location
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_path(),
        }
    }

    /// Extraction options from the configured list plus `extra` names
    pub fn extract_options(&self, extra: &[String]) -> ExtractOptions {
        ExtractOptions::with_ignored(self.ignored_participants.iter().cloned())
            .ignore(extra.iter().cloned())
    }
}
