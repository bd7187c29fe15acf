//! Configuration management for podium
//!
//! Handles the ~/.podium/ directory structure and config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
///
/// `name_pattern` is the one recognized option: a regex that country names
/// must match before they are accepted into the registry. When unset the
/// default policy (alphabetic words) applies.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub name_pattern: Option<String>,
}

/// Returns the path to the podium home directory (~/.podium)
pub fn podium_home() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".podium"))
}

/// Returns paths to all podium directories
pub struct PodiumPaths {
    pub root: PathBuf,
    pub config: PathBuf,
    pub db: PathBuf,
    pub db_file: PathBuf,
}

impl PodiumPaths {
    pub fn new() -> Result<Self> {
        let root = podium_home()?;
        Ok(Self {
            config: root.join("config.toml"),
            db: root.join("db"),
            db_file: root.join("db/podium.db"),
            root,
        })
    }

    /// Create all directories if they don't exist
    pub fn ensure_dirs(&self) -> Result<()> {
        fs::create_dir_all(&self.root).context("Failed to create podium root")?;
        fs::create_dir_all(&self.db).context("Failed to create db directory")?;
        Ok(())
    }

    /// Check if podium has been initialized
    pub fn is_initialized(&self) -> bool {
        self.config.exists() && self.db_file.exists()
    }
}

/// Load configuration from disk
pub fn load_config(paths: &PodiumPaths) -> Result<Config> {
    if !paths.config.exists() {
        return Ok(Config::default());
    }
    let content = fs::read_to_string(&paths.config).context("Failed to read config.toml")?;
    toml::from_str(&content).context("Failed to parse config.toml")
}

/// Save configuration to disk
pub fn save_config(paths: &PodiumPaths, config: &Config) -> Result<()> {
    let content = toml::to_string_pretty(config).context("Failed to serialize config")?;
    fs::write(&paths.config, content).context("Failed to write config.toml")?;
    Ok(())
}
