//! Configuration management

use crate::error::{MindmendError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub display_limit: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_entries: Option<usize>,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new(display_limit: usize) -> Self {
        Config {
            display_limit,
            max_entries: None,
            created: Utc::now(),
        }
    }

    /// Load config from .mindmend/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".mindmend").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MindmendError::NotJournalDirectory(path.to_path_buf())
            } else {
                MindmendError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Save config to .mindmend/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let mindmend_dir = path.join(".mindmend");
        let config_path = mindmend_dir.join("config.toml");

        // Ensure .mindmend directory exists
        if !mindmend_dir.exists() {
            fs::create_dir(&mindmend_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}
