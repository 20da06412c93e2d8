//! Config management use case

use crate::error::{MindmendError, Result};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "display_limit" => Ok(config.display_limit.to_string()),
            "max_entries" => Ok(match config.max_entries {
                Some(n) => n.to_string(),
                None => "none".to_string(),
            }),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(MindmendError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: display_limit, max_entries, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "display_limit" => {
                config.display_limit = parse_positive(key, value)?;
            }
            "max_entries" => {
                config.max_entries = if value == "none" {
                    None
                } else {
                    Some(parse_positive(key, value)?)
                };
            }
            "created" => {
                return Err(MindmendError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(MindmendError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: display_limit, max_entries",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

fn parse_positive(key: &str, value: &str) -> Result<usize> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(MindmendError::Config(format!(
            "Invalid value for '{}': '{}'. Expected a positive number",
            key, value
        ))),
    }
}
