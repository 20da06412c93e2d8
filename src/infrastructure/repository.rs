//! File system repository

use crate::error::{MindmendError, Result};
use crate::infrastructure::{Config, PrefsStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for journal operations
pub trait JournalRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .mindmend/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .mindmend/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .mindmend directory exists
    fn is_initialized(&self) -> bool;

    /// Create .mindmend directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks MINDMEND_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        // 1. Check MINDMEND_ROOT environment variable first
        if let Ok(root_path) = std::env::var("MINDMEND_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_mindmend_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(MindmendError::Config(format!(
                    "MINDMEND_ROOT is set to '{}' but no .mindmend directory found. \
                    Run 'mindmend init' in that directory or unset MINDMEND_ROOT.",
                    path.display()
                )));
            }
        }

        // 2. Fall back to walking up from current directory
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_mindmend_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            // Try to move to parent directory
            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    // Reached filesystem root without finding .mindmend
                    return Err(MindmendError::NotJournalDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .mindmend directory
    fn has_mindmend_dir(path: &Path) -> bool {
        path.join(".mindmend").is_dir()
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_mindmend_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let mindmend_dir = self.root.join(".mindmend");

        if mindmend_dir.exists() {
            return Err(MindmendError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&mindmend_dir)?;
        Ok(())
    }
}

// Entry storage access (not part of trait - filesystem-specific)
impl FileSystemRepository {
    /// Preference store backing this journal, at .mindmend/prefs.json
    pub fn prefs_store(&self) -> PrefsStore {
        PrefsStore::new(self.root.join(".mindmend").join("prefs.json"))
    }
}
