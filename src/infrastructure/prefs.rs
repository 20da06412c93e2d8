//! File-backed key-value preferences store

use crate::error::Result;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// String key-value store persisted as a single JSON object file.
///
/// Every write replaces the file wholesale: the new contents go to a
/// temp file in the same directory which is then renamed into place, so
/// a reader observes either the previous file or the new one, never a
/// partial write. A missing file reads as an empty store; so does a file
/// that no longer parses as JSON (the next write rewrites it).
#[derive(Debug, Clone)]
pub struct PrefsStore {
    path: PathBuf,
}

impl PrefsStore {
    /// Create a store over the given file path. The file (and its parent
    /// directory) is created lazily on the first write.
    pub fn new(path: PathBuf) -> Self {
        PrefsStore { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the value stored under `key`, if any
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_map()?.remove(key))
    }

    /// Store `value` under `key`, replacing the file atomically
    pub fn set(&self, key: &str, value: String) -> Result<()> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value);
        self.write_map(&map)
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        // Corrupt prefs read as empty rather than failing the caller
        Ok(serde_json::from_str(&contents).unwrap_or_default())
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(map)?;

        let tmp_name = format!(
            "{}.mindmend-tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("prefs.json"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, contents)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}
