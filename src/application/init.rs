//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use std::fs;
use std::path::Path;

/// Initialize a new journal at the specified path.
pub fn init(path: &Path, display_limit: usize) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    // Create repository for this path
    let repo = FileSystemRepository::new(path.to_path_buf());

    // Initialize .mindmend directory
    repo.initialize()?;

    // Create default config
    let config = Config::new(display_limit);

    // Save config
    repo.save_config(&config)?;

    println!("Initialized mindmend journal at {}", path.display());
    println!("Display limit: {}", display_limit);

    Ok(())
}
