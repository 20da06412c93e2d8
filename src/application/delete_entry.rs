//! Delete entry use case

use crate::domain::MoodEntry;
use crate::error::{MindmendError, Result};
use crate::infrastructure::EntryStore;

/// Service for removing mood entries
pub struct DeleteEntryService {
    store: EntryStore,
}

impl DeleteEntryService {
    /// Create a new delete entry service
    pub fn new(store: EntryStore) -> Self {
        DeleteEntryService { store }
    }

    /// Delete the entry at the given 1-based list position (1 = newest)
    /// and return it.
    pub fn execute(&self, position: usize) -> Result<MoodEntry> {
        // 1. Read the current list
        let entries = self.store.entries()?;

        // 2. Validate the position
        if position == 0 || position > entries.len() {
            return Err(MindmendError::EntryNotFound(position));
        }

        // 3. Delete by identity
        let entry = entries[position - 1].clone();
        self.store.delete_entry(&entry)?;

        Ok(entry)
    }
}
