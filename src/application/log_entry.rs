//! Log mood entry use case

use crate::domain::{catalog, MoodEntry};
use crate::error::Result;
use crate::infrastructure::EntryStore;

/// Service for recording mood entries
pub struct LogEntryService {
    store: EntryStore,
}

impl LogEntryService {
    /// Create a new log entry service
    pub fn new(store: EntryStore) -> Self {
        LogEntryService { store }
    }

    /// Record a mood entry and return it.
    ///
    /// `mood` is stored as given; content comes from the catalog bundle for
    /// that mood, or the fallback bundle when the mood is not cataloged.
    pub fn execute(&self, mood: &str, note: Option<String>) -> Result<MoodEntry> {
        // 1. Look up supportive content for this mood
        let bundle = catalog::lookup(mood);

        // 2. Snapshot the bundle into a new entry
        let entry = MoodEntry::new(mood, bundle, note);

        // 3. Persist, newest first
        self.store.save_entry(&entry)?;

        Ok(entry)
    }
}
