//! List entries use case

use crate::domain::MoodEntry;
use crate::error::Result;
use crate::infrastructure::EntryStore;

/// List stored entries, newest first, with an optional limit.
pub fn list_entries(store: &EntryStore, limit: Option<usize>) -> Result<Vec<MoodEntry>> {
    let mut entries = store.entries()?;

    if let Some(n) = limit {
        entries.truncate(n);
    }

    Ok(entries)
}
