//! Saved mood entry record

use crate::domain::catalog::MoodBundle;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One saved reflection: the mood, a snapshot of the catalog content that
/// was shown for it, an optional user note, and the save time.
///
/// Entries are created only through [`MoodEntry::new`] and never mutated
/// afterwards; the store appends and removes them wholesale. The content
/// vectors are copies of the bundle active at save time, so later catalog
/// changes leave saved entries untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    /// Generated at creation; the entry's identity for deletion
    pub id: Uuid,
    pub mood: String,
    pub affirmations: Vec<String>,
    pub coping_tips: Vec<String>,
    pub prompts: Vec<String>,
    pub note: Option<String>,
    /// Milliseconds since the Unix epoch, assigned at save time
    pub timestamp: i64,
}

impl MoodEntry {
    /// Create a new entry for `mood`, snapshotting `bundle` at the current
    /// time. The mood string is stored as given; it is not validated.
    pub fn new(mood: &str, bundle: &MoodBundle, note: Option<String>) -> Self {
        MoodEntry {
            id: Uuid::new_v4(),
            mood: mood.to_string(),
            affirmations: bundle.affirmations.clone(),
            coping_tips: bundle.coping_tips.clone(),
            prompts: bundle.prompts.clone(),
            note,
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    /// True when the entry carries a note with visible content
    pub fn has_note(&self) -> bool {
        self.note
            .as_deref()
            .is_some_and(|note| !note.trim().is_empty())
    }
}
