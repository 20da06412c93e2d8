//! Persisted mood entry store

use crate::domain::MoodEntry;
use crate::error::Result;
use crate::infrastructure::PrefsStore;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Mutex;

/// Preferences key holding the JSON-encoded entry list
pub const ENTRIES_KEY: &str = "mood_entries_json";

/// Durable, ordered collection of mood entries, newest first.
///
/// The entire list lives as one JSON array blob under [`ENTRIES_KEY`] in a
/// [`PrefsStore`]. Every mutation is a read-modify-write cycle over that
/// blob, serialized by an internal lock so concurrent saves and deletes
/// through the same store cannot lose updates, and finished with an atomic
/// blob replacement. Committed writes are published to all live
/// subscribers.
///
/// Construct one store per session and pass it to whatever needs it; a
/// second store over the same file would write correctly but its
/// subscribers would not hear about this one's writes.
pub struct EntryStore {
    prefs: PrefsStore,
    max_entries: Option<usize>,
    write_lock: Mutex<()>,
    subscribers: Mutex<Vec<Sender<Vec<MoodEntry>>>>,
}

impl EntryStore {
    /// Create a store over the given preferences file
    pub fn new(prefs: PrefsStore) -> Self {
        EntryStore {
            prefs,
            max_entries: None,
            write_lock: Mutex::new(()),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Cap the stored list; entries past the cap are dropped oldest-first
    /// on every save. `None` leaves storage unbounded.
    pub fn with_max_entries(mut self, max_entries: Option<usize>) -> Self {
        self.max_entries = max_entries;
        self
    }

    /// Decode the currently stored list, newest first.
    ///
    /// A missing key or a blob that no longer parses reads as an empty
    /// list; only I/O failures on the preferences file surface as errors.
    pub fn entries(&self) -> Result<Vec<MoodEntry>> {
        let blob = self.prefs.get(ENTRIES_KEY)?;
        Ok(Self::decode(blob.as_deref()))
    }

    /// Subscribe to the entry list.
    ///
    /// The current list is delivered immediately; every committed write
    /// through this store delivers the updated list afterwards, in write
    /// order. The subscription lives until the receiver is dropped;
    /// dropped receivers are pruned on the next publish.
    pub fn subscribe(&self) -> Result<Receiver<Vec<MoodEntry>>> {
        // Registration happens under the write lock so a commit cannot
        // slip between the initial read and the registration.
        let _guard = self.write_lock.lock().unwrap();

        let (tx, rx) = mpsc::channel();
        let current = self.entries()?;
        // The receiver is alive in this scope, the send cannot fail
        let _ = tx.send(current);
        self.subscribers.lock().unwrap().push(tx);
        Ok(rx)
    }

    /// Prepend `entry` to the stored list and commit
    pub fn save_entry(&self, entry: &MoodEntry) -> Result<()> {
        let _guard = self.write_lock.lock().unwrap();

        let mut entries = self.entries()?;
        entries.insert(0, entry.clone());
        if let Some(cap) = self.max_entries {
            entries.truncate(cap);
        }
        self.commit(entries)
    }

    /// Remove every stored entry whose id matches `entry`'s and commit.
    /// Returns whether anything was removed; removing nothing is not an
    /// error and does not touch storage.
    pub fn delete_entry(&self, entry: &MoodEntry) -> Result<bool> {
        let _guard = self.write_lock.lock().unwrap();

        let mut entries = self.entries()?;
        let before = entries.len();
        entries.retain(|stored| stored.id != entry.id);
        if entries.len() == before {
            return Ok(false);
        }

        self.commit(entries)?;
        Ok(true)
    }

    /// Serialize `entries`, replace the stored blob, publish the new list
    fn commit(&self, entries: Vec<MoodEntry>) -> Result<()> {
        let blob = serde_json::to_string(&entries)?;
        self.prefs.set(ENTRIES_KEY, blob)?;
        self.publish(entries);
        Ok(())
    }

    fn publish(&self, entries: Vec<MoodEntry>) {
        let mut subscribers = self.subscribers.lock().unwrap();
        subscribers.retain(|tx| tx.send(entries.clone()).is_ok());
    }

    fn decode(blob: Option<&str>) -> Vec<MoodEntry> {
        blob.and_then(|json| serde_json::from_str::<Vec<MoodEntry>>(json).ok())
            .unwrap_or_default()
    }
}
