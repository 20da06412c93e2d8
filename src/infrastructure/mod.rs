//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod prefs;
pub mod repository;
pub mod store;

pub use config::Config;
pub use prefs::PrefsStore;
pub use repository::{FileSystemRepository, JournalRepository};
pub use store::{EntryStore, ENTRIES_KEY};
