//! Application layer - Use cases and orchestration

pub mod delete_entry;
pub mod init;
pub mod list_entries;
pub mod log_entry;
pub mod manage_config;

pub use delete_entry::DeleteEntryService;
pub use log_entry::LogEntryService;
pub use manage_config::ConfigService;
