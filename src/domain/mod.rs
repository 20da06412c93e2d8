//! Domain layer - Business logic and domain models

pub mod catalog;
pub mod entry;
pub mod mood;

pub use catalog::MoodBundle;
pub use entry::MoodEntry;
pub use mood::Mood;
