//! mindmend - Terminal mood journal
//!
//! A command-line mood journal that pairs every logged mood with supportive
//! affirmations, coping tips, and journaling prompts, and keeps the entry
//! history in a single local preferences file.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MindmendError;
