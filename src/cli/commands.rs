//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mindmend")]
#[command(about = "Terminal mood journal with supportive content", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// How many entries `list` shows by default
        #[arg(short, long, default_value_t = 5)]
        display_limit: usize,
    },

    /// List the moods the content catalog covers
    Moods,

    /// Show supportive content for a mood without logging anything
    Show {
        /// Mood name (happy, sad, anxious, stressed, angry, tired, neutral)
        mood: String,

        /// Accept a mood outside the catalog; content falls back to neutral
        #[arg(long)]
        any_mood: bool,
    },

    /// Log a mood entry
    Log {
        /// Mood name (happy, sad, anxious, stressed, angry, tired, neutral)
        mood: String,

        /// Note to store with the entry
        #[arg(short, long)]
        note: Option<String>,

        /// Accept a mood outside the catalog; content falls back to neutral
        #[arg(long)]
        any_mood: bool,
    },

    /// List logged entries, newest first
    List {
        /// Maximum number of entries to show (default: configured display limit)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Show every entry
        #[arg(long, conflicts_with = "limit")]
        all: bool,
    },

    /// Delete the entry at a list position (1 = newest)
    Delete {
        /// Position as shown by `list --all`
        position: usize,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
