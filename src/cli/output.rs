//! Output formatting utilities

use crate::domain::{Mood, MoodBundle, MoodEntry};
use chrono::{Local, TimeZone};
use std::str::FromStr;

/// Format the supportive content card for a mood
pub fn format_bundle(mood: &str, bundle: &MoodBundle) -> String {
    format_card(
        mood,
        &bundle.affirmations,
        &bundle.coping_tips,
        &bundle.prompts,
    )
}

/// Format a logged entry as a content card with its note and log time
pub fn format_entry_card(entry: &MoodEntry) -> String {
    let mut output = format_card(
        &entry.mood,
        &entry.affirmations,
        &entry.coping_tips,
        &entry.prompts,
    );

    if entry.has_note() {
        if let Some(note) = &entry.note {
            output.push_str(&format!("\nNote: {}\n", note));
        }
    }

    output.push_str(&format!(
        "\nLogged at {}\n",
        format_timestamp(entry.timestamp)
    ));
    output
}

/// Format a list of entries for display
pub fn format_entry_list(entries: &[MoodEntry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for (i, entry) in entries.iter().enumerate() {
        let time = format_timestamp(entry.timestamp);
        match emoji_for(&entry.mood) {
            Some(emoji) => output.push_str(&format!(
                "{:>3}  {} {} - {}\n",
                i + 1,
                emoji,
                entry.mood,
                time
            )),
            None => output.push_str(&format!("{:>3}  {} - {}\n", i + 1, entry.mood, time)),
        }

        if entry.has_note() {
            if let Some(note) = &entry.note {
                output.push_str(&format!("     Note: {}\n", note));
            }
        }
    }
    output
}

/// Format the list of cataloged moods for display
pub fn format_mood_list() -> String {
    let mut output = String::new();
    for mood in Mood::ALL {
        output.push_str(&format!("{}  {}\n", mood.emoji(), mood));
    }
    output
}

/// Render an epoch-milliseconds timestamp in local time.
/// Falls back to the raw number if the timestamp is out of range.
pub fn format_timestamp(timestamp: i64) -> String {
    Local
        .timestamp_millis_opt(timestamp)
        .single()
        .map(|dt| dt.format("%I:%M %p • %d %b").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

fn format_card(
    mood: &str,
    affirmations: &[String],
    coping_tips: &[String],
    prompts: &[String],
) -> String {
    let mut output = String::new();
    match emoji_for(mood) {
        Some(emoji) => output.push_str(&format!("{} {}\n", emoji, mood)),
        None => output.push_str(&format!("{}\n", mood)),
    }

    push_section(&mut output, "Affirmations:", affirmations);
    push_section(&mut output, "Coping Tips:", coping_tips);
    push_section(&mut output, "Journaling Prompts:", prompts);

    output
}

fn push_section(output: &mut String, label: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }

    output.push('\n');
    output.push_str(label);
    output.push('\n');
    for item in items {
        output.push_str(&format!("  • {}\n", item));
    }
}

fn emoji_for(mood: &str) -> Option<&'static str> {
    Mood::from_str(mood).ok().map(|m| m.emoji())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog;

    fn entry(mood: &str, note: Option<&str>) -> MoodEntry {
        MoodEntry::new(mood, catalog::lookup(mood), note.map(|n| n.to_string()))
    }

    #[test]
    fn test_format_bundle_has_all_sections() {
        let output = format_bundle("Happy", catalog::lookup("Happy"));

        assert!(output.starts_with("😊 Happy\n"));
        assert!(output.contains("Affirmations:\n"));
        assert!(output.contains("Coping Tips:\n"));
        assert!(output.contains("Journaling Prompts:\n"));
        assert!(output.contains("  • Your joy is powerful.\n"));
    }

    #[test]
    fn test_format_bundle_uncataloged_mood_has_no_emoji() {
        let output = format_bundle("Melancholy", catalog::lookup("Melancholy"));

        assert!(output.starts_with("Melancholy\n"));
    }

    #[test]
    fn test_format_entry_card_with_note() {
        let output = format_entry_card(&entry("Happy", Some("felt great")));

        assert!(output.contains("Note: felt great\n"));
        assert!(output.contains("Logged at "));
    }

    #[test]
    fn test_format_entry_card_without_note() {
        let output = format_entry_card(&entry("Happy", None));

        assert!(!output.contains("Note:"));
        assert!(output.contains("Logged at "));
    }

    #[test]
    fn test_format_entry_card_blank_note_omitted() {
        let output = format_entry_card(&entry("Happy", Some("   ")));

        assert!(!output.contains("Note:"));
    }

    #[test]
    fn test_format_empty_entry_list() {
        let output = format_entry_list(&[]);
        assert_eq!(output, "No entries found");
    }

    #[test]
    fn test_format_entry_list_positions_and_moods() {
        let entries = vec![entry("Happy", None), entry("Sad", None)];
        let output = format_entry_list(&entries);

        assert!(output.contains("  1  😊 Happy - "));
        assert!(output.contains("  2  😢 Sad - "));
    }

    #[test]
    fn test_format_entry_list_note_indented() {
        let entries = vec![entry("Happy", Some("felt great"))];
        let output = format_entry_list(&entries);

        assert!(output.contains("\n     Note: felt great\n"));
    }

    #[test]
    fn test_format_entry_list_unknown_mood_has_no_emoji() {
        let entries = vec![entry("Melancholy", None)];
        let output = format_entry_list(&entries);

        assert!(output.contains("  1  Melancholy - "));
    }

    #[test]
    fn test_format_mood_list_covers_catalog() {
        let output = format_mood_list();

        assert_eq!(output.lines().count(), 7);
        assert!(output.contains("😊  Happy"));
        assert!(output.contains("😐  Neutral"));
    }

    #[test]
    fn test_format_timestamp_out_of_range_falls_back() {
        assert_eq!(format_timestamp(i64::MAX), i64::MAX.to_string());
    }
}
