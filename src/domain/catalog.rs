//! Static mood-to-content catalog

use std::collections::HashMap;
use std::sync::OnceLock;

/// Key of the bundle returned when a lookup misses the table.
/// The table always registers this key; see [`lookup`].
pub const FALLBACK_MOOD: &str = "Neutral";

/// Canned content shown for one mood: affirmations, coping tips and
/// journaling prompts. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodBundle {
    pub affirmations: Vec<String>,
    pub coping_tips: Vec<String>,
    pub prompts: Vec<String>,
}

impl MoodBundle {
    fn new(affirmations: &[&str], coping_tips: &[&str], prompts: &[&str]) -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
        MoodBundle {
            affirmations: owned(affirmations),
            coping_tips: owned(coping_tips),
            prompts: owned(prompts),
        }
    }
}

/// Process-wide constant table, built on first use
fn catalog() -> &'static HashMap<&'static str, MoodBundle> {
    static CATALOG: OnceLock<HashMap<&'static str, MoodBundle>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let mut table = HashMap::new();
        table.insert(
            "Happy",
            MoodBundle::new(
                &["Your joy is powerful.", "This happiness is deserved."],
                &["Share a smile with someone.", "Pause and embrace this moment."],
                &["What made you smile today?", "How can you extend this feeling?"],
            ),
        );
        table.insert(
            "Sad",
            MoodBundle::new(
                &["It’s okay to feel sad.", "You’re stronger than you think."],
                &["Drink some water.", "Take a slow deep breath for 10 seconds."],
                &[
                    "What’s one small comfort you can give yourself?",
                    "What do you wish someone told you right now?",
                ],
            ),
        );
        table.insert(
            "Anxious",
            MoodBundle::new(
                &["You are safe right now.", "This feeling will pass."],
                &["Try the 4-7-8 breathing method.", "Relax your shoulders."],
                &["What triggered this feeling?", "Is it something you can control?"],
            ),
        );
        table.insert(
            "Stressed",
            MoodBundle::new(
                &["You’re doing your best.", "Small progress is still progress."],
                &["Take a 1-minute break.", "Stretch your neck and hands."],
                &[
                    "What’s the smallest next step you can take?",
                    "What can wait till later?",
                ],
            ),
        );
        table.insert(
            "Angry",
            MoodBundle::new(
                &["Your feelings are valid.", "It’s okay to take space."],
                &["Count 1–10 slowly.", "Walk for 1 minute."],
                &["What caused this anger?", "What outcome do you want most?"],
            ),
        );
        table.insert(
            "Tired",
            MoodBundle::new(
                &["You deserve rest.", "Your body is asking for care."],
                &["Drink water.", "Stretch for 20 seconds."],
                &["What helps you recharge?", "How many hours did you sleep?"],
            ),
        );
        table.insert(
            "Neutral",
            MoodBundle::new(
                &["Being neutral is okay.", "Today can still be meaningful."],
                &["Try a short walk.", "Do a 30-second breathing exercise."],
                &[
                    "What could make today 5% better?",
                    "What do you want your day to feel like?",
                ],
            ),
        );
        table
    })
}

/// Look up the content bundle for a mood key.
///
/// Never fails: keys not registered in the table resolve to the
/// [`FALLBACK_MOOD`] bundle. Matching is exact; callers that want the
/// friendly, case-insensitive spelling go through [`crate::domain::Mood`]
/// first.
pub fn lookup(mood: &str) -> &'static MoodBundle {
    let table = catalog();
    table.get(mood).unwrap_or_else(|| &table[FALLBACK_MOOD])
}
