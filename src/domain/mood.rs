//! The known mood set offered by the journaling screen

use std::fmt;
use std::str::FromStr;

/// Moods the user can pick from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Happy,
    Sad,
    Anxious,
    Stressed,
    Angry,
    Tired,
    Neutral,
}

impl Mood {
    /// Every known mood, in display order
    pub const ALL: [Mood; 7] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Anxious,
        Mood::Stressed,
        Mood::Angry,
        Mood::Tired,
        Mood::Neutral,
    ];

    /// Canonical catalog key for this mood
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Anxious => "Anxious",
            Mood::Stressed => "Stressed",
            Mood::Angry => "Angry",
            Mood::Tired => "Tired",
            Mood::Neutral => "Neutral",
        }
    }

    /// Emoji shown next to the mood label
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Sad => "😢",
            Mood::Anxious => "😰",
            Mood::Stressed => "😫",
            Mood::Angry => "😡",
            Mood::Tired => "😴",
            Mood::Neutral => "😐",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "sad" => Ok(Mood::Sad),
            "anxious" => Ok(Mood::Anxious),
            "stressed" => Ok(Mood::Stressed),
            "angry" => Ok(Mood::Angry),
            "tired" => Ok(Mood::Tired),
            "neutral" => Ok(Mood::Neutral),
            _ => Err(format!(
                "Unknown mood: '{}'. Valid moods are: happy, sad, anxious, stressed, angry, tired, neutral",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_lowercase() {
        assert_eq!(Mood::from_str("happy").unwrap(), Mood::Happy);
        assert_eq!(Mood::from_str("neutral").unwrap(), Mood::Neutral);
    }

    #[test]
    fn test_from_str_mixed_case() {
        assert_eq!(Mood::from_str("Happy").unwrap(), Mood::Happy);
        assert_eq!(Mood::from_str("ANXIOUS").unwrap(), Mood::Anxious);
    }

    #[test]
    fn test_from_str_unknown() {
        let result = Mood::from_str("joyful");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Valid moods are"));
    }

    #[test]
    fn test_display_matches_catalog_key() {
        assert_eq!(Mood::Happy.to_string(), "Happy");
        assert_eq!(Mood::Stressed.to_string(), "Stressed");
    }

    #[test]
    fn test_all_has_every_mood_once() {
        assert_eq!(Mood::ALL.len(), 7);
        for mood in Mood::ALL {
            assert_eq!(Mood::from_str(mood.as_str()).unwrap(), mood);
            assert!(!mood.emoji().is_empty());
        }
    }
}
