//! Mood categories shared by every signal and by the aggregator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MoodError;

/// The nine mood labels used throughout classification.
///
/// Variant order is the fixed priority/tie-break order. `Neutral` is a valid
/// classifier result but never a scoring target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodCategory {
    Happy,
    Sad,
    Stressed,
    Calm,
    Energetic,
    Tired,
    Anxious,
    Thoughtful,
    Neutral,
}

impl MoodCategory {
    /// All nine categories in canonical order.
    pub const ALL: [MoodCategory; 9] = [
        Self::Happy,
        Self::Sad,
        Self::Stressed,
        Self::Calm,
        Self::Energetic,
        Self::Tired,
        Self::Anxious,
        Self::Thoughtful,
        Self::Neutral,
    ];

    /// The eight categories that own a slot on the scoreboard, in tie-break order.
    pub const SCORABLE: [MoodCategory; 8] = [
        Self::Happy,
        Self::Sad,
        Self::Stressed,
        Self::Calm,
        Self::Energetic,
        Self::Tired,
        Self::Anxious,
        Self::Thoughtful,
    ];

    /// Lower-case label (`"happy"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Stressed => "stressed",
            Self::Calm => "calm",
            Self::Energetic => "energetic",
            Self::Tired => "tired",
            Self::Anxious => "anxious",
            Self::Thoughtful => "thoughtful",
            Self::Neutral => "neutral",
        }
    }

    /// Title-case label for user-facing messages (`"Happy"`).
    pub fn title(&self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Sad => "Sad",
            Self::Stressed => "Stressed",
            Self::Calm => "Calm",
            Self::Energetic => "Energetic",
            Self::Tired => "Tired",
            Self::Anxious => "Anxious",
            Self::Thoughtful => "Thoughtful",
            Self::Neutral => "Neutral",
        }
    }

    /// Whether this category has a scoreboard slot.
    pub fn is_scorable(&self) -> bool {
        !matches!(self, Self::Neutral)
    }

    /// Position on the scoreboard, `None` for `Neutral`.
    pub fn scorable_index(&self) -> Option<usize> {
        Self::SCORABLE.iter().position(|m| m == self)
    }
}

impl fmt::Display for MoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoodCategory {
    type Err = MoodError;

    /// Case-insensitive parse of any of the nine labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == lower)
            .ok_or_else(|| MoodError::UnknownMood(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scorable_excludes_neutral() {
        assert_eq!(MoodCategory::SCORABLE.len(), 8);
        assert!(!MoodCategory::SCORABLE.contains(&MoodCategory::Neutral));
        assert!(!MoodCategory::Neutral.is_scorable());
        assert_eq!(MoodCategory::Neutral.scorable_index(), None);
        assert_eq!(MoodCategory::Thoughtful.scorable_index(), Some(7));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Happy".parse::<MoodCategory>().unwrap(), MoodCategory::Happy);
        assert_eq!(" TIRED ".parse::<MoodCategory>().unwrap(), MoodCategory::Tired);
        assert!(matches!(
            "grumpy".parse::<MoodCategory>(),
            Err(MoodError::UnknownMood(_))
        ));
    }

    #[test]
    fn test_serde_uses_lowercase_labels() {
        let json = serde_json::to_string(&MoodCategory::Thoughtful).unwrap();
        assert_eq!(json, "\"thoughtful\"");
        let back: MoodCategory = serde_json::from_str("\"energetic\"").unwrap();
        assert_eq!(back, MoodCategory::Energetic);
    }

    #[test]
    fn test_title_and_display() {
        assert_eq!(MoodCategory::Calm.title(), "Calm");
        assert_eq!(MoodCategory::Calm.to_string(), "calm");
    }
}
