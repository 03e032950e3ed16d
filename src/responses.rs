//! Coping suggestions for each predicted mood.

use std::collections::HashMap;

use crate::mood::MoodCategory;

/// Text used when a mood has no entry.
pub const DEFAULT_FALLBACK: &str = "Take care of yourself!";

const SUGGESTIONS: [(MoodCategory, &str); 8] = [
    (
        MoodCategory::Happy,
        "😊 You seem happy! Channel that energy into something creative or share your positivity with someone. Maybe write a gratitude note or listen to upbeat music.",
    ),
    (
        MoodCategory::Sad,
        "😔 It's okay to feel sad. Consider talking to a friend, journaling your thoughts, or watching a comforting movie. Remember, this feeling will pass.",
    ),
    (
        MoodCategory::Stressed,
        "😤 You might be stressed. Try a 5‑minute breathing exercise: inhale for 4 seconds, hold for 4, exhale for 6. Repeat a few times. Also, stepping away from screens can help.",
    ),
    (
        MoodCategory::Calm,
        "😌 You're in a calm state – perfect for meditation or mindfulness. You could also read a book or enjoy a quiet walk.",
    ),
    (
        MoodCategory::Energetic,
        "⚡ You're full of energy! Great for exercise, dancing, or tackling a project you've been putting off.",
    ),
    (
        MoodCategory::Tired,
        "😴 You seem tired. Rest is important. Consider a short nap, drink some water, or just take a break. Maybe listen to soothing music.",
    ),
    (
        MoodCategory::Anxious,
        "😨 Feeling anxious? Try the 5‑4‑3‑2‑1 grounding technique: name 5 things you see, 4 you can touch, 3 you hear, 2 you smell, 1 you taste. You're safe.",
    ),
    (
        MoodCategory::Thoughtful,
        "🤔 You're in a reflective mood. Journaling or reading something philosophical might resonate with you right now.",
    ),
];

/// Static mood → suggestion lookup.
#[derive(Debug, Clone)]
pub struct ResponseCatalog {
    entries: HashMap<MoodCategory, String>,
    fallback: String,
}

impl Default for ResponseCatalog {
    fn default() -> Self {
        Self {
            entries: SUGGESTIONS
                .iter()
                .map(|(mood, text)| (*mood, (*text).to_string()))
                .collect(),
            fallback: DEFAULT_FALLBACK.to_string(),
        }
    }
}

impl ResponseCatalog {
    /// Built-in suggestions with a custom fallback.
    pub fn with_fallback(fallback: impl Into<String>) -> Self {
        Self {
            fallback: fallback.into(),
            ..Self::default()
        }
    }

    /// Suggestion for a mood, or the fallback.
    pub fn suggestion(&self, mood: MoodCategory) -> &str {
        self.entries
            .get(&mood)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}
