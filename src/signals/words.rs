//! Word association: the 45-tag catalog and its keyword classifier.
//!
//! Each tag belongs to the first keyword group (in [`KEYWORD_GROUPS`] order)
//! whose keyword is a case-sensitive substring of the tag label. Tags that
//! match no group are `Neutral`.
//!
//! `"Anxious"` appears in both the stressed and the anxious group. Stressed is
//! checked first, so `"😨 Anxious"` counts as stressed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{MoodError, MoodResult};
use crate::mood::MoodCategory;

/// The fixed list of selectable word tags.
pub const WORD_TAGS: [&str; 45] = [
    "😊 Happy", "😄 Cheerful", "🌟 Joyful", "☀️ Optimistic", "🎉 Excited",
    "😔 Sad", "💔 Heartbroken", "😢 Melancholic", "🌧️ Gloomy", "🕯️ Lonely",
    "😤 Stressed", "😰 Anxious", "⚡ Overwhelmed", "🌀 Restless", "🔥 Frustrated",
    "😌 Calm", "🍃 Relaxed", "🌊 Peaceful", "🧘 Centered", "🌸 Content",
    "⚡ Energetic", "🏃 Eager", "🚀 Motivated", "💪 Strong", "✨ Lively",
    "😴 Tired", "🛌 Exhausted", "🥱 Sleepy", "🐢 Sluggish", "☁️ Drained",
    "😨 Anxious", "😱 Fearful", "🤔 Worried", "😬 Nervous", "🌀 Uneasy",
    "🤔 Thoughtful", "📚 Reflective", "🧐 Curious", "💭 Introspective", "🎨 Creative",
    "😐 Neutral", "⚖️ Balanced", "🙂 Okay", "🕊️ Serene", "🌱 Grounded",
];

/// Keyword groups in priority order. First match wins.
pub const KEYWORD_GROUPS: [(MoodCategory, [&str; 5]); 8] = [
    (MoodCategory::Happy, ["Happy", "Cheerful", "Joyful", "Optimistic", "Excited"]),
    (MoodCategory::Sad, ["Sad", "Heartbroken", "Melancholic", "Gloomy", "Lonely"]),
    (MoodCategory::Stressed, ["Stressed", "Anxious", "Overwhelmed", "Restless", "Frustrated"]),
    (MoodCategory::Calm, ["Calm", "Relaxed", "Peaceful", "Centered", "Content"]),
    (MoodCategory::Energetic, ["Energetic", "Eager", "Motivated", "Strong", "Lively"]),
    (MoodCategory::Tired, ["Tired", "Exhausted", "Sleepy", "Sluggish", "Drained"]),
    (MoodCategory::Anxious, ["Anxious", "Fearful", "Worried", "Nervous", "Uneasy"]),
    (MoodCategory::Thoughtful, ["Thoughtful", "Reflective", "Curious", "Introspective", "Creative"]),
];

/// Per-group counts of the selected tags.
///
/// Only groups represented among the selection have an entry. An empty
/// selection has no `WordSignal` at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordSignal {
    counts: BTreeMap<MoodCategory, u32>,
}

impl WordSignal {
    /// Count for one group (0 when absent).
    pub fn count(&self, mood: MoodCategory) -> u32 {
        self.counts.get(&mood).copied().unwrap_or(0)
    }

    /// Sum of all counts, equal to the number of classified tags.
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// `(mood, count)` pairs in category order.
    pub fn iter(&self) -> impl Iterator<Item = (MoodCategory, u32)> + '_ {
        self.counts.iter().map(|(m, c)| (*m, *c))
    }
}

impl FromIterator<(MoodCategory, u32)> for WordSignal {
    fn from_iter<I: IntoIterator<Item = (MoodCategory, u32)>>(iter: I) -> Self {
        let mut counts = BTreeMap::new();
        for (mood, count) in iter {
            if count > 0 {
                *counts.entry(mood).or_insert(0) += count;
            }
        }
        Self { counts }
    }
}

/// Look up a tag in [`WORD_TAGS`], returning the catalog's own `'static` label.
pub fn catalog_tag(label: &str) -> MoodResult<&'static str> {
    WORD_TAGS
        .iter()
        .copied()
        .find(|t| *t == label)
        .ok_or_else(|| MoodError::UnknownWordTag(label.to_string()))
}

/// Classify a single tag label by first-matching keyword group.
pub fn classify_tag(label: &str) -> MoodCategory {
    KEYWORD_GROUPS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| label.contains(k)))
        .map(|(mood, _)| *mood)
        .unwrap_or(MoodCategory::Neutral)
}

/// Classify a selection of tags. Returns `None` for an empty selection.
pub fn classify_words<I, S>(tags: I) -> Option<WordSignal>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts: BTreeMap<MoodCategory, u32> = BTreeMap::new();
    for tag in tags {
        let mood = classify_tag(tag.as_ref());
        *counts.entry(mood).or_insert(0) += 1;
    }
    if counts.is_empty() {
        return None;
    }
    log::debug!("word signal: {:?}", counts);
    Some(WordSignal { counts })
}
