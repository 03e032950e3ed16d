//! Mood aggregation: weighted signals → scoreboard → predicted mood.
//!
//! | signal  | contribution                 |
//! |---------|------------------------------|
//! | words   | `count × WORD_WEIGHT` per group |
//! | drawing | `DRAWING_WEIGHT` to its mood |
//! | story   | its `strength` (0–2)         |
//! | color   | `COLOR_WEIGHT` to its mood   |
//!
//! `Neutral` has no scoreboard slot, so neutral word counts and neutral
//! stories contribute nothing.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::{MoodError, MoodResult};
use crate::mood::MoodCategory;
use crate::session::GameState;

pub const WORD_WEIGHT: u32 = 3;
pub const DRAWING_WEIGHT: u32 = 2;
pub const COLOR_WEIGHT: u32 = 1;

/// Totals for the eight scorable moods, in [`MoodCategory::SCORABLE`] order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    totals: [u32; 8],
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add points to a mood. Returns `false` (and adds nothing) for `Neutral`.
    pub fn add(&mut self, mood: MoodCategory, points: u32) -> bool {
        match mood.scorable_index() {
            Some(i) => {
                self.totals[i] += points;
                true
            }
            None => false,
        }
    }

    /// Total for a mood; `Neutral` is always 0.
    pub fn get(&self, mood: MoodCategory) -> u32 {
        mood.scorable_index().map(|i| self.totals[i]).unwrap_or(0)
    }

    /// `(mood, total)` pairs in tie-break order.
    pub fn iter(&self) -> impl Iterator<Item = (MoodCategory, u32)> + '_ {
        MoodCategory::SCORABLE
            .iter()
            .copied()
            .zip(self.totals.iter().copied())
    }

    /// Highest total; the earliest mood wins a tie. All zeros → `Happy`.
    pub fn leader(&self) -> MoodCategory {
        let mut best = (MoodCategory::SCORABLE[0], self.totals[0]);
        for (mood, total) in self.iter().skip(1) {
            if total > best.1 {
                best = (mood, total);
            }
        }
        best.0
    }
}

impl Serialize for ScoreBoard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.totals.len()))?;
        for (mood, total) in self.iter() {
            map.serialize_entry(mood.as_str(), &total)?;
        }
        map.end()
    }
}

/// A predicted mood with the scores that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Prediction {
    pub mood: MoodCategory,
    pub scores: ScoreBoard,
}

/// Score every present signal and pick the leading mood.
///
/// Refuses with [`MoodError::MissingPrerequisite`] when no words were
/// selected. Never mutates `state`.
pub fn predict_mood(state: &GameState) -> MoodResult<Prediction> {
    let Some(words) = state.words.as_ref() else {
        log::warn!("prediction refused: word association not completed");
        return Err(MoodError::MissingPrerequisite);
    };

    let mut scores = ScoreBoard::new();
    for (mood, count) in words.iter() {
        scores.add(mood, count * WORD_WEIGHT);
    }
    if let Some(mood) = state.drawing {
        scores.add(mood, DRAWING_WEIGHT);
    }
    if let Some(story) = state.story {
        scores.add(story.mood, u32::from(story.strength));
    }
    if let Some(mood) = state.color {
        scores.add(mood, COLOR_WEIGHT);
    }

    let mood = scores.leader();
    log::debug!("prediction: {} from {:?}", mood, scores);
    Ok(Prediction { mood, scores })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::{StorySignal, WordSignal};

    fn words(pairs: &[(MoodCategory, u32)]) -> Option<WordSignal> {
        Some(pairs.iter().copied().collect())
    }

    #[test]
    fn test_refuses_without_words() {
        let state = GameState {
            words: None,
            drawing: Some(MoodCategory::Happy),
            story: Some(StorySignal {
                mood: MoodCategory::Happy,
                strength: 2,
                polarity: 0.8,
            }),
            color: Some(MoodCategory::Happy),
        };
        assert!(matches!(
            predict_mood(&state),
            Err(MoodError::MissingPrerequisite)
        ));
        assert!(matches!(
            predict_mood(&GameState::default()),
            Err(MoodError::MissingPrerequisite)
        ));
    }

    #[test]
    fn test_end_to_end_scenario() {
        let state = GameState {
            words: words(&[(MoodCategory::Happy, 2), (MoodCategory::Calm, 1)]),
            drawing: Some(MoodCategory::Energetic),
            story: Some(StorySignal {
                mood: MoodCategory::Sad,
                strength: 2,
                polarity: -0.5,
            }),
            color: Some(MoodCategory::Happy),
        };
        let prediction = predict_mood(&state).unwrap();

        assert_eq!(prediction.mood, MoodCategory::Happy);
        let s = prediction.scores;
        assert_eq!(s.get(MoodCategory::Happy), 7);
        assert_eq!(s.get(MoodCategory::Sad), 2);
        assert_eq!(s.get(MoodCategory::Calm), 3);
        assert_eq!(s.get(MoodCategory::Energetic), 2);
        for mood in [
            MoodCategory::Stressed,
            MoodCategory::Tired,
            MoodCategory::Anxious,
            MoodCategory::Thoughtful,
        ] {
            assert_eq!(s.get(mood), 0);
        }
    }

    #[test]
    fn test_tie_goes_to_earlier_category() {
        let state = GameState {
            words: words(&[(MoodCategory::Thoughtful, 1), (MoodCategory::Calm, 1)]),
            ..GameState::default()
        };
        assert_eq!(predict_mood(&state).unwrap().mood, MoodCategory::Calm);

        // Drawing and color lift tired to 3, level with sad's single word.
        let state = GameState {
            words: words(&[(MoodCategory::Sad, 1)]),
            drawing: Some(MoodCategory::Tired),
            color: Some(MoodCategory::Tired),
            ..GameState::default()
        };
        let prediction = predict_mood(&state).unwrap();
        assert_eq!(prediction.scores.get(MoodCategory::Tired), 3);
        assert_eq!(prediction.mood, MoodCategory::Sad);
    }

    #[test]
    fn test_neutral_contributes_nothing() {
        let state = GameState {
            words: words(&[(MoodCategory::Neutral, 4), (MoodCategory::Tired, 1)]),
            story: Some(StorySignal {
                mood: MoodCategory::Neutral,
                strength: 0,
                polarity: 0.0,
            }),
            ..GameState::default()
        };
        let prediction = predict_mood(&state).unwrap();
        assert_eq!(prediction.mood, MoodCategory::Tired);
        assert_eq!(prediction.scores.iter().map(|(_, t)| t).sum::<u32>(), 3);
    }

    #[test]
    fn test_only_neutral_words_fall_back_to_first_category() {
        let state = GameState {
            words: words(&[(MoodCategory::Neutral, 2)]),
            ..GameState::default()
        };
        let prediction = predict_mood(&state).unwrap();
        assert_eq!(prediction.mood, MoodCategory::Happy);
        assert_eq!(prediction.scores, ScoreBoard::new());
    }

    #[test]
    fn test_deterministic_and_pure() {
        let state = GameState {
            words: words(&[(MoodCategory::Anxious, 1), (MoodCategory::Stressed, 1)]),
            drawing: Some(MoodCategory::Anxious),
            story: Some(StorySignal {
                mood: MoodCategory::Anxious,
                strength: 1,
                polarity: -0.2,
            }),
            color: Some(MoodCategory::Sad),
        };
        let snapshot = state.clone();
        let first = predict_mood(&state).unwrap();
        for _ in 0..10 {
            assert_eq!(predict_mood(&state).unwrap(), first);
        }
        assert_eq!(state, snapshot);
        assert_eq!(first.mood, MoodCategory::Anxious);
        assert_eq!(first.scores.get(MoodCategory::Anxious), 6);
    }

    #[test]
    fn test_scoreboard_serializes_in_order() {
        let mut board = ScoreBoard::new();
        assert!(board.add(MoodCategory::Calm, 3));
        assert!(!board.add(MoodCategory::Neutral, 5));
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(
            json,
            r#"{"happy":0,"sad":0,"stressed":0,"calm":3,"energetic":0,"tired":0,"anxious":0,"thoughtful":0}"#
        );
    }
}
