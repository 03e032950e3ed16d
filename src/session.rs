//! Session state: the four signals of one user's play-through.
//!
//! A [`Session`] is owned by exactly one caller. Each recording operation
//! classifies its input first and only then overwrites the matching slot, so
//! a failed operation leaves the state as it was.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::aggregator::{predict_mood, Prediction};
use crate::error::MoodResult;
use crate::mood::MoodCategory;
use crate::signals::{
    catalog_tag, classify_color, classify_words, interpret_drawing, interpret_story,
    PolarityAnalyzer, Rgb, StorySignal, WordSignal,
};

/// Number of activities that feed the prediction.
pub const ACTIVITY_COUNT: usize = 4;

/// The four signals, each independently present (`Some`) or absent (`None`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub words: Option<WordSignal>,
    pub drawing: Option<MoodCategory>,
    pub story: Option<StorySignal>,
    pub color: Option<MoodCategory>,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count of present signals, 0 to 4.
    pub fn progress(&self) -> usize {
        [
            self.words.is_some(),
            self.drawing.is_some(),
            self.story.is_some(),
            self.color.is_some(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }

    /// All four activities done.
    pub fn is_complete(&self) -> bool {
        self.progress() == ACTIVITY_COUNT
    }

    /// Clear every signal.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Same color as [`DEFAULT_PICKER_COLOR`](crate::signals::DEFAULT_PICKER_COLOR).
const DEFAULT_PICKER: Rgb = Rgb::new(0x00, 0xf9, 0x00);

/// One interactive session: its signals plus the color picker's position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub state: GameState,
    /// Currently picked color. Only [`Session::submit_color`] turns it into a signal.
    pub picker: Rgb,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            state: GameState::default(),
            picker: DEFAULT_PICKER,
        }
    }

    /// Record the selected word tags. An empty selection clears the signal.
    ///
    /// Tags must come from the catalog; a repeated tag counts once.
    pub fn select_words<I, S>(&mut self, tags: I) -> MoodResult<Option<&WordSignal>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selected: Vec<&'static str> = Vec::new();
        for tag in tags {
            let tag = catalog_tag(tag.as_ref())?;
            if !selected.contains(&tag) {
                selected.push(tag);
            }
        }
        self.state.words = classify_words(selected);
        Ok(self.state.words.as_ref())
    }

    /// Record the drawing's self-declared mood.
    pub fn label_drawing(&mut self, has_drawing: bool, label: &str) -> MoodResult<Option<MoodCategory>> {
        self.state.drawing = interpret_drawing(has_drawing, label)?;
        Ok(self.state.drawing)
    }

    /// Score and record the story continuation. Blank text clears the signal.
    pub fn write_story(
        &mut self,
        text: &str,
        analyzer: &dyn PolarityAnalyzer,
    ) -> MoodResult<Option<StorySignal>> {
        self.state.story = interpret_story(text, analyzer)?;
        Ok(self.state.story)
    }

    /// Move the color picker. Does not record a signal.
    pub fn pick_color(&mut self, hex: &str) -> MoodResult<Rgb> {
        self.picker = Rgb::from_hex(hex)?;
        Ok(self.picker)
    }

    /// Confirm the picked color, overwriting any earlier color signal.
    pub fn submit_color(&mut self) -> MoodCategory {
        let mood = classify_color(self.picker);
        self.state.color = Some(mood);
        log::info!("session {}: color saved, detected mood {}", self.id, mood.title());
        mood
    }

    /// Predict from the current signals. See [`predict_mood`].
    pub fn predict(&self) -> MoodResult<Prediction> {
        predict_mood(&self.state)
    }

    pub fn progress(&self) -> usize {
        self.state.progress()
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    /// Start over: all signals absent, picker back on its default color.
    pub fn reset(&mut self) {
        self.state.reset();
        self.picker = DEFAULT_PICKER;
        log::debug!("session {}: reset", self.id);
    }
}
