//! Story completion: free text scored by a polarity analyzer.

use serde::{Deserialize, Serialize};

use crate::error::{MoodError, MoodResult};
use crate::mood::MoodCategory;

/// The sentence the user is asked to continue.
pub const STORY_PROMPT: &str = "Once upon a time, on a day just like today, I woke up feeling...";

/// Black-box text sentiment scorer.
///
/// Implementations return a polarity in `[-1, 1]`; they must be synchronous
/// and side-effect free.
pub trait PolarityAnalyzer: Send + Sync {
    fn polarity(&self, text: &str) -> anyhow::Result<f64>;
}

impl<F> PolarityAnalyzer for F
where
    F: Fn(&str) -> anyhow::Result<f64> + Send + Sync,
{
    fn polarity(&self, text: &str) -> anyhow::Result<f64> {
        self(text)
    }
}

/// The classified story. A zero-strength neutral story is still present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StorySignal {
    pub mood: MoodCategory,
    /// 0, 1 or 2.
    pub strength: u8,
    pub polarity: f64,
}

/// Map a polarity to `(mood, strength)`. Thresholds are strict.
pub fn classify_polarity(polarity: f64) -> (MoodCategory, u8) {
    if polarity > 0.3 {
        (MoodCategory::Happy, 2)
    } else if polarity < -0.3 {
        (MoodCategory::Sad, 2)
    } else if polarity > 0.1 {
        (MoodCategory::Calm, 1)
    } else if polarity < -0.1 {
        (MoodCategory::Anxious, 1)
    } else {
        (MoodCategory::Neutral, 0)
    }
}

/// Score a story. Blank text yields `None` without calling the analyzer.
///
/// Non-finite analyzer output is an [`MoodError::AnalyzerFailure`]; finite
/// values outside `[-1, 1]` are clamped.
pub fn interpret_story(
    text: &str,
    analyzer: &dyn PolarityAnalyzer,
) -> MoodResult<Option<StorySignal>> {
    if text.trim().is_empty() {
        return Ok(None);
    }

    let raw = analyzer.polarity(text).map_err(|e| {
        log::warn!("polarity analyzer failed: {:#}", e);
        MoodError::AnalyzerFailure(format!("{:#}", e))
    })?;
    if !raw.is_finite() {
        return Err(MoodError::AnalyzerFailure(format!(
            "non-finite polarity {}",
            raw
        )));
    }

    let polarity = raw.clamp(-1.0, 1.0);
    let (mood, strength) = classify_polarity(polarity);
    log::debug!(
        "story signal: polarity={:.2} mood={} strength={}",
        polarity,
        mood,
        strength
    );
    Ok(Some(StorySignal {
        mood,
        strength,
        polarity,
    }))
}
