//! Drawing mood: the user labels their own drawing, no classifier involved.

use crate::error::{MoodError, MoodResult};
use crate::mood::MoodCategory;

/// Labels offered next to the canvas.
pub const DRAWING_MOODS: [&str; 8] = [
    "Happy",
    "Sad",
    "Stressed",
    "Calm",
    "Energetic",
    "Tired",
    "Anxious",
    "Thoughtful",
];

/// Normalize a drawing label into a signal.
///
/// Without a drawing the signal is absent and the label is ignored. The
/// label is matched case-insensitively and must be one of [`DRAWING_MOODS`].
pub fn interpret_drawing(has_drawing: bool, label: &str) -> MoodResult<Option<MoodCategory>> {
    if !has_drawing {
        return Ok(None);
    }
    let mood: MoodCategory = label.parse()?;
    if !mood.is_scorable() {
        return Err(MoodError::UnknownMood(label.to_string()));
    }
    log::debug!("drawing signal: {}", mood);
    Ok(Some(mood))
}
