//! Per-activity signal classifiers.
//!
//! ```text
//! word tags ──▶ words::classify_words   ──▶ WordSignal   (weight 3 per tag)
//! drawing   ──▶ drawing::interpret_drawing ─▶ MoodCategory (weight 2)
//! story     ──▶ story::interpret_story  ──▶ StorySignal  (weight = strength)
//! color     ──▶ color::classify_color   ──▶ MoodCategory (weight 1)
//! ```
//!
//! Every classifier is a pure function. Absent signals are `None`.

pub mod color;
pub mod drawing;
pub mod story;
pub mod words;

pub use color::{classify_color, classify_hue, Rgb, DEFAULT_PICKER_COLOR};
pub use drawing::{interpret_drawing, DRAWING_MOODS};
pub use story::{classify_polarity, interpret_story, PolarityAnalyzer, StorySignal, STORY_PROMPT};
pub use words::{catalog_tag, classify_tag, classify_words, WordSignal, KEYWORD_GROUPS, WORD_TAGS};
