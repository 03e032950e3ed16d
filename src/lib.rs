//! # Mood Discovery
//!
//! Infers a user's mood from four short play activities and suggests a way
//! to cope with it.
//!
//! ```text
//! word tags ─┐
//! drawing   ─┤  signals::*   ┌────────────┐  aggregator   ┌────────────┐
//! story     ─┼─────────────▶ │ GameState  │ ────────────▶ │ Prediction │ ─▶ ResponseCatalog
//! color     ─┘               └────────────┘               └────────────┘
//! ```
//!
//! Each activity is classified into an optional signal and stored in a
//! caller-owned [`GameState`]. [`predict_mood`] weighs the present signals
//! (words ×3, drawing 2, story 0–2, color 1) into a [`ScoreBoard`] and picks
//! the leading mood; ties go to the earlier category.
//!
//! # Example
//!
//! ```
//! use mood_discovery::{MoodCategory, ResponseCatalog, Session};
//!
//! let mut session = Session::new();
//! session.select_words(["😊 Happy", "🌟 Joyful", "😌 Calm"]).unwrap();
//! session.label_drawing(true, "Energetic").unwrap();
//! session.pick_color("#ffff00").unwrap();
//! session.submit_color();
//!
//! let prediction = session.predict().unwrap();
//! assert_eq!(prediction.mood, MoodCategory::Happy);
//! assert_eq!(prediction.scores.get(MoodCategory::Happy), 7);
//!
//! let advice = ResponseCatalog::default();
//! assert!(advice.suggestion(prediction.mood).contains("happy"));
//! ```

pub mod aggregator;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod mood;
pub mod responses;
pub mod server;
pub mod session;
pub mod signals;

pub use aggregator::{predict_mood, Prediction, ScoreBoard};
pub use config::MoodConfig;
pub use error::{ConfigError, MoodError, MoodResult};
pub use lexicon::LexiconAnalyzer;
pub use mood::MoodCategory;
pub use responses::ResponseCatalog;
pub use session::{GameState, Session};
pub use signals::{PolarityAnalyzer, Rgb, StorySignal, WordSignal};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
