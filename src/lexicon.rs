//! Lexicon-based polarity analyzer.
//!
//! A small, local [`PolarityAnalyzer`] so stories can be scored without an
//! external NLP service. Words are matched case-insensitively; the polarity
//! of a text is the mean of its matched words, in `[-1, 1]`.
//!
//! Two modifiers look at the preceding tokens:
//!
//! - an intensifier (`very`, `really`, ...) scales the next word by
//!   [`INTENSIFIER_FACTOR`];
//! - a negator (`not`, `never`, ...) within the two preceding tokens
//!   scales it by [`NEGATION_FACTOR`].
//!
//! # Example
//!
//! ```
//! use mood_discovery::lexicon::LexiconAnalyzer;
//! use mood_discovery::signals::PolarityAnalyzer;
//!
//! let analyzer = LexiconAnalyzer::default();
//! assert!(analyzer.polarity("What a wonderful morning").unwrap() > 0.3);
//! assert!(analyzer.polarity("I am not happy").unwrap() < 0.0);
//! ```

use std::collections::HashMap;

use crate::signals::PolarityAnalyzer;

/// Multiplier applied to a word directly after an intensifier.
pub const INTENSIFIER_FACTOR: f64 = 1.3;

/// Multiplier applied to a word shortly after a negator.
pub const NEGATION_FACTOR: f64 = -0.5;

const NEGATORS: &[&str] = &[
    "not", "no", "never", "nothing", "hardly", "don't", "didn't", "doesn't", "isn't",
    "wasn't", "aren't", "weren't", "can't", "couldn't", "won't", "wouldn't",
];

const INTENSIFIERS: &[&str] = &[
    "very", "really", "so", "extremely", "incredibly", "totally", "super", "deeply",
];

/// Word → polarity lexicon with negation and intensifier handling.
#[derive(Debug, Clone)]
pub struct LexiconAnalyzer {
    words: HashMap<String, f64>,
}

impl LexiconAnalyzer {
    /// An empty lexicon. Every text scores 0.0.
    pub fn new() -> Self {
        Self {
            words: HashMap::new(),
        }
    }

    /// Add or replace a word. The polarity is clamped to `[-1, 1]`.
    pub fn insert(&mut self, word: &str, polarity: f64) {
        self.words
            .insert(word.to_lowercase(), polarity.clamp(-1.0, 1.0));
    }

    /// Merge extra words over the current lexicon.
    pub fn with_words<'a, I>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a f64)>,
    {
        for (word, polarity) in words {
            self.insert(word, *polarity);
        }
        self
    }

    /// Polarity of a single word, if known.
    pub fn get(&self, word: &str) -> Option<f64> {
        self.words.get(&word.to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Score a text. Texts without any known word score 0.0.
    pub fn score(&self, text: &str) -> f64 {
        let tokens: Vec<String> = text
            .split(|c: char| !(c.is_alphabetic() || c == '\'' || c == '’'))
            .filter(|t| !t.is_empty())
            .map(|t| t.replace('’', "'").to_lowercase())
            .collect();

        let mut sum = 0.0;
        let mut matched = 0usize;
        for (i, token) in tokens.iter().enumerate() {
            let Some(&base) = self.words.get(token) else {
                continue;
            };
            let mut value = base;

            let prev = i.checked_sub(1).map(|j| tokens[j].as_str());
            if prev.is_some_and(|p| INTENSIFIERS.contains(&p)) {
                value *= INTENSIFIER_FACTOR;
            }
            let negated = tokens[i.saturating_sub(2)..i]
                .iter()
                .any(|t| NEGATORS.contains(&t.as_str()));
            if negated {
                value *= NEGATION_FACTOR;
            }

            sum += value.clamp(-1.0, 1.0);
            matched += 1;
        }

        if matched == 0 {
            return 0.0;
        }
        (sum / matched as f64).clamp(-1.0, 1.0)
    }
}

impl Default for LexiconAnalyzer {
    /// Built-in lexicon of common feeling words.
    fn default() -> Self {
        let mut lexicon = Self::new();

        for (words, polarity) in [
            (
                &[
                    "wonderful", "amazing", "fantastic", "excellent", "perfect", "brilliant",
                    "awesome", "best", "delighted", "thrilled", "joyful", "love", "loved",
                ][..],
                0.9,
            ),
            (
                &[
                    "happy", "great", "glad", "excited", "cheerful", "beautiful", "lovely",
                    "fun", "grateful", "hopeful", "proud", "bright", "sunny", "energized",
                ][..],
                0.7,
            ),
            (
                &[
                    "good", "nice", "pleasant", "calm", "peaceful", "relaxed", "rested",
                    "refreshed", "content", "better", "warm", "kind", "fresh", "gentle",
                ][..],
                0.5,
            ),
            (
                &["okay", "fine", "alright", "quiet", "normal", "steady", "curious"][..],
                0.2,
            ),
            (
                &["tired", "bored", "slow", "uneasy", "unsure", "restless", "sleepy", "odd"][..],
                -0.2,
            ),
            (
                &[
                    "worried", "nervous", "anxious", "stressed", "tense", "lonely", "exhausted",
                    "confused", "gloomy", "grey", "gray", "dull", "rainy", "bad",
                ][..],
                -0.5,
            ),
            (
                &[
                    "sad", "upset", "angry", "afraid", "scared", "hurt", "frustrated",
                    "overwhelmed", "miserable", "unhappy", "hopeless",
                ][..],
                -0.7,
            ),
            (
                &[
                    "terrible", "awful", "horrible", "worst", "hate", "hated", "devastated",
                    "heartbroken", "dreadful",
                ][..],
                -0.9,
            ),
        ] {
            for word in words {
                lexicon.insert(word, polarity);
            }
        }

        lexicon
    }
}

impl PolarityAnalyzer for LexiconAnalyzer {
    fn polarity(&self, text: &str) -> anyhow::Result<f64> {
        Ok(self.score(text))
    }
}
