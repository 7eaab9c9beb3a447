//! Lexicon-based emotion feature extraction.
//!
//! Scores free text against eight basic emotions using keyword matching,
//! nearby intensity modifiers and negation words, then follows sentiment
//! sentence by sentence to classify the text's emotional arc.
//!
//! ```
//! let features = pensieve::extract_features("I am not very happy");
//! assert_eq!(features.emotion_scores.joy.score, -0.75);
//!
//! let progression =
//!     pensieve::analyze_progression("I was terrified. Then I felt hopeful. Now I am thrilled.");
//! assert_eq!(progression.emotional_arc, pensieve::EmotionalArc::Recovery);
//! ```

use once_cell::sync::Lazy;

mod analyzer;
mod config;
mod emotion;
mod error;
mod extract;
mod lexicon;
mod progression;
mod recommend;
mod tuning;

pub use analyzer::{EmotionAnalyzer, Report};
pub use config::Config;
pub use emotion::{Emotion, PerEmotion, Sentiment, Valence};
pub use error::{Error, Result};
pub use extract::{
    normalize, overall_sentiment, tokenize, EmotionFeatures, EmotionScore, KeywordMatch,
};
pub use lexicon::{Lexicon, LexiconSpec};
pub use progression::{
    classify_arc, dominant_emotion, stability, EmotionalArc, Progression, ProgressionEntry,
};
pub use tuning::Tuning;

static DEFAULT_ANALYZER: Lazy<EmotionAnalyzer> = Lazy::new(EmotionAnalyzer::default);

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Analyzer with the built-in lexicon and default tuning.
pub fn default_analyzer() -> &'static EmotionAnalyzer {
    &DEFAULT_ANALYZER
}

pub fn extract_features(text: &str) -> EmotionFeatures {
    DEFAULT_ANALYZER.extract_features(text)
}

pub fn analyze_progression(text: &str) -> Progression {
    DEFAULT_ANALYZER.analyze_progression(text)
}

pub fn analyze(text: &str) -> Report {
    DEFAULT_ANALYZER.analyze(text)
}
