use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::extract::{self, EmotionFeatures};
use crate::lexicon::Lexicon;
use crate::progression::{self, Progression};
use crate::recommend;
use crate::tuning::Tuning;

/// Everything the analyzer knows about one text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub features: EmotionFeatures,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progression: Option<Progression>,
    pub recommendations: Vec<String>,
}

/// Lexicon-driven emotion analyzer.
///
/// Holds an immutable lexicon and tuning; every method is a pure function of
/// its input, so one analyzer can be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct EmotionAnalyzer {
    lexicon: Lexicon,
    tuning: Tuning,
}

impl EmotionAnalyzer {
    pub fn new(lexicon: Lexicon, tuning: Tuning) -> Result<Self> {
        tuning.validate()?;
        Ok(Self { lexicon, tuning })
    }

    pub fn from_config(config: Config) -> Result<Self> {
        let lexicon = match config.lexicon {
            Some(spec) => Lexicon::try_from(spec)?,
            None => Lexicon::default(),
        };
        Self::new(lexicon, config.tuning)
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Per-emotion scores, emotional phrases and the overall sentiment label.
    ///
    /// Never fails: empty or non-linguistic input yields zero scores and a
    /// neutral label.
    pub fn extract_features(&self, text: &str) -> EmotionFeatures {
        extract::extract(&self.lexicon, &self.tuning, text)
    }

    /// Sentence-by-sentence labels, the overall emotional arc and a
    /// stability score.
    pub fn analyze_progression(&self, text: &str) -> Progression {
        progression::analyze(&self.lexicon, &self.tuning, text)
    }

    pub fn recommend(&self, features: &EmotionFeatures) -> Vec<String> {
        recommend::recommend(features, &self.tuning)
    }

    pub fn analyze(&self, text: &str) -> Report {
        self.report(text, true)
    }

    pub fn report(&self, text: &str, include_progression: bool) -> Report {
        let features = self.extract_features(text);
        let progression = include_progression.then(|| self.analyze_progression(text));
        let recommendations = self.recommend(&features);
        debug!(
            chars = text.chars().count(),
            sentiment = %features.overall_sentiment,
            sentences = progression.as_ref().map_or(0, |p| p.entries.len()),
            "analyzed text"
        );
        Report {
            features,
            progression,
            recommendations,
        }
    }
}
