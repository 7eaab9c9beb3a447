use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Numeric knobs of the extractor.
///
/// The defaults reproduce the reference behavior; every field can be
/// overridden from a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tuning {
    /// Tokens scanned before a keyword for an intensity modifier.
    pub intensity_window_before: usize,
    /// Tokens scanned after a keyword when nothing was found before it.
    pub intensity_window_after: usize,
    /// Tokens scanned before a keyword for a negation word.
    pub negation_window: usize,
    /// Multiplier applied to a negated keyword's intensity.
    pub negation_factor: f64,
    /// Hysteresis band between the positive and negative aggregates.
    pub sentiment_margin: f64,
    /// A sentence whose best score does not exceed this is labelled neutral.
    pub dominant_floor: f64,
    /// Emotional phrases must be strictly longer than this (in chars).
    pub phrase_min_chars: usize,
    pub phrase_cap: usize,
    /// Emotions scoring above this drive recommendations.
    pub recommendation_threshold: f64,
    pub recommendation_cap: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            intensity_window_before: 3,
            intensity_window_after: 2,
            negation_window: 4,
            negation_factor: -0.5,
            sentiment_margin: 0.5,
            dominant_floor: 0.5,
            phrase_min_chars: 10,
            phrase_cap: 5,
            recommendation_threshold: 1.0,
            recommendation_cap: 4,
        }
    }
}

impl Tuning {
    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("negation_factor", self.negation_factor),
            ("sentiment_margin", self.sentiment_margin),
            ("dominant_floor", self.dominant_floor),
            ("recommendation_threshold", self.recommendation_threshold),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(Error::InvalidTuning(format!("{name} must be finite")));
            }
        }
        let non_negative = [
            ("sentiment_margin", self.sentiment_margin),
            ("dominant_floor", self.dominant_floor),
            ("recommendation_threshold", self.recommendation_threshold),
        ];
        for (name, value) in non_negative {
            if value < 0.0 {
                return Err(Error::InvalidTuning(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}
