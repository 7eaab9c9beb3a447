use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};

use crate::emotion::{Emotion, PerEmotion, Sentiment};
use crate::extract::{extract, round2, EmotionScore};
use crate::lexicon::Lexicon;
use crate::tuning::Tuning;

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionalArc {
    InsufficientData,
    Recovery,
    Decline,
    Stable,
    GenerallyPositive,
    GenerallyNegative,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressionEntry {
    /// 1-based position in the raw split, counting empty pieces.
    pub sentence_number: usize,
    pub text: String,
    /// `None` when no emotion clears the dominance floor.
    #[serde(serialize_with = "emotion_or_neutral")]
    pub dominant_emotion: Option<Emotion>,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Progression {
    #[serde(rename = "progression")]
    pub entries: Vec<ProgressionEntry>,
    pub emotional_arc: EmotionalArc,
    pub stability: f64,
}

fn emotion_or_neutral<S: Serializer>(
    emotion: &Option<Emotion>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(emotion.map_or("neutral", Emotion::as_str))
}

static SENTENCE_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]").unwrap());

// ---------------------------------------------------------------------------
// Per-sentence labels
// ---------------------------------------------------------------------------

/// Highest-scoring emotion, earliest in canonical order on ties.
pub fn dominant_emotion(scores: &PerEmotion<EmotionScore>, floor: f64) -> Option<Emotion> {
    let mut best: Option<(Emotion, f64)> = None;
    for (emotion, score) in scores.iter() {
        if score.score > best.map_or(0.0, |(_, top)| top) {
            best = Some((emotion, score.score));
        }
    }
    best.filter(|&(_, top)| top > floor).map(|(emotion, _)| emotion)
}

// ---------------------------------------------------------------------------
// Arc and stability
// ---------------------------------------------------------------------------

pub fn classify_arc(sentiments: &[Sentiment]) -> EmotionalArc {
    let (Some(&first), Some(&last)) = (sentiments.first(), sentiments.last()) else {
        return EmotionalArc::InsufficientData;
    };
    if sentiments.len() < 2 {
        return EmotionalArc::InsufficientData;
    }

    let positives = sentiments
        .iter()
        .filter(|&&s| s == Sentiment::Positive)
        .count();
    let negatives = sentiments
        .iter()
        .filter(|&&s| s == Sentiment::Negative)
        .count();

    if positives > negatives {
        if first == Sentiment::Negative && last == Sentiment::Positive {
            EmotionalArc::Recovery
        } else {
            EmotionalArc::GenerallyPositive
        }
    } else if negatives > positives {
        if first == Sentiment::Positive && last == Sentiment::Negative {
            EmotionalArc::Decline
        } else {
            EmotionalArc::GenerallyNegative
        }
    } else {
        EmotionalArc::Stable
    }
}

/// Share of adjacent sentence pairs whose sentiment stays the same.
pub fn stability(sentiments: &[Sentiment]) -> f64 {
    if sentiments.len() < 2 {
        return 1.0;
    }
    let transitions = sentiments.windows(2).filter(|w| w[0] != w[1]).count();
    round2(1.0 - transitions as f64 / (sentiments.len() - 1) as f64)
}

pub(crate) fn analyze(lexicon: &Lexicon, tuning: &Tuning, text: &str) -> Progression {
    let entries: Vec<ProgressionEntry> = SENTENCE_SPLIT_RE
        .split(text)
        .map(str::trim)
        .enumerate()
        .filter(|(_, s)| !s.is_empty())
        .map(|(i, sentence)| {
            let features = extract(lexicon, tuning, sentence);
            ProgressionEntry {
                sentence_number: i + 1,
                text: sentence.to_string(),
                dominant_emotion: dominant_emotion(&features.emotion_scores, tuning.dominant_floor),
                sentiment: features.overall_sentiment,
            }
        })
        .collect();

    let sentiments: Vec<Sentiment> = entries.iter().map(|e| e.sentiment).collect();
    Progression {
        emotional_arc: classify_arc(&sentiments),
        stability: stability(&sentiments),
        entries,
    }
}
