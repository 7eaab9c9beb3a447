use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::emotion::{Emotion, PerEmotion, Sentiment, Valence};
use crate::lexicon::{Lexicon, Phrase};
use crate::tuning::Tuning;

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

/// A single keyword hit and what it contributed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatch {
    pub keyword: String,
    pub intensity: f64,
    pub negated: bool,
    pub score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionScore {
    pub score: f64,
    pub matches: Vec<KeywordMatch>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionFeatures {
    pub emotion_scores: PerEmotion<EmotionScore>,
    pub emotional_phrases: Vec<String>,
    pub overall_sentiment: Sentiment,
}

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

static DISALLOWED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{Alphabetic}\p{N}\s.,!?;:]").unwrap());

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static PHRASE_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?;]").unwrap());

const KEPT_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

// ---------------------------------------------------------------------------
// Text preparation
// ---------------------------------------------------------------------------

/// Lowercase, drop everything but letters, digits, whitespace and
/// `. , ! ? ; :`, then collapse whitespace.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = DISALLOWED_RE.replace_all(&lowered, "");
    WHITESPACE_RE.replace_all(&stripped, " ").trim().to_string()
}

/// Split normalized text into words on whitespace and kept punctuation.
pub fn tokenize(normalized: &str) -> Vec<&str> {
    normalized
        .split(|c: char| c.is_whitespace() || KEPT_PUNCTUATION.contains(&c))
        .filter(|t| !t.is_empty())
        .collect()
}

/// Round to two decimals; never yields negative zero.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0 + 0.0
}

// ---------------------------------------------------------------------------
// Proximity rules
// ---------------------------------------------------------------------------

/// Nearest modifier before the keyword, else nearest after it. A scan stops
/// at another emotion keyword, which claims any modifier beyond it.
fn intensity_for(
    lexicon: &Lexicon,
    tuning: &Tuning,
    tokens: &[&str],
    start: usize,
    end: usize,
) -> f64 {
    for back in 1..=tuning.intensity_window_before {
        let Some(j) = start.checked_sub(back) else {
            break;
        };
        if let Some(weight) = lexicon.modifier_ending_at(tokens, j) {
            return weight;
        }
        if lexicon.is_keyword(tokens[j]) {
            break;
        }
    }
    for ahead in 1..=tuning.intensity_window_after {
        let j = end + ahead;
        if j >= tokens.len() {
            break;
        }
        if let Some(weight) = lexicon.modifier_starting_at(tokens, j) {
            return weight;
        }
        if lexicon.is_keyword(tokens[j]) {
            break;
        }
    }
    1.0
}

fn is_negated(lexicon: &Lexicon, tuning: &Tuning, tokens: &[&str], start: usize) -> bool {
    tokens[start.saturating_sub(tuning.negation_window)..start]
        .iter()
        .any(|t| lexicon.is_negation(t))
}

fn keyword_match(
    lexicon: &Lexicon,
    tuning: &Tuning,
    tokens: &[&str],
    phrase: &Phrase,
) -> Option<KeywordMatch> {
    // Only the first occurrence of a keyword counts.
    let start = phrase.find_in(tokens)?;
    let end = start + phrase.words.len() - 1;
    let intensity = intensity_for(lexicon, tuning, tokens, start, end);
    let negated = is_negated(lexicon, tuning, tokens, start);
    let score = if negated {
        intensity * tuning.negation_factor
    } else {
        intensity
    };
    Some(KeywordMatch {
        keyword: phrase.text.clone(),
        intensity,
        negated,
        score,
    })
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

fn score_emotion(
    lexicon: &Lexicon,
    tuning: &Tuning,
    tokens: &[&str],
    emotion: Emotion,
) -> EmotionScore {
    let matches: Vec<KeywordMatch> = lexicon
        .phrases(emotion)
        .iter()
        .filter_map(|phrase| keyword_match(lexicon, tuning, tokens, phrase))
        .inspect(|m| {
            trace!(
                emotion = %emotion,
                keyword = %m.keyword,
                intensity = m.intensity,
                negated = m.negated,
                "keyword matched"
            )
        })
        .collect();
    let total = matches.iter().fold(0.0, |acc, m| acc + m.score);
    EmotionScore {
        score: round2(total),
        matches,
    }
}

/// Compare the positive and negative emotion groups, with `margin` as a
/// dead band around a tie.
pub fn overall_sentiment(scores: &PerEmotion<EmotionScore>, margin: f64) -> Sentiment {
    let mut positive = 0.0;
    let mut negative = 0.0;
    for (emotion, score) in scores.iter() {
        match emotion.valence() {
            Some(Valence::Positive) => positive += score.score,
            Some(Valence::Negative) => negative += score.score,
            None => {}
        }
    }
    if positive > negative + margin {
        Sentiment::Positive
    } else if negative > positive + margin {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

fn emotional_phrases(lexicon: &Lexicon, tuning: &Tuning, normalized: &str) -> Vec<String> {
    PHRASE_SPLIT_RE
        .split(normalized)
        .map(str::trim)
        .filter(|s| s.chars().count() > tuning.phrase_min_chars)
        .filter(|s| lexicon.mentions_any(&tokenize(s)))
        .take(tuning.phrase_cap)
        .map(String::from)
        .collect()
}

pub(crate) fn extract(lexicon: &Lexicon, tuning: &Tuning, text: &str) -> EmotionFeatures {
    let normalized = normalize(text);
    let tokens = tokenize(&normalized);
    let emotion_scores = PerEmotion::from_fn(|e| score_emotion(lexicon, tuning, &tokens, e));
    let overall_sentiment = overall_sentiment(&emotion_scores, tuning.sentiment_margin);
    EmotionFeatures {
        emotional_phrases: emotional_phrases(lexicon, tuning, &normalized),
        emotion_scores,
        overall_sentiment,
    }
}
