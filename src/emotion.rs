use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Emotions
// ---------------------------------------------------------------------------

/// One of the eight basic emotions tracked by the lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Fear,
    Surprise,
    Disgust,
    Trust,
    Anticipation,
}

/// Which side of the sentiment balance an emotion counts toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Valence {
    Positive,
    Negative,
}

impl Emotion {
    /// Every emotion in canonical order. Ties are broken by this order.
    pub const ALL: [Emotion; 8] = [
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Surprise,
        Emotion::Disgust,
        Emotion::Trust,
        Emotion::Anticipation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Surprise => "surprise",
            Emotion::Disgust => "disgust",
            Emotion::Trust => "trust",
            Emotion::Anticipation => "anticipation",
        }
    }

    /// Surprise has no valence and never moves the overall sentiment.
    pub fn valence(self) -> Option<Valence> {
        match self {
            Emotion::Joy | Emotion::Trust | Emotion::Anticipation => Some(Valence::Positive),
            Emotion::Sadness | Emotion::Anger | Emotion::Fear | Emotion::Disgust => {
                Some(Valence::Negative)
            }
            Emotion::Surprise => None,
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Fixed-shape per-emotion record
// ---------------------------------------------------------------------------

/// A value for each of the eight emotions.
///
/// Serializes as an object keyed by emotion name, in [`Emotion::ALL`] order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerEmotion<T> {
    pub joy: T,
    pub sadness: T,
    pub anger: T,
    pub fear: T,
    pub surprise: T,
    pub disgust: T,
    pub trust: T,
    pub anticipation: T,
}

impl<T> PerEmotion<T> {
    pub fn from_fn(mut f: impl FnMut(Emotion) -> T) -> Self {
        Self {
            joy: f(Emotion::Joy),
            sadness: f(Emotion::Sadness),
            anger: f(Emotion::Anger),
            fear: f(Emotion::Fear),
            surprise: f(Emotion::Surprise),
            disgust: f(Emotion::Disgust),
            trust: f(Emotion::Trust),
            anticipation: f(Emotion::Anticipation),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Emotion, &T)> {
        Emotion::ALL.into_iter().map(move |e| (e, &self[e]))
    }

    pub fn map<U>(&self, mut f: impl FnMut(Emotion, &T) -> U) -> PerEmotion<U> {
        PerEmotion::from_fn(|e| f(e, &self[e]))
    }
}

impl<T> Index<Emotion> for PerEmotion<T> {
    type Output = T;

    fn index(&self, emotion: Emotion) -> &T {
        match emotion {
            Emotion::Joy => &self.joy,
            Emotion::Sadness => &self.sadness,
            Emotion::Anger => &self.anger,
            Emotion::Fear => &self.fear,
            Emotion::Surprise => &self.surprise,
            Emotion::Disgust => &self.disgust,
            Emotion::Trust => &self.trust,
            Emotion::Anticipation => &self.anticipation,
        }
    }
}

impl<T> IndexMut<Emotion> for PerEmotion<T> {
    fn index_mut(&mut self, emotion: Emotion) -> &mut T {
        match emotion {
            Emotion::Joy => &mut self.joy,
            Emotion::Sadness => &mut self.sadness,
            Emotion::Anger => &mut self.anger,
            Emotion::Fear => &mut self.fear,
            Emotion::Surprise => &mut self.surprise,
            Emotion::Disgust => &mut self.disgust,
            Emotion::Trust => &mut self.trust,
            Emotion::Anticipation => &mut self.anticipation,
        }
    }
}

// ---------------------------------------------------------------------------
// Sentiment label
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
