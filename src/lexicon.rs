use std::collections::{BTreeMap, HashSet};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::emotion::{Emotion, PerEmotion};
use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Built-in word lists
// ---------------------------------------------------------------------------

const JOY: &[&str] = &[
    "happy", "excited", "thrilled", "delighted", "cheerful", "elated", "joyful", "pleased",
    "content", "satisfied", "glad", "euphoric",
];

const SADNESS: &[&str] = &[
    "sad", "depressed", "melancholy", "gloomy", "dejected", "downhearted", "sorrowful",
    "mournful", "blue", "unhappy", "miserable", "despondent",
];

const ANGER: &[&str] = &[
    "angry", "furious", "enraged", "livid", "irate", "incensed", "irritated", "annoyed",
    "frustrated", "mad", "outraged", "hostile",
];

const FEAR: &[&str] = &[
    "afraid", "scared", "terrified", "frightened", "anxious", "worried", "nervous", "panicked",
    "alarmed", "apprehensive", "fearful", "uneasy",
];

const SURPRISE: &[&str] = &[
    "surprised", "amazed", "astonished", "shocked", "stunned", "bewildered", "startled",
    "astounded", "flabbergasted", "dumbfounded", "speechless",
];

const DISGUST: &[&str] = &[
    "disgusted", "revolted", "repulsed", "sickened", "nauseated", "appalled", "horrified",
    "repelled", "offended", "disturbed", "grossed out",
];

const TRUST: &[&str] = &[
    "trust", "confident", "secure", "assured", "certain", "believing", "faithful", "loyal",
    "dependable", "reliable", "convinced",
];

const ANTICIPATION: &[&str] = &[
    "excited", "eager", "hopeful", "expectant", "optimistic", "looking forward", "anticipating",
    "awaiting", "prepared", "ready", "enthusiastic",
];

const MODIFIERS: &[(&str, f64)] = &[
    ("very", 1.5),
    ("extremely", 2.0),
    ("incredibly", 2.0),
    ("really", 1.3),
    ("quite", 1.2),
    ("somewhat", 0.8),
    ("slightly", 0.6),
    ("a bit", 0.7),
    ("kind of", 0.7),
    ("sort of", 0.7),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "nothing", "nobody", "nowhere", "neither", "nor", "none", "hardly",
    "scarcely", "barely",
];

static BUILTIN: Lazy<Lexicon> = Lazy::new(|| {
    Lexicon::try_from(LexiconSpec::default()).expect("built-in lexicon is valid")
});

// ---------------------------------------------------------------------------
// Serializable form
// ---------------------------------------------------------------------------

/// Plain word lists as they appear in a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LexiconSpec {
    pub keywords: PerEmotion<Vec<String>>,
    pub modifiers: BTreeMap<String, f64>,
    pub negations: Vec<String>,
}

impl Default for LexiconSpec {
    fn default() -> Self {
        let owned = |words: &[&str]| words.iter().map(|w| w.to_string()).collect::<Vec<_>>();
        Self {
            keywords: PerEmotion {
                joy: owned(JOY),
                sadness: owned(SADNESS),
                anger: owned(ANGER),
                fear: owned(FEAR),
                surprise: owned(SURPRISE),
                disgust: owned(DISGUST),
                trust: owned(TRUST),
                anticipation: owned(ANTICIPATION),
            },
            modifiers: MODIFIERS
                .iter()
                .map(|(w, weight)| (w.to_string(), *weight))
                .collect(),
            negations: owned(NEGATIONS),
        }
    }
}

// ---------------------------------------------------------------------------
// Compiled lexicon
// ---------------------------------------------------------------------------

/// A keyword or modifier split into its lowercase words.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Phrase {
    pub text: String,
    pub words: Vec<String>,
}

impl Phrase {
    fn parse(raw: &str, what: &str) -> Result<Self> {
        let words: Vec<String> = raw.split_whitespace().map(str::to_lowercase).collect();
        if words.is_empty() {
            return Err(Error::InvalidLexicon(format!("empty {what}")));
        }
        // Anything else is stripped during normalization and could never match.
        if let Some(bad) = words
            .iter()
            .find(|w| !w.chars().all(char::is_alphanumeric))
        {
            return Err(Error::InvalidLexicon(format!(
                "{what} '{raw}' contains non-alphanumeric word '{bad}'"
            )));
        }
        Ok(Self {
            text: words.join(" "),
            words,
        })
    }

    /// Position of the first run of tokens equal to this phrase.
    pub fn find_in<S: AsRef<str>>(&self, tokens: &[S]) -> Option<usize> {
        let n = self.words.len();
        if tokens.len() < n {
            return None;
        }
        (0..=tokens.len() - n).find(|&i| self.matches_at(tokens, i))
    }

    fn matches_at<S: AsRef<str>>(&self, tokens: &[S], start: usize) -> bool {
        tokens.len() >= start + self.words.len()
            && self
                .words
                .iter()
                .zip(&tokens[start..])
                .all(|(w, t)| w == t.as_ref())
    }
}

/// Immutable emotion lexicon with its intensity modifiers and negation words.
///
/// Build once, then share by reference; nothing mutates it after
/// construction.
#[derive(Debug, Clone)]
pub struct Lexicon {
    keywords: PerEmotion<Vec<Phrase>>,
    // Longest phrase first, so "a bit" wins over a hypothetical "bit".
    modifiers: Vec<(Phrase, f64)>,
    negations: HashSet<String>,
    keyword_words: HashSet<String>,
}

impl TryFrom<LexiconSpec> for Lexicon {
    type Error = Error;

    fn try_from(spec: LexiconSpec) -> Result<Self> {
        let mut keywords: PerEmotion<Vec<Phrase>> = PerEmotion::default();
        for emotion in Emotion::ALL {
            let list = &spec.keywords[emotion];
            if list.is_empty() {
                return Err(Error::InvalidLexicon(format!(
                    "no keywords for {emotion}"
                )));
            }
            for raw in list {
                let phrase = Phrase::parse(raw, "keyword")?;
                if !keywords[emotion].contains(&phrase) {
                    keywords[emotion].push(phrase);
                }
            }
        }

        let mut modifiers = Vec::with_capacity(spec.modifiers.len());
        for (raw, weight) in &spec.modifiers {
            if !weight.is_finite() || *weight <= 0.0 {
                return Err(Error::InvalidLexicon(format!(
                    "modifier '{raw}' needs a positive weight, got {weight}"
                )));
            }
            modifiers.push((Phrase::parse(raw, "modifier")?, *weight));
        }
        modifiers.sort_by(|a, b| b.0.words.len().cmp(&a.0.words.len()));

        if spec.negations.is_empty() {
            return Err(Error::InvalidLexicon("no negation words".to_string()));
        }
        let mut negations = HashSet::new();
        for raw in &spec.negations {
            let phrase = Phrase::parse(raw, "negation")?;
            if phrase.words.len() != 1 {
                return Err(Error::InvalidLexicon(format!(
                    "negation '{raw}' must be a single word"
                )));
            }
            negations.insert(phrase.text);
        }

        let keyword_words = Emotion::ALL
            .iter()
            .flat_map(|&e| keywords[e].iter())
            .filter(|p| p.words.len() == 1)
            .map(|p| p.text.clone())
            .collect();

        Ok(Self {
            keywords,
            modifiers,
            negations,
            keyword_words,
        })
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Lexicon::clone(&BUILTIN)
    }
}

impl Lexicon {
    /// The shared built-in lexicon.
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN
    }

    pub fn keywords(&self, emotion: Emotion) -> impl Iterator<Item = &str> {
        self.keywords[emotion].iter().map(|p| p.text.as_str())
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word)
    }

    /// Whether `word` is a single-word keyword of any emotion.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keyword_words.contains(word)
    }

    pub(crate) fn phrases(&self, emotion: Emotion) -> &[Phrase] {
        &self.keywords[emotion]
    }

    /// True when any keyword of any emotion occurs in `tokens`.
    pub(crate) fn mentions_any<S: AsRef<str>>(&self, tokens: &[S]) -> bool {
        Emotion::ALL
            .iter()
            .any(|&e| self.keywords[e].iter().any(|p| p.find_in(tokens).is_some()))
    }

    /// Weight of a modifier whose last word sits at `end`.
    pub(crate) fn modifier_ending_at<S: AsRef<str>>(&self, tokens: &[S], end: usize) -> Option<f64> {
        self.modifiers.iter().find_map(|(phrase, weight)| {
            let n = phrase.words.len();
            (end + 1 >= n && phrase.matches_at(tokens, end + 1 - n)).then_some(*weight)
        })
    }

    /// Weight of a modifier whose first word sits at `start`.
    pub(crate) fn modifier_starting_at<S: AsRef<str>>(
        &self,
        tokens: &[S],
        start: usize,
    ) -> Option<f64> {
        self.modifiers
            .iter()
            .find_map(|(phrase, weight)| phrase.matches_at(tokens, start).then_some(*weight))
    }
}
