use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::lexicon::LexiconSpec;
use crate::tuning::Tuning;

/// On-disk analyzer configuration.
///
/// Both sections are optional:
///
/// ```json
/// {
///   "tuning": { "negation_factor": -0.75, "sentiment_margin": 0.25 },
///   "lexicon": { "keywords": { ... }, "modifiers": { "very": 1.5 }, "negations": ["not"] }
/// }
/// ```
///
/// An absent `tuning` field keeps its default; an absent `lexicon` keeps the
/// built-in word lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub tuning: Tuning,
    pub lexicon: Option<LexiconSpec>,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.tuning.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        debug!(
            path = %path.display(),
            custom_lexicon = config.lexicon.is_some(),
            "loaded config"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_all_defaults() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn invalid_tuning_is_rejected_on_parse() {
        let err = Config::from_json(r#"{"tuning": {"dominant_floor": -1}}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidTuning(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            Config::from_json("{ tuning"),
            Err(Error::Parse(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{"lexicon": {"keywords": {}}}"#),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Config::load("/nonexistent/pensieve.json").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/pensieve.json"));
    }
}
