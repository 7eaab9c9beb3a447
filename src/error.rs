use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating analyzer configuration.
///
/// Analysis itself never fails; these only surface at the config boundary.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    #[error("invalid lexicon: {0}")]
    InvalidLexicon(String),
}

pub type Result<T> = std::result::Result<T, Error>;
