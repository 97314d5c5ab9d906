use decoder_protocol::UnknownPosTag;
use std::path::PathBuf;
use thiserror::Error;

/// A lexicon that cannot be served. Raised at load time, never lazily.
#[derive(Debug, Error)]
pub enum LexiconLoadError {
    #[error("failed to read lexicon {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed lexicon JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid compiled lexicon: {0}")]
    Archive(String),

    #[error("entry {entry}: missing required field `{field}`")]
    MissingField { entry: String, field: &'static str },

    #[error("entry #{index}: lemma is empty")]
    EmptyLemma { index: usize },

    #[error("entry '{lemma}': {source}")]
    UnknownPos {
        lemma: String,
        #[source]
        source: UnknownPosTag,
    },

    #[error("entry '{lemma}': malformed list `{value}`")]
    MalformedList { lemma: String, value: String },

    #[error("duplicate lemma '{lemma}'")]
    DuplicateLemma { lemma: String },

    #[error("lemma '{lemma}' is listed both as a phrase and as a single word")]
    ConflictingClassification { lemma: String },

    #[error("phrase '{lemma}' must contain at least two words")]
    PhraseTooShort { lemma: String },

    #[error("word entry '{lemma}' contains whitespace; mark it as a phrase")]
    WordWithWhitespace { lemma: String },

    #[error("word entry '{lemma}' allows no part-of-speech tags")]
    EmptyAllowedPos { lemma: String },
}
