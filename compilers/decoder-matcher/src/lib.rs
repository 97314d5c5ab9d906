//! Matching of annotated job-description text against the ableist-language
//! lexicon.
//!
//! Detection runs in four steps: annotate, claim multi-word phrases
//! (longest first), match the remaining single tokens with POS gating, then
//! merge and attach suggestions.

pub mod aggregate;
pub mod detector;
pub mod phrase;
pub mod serve;
pub mod word;

pub use aggregate::{aggregate, LexiconInconsistencyError};
pub use detector::{DetectError, Detector};
pub use phrase::{find_phrases, ConsumedTokens, MatchCandidate, PhraseScan};
pub use serve::{render_matches, MatchProperty, PredictRequest, PredictResponse, ServeError};
pub use word::find_words;
