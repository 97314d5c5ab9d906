use crate::aggregate::{aggregate, LexiconInconsistencyError};
use crate::phrase::find_phrases;
use crate::word::find_words;
use decoder_annotator::{validate_tokens, AnnotationError, Annotator, RuleAnnotator};
use decoder_lexicon::{LexiconLoadError, LexiconStore};
use decoder_protocol::{AbleistLanguageMatch, AnnotatedToken};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum DetectError {
    #[error("annotation failed: {0}")]
    Annotation(#[from] AnnotationError),
    #[error(transparent)]
    Inconsistency(#[from] LexiconInconsistencyError),
}

/// Finds ableist language in text against one lexicon.
///
/// Cheap to clone; the lexicon and annotator are shared.
#[derive(Clone)]
pub struct Detector {
    lexicon: Arc<LexiconStore>,
    annotator: Arc<dyn Annotator>,
}

impl Detector {
    pub fn new(lexicon: Arc<LexiconStore>, annotator: Arc<dyn Annotator>) -> Self {
        Self { lexicon, annotator }
    }

    /// Detector using the built-in rule annotator.
    pub fn with_lexicon(lexicon: LexiconStore) -> Self {
        Self::new(Arc::new(lexicon), Arc::new(RuleAnnotator::new()))
    }

    /// Built-in lexicon, built-in annotator.
    pub fn builtin() -> Result<Self, LexiconLoadError> {
        Ok(Self::with_lexicon(LexiconStore::builtin()?))
    }

    pub fn lexicon(&self) -> &LexiconStore {
        &self.lexicon
    }

    /// Matches in ascending token order, non-overlapping.
    pub fn find_ableist_language(
        &self,
        text: &str,
    ) -> Result<Vec<AbleistLanguageMatch>, DetectError> {
        let tokens = self.annotate(text)?;
        Ok(self.match_tokens(&tokens)?)
    }

    /// Runs the annotator and checks its output is well formed.
    pub fn annotate(&self, text: &str) -> Result<Vec<AnnotatedToken>, DetectError> {
        let tokens = self.annotator.annotate(text)?;
        validate_tokens(text, &tokens)?;
        Ok(tokens)
    }

    /// Phrase, word and aggregation passes over already annotated tokens.
    pub fn match_tokens(
        &self,
        tokens: &[AnnotatedToken],
    ) -> Result<Vec<AbleistLanguageMatch>, LexiconInconsistencyError> {
        let scan = find_phrases(tokens, &self.lexicon);
        let words = find_words(tokens, &scan.consumed, &self.lexicon);
        debug!(
            tokens = tokens.len(),
            phrases = scan.candidates.len(),
            words = words.len(),
            "candidates"
        );

        aggregate(scan.candidates, words, &self.lexicon)
    }
}

impl fmt::Debug for Detector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Detector")
            .field("lexicon_version", &self.lexicon.version())
            .field("lexicon_entries", &self.lexicon.len())
            .finish_non_exhaustive()
    }
}
