pub mod error;
pub mod parser;
pub mod tagger;

pub use error::AnnotationError;

use decoder_morph::lemmatize;
use decoder_protocol::AnnotatedToken;
use tracing::{debug, trace};

/// Longest input the built-in annotator accepts, in bytes.
pub const DEFAULT_MAX_LEN: usize = 1_000_000;

/// Turns raw text into an ordered sequence of annotated tokens.
///
/// Any backend fits: the built-in [`RuleAnnotator`], a statistical tagger, or
/// a closure wrapping a remote service. Token `i` must carry `start == i` and
/// `end == i + 1`.
pub trait Annotator: Send + Sync {
    fn annotate(&self, text: &str) -> Result<Vec<AnnotatedToken>, AnnotationError>;
}

impl<F> Annotator for F
where
    F: Fn(&str) -> Result<Vec<AnnotatedToken>, AnnotationError> + Send + Sync,
{
    fn annotate(&self, text: &str) -> Result<Vec<AnnotatedToken>, AnnotationError> {
        self(text)
    }
}

/// Dictionary-and-rules English annotator: nom tokenizer, greedy tagger,
/// suffix lemmatizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleAnnotator {
    max_len: usize,
}

impl RuleAnnotator {
    pub fn new() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
        }
    }

    pub fn with_max_len(max_len: usize) -> Self {
        Self { max_len }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }
}

impl Default for RuleAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

impl Annotator for RuleAnnotator {
    fn annotate(&self, text: &str) -> Result<Vec<AnnotatedToken>, AnnotationError> {
        if text.len() > self.max_len {
            return Err(AnnotationError::InputTooLong {
                len: text.len(),
                max: self.max_len,
            });
        }

        let raw = parser::tokenize(text);
        let tags = tagger::tag(&raw);

        let tokens: Vec<AnnotatedToken> = raw
            .iter()
            .zip(tags)
            .enumerate()
            .map(|(i, (token, pos))| {
                let lemma = lemmatize(token.text, pos);
                trace!(index = i, text = token.text, lemma = %lemma, pos = %pos, "token");
                let space = token.trailing_whitespace;
                AnnotatedToken::new(i, token.text, lemma, pos, token.span, space)
            })
            .collect();

        debug!(bytes = text.len(), tokens = tokens.len(), "annotated");
        Ok(tokens)
    }
}

/// Checks what the matchers rely on: dense token indices and
/// non-decreasing, in-bounds character spans.
pub fn validate_tokens(text: &str, tokens: &[AnnotatedToken]) -> Result<(), AnnotationError> {
    let mut last_end = 0;
    for (i, token) in tokens.iter().enumerate() {
        if token.start != i || token.end != i + 1 {
            return Err(AnnotationError::InvalidOutput(format!(
                "token {} ('{}') has index range {}..{}",
                i, token.text, token.start, token.end
            )));
        }
        let span = token.char_span;
        if span.start > span.end || span.end > text.len() || span.start < last_end {
            return Err(AnnotationError::InvalidOutput(format!(
                "token {} ('{}') has character span {}..{} out of order or out of bounds",
                i, token.text, span.start, span.end
            )));
        }
        last_end = span.end;
    }
    Ok(())
}
