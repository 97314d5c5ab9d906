use crate::pos::PartOfSpeech;
use alloc::string::String;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Byte range into the source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both.
    pub fn cover(&self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }
}

/// One token of annotated text.
///
/// `start`/`end` are token indices (`end == start + 1`); `char_span` locates
/// the token in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct AnnotatedToken {
    pub text: String,
    pub lemma: String,
    pub pos: PartOfSpeech,
    pub start: usize,
    pub end: usize,
    pub char_span: Span,
    pub trailing_whitespace: bool,
}

impl AnnotatedToken {
    pub fn new(
        index: usize,
        text: impl Into<String>,
        lemma: impl Into<String>,
        pos: PartOfSpeech,
        char_span: Span,
        trailing_whitespace: bool,
    ) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            pos,
            start: index,
            end: index + 1,
            char_span,
            trailing_whitespace,
        }
    }
}

/// Surface text of a run of tokens, single spaces where the source had whitespace.
pub fn surface_text(tokens: &[AnnotatedToken]) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        out.push_str(&token.text);
        if token.trailing_whitespace && i + 1 < tokens.len() {
            out.push(' ');
        }
    }
    out
}
