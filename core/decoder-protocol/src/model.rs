use rkyv::{Archive, Deserialize, Serialize};
use crate::pos::PartOfSpeech;
use crate::token::Span;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// One lexicon row as stored on disk, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct LexiconRecord {
    pub lemma: String,
    pub alternative_verbs: Vec<String>,
    pub example: String,
    pub is_phrase: bool,
    pub allowed_pos: Vec<PartOfSpeech>,
}

impl LexiconRecord {
    pub fn word(
        lemma: &str,
        alternatives: &[&str],
        example: &str,
        allowed_pos: &[PartOfSpeech],
    ) -> Self {
        Self {
            lemma: lemma.to_string(),
            alternative_verbs: alternatives.iter().map(|s| s.to_string()).collect(),
            example: example.to_string(),
            is_phrase: false,
            allowed_pos: allowed_pos.to_vec(),
        }
    }

    pub fn phrase(lemma: &str, alternatives: &[&str], example: &str) -> Self {
        Self {
            lemma: lemma.to_string(),
            alternative_verbs: alternatives.iter().map(|s| s.to_string()).collect(),
            example: example.to_string(),
            is_phrase: true,
            allowed_pos: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct LexiconSource {
    pub version: u32,
    pub entries: Vec<LexiconRecord>,
}

/// A detected use of ableist language. `end` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct AbleistLanguageMatch {
    pub matched_text: String,
    pub lemma: String,
    pub start: usize,
    pub end: usize,
    pub char_span: Span,
    pub alternative_verbs: Vec<String>,
    pub example: String,
}

impl AbleistLanguageMatch {
    pub fn overlaps(&self, other: &AbleistLanguageMatch) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for AbleistLanguageMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PHRASE: {} | LEMMA: {} | POSITION: {}:{} | ALTERNATIVES: ",
            self.matched_text, self.lemma, self.start, self.end
        )?;
        for (i, alt) in self.alternative_verbs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(alt)?;
        }
        write!(f, " | EXAMPLE: {}", self.example)
    }
}
