use decoder_protocol::{LexiconRecord, PartOfSpeech, PosFlags};

/// A validated lexicon entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    pub lemma: String,
    pub alternative_verbs: Vec<String>,
    pub example: String,
    pub is_phrase: bool,
    pub allowed_pos: PosFlags,
    /// Normalized words to compare against token lemmas; one word for word entries.
    pub(crate) pattern: Vec<String>,
    /// Position in the source, for lexicon-order tie breaks.
    pub(crate) order: usize,
}

impl LexiconEntry {
    pub fn pattern(&self) -> &[String] {
        &self.pattern
    }

    /// Number of tokens a match of this entry spans.
    pub fn token_len(&self) -> usize {
        self.pattern.len()
    }

    pub fn allows(&self, pos: PartOfSpeech) -> bool {
        self.allowed_pos.contains_pos(pos)
    }

    /// The normalized key the entry is indexed by.
    pub fn key(&self) -> String {
        self.pattern.join(" ")
    }

    pub fn to_record(&self) -> LexiconRecord {
        LexiconRecord {
            lemma: self.lemma.clone(),
            alternative_verbs: self.alternative_verbs.clone(),
            example: self.example.clone(),
            is_phrase: self.is_phrase,
            allowed_pos: self.allowed_pos.tags().collect(),
        }
    }
}
