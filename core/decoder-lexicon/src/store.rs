use crate::entry::LexiconEntry;
use crate::error::LexiconLoadError;
use crate::raw::RawLexicon;
use decoder_morph::normalize_form;
use decoder_protocol::{LexiconRecord, LexiconSource, PosFlags};
use rkyv::AlignedVec;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

const BUILTIN_LEXICON: &str = include_str!("../data/ableist_lexicon.json");

/// Read-only index over a validated lexicon.
///
/// Built once and shared between detection calls; nothing mutates it after
/// construction.
#[derive(Debug, Clone)]
pub struct LexiconStore {
    version: u32,
    /// Multi-word entries, longest first, lexicon order among equals.
    phrases: Vec<LexiconEntry>,
    /// Single-word entries keyed by normalized lemma.
    words: HashMap<String, LexiconEntry>,
    /// Normalized phrase key -> phrase position.
    phrase_index: HashMap<String, usize>,
}

impl LexiconStore {
    /// The example lexicon shipped with the crate.
    pub fn builtin() -> Result<Self, LexiconLoadError> {
        Self::from_json_str(BUILTIN_LEXICON)
    }

    pub fn from_json_str(json: &str) -> Result<Self, LexiconLoadError> {
        let raw: RawLexicon = serde_json::from_str(json)?;
        Self::from_source(raw.into_source()?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LexiconLoadError> {
        let json = read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// Loads an rkyv archive of a `LexiconSource`, as written by the lexicon compiler.
    pub fn from_archive_bytes(bytes: &[u8]) -> Result<Self, LexiconLoadError> {
        // rkyv needs the archive aligned; a byte slice from disk may not be
        let mut aligned = AlignedVec::with_capacity(bytes.len());
        aligned.extend_from_slice(bytes);

        let source: LexiconSource =
            rkyv::from_bytes(&aligned).map_err(|e| LexiconLoadError::Archive(e.to_string()))?;
        Self::from_source(source)
    }

    pub fn from_archive_file(path: impl AsRef<Path>) -> Result<Self, LexiconLoadError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| LexiconLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_archive_bytes(&bytes)
    }

    /// `.json` files are parsed as JSON, anything else as a compiled archive.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LexiconLoadError> {
        let path = path.as_ref();
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            Self::from_json_file(path)
        } else {
            Self::from_archive_file(path)
        }
    }

    /// Validates every record and builds the indices.
    pub fn from_source(source: LexiconSource) -> Result<Self, LexiconLoadError> {
        let mut phrases = Vec::new();
        let mut words = HashMap::new();
        // normalized key -> is_phrase, for duplicate detection across both kinds
        let mut seen: HashMap<String, bool> = HashMap::new();

        for (order, record) in source.entries.into_iter().enumerate() {
            let entry = validate(order, record, &mut seen)?;
            if entry.is_phrase {
                phrases.push(entry);
            } else {
                words.insert(entry.key(), entry);
            }
        }

        // stable: lexicon order survives among phrases of equal length
        phrases.sort_by(|a, b| b.token_len().cmp(&a.token_len()));

        let phrase_index = phrases
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.key(), i))
            .collect();

        info!(
            version = source.version,
            phrases = phrases.len(),
            words = words.len(),
            "lexicon loaded"
        );

        Ok(Self {
            version: source.version,
            phrases,
            words,
            phrase_index,
        })
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.phrases.len() + self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Finds the entry a match was made against.
    ///
    /// Phrases and words are both found by their normalized form, so
    /// "Lift" finds "lift" and "move my hand" finds "move your hand".
    pub fn lookup(&self, lemma: &str) -> Option<&LexiconEntry> {
        let key = lookup_key(lemma);
        if let Some(&i) = self.phrase_index.get(&key) {
            return self.phrases.get(i);
        }
        self.words.get(&key)
    }

    /// Multi-word entries in matching order: longest first.
    pub fn phrase_entries(&self) -> &[LexiconEntry] {
        &self.phrases
    }

    pub fn word_entries(&self) -> &HashMap<String, LexiconEntry> {
        &self.words
    }

    /// Records in their original lexicon order.
    pub fn to_source(&self) -> LexiconSource {
        let mut entries: Vec<&LexiconEntry> =
            self.phrases.iter().chain(self.words.values()).collect();
        entries.sort_by_key(|entry| entry.order);

        LexiconSource {
            version: self.version,
            entries: entries.into_iter().map(LexiconEntry::to_record).collect(),
        }
    }
}

fn lookup_key(lemma: &str) -> String {
    lemma
        .split_whitespace()
        .map(normalize_form)
        .collect::<Vec<_>>()
        .join(" ")
}

fn read_to_string(path: &Path) -> Result<String, LexiconLoadError> {
    fs::read_to_string(path).map_err(|source| LexiconLoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn validate(
    order: usize,
    record: LexiconRecord,
    seen: &mut HashMap<String, bool>,
) -> Result<LexiconEntry, LexiconLoadError> {
    let lemma = record.lemma.trim().to_string();
    if lemma.is_empty() {
        return Err(LexiconLoadError::EmptyLemma { index: order });
    }

    let pattern: Vec<String> = lemma.split_whitespace().map(normalize_form).collect();
    let key = pattern.join(" ");

    // duplicates first, so a word/phrase clash reads as a classification conflict
    if let Some(&was_phrase) = seen.get(&key) {
        if was_phrase != record.is_phrase {
            return Err(LexiconLoadError::ConflictingClassification { lemma });
        }
        return Err(LexiconLoadError::DuplicateLemma { lemma });
    }

    if record.is_phrase && pattern.len() < 2 {
        return Err(LexiconLoadError::PhraseTooShort { lemma });
    }
    if !record.is_phrase && pattern.len() > 1 {
        return Err(LexiconLoadError::WordWithWhitespace { lemma });
    }

    let allowed_pos: PosFlags = record.allowed_pos.iter().copied().collect();
    if !record.is_phrase && allowed_pos.is_empty() {
        return Err(LexiconLoadError::EmptyAllowedPos { lemma });
    }

    debug!(lemma = %lemma, is_phrase = record.is_phrase, "lexicon entry");
    seen.insert(key, record.is_phrase);

    Ok(LexiconEntry {
        lemma,
        alternative_verbs: record.alternative_verbs,
        example: record.example,
        is_phrase: record.is_phrase,
        allowed_pos,
        pattern,
        order,
    })
}
