use decoder_lexicon::LexiconStore;
use decoder_morph::normalize_form;
use decoder_protocol::{surface_text, AnnotatedToken, Span};
use std::ops::Range;
use tracing::trace;

/// A lexicon hit before its suggestion metadata is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCandidate {
    /// Lemma of the lexicon entry, as the lexicon spells it.
    pub lemma: String,
    pub start: usize,
    /// Exclusive.
    pub end: usize,
    pub matched_text: String,
    pub char_span: Span,
}

impl MatchCandidate {
    /// Candidate covering `tokens[range]`.
    pub fn from_tokens(lemma: &str, tokens: &[AnnotatedToken], range: Range<usize>) -> Self {
        let window = &tokens[range.clone()];
        let char_span = match (window.first(), window.last()) {
            (Some(first), Some(last)) => first.char_span.cover(last.char_span),
            _ => Span::default(),
        };
        Self {
            lemma: lemma.to_string(),
            start: range.start,
            end: range.end,
            matched_text: surface_text(window),
            char_span,
        }
    }

    pub fn overlaps(&self, other: &MatchCandidate) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Token positions already claimed by a phrase match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsumedTokens {
    marks: Vec<bool>,
}

impl ConsumedTokens {
    pub fn new(token_count: usize) -> Self {
        Self {
            marks: vec![false; token_count],
        }
    }

    pub fn consume(&mut self, range: Range<usize>) {
        for i in range {
            if let Some(mark) = self.marks.get_mut(i) {
                *mark = true;
            }
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.marks.get(index).copied().unwrap_or(false)
    }

    pub fn any_in(&self, range: Range<usize>) -> bool {
        range.into_iter().any(|i| self.contains(i))
    }

    pub fn count(&self) -> usize {
        self.marks.iter().filter(|&&m| m).count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhraseScan {
    /// In lexicon scan order, not text order.
    pub candidates: Vec<MatchCandidate>,
    pub consumed: ConsumedTokens,
}

/// Finds multi-word lexicon phrases in the token stream.
///
/// Entries are tried longest first, so "move your hand" claims its tokens
/// before any shorter phrase sharing them. Matched windows never overlap.
pub fn find_phrases(tokens: &[AnnotatedToken], lexicon: &LexiconStore) -> PhraseScan {
    let forms: Vec<String> = tokens.iter().map(|t| normalize_form(&t.lemma)).collect();
    let mut scan = PhraseScan {
        candidates: Vec::new(),
        consumed: ConsumedTokens::new(tokens.len()),
    };

    for entry in lexicon.phrase_entries() {
        let pattern = entry.pattern();
        let len = pattern.len();
        if len == 0 || len > tokens.len() {
            continue;
        }

        let mut start = 0;
        while start + len <= tokens.len() {
            let window = start..start + len;
            if !scan.consumed.any_in(window.clone()) && forms[window.clone()] == *pattern {
                let candidate = MatchCandidate::from_tokens(&entry.lemma, tokens, window.clone());
                trace!(
                    lemma = %candidate.lemma,
                    start = candidate.start,
                    end = candidate.end,
                    "phrase match"
                );
                scan.consumed.consume(window);
                scan.candidates.push(candidate);
                start += len;
            } else {
                start += 1;
            }
        }
    }

    scan
}
