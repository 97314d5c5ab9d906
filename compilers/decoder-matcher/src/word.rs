use crate::phrase::{ConsumedTokens, MatchCandidate};
use decoder_lexicon::LexiconStore;
use decoder_morph::normalize_form;
use decoder_protocol::AnnotatedToken;
use tracing::trace;

/// Single-token lexicon hits among the tokens no phrase claimed.
///
/// A token matches when its lemma is a word entry and its tag is one the
/// entry allows.
pub fn find_words(
    tokens: &[AnnotatedToken],
    consumed: &ConsumedTokens,
    lexicon: &LexiconStore,
) -> Vec<MatchCandidate> {
    let words = lexicon.word_entries();
    let mut candidates = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        if consumed.contains(i) {
            continue;
        }
        let Some(entry) = words.get(&normalize_form(&token.lemma)) else {
            continue;
        };
        if !entry.allows(token.pos) {
            trace!(text = %token.text, pos = %token.pos, lemma = %entry.lemma, "tag not allowed");
            continue;
        }

        trace!(lemma = %entry.lemma, start = i, "word match");
        candidates.push(MatchCandidate::from_tokens(&entry.lemma, tokens, i..i + 1));
    }

    candidates
}
