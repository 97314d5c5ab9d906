use crate::phrase::MatchCandidate;
use decoder_lexicon::LexiconStore;
use decoder_protocol::AbleistLanguageMatch;
use thiserror::Error;

/// A matched lemma has no entry in the lexicon it was matched against.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("lexicon has no entry for matched lemma '{lemma}'")]
pub struct LexiconInconsistencyError {
    pub lemma: String,
}

/// Merges phrase and word candidates into the final, position-ordered matches.
///
/// Word candidates inside a phrase match are dropped. Suggestions come from
/// the lexicon; a missing entry fails the whole call.
pub fn aggregate(
    phrases: Vec<MatchCandidate>,
    words: Vec<MatchCandidate>,
    lexicon: &LexiconStore,
) -> Result<Vec<AbleistLanguageMatch>, LexiconInconsistencyError> {
    let mut candidates = phrases;
    let phrase_count = candidates.len();
    for word in words {
        if !candidates[..phrase_count].iter().any(|p| p.overlaps(&word)) {
            candidates.push(word);
        }
    }
    candidates.sort_by_key(|c| (c.start, c.end));

    candidates
        .into_iter()
        .map(|candidate| {
            let entry = lexicon.lookup(&candidate.lemma).ok_or_else(|| LexiconInconsistencyError {
                lemma: candidate.lemma.clone(),
            })?;
            Ok(AbleistLanguageMatch {
                matched_text: candidate.matched_text,
                lemma: candidate.lemma,
                start: candidate.start,
                end: candidate.end,
                char_span: candidate.char_span,
                alternative_verbs: entry.alternative_verbs.clone(),
                example: entry.example.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use decoder_protocol::Span;

    fn candidate(lemma: &str, start: usize, end: usize) -> MatchCandidate {
        MatchCandidate {
            lemma: lemma.to_string(),
            start,
            end,
            matched_text: lemma.to_string(),
            char_span: Span::new(start * 5, end * 5),
        }
    }

    #[test]
    fn test_sorted_with_metadata() {
        let lexicon = LexiconStore::builtin().unwrap();
        let matches = aggregate(
            vec![candidate("move your wrist", 10, 13), candidate("move your hand", 0, 3)],
            vec![candidate("bend", 20, 21), candidate("lift", 5, 6)],
            &lexicon,
        )
        .unwrap();

        let order: Vec<(usize, &str)> =
            matches.iter().map(|m| (m.start, m.lemma.as_str())).collect();
        assert_eq!(
            order,
            vec![(0, "move your hand"), (5, "lift"), (10, "move your wrist"), (20, "bend")]
        );
        let lift = lexicon.lookup("lift").unwrap();
        assert_eq!(matches[1].alternative_verbs, lift.alternative_verbs);
        assert_eq!(matches[1].example, lift.example);
    }

    #[test]
    fn test_phrase_wins_over_overlapping_word() {
        let lexicon = LexiconStore::builtin().unwrap();
        let matches = aggregate(
            vec![candidate("move your hand", 0, 3)],
            vec![candidate("lift", 2, 3), candidate("bend", 3, 4)],
            &lexicon,
        )
        .unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].lemma, "move your hand");
        assert_eq!(matches[1].lemma, "bend");
    }

    #[test]
    fn test_unknown_lemma_is_inconsistency() {
        let lexicon = LexiconStore::builtin().unwrap();
        let err = aggregate(vec![], vec![candidate("levitate", 0, 1)], &lexicon).unwrap_err();
        assert_eq!(err.lemma, "levitate");
        assert_eq!(err.to_string(), "lexicon has no entry for matched lemma 'levitate'");
    }

    #[test]
    fn test_empty() {
        let lexicon = LexiconStore::builtin().unwrap();
        assert!(aggregate(vec![], vec![], &lexicon).unwrap().is_empty());
    }
}
