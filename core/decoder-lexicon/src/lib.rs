pub mod entry;
pub mod error;
mod raw;
pub mod store;

pub use entry::LexiconEntry;
pub use error::LexiconLoadError;
pub use store::LexiconStore;

#[cfg(test)]
mod tests {
    use super::*;
    use decoder_protocol::{LexiconRecord, LexiconSource, PartOfSpeech};
    use std::io::Write;

    fn source(entries: Vec<LexiconRecord>) -> LexiconSource {
        LexiconSource { version: 1, entries }
    }

    fn lift() -> LexiconRecord {
        LexiconRecord::word("lift", &["move", "transport"], "Move boxes.", &[PartOfSpeech::Verb])
    }

    #[test]
    fn test_builtin_lexicon_loads() {
        let store = LexiconStore::builtin().unwrap();
        assert_eq!(store.version(), 1);
        assert!(!store.is_empty());

        let lift = store.lookup("lift").expect("lift is in the example lexicon");
        assert!(lift.allows(PartOfSpeech::Verb));
        assert!(!lift.allows(PartOfSpeech::Noun));

        let phrase = store.lookup("move your hand").expect("phrase is in the example lexicon");
        assert!(phrase.is_phrase);
        assert_eq!(phrase.token_len(), 3);
    }

    #[test]
    fn test_phrases_longest_first_then_lexicon_order() {
        let store = LexiconStore::from_source(source(vec![
            LexiconRecord::phrase("move your hand", &["operate"], "Operate a keyboard."),
            LexiconRecord::phrase("stand on your foot", &["remain"], "Remain on the floor."),
            LexiconRecord::phrase("use your hand", &["handle"], "Handle parcels."),
            LexiconRecord::phrase("lift your arm", &["reach"], "Reach shelves."),
        ]))
        .unwrap();

        let order: Vec<&str> = store.phrase_entries().iter().map(|e| e.lemma.as_str()).collect();
        assert_eq!(
            order,
            vec!["stand on your foot", "move your hand", "use your hand", "lift your arm"]
        );
    }

    #[test]
    fn test_word_lookup_is_case_insensitive() {
        let store = LexiconStore::from_source(source(vec![lift()])).unwrap();
        assert_eq!(store.lookup("Lift").map(|e| e.lemma.as_str()), Some("lift"));
        assert!(store.lookup("hoist").is_none());
        assert_eq!(store.word_entries().len(), 1);
    }

    #[test]
    fn test_phrase_lookup_is_normalized() {
        let store = LexiconStore::builtin().unwrap();
        let entry = store.lookup("move my hand").expect("possessive is normalized");
        assert_eq!(entry.lemma, "move your hand");
        assert_eq!(
            store.lookup("Move  Your Hand").map(|e| e.lemma.as_str()),
            Some("move your hand")
        );
        assert!(store.lookup("move your hands").is_none());
    }

    #[test]
    fn test_phrase_pattern_normalizes_possessives() {
        let store = LexiconStore::from_source(source(vec![LexiconRecord::phrase(
            "Move her Hand",
            &["operate"],
            "Operate a keyboard.",
        )]))
        .unwrap();
        let entry = &store.phrase_entries()[0];
        assert_eq!(entry.pattern(), ["move", "your", "hand"]);
        assert_eq!(entry.lemma, "Move her Hand");
    }

    #[test]
    fn test_missing_alternatives_fails_at_load() {
        let json = r#"{
            "version": 1,
            "entries": [
                {"lemma": "lift", "example": "Move boxes.", "is_phrase": false, "allowed_pos": ["VERB"]}
            ]
        }"#;
        let err = LexiconStore::from_json_str(json).unwrap_err();
        assert!(matches!(
            err,
            LexiconLoadError::MissingField { field: "alternative_verbs", .. }
        ));
        assert_eq!(
            err.to_string(),
            "entry 'lift': missing required field `alternative_verbs`"
        );
    }

    #[test]
    fn test_list_like_text_fields() {
        let json = r#"{
            "entries": [
                {
                    "lemma": "lift",
                    "alternative_verbs": "['move', 'transport']",
                    "example": "Move boxes.",
                    "is_phrase": false,
                    "allowed_pos": "['VERB']"
                }
            ]
        }"#;
        let store = LexiconStore::from_json_str(json).unwrap();
        assert_eq!(store.version(), 1);
        let entry = store.lookup("lift").unwrap();
        assert_eq!(entry.alternative_verbs, vec!["move", "transport"]);
        assert!(entry.allows(PartOfSpeech::Verb));
    }

    #[test]
    fn test_malformed_json() {
        let err = LexiconStore::from_json_str("{\"entries\": [").unwrap_err();
        assert!(matches!(err, LexiconLoadError::Json(_)));
    }

    #[test]
    fn test_unknown_pos_tag() {
        let json = r#"{"entries": [{"lemma": "lift", "alternative_verbs": [], "example": "",
                      "is_phrase": false, "allowed_pos": ["VERBISH"]}]}"#;
        let err = LexiconStore::from_json_str(json).unwrap_err();
        assert!(matches!(err, LexiconLoadError::UnknownPos { .. }));
    }

    #[test]
    fn test_conflicting_classification() {
        let mut as_phrase = lift();
        as_phrase.is_phrase = true;
        let err = LexiconStore::from_source(source(vec![lift(), as_phrase])).unwrap_err();
        assert!(matches!(err, LexiconLoadError::ConflictingClassification { .. }));
    }

    #[test]
    fn test_duplicate_lemma() {
        let mut shouting = lift();
        shouting.lemma = "LIFT".to_string();
        let err = LexiconStore::from_source(source(vec![lift(), shouting])).unwrap_err();
        assert!(matches!(err, LexiconLoadError::DuplicateLemma { .. }));

        let err = LexiconStore::from_source(source(vec![
            LexiconRecord::phrase("move your hand", &[], ""),
            LexiconRecord::phrase("move my hand", &[], ""),
        ]))
        .unwrap_err();
        assert!(matches!(err, LexiconLoadError::DuplicateLemma { .. }));
    }

    #[test]
    fn test_shape_errors() {
        let err = LexiconStore::from_source(source(vec![LexiconRecord::phrase("lift", &[], "")]))
            .unwrap_err();
        assert!(matches!(err, LexiconLoadError::PhraseTooShort { .. }));

        let err = LexiconStore::from_source(source(vec![LexiconRecord::word(
            "lift up",
            &[],
            "",
            &[PartOfSpeech::Verb],
        )]))
        .unwrap_err();
        assert!(matches!(err, LexiconLoadError::WordWithWhitespace { .. }));

        let err = LexiconStore::from_source(source(vec![LexiconRecord::word("lift", &[], "", &[])]))
            .unwrap_err();
        assert!(matches!(err, LexiconLoadError::EmptyAllowedPos { .. }));

        let err = LexiconStore::from_source(source(vec![LexiconRecord::word(
            "  ",
            &[],
            "",
            &[PartOfSpeech::Verb],
        )]))
        .unwrap_err();
        assert!(matches!(err, LexiconLoadError::EmptyLemma { index: 0 }));
    }

    #[test]
    fn test_archive_round_trip() {
        let store = LexiconStore::builtin().unwrap();
        let bytes = rkyv::to_bytes::<_, 1024>(&store.to_source()).unwrap();

        let loaded = LexiconStore::from_archive_bytes(&bytes).unwrap();
        assert_eq!(loaded.to_source(), store.to_source());
        assert_eq!(loaded.len(), store.len());
    }

    #[test]
    fn test_to_source_keeps_lexicon_order() {
        let records = vec![
            lift(),
            LexiconRecord::phrase("move your hand", &["operate"], "Operate a keyboard."),
            LexiconRecord::word(
                "bend",
                &["lower oneself"],
                "Reach low shelves.",
                &[PartOfSpeech::Verb],
            ),
        ];
        let store = LexiconStore::from_source(source(records.clone())).unwrap();
        assert_eq!(store.to_source().entries, records);
    }

    #[test]
    fn test_garbage_archive() {
        let err = LexiconStore::from_archive_bytes(&[0xde, 0xad, 0xbe, 0xef]).unwrap_err();
        assert!(matches!(err, LexiconLoadError::Archive(_)));
    }

    #[test]
    fn test_from_path_by_extension() {
        let mut json = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        json.write_all(include_bytes!("../data/ableist_lexicon.json")).unwrap();
        let store = LexiconStore::from_path(json.path()).unwrap();
        assert!(store.lookup("bend").is_some());

        let mut archive = tempfile::Builder::new().suffix(".rkyv").tempfile().unwrap();
        let bytes = rkyv::to_bytes::<_, 1024>(&store.to_source()).unwrap();
        archive.write_all(&bytes).unwrap();
        let loaded = LexiconStore::from_path(archive.path()).unwrap();
        assert_eq!(loaded.to_source(), store.to_source());
    }

    #[test]
    fn test_missing_file() {
        let err = LexiconStore::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, LexiconLoadError::Io { .. }));
    }
}
