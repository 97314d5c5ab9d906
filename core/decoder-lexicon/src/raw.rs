//! JSON lexicon documents, before validation.

use crate::error::LexiconLoadError;
use decoder_protocol::{LexiconRecord, LexiconSource, PartOfSpeech};
use serde::Deserialize;

fn default_version() -> u32 {
    1
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawLexicon {
    #[serde(default = "default_version")]
    version: u32,
    entries: Vec<RawRecord>,
}

/// Every field is optional here so a missing one is reported by name.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawRecord {
    lemma: Option<String>,
    alternative_verbs: Option<ListField>,
    example: Option<String>,
    is_phrase: Option<bool>,
    allowed_pos: Option<ListField>,
}

/// A JSON array, or a list written out as text: `"['move', 'transport']"`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListField {
    Items(Vec<String>),
    Text(String),
}

impl RawLexicon {
    pub(crate) fn into_source(self) -> Result<LexiconSource, LexiconLoadError> {
        let entries = self
            .entries
            .into_iter()
            .enumerate()
            .map(|(index, raw)| raw.into_record(index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(LexiconSource {
            version: self.version,
            entries,
        })
    }
}

impl RawRecord {
    fn into_record(self, index: usize) -> Result<LexiconRecord, LexiconLoadError> {
        let lemma = self.lemma.ok_or_else(|| LexiconLoadError::MissingField {
            entry: format!("#{}", index),
            field: "lemma",
        })?;
        let missing = |field| LexiconLoadError::MissingField {
            entry: format!("'{}'", lemma),
            field,
        };

        let alternative_verbs = self.alternative_verbs.ok_or_else(|| missing("alternative_verbs"))?;
        let example = self.example.ok_or_else(|| missing("example"))?;
        let is_phrase = self.is_phrase.ok_or_else(|| missing("is_phrase"))?;

        // Phrases match on lemmas alone, so their tag set may be left out.
        let allowed_pos = match self.allowed_pos {
            Some(list) => list.into_items(&lemma)?,
            None if is_phrase => Vec::new(),
            None => return Err(missing("allowed_pos")),
        };
        let allowed_pos = allowed_pos
            .iter()
            .map(|tag| tag.parse::<PartOfSpeech>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| LexiconLoadError::UnknownPos {
                lemma: lemma.clone(),
                source,
            })?;

        Ok(LexiconRecord {
            alternative_verbs: alternative_verbs.into_items(&lemma)?,
            lemma,
            example,
            is_phrase,
            allowed_pos,
        })
    }
}

impl ListField {
    fn into_items(self, lemma: &str) -> Result<Vec<String>, LexiconLoadError> {
        match self {
            ListField::Items(items) => Ok(items),
            ListField::Text(text) => {
                parse_list_text(&text).ok_or_else(|| LexiconLoadError::MalformedList {
                    lemma: lemma.to_string(),
                    value: text.clone(),
                })
            }
        }
    }
}

/// Accepts `['a', 'b']`, `["a"]`, `[]` and bare `a, b`.
fn parse_list_text(text: &str) -> Option<Vec<String>> {
    let trimmed = text.trim();
    let inner = match trimmed.strip_prefix('[') {
        Some(rest) => rest.strip_suffix(']')?,
        None => trimmed,
    };
    if inner.trim().is_empty() {
        return Some(Vec::new());
    }

    inner
        .split(',')
        .map(|item| {
            let item = unquote(item.trim())?;
            if item.is_empty() {
                None
            } else {
                Some(item.to_string())
            }
        })
        .collect()
}

fn unquote(item: &str) -> Option<&str> {
    for quote in ['\'', '"'] {
        if let Some(rest) = item.strip_prefix(quote) {
            return rest.strip_suffix(quote);
        }
    }
    if item.contains(['\'', '"']) {
        return None;
    }
    Some(item)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_text_forms() {
        assert_eq!(
            parse_list_text("['move', 'transport']"),
            Some(vec!["move".to_string(), "transport".to_string()])
        );
        assert_eq!(parse_list_text(r#"["be stationed"]"#), Some(vec!["be stationed".to_string()]));
        assert_eq!(
            parse_list_text("VERB, NOUN"),
            Some(vec!["VERB".to_string(), "NOUN".to_string()])
        );
        assert_eq!(parse_list_text("[]"), Some(vec![]));
    }

    #[test]
    fn test_list_text_rejects_broken_quotes() {
        assert_eq!(parse_list_text("['move', 'trans"), None);
        assert_eq!(parse_list_text("['move',, 'x']"), None);
        assert_eq!(parse_list_text("[move"), None);
    }

    #[test]
    fn test_phrase_may_omit_allowed_pos() {
        let raw = RawRecord {
            lemma: Some("move your hand".to_string()),
            alternative_verbs: Some(ListField::Text("['operate']".to_string())),
            example: Some("Operate a keyboard.".to_string()),
            is_phrase: Some(true),
            allowed_pos: None,
        };
        let record = raw.into_record(0).unwrap();
        assert!(record.allowed_pos.is_empty());
        assert_eq!(record.alternative_verbs, vec!["operate".to_string()]);
    }

    #[test]
    fn test_word_requires_allowed_pos() {
        let raw = RawRecord {
            lemma: Some("lift".to_string()),
            alternative_verbs: Some(ListField::Items(vec!["move".to_string()])),
            example: Some("Move boxes.".to_string()),
            is_phrase: Some(false),
            allowed_pos: None,
        };
        let err = raw.into_record(0).unwrap_err();
        assert!(matches!(err, LexiconLoadError::MissingField { field: "allowed_pos", .. }));
    }

    #[test]
    fn test_missing_lemma_names_the_index() {
        let err = RawRecord::default().into_record(4).unwrap_err();
        assert_eq!(err.to_string(), "entry #4: missing required field `lemma`");
    }
}
