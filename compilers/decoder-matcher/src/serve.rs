//! Served-model interface: a JSON payload in, a map of requested match
//! properties keyed by start position out.

use crate::detector::{DetectError, Detector};
use decoder_protocol::AbleistLanguageMatch;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ServeError {
    #[error(
        "unknown match property '{0}' \
         (expected one of: lemma, text, start, end, alternative_verbs, example)"
    )]
    UnknownProperty(String),
    #[error("two matches start at token {0}")]
    DuplicateStart(usize),
    #[error("request has neither `text` nor `input_file`")]
    MissingInput,
    #[error("failed to read input file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid request: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Detect(#[from] DetectError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchProperty {
    Lemma,
    Text,
    Start,
    End,
    AlternativeVerbs,
    Example,
}

impl MatchProperty {
    pub const ALL: [MatchProperty; 6] = [
        MatchProperty::Lemma,
        MatchProperty::Text,
        MatchProperty::Start,
        MatchProperty::End,
        MatchProperty::AlternativeVerbs,
        MatchProperty::Example,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MatchProperty::Lemma => "lemma",
            MatchProperty::Text => "text",
            MatchProperty::Start => "start",
            MatchProperty::End => "end",
            MatchProperty::AlternativeVerbs => "alternative_verbs",
            MatchProperty::Example => "example",
        }
    }

    /// The property's value, as a string.
    pub fn render(&self, m: &AbleistLanguageMatch) -> Result<String, ServeError> {
        Ok(match self {
            MatchProperty::Lemma => m.lemma.clone(),
            MatchProperty::Text => m.matched_text.clone(),
            MatchProperty::Start => m.start.to_string(),
            MatchProperty::End => m.end.to_string(),
            MatchProperty::AlternativeVerbs => serde_json::to_string(&m.alternative_verbs)?,
            MatchProperty::Example => m.example.clone(),
        })
    }
}

impl fmt::Display for MatchProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MatchProperty {
    type Err = ServeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MatchProperty::ALL
            .iter()
            .copied()
            .find(|p| p.name() == s.trim())
            .ok_or_else(|| ServeError::UnknownProperty(s.to_string()))
    }
}

/// `{"text": "...", "properties": ["lemma", "start"]}`, or `input_file` in
/// place of `text` to read the job description from disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_file: Option<PathBuf>,
    #[serde(default)]
    pub properties: Vec<String>,
}

impl PredictRequest {
    pub fn from_json(json: &str) -> Result<Self, ServeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Inline text wins over `input_file`.
    pub fn resolve_text(&self) -> Result<Cow<'_, str>, ServeError> {
        if let Some(text) = &self.text {
            return Ok(Cow::Borrowed(text));
        }
        let path = self.input_file.as_ref().ok_or(ServeError::MissingInput)?;
        fs::read_to_string(path)
            .map(Cow::Owned)
            .map_err(|source| ServeError::Io {
                path: path.clone(),
                source,
            })
    }

    pub fn parsed_properties(&self) -> Result<Vec<MatchProperty>, ServeError> {
        self.properties.iter().map(|p| p.parse()).collect()
    }
}

/// Requested properties per match, keyed by the match's start token and
/// kept in ascending start order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredictResponse {
    entries: Vec<(usize, Vec<(MatchProperty, String)>)>,
}

impl PredictResponse {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, start: usize) -> Option<&[(MatchProperty, String)]> {
        self.entries
            .iter()
            .find(|(s, _)| *s == start)
            .map(|(_, props)| props.as_slice())
    }

    pub fn starts(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().map(|(s, _)| *s)
    }
}

impl Serialize for PredictResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (start, props) in &self.entries {
            map.serialize_entry(&start.to_string(), &PropertyMap(props))?;
        }
        map.end()
    }
}

struct PropertyMap<'a>(&'a [(MatchProperty, String)]);

impl Serialize for PropertyMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (prop, value) in self.0 {
            map.serialize_entry(prop.name(), value)?;
        }
        map.end()
    }
}

/// Builds the response for matches already found.
pub fn render_matches(
    matches: &[AbleistLanguageMatch],
    properties: &[MatchProperty],
) -> Result<PredictResponse, ServeError> {
    let mut entries: Vec<(usize, Vec<(MatchProperty, String)>)> = Vec::with_capacity(matches.len());
    for m in matches {
        if entries.iter().any(|(start, _)| *start == m.start) {
            return Err(ServeError::DuplicateStart(m.start));
        }
        let props = properties
            .iter()
            .map(|p| Ok((*p, p.render(m)?)))
            .collect::<Result<Vec<_>, ServeError>>()?;
        entries.push((m.start, props));
    }
    Ok(PredictResponse { entries })
}

impl Detector {
    /// Served-model entry point.
    pub fn predict(&self, request: &PredictRequest) -> Result<PredictResponse, ServeError> {
        // reject bad property names before doing any work
        let properties = request.parsed_properties()?;
        let text = request.resolve_text()?;
        let matches = self.find_ableist_language(&text)?;
        debug!(matches = matches.len(), properties = properties.len(), "predict");
        render_matches(&matches, &properties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decoder_protocol::Span;
    use std::io::Write;

    const JOB: &str = "You will lift heavy boxes and move your hands.";

    fn request(properties: &[&str]) -> PredictRequest {
        PredictRequest {
            text: Some(JOB.to_string()),
            input_file: None,
            properties: properties.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn sample(start: usize) -> AbleistLanguageMatch {
        AbleistLanguageMatch {
            matched_text: "lifting".to_string(),
            lemma: "lift".to_string(),
            start,
            end: start + 1,
            char_span: Span::new(0, 7),
            alternative_verbs: vec!["move".to_string(), "transport".to_string()],
            example: "Move boxes.".to_string(),
        }
    }

    #[test]
    fn test_predict_requested_properties() {
        let detector = Detector::builtin().unwrap();
        let response = detector.predict(&request(&["lemma", "text", "end"])).unwrap();

        assert_eq!(response.starts().collect::<Vec<_>>(), vec![2, 6]);
        let lift = response.get(2).unwrap();
        assert_eq!(
            lift,
            &[
                (MatchProperty::Lemma, "lift".to_string()),
                (MatchProperty::Text, "lift".to_string()),
                (MatchProperty::End, "3".to_string()),
            ]
        );

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["6"]["lemma"], "move your hand");
        assert_eq!(json["6"]["text"], "move your hands");
        assert_eq!(json["6"]["end"], "9");
    }

    #[test]
    fn test_alternative_verbs_render_as_json_list() {
        let value = MatchProperty::AlternativeVerbs.render(&sample(0)).unwrap();
        assert_eq!(value, r#"["move","transport"]"#);
    }

    #[test]
    fn test_empty_properties_give_empty_maps() {
        let detector = Detector::builtin().unwrap();
        let response = detector.predict(&request(&[])).unwrap();
        assert_eq!(response.len(), 2);
        assert_eq!(serde_json::to_string(&response).unwrap(), r#"{"2":{},"6":{}}"#);
    }

    #[test]
    fn test_unknown_property() {
        let detector = Detector::builtin().unwrap();
        let err = detector.predict(&request(&["lemma", "severity"])).unwrap_err();
        assert!(matches!(err, ServeError::UnknownProperty(ref p) if p == "severity"));
    }

    #[test]
    fn test_duplicate_start_is_an_error() {
        let err = render_matches(&[sample(4), sample(4)], &[MatchProperty::Lemma]).unwrap_err();
        assert!(matches!(err, ServeError::DuplicateStart(4)));
    }

    #[test]
    fn test_request_from_json_and_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(JOB.as_bytes()).unwrap();

        let payload = serde_json::json!({
            "input_file": file.path(),
            "properties": ["start", "example"],
        });
        let request = PredictRequest::from_json(&payload.to_string()).unwrap();
        assert_eq!(request.resolve_text().unwrap(), JOB);

        let response = Detector::builtin().unwrap().predict(&request).unwrap();
        assert_eq!(response.get(2).unwrap()[0], (MatchProperty::Start, "2".to_string()));
    }

    #[test]
    fn test_missing_input() {
        let err = PredictRequest::default().resolve_text().unwrap_err();
        assert!(matches!(err, ServeError::MissingInput));

        let request = PredictRequest {
            input_file: Some(PathBuf::from("/no/such/job.txt")),
            ..PredictRequest::default()
        };
        assert!(matches!(request.resolve_text(), Err(ServeError::Io { .. })));
    }

    #[test]
    fn test_property_names_round_trip() {
        for prop in MatchProperty::ALL {
            assert_eq!(prop.name().parse::<MatchProperty>().unwrap(), prop);
        }
    }
}
