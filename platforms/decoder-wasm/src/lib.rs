use decoder_lexicon::LexiconStore;
use decoder_matcher::{DetectError, Detector, PredictRequest};
use decoder_protocol::AbleistLanguageMatch;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// One token as the annotator saw it, for highlighting in the editor.
#[derive(Debug, Serialize)]
pub struct TokenDebug {
    pub text: String,
    pub lemma: String,
    pub pos: String,
    /// Byte offsets into the input, end exclusive.
    pub char_start: usize,
    pub char_end: usize,
}

/// The structured response sent back to JavaScript
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub tokens: Vec<TokenDebug>,
    pub matches: Vec<AbleistLanguageMatch>,
}

fn analyze_text(detector: &Detector, input: &str) -> Result<AnalysisReport, DetectError> {
    let annotated = detector.annotate(input)?;
    let matches = detector.match_tokens(&annotated)?;
    let tokens = annotated
        .into_iter()
        .map(|t| TokenDebug {
            pos: t.pos.to_string(),
            char_start: t.char_span.start,
            char_end: t.char_span.end,
            text: t.text,
            lemma: t.lemma,
        })
        .collect();

    Ok(AnalysisReport { tokens, matches })
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// The Engine Instance running in the Browser
#[wasm_bindgen]
pub struct DecoderEngine {
    detector: Detector,
}

#[wasm_bindgen]
impl DecoderEngine {
    /// `data` is a compiled lexicon archive, loaded via fetch() in JS.
    #[wasm_bindgen(constructor)]
    pub fn new(data: Vec<u8>) -> Result<DecoderEngine, JsValue> {
        let store = LexiconStore::from_archive_bytes(&data).map_err(js_error)?;
        Ok(Self::from_store(store))
    }

    /// Engine over the lexicon bundled with the module.
    pub fn builtin() -> Result<DecoderEngine, JsValue> {
        let store = LexiconStore::builtin().map_err(js_error)?;
        Ok(Self::from_store(store))
    }

    #[wasm_bindgen(getter, js_name = lexiconVersion)]
    pub fn lexicon_version(&self) -> u32 {
        self.detector.lexicon().version()
    }

    /// Matches as an array of plain objects, ascending by position.
    pub fn find(&self, input: &str) -> Result<JsValue, JsValue> {
        let matches = self.detector.find_ableist_language(input).map_err(js_error)?;
        serde_wasm_bindgen::to_value(&matches).map_err(js_error)
    }

    /// Tokens and matches together.
    pub fn analyze(&self, input: &str) -> Result<JsValue, JsValue> {
        let report = analyze_text(&self.detector, input).map_err(js_error)?;
        serde_wasm_bindgen::to_value(&report).map_err(js_error)
    }

    /// Served-model call; `payload` is `{text, properties}`.
    pub fn predict(&self, payload: JsValue) -> Result<JsValue, JsValue> {
        let request: PredictRequest =
            serde_wasm_bindgen::from_value(payload).map_err(js_error)?;
        let response = self.detector.predict(&request).map_err(js_error)?;
        response
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(js_error)
    }
}

impl DecoderEngine {
    fn from_store(store: LexiconStore) -> Self {
        Self {
            detector: Detector::with_lexicon(store),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_report() {
        let engine = DecoderEngine::from_store(LexiconStore::builtin().unwrap());
        let report = analyze_text(&engine.detector, "Lift boxes daily.").unwrap();

        assert_eq!(report.tokens.len(), 4);
        assert_eq!(report.tokens[0].lemma, "lift");
        assert_eq!(report.tokens[0].pos, "VERB");
        assert_eq!((report.tokens[1].char_start, report.tokens[1].char_end), (5, 10));
        assert_eq!(report.matches.len(), 1);
        assert_eq!(report.matches[0].lemma, "lift");
        assert_eq!(report.matches[0].char_span.start, report.tokens[0].char_start);
    }

    #[test]
    fn test_engine_reads_compiled_lexicon() {
        let store = LexiconStore::builtin().unwrap();
        let bytes = rkyv_bytes(&store);
        let loaded = LexiconStore::from_archive_bytes(&bytes).unwrap();
        let engine = DecoderEngine::from_store(loaded);
        assert_eq!(engine.lexicon_version(), store.version());
    }

    fn rkyv_bytes(store: &LexiconStore) -> Vec<u8> {
        rkyv::to_bytes::<_, 1024>(&store.to_source()).unwrap().to_vec()
    }
}
