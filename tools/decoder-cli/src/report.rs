use decoder_protocol::AbleistLanguageMatch;
use std::fmt::Write;

/// The human-readable detection report.
pub fn render(matches: &[AbleistLanguageMatch]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Found {} instances of ableist language.", matches.len());
    for (i, m) in matches.iter().enumerate() {
        let _ = writeln!(out, "\nMatch #{}\n{}", i + 1, m);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use decoder_protocol::Span;

    #[test]
    fn test_report_layout() {
        let lift = AbleistLanguageMatch {
            matched_text: "lifting".to_string(),
            lemma: "lift".to_string(),
            start: 16,
            end: 17,
            char_span: Span::new(91, 98),
            alternative_verbs: vec!["move".to_string(), "transport".to_string()],
            example: "Move boxes.".to_string(),
        };
        assert_eq!(
            render(&[lift]),
            "Found 1 instances of ableist language.\n\n\
             Match #1\n\
             PHRASE: lifting | LEMMA: lift | POSITION: 16:17 | ALTERNATIVES: move, transport | EXAMPLE: Move boxes.\n"
        );
    }

    #[test]
    fn test_report_without_matches() {
        assert_eq!(render(&[]), "Found 0 instances of ableist language.\n");
    }
}
