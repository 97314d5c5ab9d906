use alloc::string::{String, ToString};

/// Possessive determiners are interchangeable inside ability phrases:
/// "move your hands" and "move her hands" name the same ability.
pub const POSSESSIVE_DETERMINERS: [&str; 7] = ["my", "your", "his", "her", "its", "our", "their"];

/// The form every possessive determiner normalizes to.
pub const CANONICAL_POSSESSIVE: &str = "your";

pub fn is_possessive_determiner(form: &str) -> bool {
    POSSESSIVE_DETERMINERS.iter().any(|p| p.eq_ignore_ascii_case(form))
}

/// Comparison form of a lemma: trimmed, lowercase, possessives collapsed.
pub fn normalize_form(form: &str) -> String {
    let lower = form.trim().to_lowercase();
    if is_possessive_determiner(&lower) {
        return CANONICAL_POSSESSIVE.to_string();
    }
    lower
}
