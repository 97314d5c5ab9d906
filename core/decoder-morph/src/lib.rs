#![no_std]

extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod irregular;
pub mod normalize;

pub use normalize::{is_possessive_determiner, normalize_form, CANONICAL_POSSESSIVE};

use alloc::format;
use alloc::string::{String, ToString};
use decoder_protocol::PartOfSpeech;

/// Reduces an inflected English word to its dictionary form.
///
/// The tag decides which inflection rules apply: nouns lose plural endings,
/// verbs lose `-s`, `-ed` and `-ing`. Proper nouns keep their case; every
/// other lemma is lowercase.
pub fn lemmatize(word: &str, pos: PartOfSpeech) -> String {
    if pos == PartOfSpeech::Propn {
        return word.to_string();
    }

    let lower = word.to_lowercase();
    match pos {
        PartOfSpeech::Verb | PartOfSpeech::Aux => verb_lemma(&lower),
        PartOfSpeech::Noun => noun_lemma(&lower),
        PartOfSpeech::Part if lower == "n't" => "not".to_string(),
        _ => lower,
    }
}

fn verb_lemma(w: &str) -> String {
    if let Some(lemma) = irregular::verb(w) {
        return lemma.to_string();
    }
    if !is_inflectable(w) {
        return w.to_string();
    }

    if w.len() > 4 && (w.ends_with("ies") || w.ends_with("ied")) {
        return format!("{}y", &w[..w.len() - 3]);
    }
    if w.len() > 4 && w.ends_with("ing") {
        if let Some(stem) = restore_stem(&w[..w.len() - 3]) {
            return stem;
        }
        return w.to_string();
    }
    if w.len() > 3 && w.ends_with("ed") {
        // need, proceed, exceed are base forms
        if w.ends_with("eed") {
            return w.to_string();
        }
        if let Some(stem) = restore_stem(&w[..w.len() - 2]) {
            return stem;
        }
        return w.to_string();
    }
    strip_plural_s(w)
}

fn noun_lemma(w: &str) -> String {
    if let Some(lemma) = irregular::noun(w) {
        return lemma.to_string();
    }
    if !is_inflectable(w) {
        return w.to_string();
    }
    if w.len() > 4 && w.ends_with("ies") {
        return format!("{}y", &w[..w.len() - 3]);
    }
    strip_plural_s(w)
}

/// Third-person `-s` and plural `-s`/`-es` share their spelling rules.
fn strip_plural_s(w: &str) -> String {
    if w.len() <= 3 || !w.ends_with('s') {
        return w.to_string();
    }
    if w.ends_with("ss") || w.ends_with("us") || w.ends_with("is") {
        return w.to_string();
    }
    if w.ends_with("es") {
        let stem = &w[..w.len() - 2];
        if ends_with_sibilant(stem) {
            return stem.to_string();
        }
    }
    w[..w.len() - 1].to_string()
}

/// Undo the spelling changes `-ing`/`-ed` make to a verb stem.
/// `None` when the remainder cannot be a stem (no vowel left).
fn restore_stem(stem: &str) -> Option<String> {
    if !stem.bytes().any(is_vowel) {
        return None;
    }
    let b = stem.as_bytes();
    let n = b.len();

    // runn -> run, stopp -> stop; fall, pass, buzz keep the pair
    let last = b[n - 1];
    if n >= 3 && last == b[n - 2] && !is_vowel(last) && !matches!(last, b'l' | b's' | b'z') {
        return Some(stem[..n - 1].to_string());
    }

    if needs_silent_e(b) {
        return Some(format!("{}e", stem));
    }
    Some(stem.to_string())
}

fn needs_silent_e(b: &[u8]) -> bool {
    let n = b.len();
    let last = b[n - 1];

    // no verb ends in v, u or c: solv(e), continu(e), danc(e)
    if matches!(last, b'v' | b'u' | b'c') {
        return true;
    }
    if last == b'z' && n >= 2 && b[n - 2] != b'z' {
        return true;
    }
    if n >= 2 {
        let prev = b[n - 2];
        if last == b'g' && matches!(prev, b'r' | b'd') {
            return true;
        }
        if last == b's' && matches!(prev, b'n' | b'p' | b'r') {
            return true;
        }
        // us(e)
        if n == 2 && is_vowel(prev) && !matches!(last, b'w' | b'x' | b'y') && !is_vowel(last) {
            return true;
        }
    }
    if n >= 5 && b[n - 1] == b't' && b[n - 2] == b'a' && !is_vowel(b[n - 3]) {
        return true;
    }
    // mov(e), writ(e), typ(e): one syllable ending consonant-vowel-consonant
    n >= 3
        && ends_cvc(b)
        && vowel_groups(b) == 1
}

fn ends_cvc(b: &[u8]) -> bool {
    let n = b.len();
    let (c1, v, c2) = (b[n - 3], b[n - 2], b[n - 1]);
    !is_vowel(c1) && is_vowel(v) && !is_vowel(c2) && !matches!(c2, b'w' | b'x' | b'y')
}

fn vowel_groups(b: &[u8]) -> usize {
    let mut groups = 0;
    let mut in_group = false;
    for &c in b {
        if is_vowel(c) {
            if !in_group {
                groups += 1;
            }
            in_group = true;
        } else {
            in_group = false;
        }
    }
    groups
}

fn ends_with_sibilant(stem: &str) -> bool {
    stem.ends_with('s')
        || stem.ends_with('x')
        || stem.ends_with('z')
        || stem.ends_with("ch")
        || stem.ends_with("sh")
}

fn is_vowel(c: u8) -> bool {
    matches!(c, b'a' | b'e' | b'i' | b'o' | b'u' | b'y')
}

/// Suffix rules only make sense for plain alphabetic words.
fn is_inflectable(w: &str) -> bool {
    !w.is_empty() && w.bytes().all(|c| c.is_ascii_lowercase())
}
