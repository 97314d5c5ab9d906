use crate::parser::{RawToken, TokenKind};
use decoder_morph::is_possessive_determiner;
use decoder_protocol::PartOfSpeech;

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "every", "each", "any", "some", "no", "all",
    "both", "another", "either", "neither", "such",
];

const SUBJECT_PRONOUNS: &[&str] = &["i", "you", "he", "she", "it", "we", "they"];

const OTHER_PRONOUNS: &[&str] = &[
    "me", "him", "us", "them", "who", "whom", "whose", "which", "what", "someone", "anyone",
    "everyone", "something", "anything", "everything", "nothing", "yourself", "yourselves",
    "themselves", "itself", "myself", "ourselves", "himself", "herself", "mine", "yours", "ours",
    "theirs",
];

const ADPOSITIONS: &[&str] = &[
    "in", "on", "at", "by", "with", "without", "from", "for", "of", "about", "into", "onto", "over",
    "under", "through", "during", "across", "after", "before", "between", "among", "within", "per",
    "via", "toward", "towards", "around", "up", "down", "off", "out", "against", "along", "above",
    "below", "beyond", "upon", "including", "like", "near", "behind", "throughout",
];

const COORDINATORS: &[&str] = &["and", "or", "but", "nor", "yet", "plus"];

const SUBORDINATORS: &[&str] = &[
    "if", "because", "while", "although", "though", "whether", "unless", "since", "when", "where",
    "as", "than", "until", "once", "so",
];

const AUXILIARIES: &[&str] = &[
    "be", "am", "is", "are", "was", "were", "been", "being", "will", "would", "shall", "should",
    "can", "could", "may", "might", "must", "'re", "'ve", "'ll", "'d", "'m",
];

const DO_FORMS: &[&str] = &["do", "does", "did"];

const HAVE_FORMS: &[&str] = &["have", "has", "had", "having"];

const ADVERBS: &[&str] = &[
    "very", "too", "also", "often", "always", "never", "sometimes", "well", "just", "only", "even",
    "still", "again", "here", "there", "now", "then", "quite", "rather", "soon", "already",
    "almost", "more", "most", "less", "least", "however", "together", "away", "back", "ahead",
    "overtime",
];

const INTERJECTIONS: &[&str] = &["yes", "please", "hello", "oh", "ok", "okay"];

const NUMBER_WORDS: &[&str] = &[
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "twenty", "fifty", "hundred", "thousand", "dozen",
];

const ADJECTIVES: &[&str] = &[
    "able", "unable", "heavy", "excellent", "strong", "good", "great", "new", "old", "large",
    "small", "big", "long", "short", "high", "low", "full", "other", "same", "different",
    "physical", "manual", "fast", "busy", "safe", "clean", "basic", "key", "required", "necessary",
    "general", "independent", "professional", "quick", "hard", "whole", "own", "certain", "free",
    "open", "main", "major", "minor", "extended", "prolonged", "repetitive", "fine", "gross",
    "sound", "steady", "upright", "standing", "seated", "daily", "weekly", "monthly", "early",
    "friendly", "likely", "elderly", "costly", "orderly", "proficient", "fluent", "competent",
    "diligent", "efficient", "confident", "current", "present", "prior", "similar", "equivalent",
];

/// Words that end in `-ly` without being adverbs.
const NOT_LY_ADVERBS: &[&str] = &[
    "apply", "supply", "reply", "comply", "multiply", "family", "assembly", "fly", "ally", "rely",
    "bully", "belly", "jelly", "rally", "tally", "italy",
];

/// Words that end in an adjective suffix without being adjectives.
const NOT_SUFFIX_ADJECTIVES: &[&str] = &[
    "table", "cable", "stable", "fable", "bible", "drive", "arrive", "give", "live", "receive",
    "achieve", "believe", "derive", "thrive", "strive", "dive", "hive", "archive", "olive", "bless",
    "executive", "representative", "initiative", "incentive", "detective", "motive", "native",
];

/// Base forms read as imperatives when they open a sentence or list item.
const SENTENCE_VERBS: &[&str] = &[
    "lift", "carry", "bend", "climb", "crawl", "crouch", "kneel", "stoop", "stand", "sit", "walk",
    "see", "hear", "listen", "speak", "talk", "grasp", "grip", "push", "pull", "move", "use",
    "work", "type", "operate", "handle", "maintain", "perform", "ensure", "provide", "assist",
    "manage", "support", "help", "prepare", "communicate", "reach", "drive", "travel", "read",
    "write", "answer", "respond", "follow", "complete", "keep", "make", "take", "lead", "build",
    "install", "load", "unload", "deliver", "review", "monitor", "assemble", "inspect", "repair",
    "stock", "sort", "pack", "remain", "balance", "twist", "apply",
];

/// Clitics that become auxiliaries after these words: "it's", "there's".
const CONTRACTED_IS_HOSTS: &[&str] = &[
    "it", "he", "she", "that", "there", "what", "who", "here", "where", "this",
];

fn is_adjective_word(w: &str) -> bool {
    if ADJECTIVES.contains(&w) {
        return true;
    }
    if NOT_SUFFIX_ADJECTIVES.contains(&w) {
        return false;
    }
    let suffixed = |suffix: &str, min_len: usize| w.len() >= min_len && w.ends_with(suffix);
    suffixed("able", 6)
        || suffixed("ible", 6)
        || suffixed("ful", 6)
        || suffixed("ous", 6)
        || suffixed("ive", 6)
        || suffixed("less", 6)
        || suffixed("ical", 6)
        || suffixed("ional", 7)
        || suffixed("ual", 6)
}

fn is_ly_adverb(w: &str) -> bool {
    w.len() > 3 && w.ends_with("ly") && !NOT_LY_ADVERBS.contains(&w)
}

fn punctuation_tag(c: char) -> PartOfSpeech {
    if c.is_whitespace() {
        return PartOfSpeech::Space;
    }
    match c {
        '$' | '%' | '&' | '*' | '+' | '<' | '=' | '>' | '#' | '@' | '^' | '|' | '~' | '`'
        | '\\' => PartOfSpeech::Sym,
        c if c.is_ascii_punctuation() => PartOfSpeech::Punct,
        '\u{2010}'..='\u{2027}' | '\u{00ab}' | '\u{00bb}' | '\u{00bf}' | '\u{00a1}' => {
            PartOfSpeech::Punct
        }
        _ => PartOfSpeech::Sym,
    }
}

/// Tag decided by the word alone, before any context is looked at.
/// `None` marks an open-class word left for the contextual pass.
fn lexical_tag(w: &str, kind: TokenKind) -> Option<PartOfSpeech> {
    let tag = match kind {
        TokenKind::Number => PartOfSpeech::Num,
        TokenKind::Punctuation(c) => punctuation_tag(c),
        TokenKind::Word => {
            if DETERMINERS.contains(&w) {
                PartOfSpeech::Det
            } else if is_possessive_determiner(w)
                || SUBJECT_PRONOUNS.contains(&w)
                || OTHER_PRONOUNS.contains(&w)
            {
                PartOfSpeech::Pron
            } else if ADPOSITIONS.contains(&w) {
                PartOfSpeech::Adp
            } else if COORDINATORS.contains(&w) {
                PartOfSpeech::Cconj
            } else if SUBORDINATORS.contains(&w) {
                PartOfSpeech::Sconj
            } else if AUXILIARIES.contains(&w) {
                PartOfSpeech::Aux
            } else if w == "not" || w == "n't" {
                PartOfSpeech::Part
            } else if ADVERBS.contains(&w) {
                PartOfSpeech::Adv
            } else if INTERJECTIONS.contains(&w) {
                PartOfSpeech::Intj
            } else if NUMBER_WORDS.contains(&w) {
                PartOfSpeech::Num
            } else if is_adjective_word(w) {
                PartOfSpeech::Adj
            } else if is_ly_adverb(w) {
                PartOfSpeech::Adv
            } else {
                return None;
            }
        }
    };
    Some(tag)
}

fn is_negation(w: Option<&str>) -> bool {
    matches!(w, Some("not") | Some("n't"))
}

fn is_gerund(w: &str) -> bool {
    w.len() > 4 && w.ends_with("ing")
}

/// Whether the next word opens an object or complement: "moving your hands",
/// "standing on", "lifting heavy boxes". "of" marks a nominal: "the lifting of".
fn object_follows(next: Option<PartOfSpeech>, next_word: Option<&str>) -> bool {
    match next {
        Some(PartOfSpeech::Det)
        | Some(PartOfSpeech::Pron)
        | Some(PartOfSpeech::Adj)
        | Some(PartOfSpeech::Num) => true,
        Some(PartOfSpeech::Adp) => next_word != Some("of"),
        _ => false,
    }
}

/// `stand-up`, `walk-in`: a word joined by a hyphen to the next word.
fn opens_hyphen_compound(tokens: &[RawToken], i: usize) -> bool {
    match (tokens.get(i), tokens.get(i + 1), tokens.get(i + 2)) {
        (Some(word), Some(dash), Some(next)) => {
            dash.kind == TokenKind::Punctuation('-')
                && !word.trailing_whitespace
                && !dash.trailing_whitespace
                && next.is_word()
        }
        _ => false,
    }
}

/// Assigns a universal POS tag to every token.
///
/// Closed-class words come from fixed tables. Open-class words are tagged
/// left to right from the tag already given to the previous token and the
/// lexical class of the next one.
pub fn tag(tokens: &[RawToken]) -> Vec<PartOfSpeech> {
    let words: Vec<String> = tokens
        .iter()
        .map(|t| t.text.replace('\u{2019}', "'").to_lowercase())
        .collect();
    let lexical: Vec<Option<PartOfSpeech>> = tokens
        .iter()
        .zip(&words)
        .map(|(t, w)| lexical_tag(w, t.kind))
        .collect();

    let word_at = |i: usize| words.get(i).map(String::as_str);
    let lexical_at = |i: usize| lexical.get(i).copied().flatten();

    let mut tags: Vec<PartOfSpeech> = Vec::with_capacity(tokens.len());

    for (i, token) in tokens.iter().enumerate() {
        let w = words[i].as_str();
        let prev = if i > 0 { Some(tags[i - 1]) } else { None };
        let prev_word = if i > 0 { word_at(i - 1) } else { None };
        let next_is_word = tokens.get(i + 1).map_or(false, |t| t.is_word());
        let next = lexical_at(i + 1);
        let next_word = word_at(i + 1);

        // 1. Words whose class depends on a neighbour
        if token.is_word() {
            if w == "to" {
                let verb_follows = next_is_word
                    && matches!(next, None | Some(PartOfSpeech::Adv) | Some(PartOfSpeech::Aux));
                tags.push(if verb_follows { PartOfSpeech::Part } else { PartOfSpeech::Adp });
                continue;
            }
            if w == "'s" {
                let host_is_subject = prev_word.map_or(false, |p| CONTRACTED_IS_HOSTS.contains(&p));
                tags.push(if host_is_subject { PartOfSpeech::Aux } else { PartOfSpeech::Part });
                continue;
            }
            if (w == "ca" || w == "wo") && is_negation(word_at(i + 1)) {
                tags.push(PartOfSpeech::Aux);
                continue;
            }
            if DO_FORMS.contains(&w) {
                let aux = is_negation(word_at(i + 1))
                    || word_at(i + 1).map_or(false, |n| SUBJECT_PRONOUNS.contains(&n));
                tags.push(if aux { PartOfSpeech::Aux } else { PartOfSpeech::Verb });
                continue;
            }
            if HAVE_FORMS.contains(&w) {
                let aux = is_negation(word_at(i + 1))
                    || word_at(i + 1).map_or(false, |n| {
                        n == "been" || (next.is_none() && (n.ends_with("ed") || n.ends_with("en")))
                    });
                tags.push(if aux { PartOfSpeech::Aux } else { PartOfSpeech::Verb });
                continue;
            }
        }

        // 2. Closed classes and suffix-marked words; "standing" stays a verb before its complement
        if lexical[i] == Some(PartOfSpeech::Adj)
            && is_gerund(w)
            && object_follows(next, next_word)
        {
            tags.push(PartOfSpeech::Verb);
            continue;
        }
        if let Some(fixed) = lexical[i] {
            tags.push(fixed);
            continue;
        }

        // 3. First half of a hyphenated modifier
        if opens_hyphen_compound(tokens, i) {
            tags.push(PartOfSpeech::Adj);
            continue;
        }

        // 4. Open-class words, from context
        tags.push(open_class_tag(w, prev, prev_word, next, next_word, &tags, i));
    }

    tags
}

fn open_class_tag(
    w: &str,
    prev: Option<PartOfSpeech>,
    prev_word: Option<&str>,
    next: Option<PartOfSpeech>,
    next_word: Option<&str>,
    tags: &[PartOfSpeech],
    i: usize,
) -> PartOfSpeech {
    use PartOfSpeech::*;

    let gerund = is_gerund(w);
    let participle = w.len() > 3 && w.ends_with("ed");
    let after_possessive = (prev == Some(Pron)
        && prev_word.map_or(false, is_possessive_determiner))
        || (prev == Some(Part) && prev_word == Some("'s"));

    match prev {
        // the lifting, heavy lifting, your lifting; but "comfortable moving your hands"
        Some(Det) | Some(Adj) if gerund && !object_follows(next, next_word) => Noun,
        _ if after_possessive && gerund => Noun,
        _ if gerund => Verb,

        _ if after_possessive => Noun,
        Some(Det) | Some(Num) if participle => Adj,
        Some(Det) | Some(Adj) | Some(Num) => Noun,

        Some(Part) | Some(Aux) => Verb,
        Some(Pron) => Verb,
        Some(Adp) => Noun,
        Some(Adv) => Verb,
        Some(Verb) => Noun,

        // ski lift, lift boxes: a noun is followed by a verb only when an object follows
        Some(Noun) | Some(Propn) => match next {
            Some(Det) | Some(Pron) | Some(Num) | Some(Adj) | Some(Adv) => Verb,
            _ => Noun,
        },

        // sentence or clause start
        _ => {
            if matches!(
                next,
                Some(Det) | Some(Pron) | Some(Adp) | Some(Num) | Some(Adv) | Some(Adj)
            ) {
                return Verb;
            }
            if prev == Some(Cconj) {
                if let Some(conjunct) = tags[..i.saturating_sub(1)].last() {
                    if matches!(conjunct, Verb | Noun | Adj) {
                        return *conjunct;
                    }
                }
            }
            if SENTENCE_VERBS.contains(&w) {
                Verb
            } else {
                Noun
            }
        }
    }
}
