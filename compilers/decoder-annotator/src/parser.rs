use nom::{
    branch::alt,
    bytes::complete::take_while,
    character::complete::{anychar, digit1, multispace0, one_of, satisfy},
    combinator::{map, opt, recognize},
    sequence::pair,
    IResult,
};
use decoder_protocol::Span;

/// Clitics split off the word they attach to: "it's" -> "it" + "'s".
const CLITICS: [&str; 6] = ["'s", "'re", "'ve", "'ll", "'d", "'m"];

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}

fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || is_apostrophe(c)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Number,
    Punctuation(char),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken<'a> {
    pub span: Span,
    pub text: &'a str,
    pub kind: TokenKind,
    pub trailing_whitespace: bool,
}

impl<'a> RawToken<'a> {
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

fn word(input: &str) -> IResult<&str, &str> {
    recognize(pair(satisfy(char::is_alphabetic), take_while(is_word_char)))(input)
}

fn number(input: &str) -> IResult<&str, &str> {
    recognize(pair(digit1, opt(pair(one_of(".,"), digit1))))(input)
}

#[derive(Debug, Clone, Copy)]
enum Lexeme<'a> {
    Word(&'a str),
    Number(&'a str),
    Punct(char),
}

/// Splits text into words, numbers and single-character punctuation.
/// Whitespace is dropped but remembered on the token before it.
pub fn tokenize(original_input: &str) -> Vec<RawToken<'_>> {
    let mut input = original_input;
    let mut result = Vec::new();

    loop {
        // 1. Skip whitespace
        let (next_input, _) = match multispace0::<&str, nom::error::Error<&str>>(input) {
            Ok(res) => res,
            Err(_) => break,
        };
        input = next_input;

        if input.is_empty() {
            break;
        }

        // 2. Match a lexeme; anychar makes this total on non-empty input
        let parse_res: IResult<&str, Lexeme> = alt((
            map(word, Lexeme::Word),
            map(number, Lexeme::Number),
            map(anychar, Lexeme::Punct),
        ))(input);

        let (next_input, lexeme) = match parse_res {
            Ok(res) => res,
            Err(_) => break,
        };

        let start = original_input.len() - input.len();
        let len = input.len() - next_input.len();
        let trailing_whitespace = next_input.starts_with(char::is_whitespace);

        match lexeme {
            Lexeme::Word(text) => {
                let pieces = split_clitics(text);
                let last = pieces.len() - 1;
                for (i, (offset, piece)) in pieces.into_iter().enumerate() {
                    let kind = match piece.chars().next() {
                        Some(c) if piece.chars().count() == 1 && is_apostrophe(c) => {
                            TokenKind::Punctuation(c)
                        }
                        _ => TokenKind::Word,
                    };
                    result.push(RawToken {
                        span: Span::new(start + offset, start + offset + piece.len()),
                        text: piece,
                        kind,
                        trailing_whitespace: i == last && trailing_whitespace,
                    });
                }
            }
            Lexeme::Number(text) => result.push(RawToken {
                span: Span::new(start, start + len),
                text,
                kind: TokenKind::Number,
                trailing_whitespace,
            }),
            Lexeme::Punct(c) => result.push(RawToken {
                span: Span::new(start, start + len),
                text: &input[..len],
                kind: TokenKind::Punctuation(c),
                trailing_whitespace,
            }),
        }

        input = next_input;
    }

    result
}

/// Breaks contractions and possessives off a word, with byte offsets into it.
fn split_clitics(word: &str) -> Vec<(usize, &str)> {
    let normalized = word.replace('\u{2019}', "'").to_lowercase();

    // can't -> ca + n't, don't -> do + n't
    if normalized.ends_with("n't") && normalized.len() > 3 {
        let cut = last_char_boundary(word, 3);
        if cut > 0 {
            return vec![(0, &word[..cut]), (cut, &word[cut..])];
        }
    }

    if let Some(p) = word.rfind(is_apostrophe) {
        if p > 0 {
            let suffix = word[p..].replace('\u{2019}', "'").to_lowercase();
            let bare_mark = p + word[p..].chars().next().map_or(1, char::len_utf8) == word.len();
            if CLITICS.contains(&suffix.as_str()) || bare_mark {
                return vec![(0, &word[..p]), (p, &word[p..])];
            }
        }
    }

    vec![(0, word)]
}

/// Byte index where the last `n` characters of `s` begin.
fn last_char_boundary(s: &str, n: usize) -> usize {
    s.char_indices().rev().nth(n - 1).map_or(0, |(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(tokens: &[RawToken<'a>]) -> Vec<&'a str> {
        tokens.iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_words_and_punctuation() {
        let tokens = tokenize("move your hands repeatedly, type on a computer.");
        assert_eq!(
            texts(&tokens),
            vec!["move", "your", "hands", "repeatedly", ",", "type", "on", "a", "computer", "."]
        );
        assert_eq!(tokens[3].kind, TokenKind::Word);
        assert_eq!(tokens[4].kind, TokenKind::Punctuation(','));
        assert!(!tokens[3].trailing_whitespace);
        assert!(tokens[4].trailing_whitespace);
        assert!(!tokens[9].trailing_whitespace);
    }

    #[test]
    fn test_spans_index_source() {
        let text = "  lift   50 lbs";
        let tokens = tokenize(text);
        assert_eq!(texts(&tokens), vec!["lift", "50", "lbs"]);
        for token in &tokens {
            assert_eq!(&text[token.span.start..token.span.end], token.text);
        }
        assert_eq!(tokens[1].kind, TokenKind::Number);
    }

    #[test]
    fn test_numbers_with_separators() {
        let tokens = tokenize("up to 1,000 or 2.5 pounds");
        assert_eq!(texts(&tokens), vec!["up", "to", "1,000", "or", "2.5", "pounds"]);
    }

    #[test]
    fn test_contractions_split() {
        assert_eq!(texts(&tokenize("can't")), vec!["ca", "n't"]);
        assert_eq!(texts(&tokenize("it's")), vec!["it", "'s"]);
        assert_eq!(texts(&tokenize("you'll")), vec!["you", "'ll"]);
        assert_eq!(texts(&tokenize("o'clock")), vec!["o'clock"]);
        assert_eq!(texts(&tokenize("workers' hands")), vec!["workers", "'", "hands"]);
        assert_eq!(texts(&tokenize("don\u{2019}t")), vec!["do", "n\u{2019}t"]);
    }

    #[test]
    fn test_unicode_letters_and_symbols() {
        let tokens = tokenize("café • résumé");
        assert_eq!(texts(&tokens), vec!["café", "•", "résumé"]);
        assert_eq!(tokens[1].kind, TokenKind::Punctuation('•'));
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \n\t ").is_empty());
    }
}
