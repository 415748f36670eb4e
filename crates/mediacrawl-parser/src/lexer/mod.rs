//! Logos-based lexer for headings and anchor text.
//!
//! Input is first passed through [`normalize_input`], a char-by-char mapping
//! that turns non-Latin decimal digits into `0-9` and folds a few letter
//! variants, then tokenized with the [logos](https://docs.rs/logos) crate.
//! Tokenization is total: every character of the normalized input belongs to
//! exactly one token.

mod token;
pub use token::Token;

use logos::Logos;
use std::ops::Range;

use crate::phrases::{CARDINAL_WORDS, ORDINAL_WORDS};

/// Byte span in the normalized input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

/// Letters with no canonical decomposition, spelled out in ASCII.
fn transliterate(ch: char) -> Option<&'static str> {
    Some(match ch {
        'ß' => "ss",
        'æ' => "ae",
        'Æ' => "Ae",
        'œ' => "oe",
        'Œ' => "Oe",
        'ø' => "o",
        'Ø' => "O",
        'ł' => "l",
        'Ł' => "L",
        'đ' | 'ð' => "d",
        'Đ' | 'Ð' => "D",
        'þ' => "th",
        'Þ' => "Th",
        'ı' => "i",
        _ => return None,
    })
}

/// Append the normalized form of one character to `out`.
///
/// - Arabic-Indic, Persian and fullwidth digits become Latin digits.
/// - Latin letters carrying diacritics become their ASCII base letter;
///   letters without a decomposition (ß, æ, ø, ...) are transliterated.
/// - Arabic Kaf/Yeh/Alef Maksura become the Persian letters used by the
///   boilerplate phrases.
fn push_normalized(out: &mut String, ch: char) {
    let mapped = match ch {
        '\u{0660}'..='\u{0669}' => digit(ch as u32 - 0x0660),
        '\u{06F0}'..='\u{06F9}' => digit(ch as u32 - 0x06F0),
        '\u{FF10}'..='\u{FF19}' => digit(ch as u32 - 0xFF10),
        '\u{0643}' => '\u{06A9}',
        '\u{064A}' | '\u{0649}' => '\u{06CC}',
        c if !c.is_ascii() && c.is_alphabetic() => {
            if let Some(text) = transliterate(c) {
                out.push_str(text);
                return;
            }
            fold_latin(c).unwrap_or(c)
        }
        c => c,
    };
    out.push(mapped);
}

/// True for a decimal digit written in a non-Latin script.
fn is_foreign_digit(ch: char) -> bool {
    matches!(ch, '\u{0660}'..='\u{0669}' | '\u{06F0}'..='\u{06F9}' | '\u{FF10}'..='\u{FF19}')
}

fn digit(value: u32) -> char {
    char::from_digit(value, 10).unwrap_or('0')
}

/// ASCII base letter of a precomposed Latin letter (é → e), if any.
fn fold_latin(ch: char) -> Option<char> {
    let mut base = None;
    unicode_normalization::char::decompose_canonical(ch, |c| {
        if base.is_none() {
            base = Some(c);
        }
    });
    base.filter(|c| c.is_ascii_alphabetic())
}

/// Normalize input before lexing.
///
/// The mapping is applied character by character. A character may expand
/// (ß → ss) but characters are never merged, so a letter run stays a letter
/// run and a digit run stays a digit run.
pub fn normalize_input(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        push_normalized(&mut out, ch);
    }
    out
}

/// Normalize input, also marking which bytes of the result were digits of
/// another script.
fn normalize_with_origin(input: &str) -> (String, Vec<bool>) {
    let mut out = String::with_capacity(input.len());
    let mut foreign = Vec::with_capacity(input.len());
    for ch in input.chars() {
        let before = out.len();
        push_normalized(&mut out, ch);
        foreign.resize(out.len(), false);
        if is_foreign_digit(ch) {
            foreign[before..].fill(true);
        }
    }
    (out, foreign)
}

/// A token together with its text and location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme<'a> {
    /// Token classification.
    pub token: Token,
    /// Text of the token (borrowed from the normalized input).
    pub text: &'a str,
    /// Byte span in the normalized input.
    pub span: Span,
    /// Digit run written in a non-Latin script (`۳۴`), kept apart from Latin
    /// digit runs.
    pub foreign_digits: bool,
}

impl<'a> Lexeme<'a> {
    /// Numeric value of a digit run or ordinal ("24th" → 24, "Third" → 3).
    ///
    /// Returns `None` for other tokens and for digit runs too long to fit.
    pub fn value(&self) -> Option<u32> {
        match self.token {
            Token::Digits => self.text.parse().ok(),
            Token::Ordinal => {
                let numeral: &str = self.text.trim_end_matches(|c: char| c.is_ascii_alphabetic());
                if numeral.is_empty() {
                    ORDINAL_WORDS
                        .get(self.text.to_ascii_lowercase().as_str())
                        .copied()
                } else {
                    numeral.parse().ok()
                }
            }
            _ => None,
        }
    }

    /// Number of characters in the token, e.g. 4 for a year-shaped digit run.
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }

    /// True for tokens that can be part of a Latin title.
    ///
    /// Digits written in another script belong to the translated title and
    /// never extend a Latin run.
    pub fn is_title_word(&self) -> bool {
        match self.token {
            Token::Latin | Token::Ordinal => true,
            Token::Digits => !self.foreign_digits,
            _ => false,
        }
    }

    /// True for whitespace and punctuation.
    pub fn is_separator(&self) -> bool {
        matches!(self.token, Token::Whitespace | Token::Punctuation)
    }

    /// True for a 4-digit run whose value is a plausible release year.
    pub fn is_year_shaped(&self) -> bool {
        self.token == Token::Digits
            && self.width() == 4
            && self.value().is_some_and(|v| (1900..=2099).contains(&v))
    }

    /// Value of a spelled-out small number (cardinal, ordinal word, or roman numeral).
    pub fn word_number(&self) -> Option<u32> {
        let lower = self.text.to_ascii_lowercase();
        match self.token {
            Token::Latin => CARDINAL_WORDS.get(lower.as_str()).copied(),
            Token::Ordinal => ORDINAL_WORDS.get(lower.as_str()).copied(),
            _ => None,
        }
    }
}

/// A lexer that tokenizes headings and anchor text using Logos.
///
/// Owns the normalized input; tokens are stored as spans into it.
#[derive(Debug, Clone)]
pub struct Lexer {
    input: String,
    tokens: Vec<(Token, Range<usize>)>,
    foreign: Vec<bool>,
}

impl Lexer {
    /// Normalize and tokenize the given input.
    ///
    /// A digit run mixing Latin and non-Latin digits is split where the
    /// script changes.
    pub fn new(input: &str) -> Self {
        let (input, origin) = normalize_with_origin(input);
        let mut tokens = Vec::new();
        let mut foreign = Vec::new();

        for (tok, span) in Token::lexer(&input).spanned() {
            let Ok(tok) = tok else { continue };
            if tok != Token::Digits {
                foreign.push(origin[span.start]);
                tokens.push((tok, span));
                continue;
            }

            let mut start = span.start;
            for idx in span.start + 1..span.end {
                if origin[idx] != origin[start] {
                    foreign.push(origin[start]);
                    tokens.push((Token::Digits, start..idx));
                    start = idx;
                }
            }
            foreign.push(origin[start]);
            tokens.push((Token::Digits, start..span.end));
        }

        Self {
            input,
            tokens,
            foreign,
        }
    }

    /// Get all tokens with their spans.
    pub fn tokens(&self) -> &[(Token, Range<usize>)] {
        &self.tokens
    }

    /// Get the normalized input string.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Iterate over tokens with their text.
    pub fn lexemes(&self) -> impl Iterator<Item = Lexeme<'_>> + '_ {
        self.tokens
            .iter()
            .zip(&self.foreign)
            .map(|((token, span), foreign)| Lexeme {
                token: *token,
                text: &self.input[span.clone()],
                span: Span::from(span.clone()),
                foreign_digits: *token == Token::Digits && *foreign,
            })
    }
}

/// Tokenize a string. Pure and total.
pub fn tokenize(text: &str) -> Lexer {
    Lexer::new(text)
}
