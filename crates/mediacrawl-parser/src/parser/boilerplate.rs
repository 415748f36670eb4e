//! Boilerplate heading prefixes ("دانلود فیلم", "Download Movie").

use std::sync::LazyLock;

use crate::lexer::{normalize_input, Lexeme, Token};
use crate::phrases::BOILERPLATE_PREFIXES;

/// Built-in phrases split into normalized words.
static BUILTIN_PHRASES: LazyLock<Vec<Vec<String>>> =
    LazyLock::new(|| BOILERPLATE_PREFIXES.iter().map(|p| phrase_words(p)).collect());

fn phrase_words(phrase: &str) -> Vec<String> {
    normalize_input(phrase)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Number of leading lexemes covered by a boilerplate prefix, `0` if none.
///
/// Phrases match word by word at the very start of the heading: Latin words
/// case-insensitively, other-script words exactly (both sides have been
/// through letter folding). Whitespace between words is free. When several
/// phrases match, the one with the most words wins.
pub fn strip_prefix(lexemes: &[Lexeme<'_>], extra_prefixes: &[String]) -> usize {
    let extra: Vec<Vec<String>> = extra_prefixes.iter().map(|p| phrase_words(p)).collect();

    let mut best_end = 0;
    let mut best_len = 0;
    for words in BUILTIN_PHRASES.iter().chain(extra.iter()) {
        if words.len() <= best_len {
            continue;
        }
        if let Some(end) = match_phrase(lexemes, words) {
            best_end = end;
            best_len = words.len();
        }
    }
    best_end
}

fn match_phrase(lexemes: &[Lexeme<'_>], words: &[String]) -> Option<usize> {
    let mut pos = 0;
    for word in words {
        while lexemes.get(pos).is_some_and(|l| l.token == Token::Whitespace) {
            pos += 1;
        }
        let lexeme = lexemes.get(pos)?;
        let matched = match lexeme.token {
            Token::Latin => lexeme.text.eq_ignore_ascii_case(word),
            Token::OtherScript => lexeme.text == word,
            _ => false,
        };
        if !matched {
            return None;
        }
        pos += 1;
    }
    Some(pos)
}
