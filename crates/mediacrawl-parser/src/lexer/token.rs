//! Token types for the Logos-based lexer.

use logos::Logos;

/// Token types recognized by the lexer.
///
/// The lexer runs over input whose non-Latin digits were already mapped to
/// `0-9` (see [`super::normalize_input`]), so every digit run is a
/// [`Token::Digits`] regardless of the script it was written in.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Ordinal numeral or word (e.g., 24th, 31st, 2nd, Third, tenth)
    #[regex(r"[0-9]+(?i:st|nd|rd|th)", priority = 10)]
    #[regex(
        r"(?i)first|second|third|fourth|fifth|sixth|seventh|eighth|ninth|tenth",
        priority = 9
    )]
    Ordinal,

    /// Maximal run of Latin digits
    #[regex(r"[0-9]+", priority = 5)]
    Digits,

    /// Latin word (ASCII letters only; diacritics are folded before lexing)
    #[regex(r"[A-Za-z]+", priority = 3)]
    Latin,

    /// Run of letters from a non-Latin script (Persian, Arabic, Cyrillic, CJK, ...)
    /// Zero-width joiners are kept inside the run.
    #[regex(
        r"[\p{Arabic}\p{Cyrillic}\p{Greek}\p{Hebrew}\p{Han}\p{Hiragana}\p{Katakana}\p{Hangul}\p{Thai}\p{Devanagari}\u{200C}\u{200D}]+",
        priority = 3
    )]
    OtherScript,

    /// Whitespace, including bidi marks and the BOM
    #[regex(r"[\s\u{200E}\u{200F}\u{FEFF}]+", priority = 3)]
    Whitespace,

    /// Any other single character
    #[regex(r"[^\sA-Za-z0-9\u{200C}-\u{200F}\u{FEFF}]", priority = 1)]
    Punctuation,
}

