//! Fixed vocabularies used by the resolver and the lexer.
//!
//! Phrases are stored word by word and matched against tokens, so they are
//! insensitive to the amount of whitespace between words in the input.

use phf::phf_map;

/// Spelled-out ordinals recognized as [`Token::Ordinal`](crate::lexer::Token::Ordinal).
pub static ORDINAL_WORDS: phf::Map<&'static str, u32> = phf_map! {
    "first" => 1,
    "second" => 2,
    "third" => 3,
    "fourth" => 4,
    "fifth" => 5,
    "sixth" => 6,
    "seventh" => 7,
    "eighth" => 8,
    "ninth" => 9,
    "tenth" => 10,
};

/// Cardinal words and roman numerals (II..X) accepted as a sequel index
/// after a [`SEQUEL_MARKERS`] word. A lone "I" is too often a pronoun.
pub static CARDINAL_WORDS: phf::Map<&'static str, u32> = phf_map! {
    "one" => 1,
    "two" => 2,
    "three" => 3,
    "four" => 4,
    "five" => 5,
    "six" => 6,
    "seven" => 7,
    "eight" => 8,
    "nine" => 9,
    "ten" => 10,
    "ii" => 2,
    "iii" => 3,
    "iv" => 4,
    "v" => 5,
    "vi" => 6,
    "vii" => 7,
    "viii" => 8,
    "ix" => 9,
    "x" => 10,
};

/// Words that introduce a sequel or part index ("Part Three").
pub const SEQUEL_MARKERS: &[&str] = &["part", "chapter", "volume", "vol"];

/// Heading prefixes meaning "download movie/series/anime/documentary".
///
/// Persian entries are written with Persian Kaf/Yeh; the lexer folds the
/// Arabic variants before matching.
pub const BOILERPLATE_PREFIXES: &[&str] = &[
    "دانلود فیلم",
    "دانلود سریال",
    "دانلود انیمه",
    "دانلود انیمیشن",
    "دانلود مستند",
    "دانلود فیلم انیمیشن",
    "دانلود سریال انیمیشن",
    "دانلود انیمه سینمایی",
    "دانلود مینی سریال",
    "دانلود فیلم سینمایی",
    "دانلود انیمیشن سینمایی",
    "دانلود مستند سینمایی",
    "دانلود سریال ایرانی",
    "download movie",
    "download series",
    "download anime",
    "download documentary",
    "download film",
    "download tv series",
];

/// Phrases that mark a leading bare number as a counter rather than a title
/// word ("13 Going on 30").
pub const LEADING_COUNTER_PHRASES: &[&str] = &["going on"];
