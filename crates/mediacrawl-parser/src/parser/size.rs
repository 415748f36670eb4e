//! Human-readable size parsing ("1.4 GB", "700MiB", "۱٫۵ گیگابایت").

use winnow::ascii::{digit1, space0};
use winnow::combinator::{alt, opt, preceded};
use winnow::prelude::*;
use winnow::token::one_of;

use crate::lexer::normalize_input;

/// Size unit. `*iB` units are binary (1024), `*B` units decimal (1000).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    KiB,
    KB,
    MiB,
    MB,
    GiB,
    GB,
    TiB,
    TB,
}

impl Unit {
    /// Megabytes per unit.
    fn megabytes(self) -> f64 {
        match self {
            Unit::KiB => 1.0 / 1024.0,
            Unit::KB => 1.0 / 1000.0,
            Unit::MiB | Unit::MB => 1.0,
            Unit::GiB => 1024.0,
            Unit::GB => 1000.0,
            Unit::TiB => 1024.0 * 1024.0,
            Unit::TB => 1000.0 * 1000.0,
        }
    }
}

/// Decimal number with `.`, `,` or `٫` as decimal mark.
fn number(input: &mut &str) -> PResult<f64> {
    (digit1, opt(preceded(one_of(['.', ',', '٫']), digit1)))
        .map(|(whole, fraction): (&str, Option<&str>)| {
            let text = match fraction {
                Some(fraction) => format!("{}.{}", whole, fraction),
                None => whole.to_string(),
            };
            text.parse::<f64>().unwrap_or_default()
        })
        .parse_next(input)
}

/// Unit suffix on lowercased input. Binary spellings are tried first.
fn unit(input: &mut &str) -> PResult<Unit> {
    alt((
        "kib".value(Unit::KiB),
        "kb".value(Unit::KB),
        "mib".value(Unit::MiB),
        "mb".value(Unit::MB),
        "gib".value(Unit::GiB),
        "gb".value(Unit::GB),
        "tib".value(Unit::TiB),
        "tb".value(Unit::TB),
        "کیلوبایت".value(Unit::KB),
        "مگابایت".value(Unit::MB),
        "گیگابایت".value(Unit::GB),
        "ترابایت".value(Unit::TB),
    ))
    .parse_next(input)
}

fn size(input: &mut &str) -> PResult<(f64, Unit)> {
    (number, preceded(space0, unit)).parse_next(input)
}

fn is_decimal_mark(ch: char) -> bool {
    matches!(ch, '.' | ',' | '٫')
}

/// A digit starts a number unless it continues a digit run or is the
/// fraction of a bare `.5`. Dots between release-name fields (`2019.2.1GB`)
/// do not block a start: the number before them is tried first.
fn is_number_start(prev: Option<char>, before_prev: Option<char>) -> bool {
    match prev {
        Some(p) if p.is_ascii_digit() => false,
        Some(p) if is_decimal_mark(p) => before_prev.is_some_and(char::is_alphanumeric),
        _ => true,
    }
}

/// Parse a size label into whole megabytes, rounding to nearest.
///
/// The first number followed by a size unit wins; returns `0` when there is
/// none.
///
/// ```
/// use mediacrawl_parser::parse_size;
///
/// assert_eq!(parse_size("1 GiB"), 1024);
/// assert_eq!(parse_size("Size: 1.4 GB"), 1400);
/// assert_eq!(parse_size("unknown"), 0);
/// ```
pub fn parse_size(text: &str) -> u64 {
    let lowered = normalize_input(text)
        .replace('\u{00A0}', " ")
        .to_lowercase();

    let mut prev: Option<char> = None;
    let mut before_prev: Option<char> = None;
    for (idx, ch) in lowered.char_indices() {
        let at_number_start = ch.is_ascii_digit() && is_number_start(prev, before_prev);
        before_prev = prev;
        prev = Some(ch);
        if !at_number_start {
            continue;
        }

        let mut input = &lowered[idx..];
        if let Ok((value, unit)) = size.parse_next(&mut input) {
            if input.chars().next().is_some_and(char::is_alphabetic) {
                continue;
            }
            let megabytes = (value * unit.megabytes()).round();
            return if megabytes.is_finite() && megabytes > 0.0 {
                megabytes as u64
            } else {
                0
            };
        }
    }
    0
}
