//! Release-info normalization for torrent anchor text.
//!
//! Two outputs are derived from one anchor text. The residual info keeps
//! everything (quality first, canonical `SxEy` markers) and feeds the
//! season/episode extractor. The canonical title is cut out of the same text
//! by a fixed list of cuts, each keeping what precedes its first match.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::debug;

use super::canonical;
use crate::config::SourceHints;
use crate::error::InfoError;
use crate::lexer::normalize_input;
use crate::model::{NormalizedInfo, Year};

static EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(?:mkv|mp4|avi|wmv)\s*$").unwrap());

static QUALITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[\[(]?\b((?:web[\s._-]?)?(\d{3,4})p)\b[\])]?").unwrap()
});

static LEADING_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[\[(]([^\[\]()]*)[\])]").unwrap());

static TRAILING_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\[(]([^\[\]()]*)[\])]\s*$").unwrap());

static BARE_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:19|20)\d{2}\s*$").unwrap());

static SEASON_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b\d{1,2}(?:st|nd|rd|th)\s+season\b|فصل|قسمت").unwrap()
});

static SEASON_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bs(\d{1,2})\s*-\s*(\d{1,4})\b").unwrap());

static BARE_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2})\s+-\s+(\d{1,4})\b").unwrap());

static LETTER_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-df-rt-z])(\d)").unwrap());

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static PAREN_YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*((?:19|20)\d{2})\s*\)").unwrap());

static EPISODE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:s\d{1,3}(?:\s*e\d{1,4})?|\d{1,2}x\d{2,3}|season\s*\d+|ep(?:isode)?\s*\d+)\b|\s-\s*\d{1,4}\b",
    )
    .unwrap()
});

static RELEASE_VOCABULARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)\b(?:
            \d{3,4}p | 4k | uhd
          | web[\s-]?dl | webrip | blu[\s-]?ray | bdrip | brrip | bd | hdrip | hdtv | dvdrip | hdcam
          | [xh]\s?26[45] | hevc | avc
          | 10\s?bit | 8\s?bit
          | aac | ac3 | dts | flac
          | remux | repack | proper | hardsub | softsub
        )\b",
    )
    .unwrap()
});

static TRAILING_QUALIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:dual[\s-]?audio|multi[\s-]?audio|uncensored|censored|uncut|movies|ovas|oads|specials|ova|oad)\b|[\[(](?:us|uk|jp|kr|eu|ru)[\])]",
    )
    .unwrap()
});

/// Normalize anchor text into a canonical title, residual info and quality.
pub fn normalize(text: &str, hints: &SourceHints) -> Result<NormalizedInfo, InfoError> {
    let text = validate(text)?;
    let text = strip_extension(&text);
    let (text, quality) = extract_quality(&text);
    let text = strip_tags(&text);
    let text = canonicalize_ranges(&text);

    let year = PAREN_YEAR
        .captures(&text)
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .and_then(Year::new);

    let canonical_title = cut_title(&text, hints);
    let residual_info = build_residual(&text, quality.as_deref());

    debug!(%canonical_title, %residual_info, quality = ?quality, "normalized anchor");
    Ok(NormalizedInfo {
        canonical_title,
        residual_info,
        quality,
        year,
    })
}

/// Map digits and reject empty or markup input.
pub(crate) fn validate(text: &str) -> Result<String, InfoError> {
    if text.trim().is_empty() {
        return Err(InfoError::Empty);
    }
    if text.contains(['<', '>']) {
        return Err(InfoError::Markup(text.to_string()));
    }
    Ok(normalize_input(text))
}

/// Strip a trailing container extension.
pub(crate) fn strip_extension(text: &str) -> String {
    EXTENSION.replace(text, "").into_owned()
}

/// Remove the first quality token, returning the remaining text and the
/// normalized quality (`1080p`, `web 720p`).
pub(crate) fn extract_quality(text: &str) -> (String, Option<String>) {
    let Some(caps) = QUALITY.captures(text) else {
        return (text.to_string(), None);
    };
    let (Some(whole), Some(token), Some(digits)) = (caps.get(0), caps.get(1), caps.get(2)) else {
        return (text.to_string(), None);
    };

    let quality = if token.as_str().to_ascii_lowercase().starts_with("web") {
        format!("web {}p", digits.as_str())
    } else {
        format!("{}p", digits.as_str())
    };

    let mut rest = String::with_capacity(text.len());
    rest.push_str(&text[..whole.start()]);
    rest.push(' ');
    rest.push_str(&text[whole.end()..]);
    (rest, Some(quality))
}

/// True for bracket contents that carry information rather than a group
/// name: a bare year or a season/episode marker.
fn is_kept_tag(inner: &str) -> bool {
    BARE_YEAR.is_match(inner) || EPISODE_MARKER.is_match(inner) || SEASON_TAG.is_match(inner)
}

/// Strip bracketed release-group tags at both ends, repeatedly.
///
/// A bracketed bare year or season/episode marker is kept; it stops
/// stripping at that end.
pub(crate) fn strip_tags(text: &str) -> String {
    let mut current = text.trim().to_string();
    loop {
        let mut changed = false;

        if let Some(caps) = LEADING_TAG.captures(&current) {
            if !is_kept_tag(&caps[1]) {
                current = current[caps[0].len()..].trim_start().to_string();
                changed = true;
            }
        }
        if let Some(caps) = TRAILING_TAG.captures(&current) {
            if !is_kept_tag(&caps[1]) {
                if let Some(whole) = caps.get(0) {
                    current = current[..whole.start()].trim_end().to_string();
                    changed = true;
                }
            }
        }

        if !changed || current.is_empty() {
            return current;
        }
    }
}

/// True if the last word before `prefix`'s end is "part".
fn preceded_by_part(prefix: &str) -> bool {
    prefix
        .split_whitespace()
        .last()
        .is_some_and(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).eq_ignore_ascii_case("part"))
}

/// Rewrite matches of `re` as `S<n>E<m>`. With `needs_title`, a match with
/// no title word before it is left alone.
fn rewrite_ranges(re: &Regex, input: &str, needs_title: bool) -> String {
    re.replace_all(input, |caps: &Captures| {
        let prefix = &input[..caps.get(0).map_or(0, |m| m.start())];
        let untitled = needs_title && !prefix.chars().any(char::is_alphanumeric);
        if untitled || preceded_by_part(prefix) {
            caps[0].to_string()
        } else {
            format!("S{}E{}", &caps[1], &caps[2])
        }
    })
    .into_owned()
}

/// Rewrite `S<n> - <m>` and bare `<n> - <m>` as `S<n>E<m>`, except right
/// after "part". A bare `<n> - <m>` opening the text is a numeric title
/// followed by an episode ("86 - 05"), not a season.
pub(crate) fn canonicalize_ranges(text: &str) -> String {
    let text = rewrite_ranges(&SEASON_RANGE, text, false);
    rewrite_ranges(&BARE_RANGE, &text, true)
}

/// Build the residual info: quality first, lowercase, a space between a
/// letter and a following digit (except after `s`/`e`), collapsed and
/// trimmed of separators.
pub(crate) fn build_residual(text: &str, quality: Option<&str>) -> String {
    let lowered = text.to_lowercase();
    let spaced = LETTER_DIGIT.replace_all(&lowered, "$1 $2");
    let collapsed = WHITESPACE.replace_all(&spaced, " ");
    let body = collapsed.trim_matches(|c: char| c.is_whitespace() || matches!(c, '.' | '-' | '_' | ','));

    match quality {
        Some(quality) if body.is_empty() => quality.to_string(),
        Some(quality) => format!("{}.{}", quality, body),
        None => body.to_string(),
    }
}

fn keep_before(text: &str, re: &Regex) -> String {
    match re.find(text) {
        Some(m) => text[..m.start()].to_string(),
        None => text.to_string(),
    }
}

fn keep_before_script(text: &str, hints: &SourceHints) -> String {
    match text.char_indices().find(|(_, c)| hints.other_script.matches(*c)) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// Cut the canonical title out of tag-stripped anchor text and render it.
pub(crate) fn cut_title(text: &str, hints: &SourceHints) -> String {
    let spaced = text.replace(['.', '_'], " ");
    let title = keep_before(&spaced, &PAREN_YEAR);
    let title = keep_before(&title, &EPISODE_MARKER);
    let title = keep_before(&title, &RELEASE_VOCABULARY);
    let title = keep_before_script(&title, hints);
    let title = keep_before(&title, &TRAILING_QUALIFIER);
    canonical::render(&title)
}
