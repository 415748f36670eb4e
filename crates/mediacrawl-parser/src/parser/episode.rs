//! Season/episode extraction from residual info.
//!
//! Residual info has canonical `SxEy` markers (see the release-info
//! normalizer), so explicit markers are tried first, then season words and
//! flat episode cues.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::config::EngineConfig;
use crate::lexer::normalize_input;
use crate::model::{SeasonEpisode, Year};

static SEASON_EPISODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bs(\d{1,3})\s*e(\d{1,4})").unwrap());

static CROSS_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2})x\s?(\d{2,3})\b").unwrap());

static SEASON_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bs(\d{1,3})\b").unwrap());

static SEASON_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bseason\s*(\d{1,3})\b|\b(\d{1,2})(?:st|nd|rd|th)\s+season\b|فصل\s*(\d{1,3})")
        .unwrap()
});

static EPISODE_CUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:episode|ep|e)\s*\.?\s*(\d{1,4})\b|#(\d{1,4})\b|\s-\s*(\d{1,4})(?:v\d+)?\b|قسمت\s*(\d{1,4})",
    )
    .unwrap()
});

/// First capture group that participated in the match, parsed as a number.
fn first_group(caps: &regex::Captures<'_>) -> Option<u32> {
    caps.iter()
        .skip(1)
        .flatten()
        .next()
        .and_then(|m| m.as_str().parse().ok())
}

/// Extract season and episode numbers from residual info.
///
/// `0` means no marker. When crawling (`is_search_call == false`), an
/// episode without any season marker is assigned the configured crawl
/// season.
pub fn extract(info: &str, is_search_call: bool, config: &EngineConfig) -> SeasonEpisode {
    let info = normalize_input(info);
    let mut result = explicit_marker(&info).unwrap_or_else(|| SeasonEpisode {
        season: season_marker(&info).unwrap_or(0),
        episode: episode_cue(&info).unwrap_or(0),
    });

    if result.episode > 0 && result.season == 0 && !is_search_call {
        result.season = config.crawl_default_season;
    }

    debug!(info = %info, season = result.season, episode = result.episode, "extracted season/episode");
    result
}

/// `S<n>E<m>` or `NxNN`.
fn explicit_marker(info: &str) -> Option<SeasonEpisode> {
    let caps = SEASON_EPISODE
        .captures(info)
        .or_else(|| CROSS_FORMAT.captures(info))?;
    let season = caps[1].parse().ok()?;
    let episode = caps[2].parse().ok()?;
    Some(SeasonEpisode::new(season, episode))
}

/// `S<n>`, `season N`, `Nth season` or `فصل N`.
fn season_marker(info: &str) -> Option<u32> {
    SEASON_ONLY
        .captures(info)
        .and_then(|caps| caps[1].parse().ok())
        .or_else(|| SEASON_WORD.captures(info).and_then(|caps| first_group(&caps)))
}

/// `ep N`, `episode N`, `e N`, `#N`, ` - N(vN)`, `قسمت N`.
///
/// A year after a bare dash (`Heat - 1995`) is not an episode.
fn episode_cue(info: &str) -> Option<u32> {
    EPISODE_CUE.captures_iter(info).find_map(|caps| {
        let episode = first_group(&caps)?;
        let dash_year = caps
            .get(3)
            .is_some_and(|m| m.as_str().len() == 4 && Year::new(episode).is_some());
        (!dash_year).then_some(episode)
    })
}
