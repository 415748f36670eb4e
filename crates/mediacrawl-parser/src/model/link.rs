//! Anchor input and download-link records.

use super::{MediaType, Year};

/// A download anchor as scraped from a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawAnchor {
    /// Link target. Must be an absolute `http(s)://` or `magnet:` URL.
    pub link: String,
    /// Anchor (or file-name) text.
    pub text: String,
    /// Human-readable size label next to the anchor, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub size_text: Option<String>,
}

impl RawAnchor {
    /// Create an anchor without a size label.
    pub fn new(link: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            text: text.into(),
            size_text: None,
        }
    }

    /// Attach a size label.
    pub fn with_size(mut self, size_text: impl Into<String>) -> Self {
        self.size_text = Some(size_text.into());
        self
    }
}

/// Output of the release-info normalizer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizedInfo {
    /// Canonical title fragment, rendered like a resolved heading title.
    pub canonical_title: String,
    /// Residual info: `quality.rest`, lowercase, with canonical `SxEy` markers.
    pub residual_info: String,
    /// Quality label such as `1080p` or `web 720p`.
    pub quality: Option<String>,
    /// Year given in parentheses in the anchor text.
    #[cfg_attr(feature = "serde", serde(with = "super::year_as_string", default))]
    pub year: Option<Year>,
}

/// Season and episode numbers; `0` means no marker was found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeasonEpisode {
    /// Season number.
    pub season: u32,
    /// Episode number.
    pub episode: u32,
}

impl SeasonEpisode {
    /// Create a new season/episode pair.
    pub fn new(season: u32, episode: u32) -> Self {
        Self { season, episode }
    }

    /// True when neither a season nor an episode was found.
    pub fn is_empty(&self) -> bool {
        self.season == 0 && self.episode == 0
    }
}

/// Fully parsed anchor: canonical title plus release coordinates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanonicalLinkInfo {
    pub title: String,
    pub season: u32,
    pub episode: u32,
    pub quality: Option<String>,
    pub size_mb: u64,
}

/// A download link ready to be attached to a title group.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DownloadLinkRecord {
    /// Absolute URL.
    pub link: String,
    /// Residual info text.
    pub info: String,
    pub season: u32,
    pub episode: u32,
    /// Name of the source site the link was crawled from.
    pub source_name: String,
    pub size_mb: u64,
}

/// All links found on one page for one logical title.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TorrentTitleGroup {
    pub title: String,
    pub media_type: MediaType,
    #[cfg_attr(feature = "serde", serde(with = "super::year_as_string", default))]
    pub year: Option<Year>,
    pub links: Vec<DownloadLinkRecord>,
}

impl TorrentTitleGroup {
    /// Create an empty group.
    pub fn new(title: impl Into<String>, media_type: MediaType, year: Option<Year>) -> Self {
        Self {
            title: title.into(),
            media_type,
            year,
            links: Vec::new(),
        }
    }

    /// Append links, consuming the builder.
    pub fn with_links(mut self, links: impl IntoIterator<Item = DownloadLinkRecord>) -> Self {
        self.links.extend(links);
        self
    }
}
