//! Turning a page's download anchors into merged title groups.

use tracing::{debug, warn};

use crate::config::{EngineConfig, SourceHints};
use crate::error::{ErrorReporter, InfoError};
use crate::merge::merge_titles;
use crate::model::{DownloadLinkRecord, MediaType, RawAnchor, TitleYear, TorrentTitleGroup};
use crate::parser::canonical::merge_key;
use crate::parser::{episode, info, size};

const LINK_SCHEMES: &[&str] = &["http://", "https://", "magnet:"];

/// True for `http(s)://` and `magnet:` links.
pub fn is_absolute_link(link: &str) -> bool {
    let link = link.trim();
    LINK_SCHEMES.iter().any(|scheme| {
        link.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
            && link.len() > scheme.len()
    })
}

/// Extracts download records from the anchors of one page.
///
/// Anchors whose text yields no canonical title are filed under the page
/// title. Failed anchors are reported and skipped.
#[derive(Debug, Clone)]
pub struct LinkExtractor<'a> {
    config: &'a EngineConfig,
    hints: &'a SourceHints,
    page: TitleYear,
    media_type: MediaType,
    is_search_call: bool,
}

impl<'a> LinkExtractor<'a> {
    /// Create an extractor for a page whose heading resolved to `page`.
    pub fn new(
        config: &'a EngineConfig,
        hints: &'a SourceHints,
        page: TitleYear,
        media_type: MediaType,
    ) -> Self {
        Self {
            config,
            hints,
            page,
            media_type,
            is_search_call: false,
        }
    }

    /// Mark the page as a search result rather than a crawl.
    ///
    /// Search results do not get a default season for season-less episodes.
    pub fn search_call(mut self, is_search_call: bool) -> Self {
        self.is_search_call = is_search_call;
        self
    }

    /// Parse one anchor into a single-link title group.
    pub fn parse_anchor(&self, anchor: &RawAnchor) -> Result<TorrentTitleGroup, InfoError> {
        if !is_absolute_link(&anchor.link) {
            return Err(InfoError::NonAbsoluteLink(anchor.link.clone()));
        }

        let info = info::normalize(&anchor.text, self.hints)?;
        let se = episode::extract(&info.residual_info, self.is_search_call, self.config);
        let size_mb = size::parse_size(anchor.size_text.as_deref().unwrap_or(&anchor.text));

        let (title, year) = if info.canonical_title.is_empty() {
            (self.page.title.clone(), info.year.or(self.page.year))
        } else if merge_key(&info.canonical_title) == merge_key(&self.page.title) {
            (info.canonical_title, info.year.or(self.page.year))
        } else {
            (info.canonical_title, info.year)
        };

        let record = DownloadLinkRecord {
            link: anchor.link.trim().to_string(),
            info: info.residual_info,
            season: se.season,
            episode: se.episode,
            source_name: self.hints.source_name.clone(),
            size_mb,
        };

        Ok(TorrentTitleGroup::new(title, self.media_type, year).with_links([record]))
    }

    /// Parse every anchor, group the records by title and merge.
    ///
    /// Each failing anchor is logged, reported once to `reporter`, and
    /// skipped; the remaining anchors are still processed.
    pub fn extract(
        &self,
        anchors: &[RawAnchor],
        reporter: &dyn ErrorReporter,
    ) -> Vec<TorrentTitleGroup> {
        let mut groups = Vec::with_capacity(anchors.len());

        for anchor in anchors {
            match self.parse_anchor(anchor) {
                Ok(group) => groups.push(group),
                Err(error) => {
                    warn!(
                        source = %self.hints.source_name,
                        link = %anchor.link,
                        %error,
                        "skipping anchor"
                    );
                    reporter.report_error(&self.hints.source_name, &anchor.link, &error);
                }
            }
        }

        let merged = merge_titles(groups);
        debug!(
            source = %self.hints.source_name,
            anchors = anchors.len(),
            groups = merged.len(),
            "extracted page links"
        );
        merged
    }
}
