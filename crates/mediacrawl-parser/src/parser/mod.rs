//! Normalization stages over the lexer's token stream.
//!
//! Each submodule is one stage family of the engine, written as a list of
//! small named functions applied in a fixed order:
//!
//! - [`title`]: page heading → canonical title and release year
//! - [`info`]: anchor text → canonical title fragment, residual info, quality
//! - [`episode`]: residual info → season and episode
//! - [`size`]: size label → megabytes
//!
//! [`canonical`] holds the rendering shared by headings and anchors.

pub(crate) mod boilerplate;
pub(crate) mod canonical;
pub(crate) mod episode;
pub(crate) mod info;
pub(crate) mod size;
pub(crate) mod title;

use crate::config::{EngineConfig, SourceHints};
use crate::error::InfoError;
use crate::model::{CanonicalLinkInfo, RawHeading, TitleYear};

/// Resolve a page heading with custom configuration.
pub fn resolve_with_config(heading: &RawHeading, config: &EngineConfig) -> TitleYear {
    title::resolve(heading, config)
}

/// Parse anchor text (and an optional separate size label) into a
/// canonical link description.
///
/// The size is read from `size_text` when given, otherwise from the anchor
/// text itself.
pub fn parse_link_with_config(
    text: &str,
    size_text: Option<&str>,
    hints: &SourceHints,
    is_search_call: bool,
    config: &EngineConfig,
) -> Result<CanonicalLinkInfo, InfoError> {
    let info = info::normalize(text, hints)?;
    let se = episode::extract(&info.residual_info, is_search_call, config);
    let size_mb = size::parse_size(size_text.unwrap_or(text));

    Ok(CanonicalLinkInfo {
        title: info.canonical_title,
        season: se.season,
        episode: se.episode,
        quality: info.quality,
        size_mb,
    })
}
