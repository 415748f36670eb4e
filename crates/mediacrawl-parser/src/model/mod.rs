//! Data model types for headings, canonical titles and download links.
//!
//! Every intermediate value of the engine is an explicit type here, so the
//! invariants (a valid year, non-negative season/episode) hold by
//! construction.

mod link;
mod media_type;
mod title;
mod year;

pub use link::{
    CanonicalLinkInfo, DownloadLinkRecord, NormalizedInfo, RawAnchor, SeasonEpisode,
    TorrentTitleGroup,
};
pub use media_type::MediaType;
pub use title::{RawHeading, TitleYear};
pub use year::Year;

#[cfg(feature = "serde")]
pub(crate) use year::year_as_string;

/// Error type for parsing enum values from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError(pub String);

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "parse error: {}", self.0)
    }
}

impl std::error::Error for ParseError {}
