//! # mediacrawl-parser
//!
//! Title and link normalization for crawled media listings.
//!
//! Source sites publish bilingual, inconsistently formatted headings and
//! download anchors. This crate turns them into canonical records:
//!
//! - page headings into a canonical `(title, year)` pair
//! - anchor text into a canonical title fragment, season/episode, quality
//!   and size
//! - the title groups of one page into merged groups
//!
//! The engine is pure and synchronous; every call can run in parallel.
//!
//! ## Quick Start
//!
//! ```
//! use mediacrawl_parser::{resolve_title_year, MediaType};
//!
//! let result = resolve_title_year("دانلود فیلم Runway 34 2022 باند ۳۴", "", MediaType::Movie);
//!
//! assert_eq!(result.title, "runway 34");
//! assert_eq!(result.year_string(), "2022");
//! ```
//!
//! ## Configurable Engine
//!
//! ```
//! use mediacrawl_parser::{Engine, RawHeading, MediaType};
//! use mediacrawl_parser::config::{EngineConfig, YearAmbiguity};
//!
//! let config = EngineConfig::builder()
//!     .year_ambiguity(YearAmbiguity::PreferFirst)
//!     .build();
//!
//! let engine = Engine::new(config);
//! let result = engine.resolve_title_year(&RawHeading::new("Heat مخمصه 1995 بازسازی 2003", MediaType::Movie));
//! assert_eq!(result.year_string(), "1995");
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod lexer;
pub mod merge;
pub mod model;
pub mod phrases;

mod parser;

// Re-export main types for convenience
pub use model::{
    CanonicalLinkInfo, DownloadLinkRecord, MediaType, NormalizedInfo, ParseError, RawAnchor,
    RawHeading, SeasonEpisode, TitleYear, TorrentTitleGroup, Year,
};

pub use config::{EngineConfig, ScriptHint, SourceHints, YearAmbiguity};
pub use error::{ErrorReporter, InfoError, NoopReporter};
pub use extract::LinkExtractor;
pub use merge::merge_titles;
pub use parser::size::parse_size;

/// Resolve a page heading into a canonical title and year using default
/// settings.
///
/// Never fails: degenerate input yields an empty title and no year.
///
/// ```
/// use mediacrawl_parser::{resolve_title_year, MediaType};
///
/// let result = resolve_title_year("Kim Ji-young: Born 1982 2019", "", MediaType::Movie);
/// assert_eq!(result.title, "kim ji young born 1982");
/// assert_eq!(result.year_string(), "2019");
/// ```
pub fn resolve_title_year(primary_text: &str, secondary_text: &str, media_type: MediaType) -> TitleYear {
    Engine::default().resolve_title_year(&RawHeading {
        primary_text: primary_text.to_string(),
        secondary_text: secondary_text.to_string(),
        media_type,
    })
}

/// Normalize torrent anchor text.
///
/// ```
/// use mediacrawl_parser::{normalize_info, SourceHints};
///
/// let info = normalize_info("[Group] Foo Bar - 05 [1080p].mkv", &SourceHints::new("site")).unwrap();
/// assert_eq!(info.canonical_title, "foo bar");
/// assert_eq!(info.quality.as_deref(), Some("1080p"));
/// ```
pub fn normalize_info(text: &str, hints: &SourceHints) -> Result<NormalizedInfo, InfoError> {
    parser::info::normalize(text, hints)
}

/// Extract season and episode from residual info using default settings.
///
/// ```
/// use mediacrawl_parser::extract_season_episode;
///
/// let se = extract_season_episode("720p.foo.s02e05", true);
/// assert_eq!((se.season, se.episode), (2, 5));
/// ```
pub fn extract_season_episode(info: &str, is_search_call: bool) -> SeasonEpisode {
    Engine::default().extract_season_episode(info, is_search_call)
}

/// A configured normalization engine.
///
/// Create an `Engine` with custom settings using [`EngineConfig`]:
///
/// ```
/// use mediacrawl_parser::Engine;
/// use mediacrawl_parser::config::EngineConfig;
///
/// let config = EngineConfig::builder()
///     .extra_prefix("watch online")
///     .crawl_default_season(1)
///     .build();
///
/// let engine = Engine::new(config);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Create a new engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resolve a page heading into a canonical title and year.
    pub fn resolve_title_year(&self, heading: &RawHeading) -> TitleYear {
        parser::resolve_with_config(heading, &self.config)
    }

    /// Normalize torrent anchor text.
    pub fn normalize_info(&self, text: &str, hints: &SourceHints) -> Result<NormalizedInfo, InfoError> {
        parser::info::normalize(text, hints)
    }

    /// Extract season and episode from residual info.
    ///
    /// When `is_search_call` is false an episode without a season gets the
    /// configured crawl season.
    pub fn extract_season_episode(&self, info: &str, is_search_call: bool) -> SeasonEpisode {
        parser::episode::extract(info, is_search_call, &self.config)
    }

    /// Parse a size label into megabytes.
    pub fn parse_size(&self, text: &str) -> u64 {
        parse_size(text)
    }

    /// Parse anchor text into a canonical link description.
    ///
    /// # Examples
    ///
    /// ```
    /// use mediacrawl_parser::{Engine, SourceHints};
    ///
    /// let engine = Engine::default();
    /// let link = engine
    ///     .parse_link("Foo.Bar.S01E02.720p.WEB-DL.mkv", Some("1.4 GB"), &SourceHints::new("site"), false)
    ///     .unwrap();
    /// assert_eq!(link.title, "foo bar");
    /// assert_eq!((link.season, link.episode), (1, 2));
    /// assert_eq!(link.size_mb, 1400);
    /// ```
    pub fn parse_link(
        &self,
        text: &str,
        size_text: Option<&str>,
        hints: &SourceHints,
        is_search_call: bool,
    ) -> Result<CanonicalLinkInfo, InfoError> {
        parser::parse_link_with_config(text, size_text, hints, is_search_call, &self.config)
    }

    /// Create a link extractor for one page.
    pub fn link_extractor<'a>(
        &'a self,
        hints: &'a SourceHints,
        page: TitleYear,
        media_type: MediaType,
    ) -> LinkExtractor<'a> {
        LinkExtractor::new(&self.config, hints, page, media_type)
    }
}
