//! Engine configuration.

/// How to resolve several distinct year candidates in a heading trailer.
///
/// Controls behavior for headings such as `Foo 2001 2021` where the Latin run
/// ends in a non-year and the trailer carries more than one plausible year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum YearAmbiguity {
    /// Leave the year empty unless one candidate is adjacent to the title.
    /// This is the default: an empty year is better than a wrong one.
    #[default]
    Undetermined,
    /// Take the first trailer candidate.
    PreferFirst,
}

/// Class of non-Latin script a source writes its translations in.
///
/// The release-info normalizer cuts the canonical title at the first run of
/// this script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScriptHint {
    /// Any non-Latin letter run.
    #[default]
    Any,
    /// Arabic script (Persian, Arabic, Urdu).
    Arabic,
    /// Han, Hiragana, Katakana, Hangul.
    Cjk,
    /// Cyrillic.
    Cyrillic,
}

impl ScriptHint {
    /// True if `ch` belongs to this script class.
    pub fn matches(&self, ch: char) -> bool {
        let arabic = matches!(ch, '\u{0600}'..='\u{06FF}' | '\u{0750}'..='\u{077F}' | '\u{FB50}'..='\u{FDFF}' | '\u{FE70}'..='\u{FEFF}');
        let cjk = matches!(ch, '\u{3040}'..='\u{30FF}' | '\u{3400}'..='\u{4DBF}' | '\u{4E00}'..='\u{9FFF}' | '\u{AC00}'..='\u{D7AF}');
        let cyrillic = matches!(ch, '\u{0400}'..='\u{04FF}');
        match self {
            ScriptHint::Any => ch.is_alphabetic() && !ch.is_ascii(),
            ScriptHint::Arabic => arabic,
            ScriptHint::Cjk => cjk,
            ScriptHint::Cyrillic => cyrillic,
        }
    }
}

/// Per-source inputs to the release-info normalizer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceHints {
    /// Source site name, copied into every [`DownloadLinkRecord`](crate::DownloadLinkRecord).
    pub source_name: String,
    /// Script the source writes translated titles in.
    #[cfg_attr(feature = "serde", serde(default))]
    pub other_script: ScriptHint,
}

impl SourceHints {
    /// Hints for a named source with the default script class.
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            other_script: ScriptHint::default(),
        }
    }

    /// Set the script class.
    pub fn with_script(mut self, other_script: ScriptHint) -> Self {
        self.other_script = other_script;
        self
    }
}

/// Configuration for the engine.
///
/// Use the builder pattern to create a configuration:
///
/// ```
/// use mediacrawl_parser::config::{EngineConfig, YearAmbiguity};
///
/// let config = EngineConfig::builder()
///     .extra_prefix("watch online")
///     .year_ambiguity(YearAmbiguity::PreferFirst)
///     .build();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Boilerplate heading prefixes in addition to the built-in ones.
    pub extra_prefixes: Vec<String>,

    /// Phrases that mark a leading number as a counter ("13 Going on 30"),
    /// in addition to the built-in ones.
    pub extra_counter_phrases: Vec<String>,

    /// How to resolve several trailer year candidates.
    /// Default: Undetermined
    pub year_ambiguity: YearAmbiguity,

    /// Season assigned to an episode without a season when crawling.
    /// Default: 1
    pub crawl_default_season: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            extra_prefixes: Vec::new(),
            extra_counter_phrases: Vec::new(),
            year_ambiguity: YearAmbiguity::default(),
            crawl_default_season: 1,
        }
    }
}

impl EngineConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration builder.
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }
}

/// Builder for `EngineConfig`.
#[derive(Debug, Clone, Default)]
pub struct EngineConfigBuilder {
    extra_prefixes: Vec<String>,
    extra_counter_phrases: Vec<String>,
    year_ambiguity: Option<YearAmbiguity>,
    crawl_default_season: Option<u32>,
}

impl EngineConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a boilerplate prefix phrase.
    ///
    /// Latin words are matched case-insensitively; the phrase is only
    /// stripped at the very start of a heading.
    pub fn extra_prefix(mut self, phrase: impl Into<String>) -> Self {
        self.extra_prefixes.push(phrase.into());
        self
    }

    /// Add a leading-counter phrase.
    pub fn extra_counter_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.extra_counter_phrases.push(phrase.into());
        self
    }

    /// Set how to resolve several trailer year candidates.
    pub fn year_ambiguity(mut self, mode: YearAmbiguity) -> Self {
        self.year_ambiguity = Some(mode);
        self
    }

    /// Set the season assigned to season-less episodes when crawling.
    ///
    /// Default: 1
    pub fn crawl_default_season(mut self, season: u32) -> Self {
        self.crawl_default_season = Some(season);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> EngineConfig {
        EngineConfig {
            extra_prefixes: self.extra_prefixes,
            extra_counter_phrases: self.extra_counter_phrases,
            year_ambiguity: self.year_ambiguity.unwrap_or_default(),
            crawl_default_season: self.crawl_default_season.unwrap_or(1),
        }
    }
}
