//! Heading input and title/year output.

use super::{MediaType, Year};

/// A page heading as supplied by a source adapter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawHeading {
    /// The main heading line, usually `<boilerplate> <Latin title> <year> <translation>`.
    pub primary_text: String,
    /// A secondary line (original title, year label) some sources provide.
    #[cfg_attr(feature = "serde", serde(default))]
    pub secondary_text: String,
    /// Media type of the page.
    #[cfg_attr(feature = "serde", serde(default))]
    pub media_type: MediaType,
}

impl RawHeading {
    /// Create a heading with no secondary text.
    pub fn new(primary_text: impl Into<String>, media_type: MediaType) -> Self {
        Self {
            primary_text: primary_text.into(),
            secondary_text: String::new(),
            media_type,
        }
    }

    /// Set the secondary text.
    pub fn with_secondary(mut self, secondary_text: impl Into<String>) -> Self {
        self.secondary_text = secondary_text.into();
        self
    }
}

/// Canonical title and release year resolved from a heading.
///
/// `title` is lowercase ASCII letters, digits and single spaces. `year` is
/// `None` when the heading does not determine it unambiguously.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TitleYear {
    /// Canonical title.
    pub title: String,
    /// Release year, if determined.
    #[cfg_attr(feature = "serde", serde(with = "super::year_as_string", default))]
    pub year: Option<Year>,
}

impl TitleYear {
    /// The degenerate result for empty input.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Year as a string: four digits, or empty when undetermined.
    pub fn year_string(&self) -> String {
        self.year.map(|y| y.to_string()).unwrap_or_default()
    }
}

impl std::fmt::Display for TitleYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.year {
            Some(year) => write!(f, "{} ({})", self.title, year),
            None => write!(f, "{}", self.title),
        }
    }
}
