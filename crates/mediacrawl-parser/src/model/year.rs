//! Release year newtype.

use super::ParseError;

/// A release year in `1900..=2099`.
///
/// The only constructors validate the range, so a `Year` always renders as
/// four Latin digits matching `^(19|20)\d{2}$`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Year(u16);

impl Year {
    /// Earliest accepted year.
    pub const MIN: u16 = 1900;
    /// Latest accepted year.
    pub const MAX: u16 = 2099;

    /// Create a year, returning `None` outside `1900..=2099`.
    pub fn new(value: u32) -> Option<Self> {
        u16::try_from(value)
            .ok()
            .filter(|v| (Self::MIN..=Self::MAX).contains(v))
            .map(Year)
    }

    /// The numeric value.
    pub fn value(&self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for Year {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Year {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError(format!("invalid year: {}", s)));
        }
        s.parse::<u32>()
            .ok()
            .and_then(Year::new)
            .ok_or_else(|| ParseError(format!("year out of range: {}", s)))
    }
}

/// Serde adapter writing `Option<Year>` as `"2022"` or `""`.
#[cfg(feature = "serde")]
pub(crate) mod year_as_string {
    use super::Year;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(year: &Option<Year>, serializer: S) -> Result<S::Ok, S::Error> {
        match year {
            Some(year) => serializer.collect_str(year),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Year>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse().map(Some).map_err(serde::de::Error::custom)
    }
}
