//! Media type enum.

use super::ParseError;

/// Type of media a page or title group describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MediaType {
    /// Movie/Film
    #[default]
    Movie,
    /// Series (TV, web, mini-series)
    Serial,
    /// Animated feature
    AnimeMovie,
    /// Animated series
    AnimeSerial,
}

impl MediaType {
    /// True for both anime variants.
    pub fn is_anime(&self) -> bool {
        matches!(self, MediaType::AnimeMovie | MediaType::AnimeSerial)
    }

    /// True for series-like media (episodes are expected).
    pub fn is_serial(&self) -> bool {
        matches!(self, MediaType::Serial | MediaType::AnimeSerial)
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Movie => write!(f, "movie"),
            MediaType::Serial => write!(f, "serial"),
            MediaType::AnimeMovie => write!(f, "anime_movie"),
            MediaType::AnimeSerial => write!(f, "anime_serial"),
        }
    }
}

impl std::str::FromStr for MediaType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "movie" | "film" => Ok(MediaType::Movie),
            "serial" | "series" | "tv" => Ok(MediaType::Serial),
            "anime_movie" => Ok(MediaType::AnimeMovie),
            "anime_serial" | "anime" => Ok(MediaType::AnimeSerial),
            _ => Err(ParseError(format!("invalid media type: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_type_display_fromstr_roundtrip() {
        let variants = [
            MediaType::Movie,
            MediaType::Serial,
            MediaType::AnimeMovie,
            MediaType::AnimeSerial,
        ];
        for variant in variants {
            let s = variant.to_string();
            let parsed: MediaType = s.parse().expect("should parse");
            assert_eq!(variant, parsed);
        }
    }

    #[test]
    fn media_type_aliases() {
        assert_eq!("TV".parse::<MediaType>(), Ok(MediaType::Serial));
        assert_eq!("anime-movie".parse::<MediaType>(), Ok(MediaType::AnimeMovie));
        assert!("podcast".parse::<MediaType>().is_err());
    }

    #[test]
    fn media_type_flags() {
        assert!(MediaType::AnimeMovie.is_anime());
        assert!(!MediaType::Serial.is_anime());
        assert!(MediaType::AnimeSerial.is_serial());
        assert!(!MediaType::Movie.is_serial());
    }
}
