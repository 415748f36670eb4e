mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./mediacrawl.toml",
        "~/.config/mediacrawl/config.toml",
        "/etc/mediacrawl/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.engine.crawl_default_season == 0 {
        anyhow::bail!("engine.crawl_default_season must be at least 1");
    }

    for phrase in config
        .engine
        .extra_prefixes
        .iter()
        .chain(&config.engine.extra_counter_phrases)
    {
        if phrase.trim().is_empty() {
            anyhow::bail!("Engine phrase lists cannot contain blank phrases");
        }
    }

    let mut seen = HashSet::new();
    for source in &config.sources {
        if source.name.trim().is_empty() {
            anyhow::bail!("Source entry has an empty name");
        }
        if !seen.insert(source.name.as_str()) {
            anyhow::bail!("Source '{}' is configured more than once", source.name);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediacrawl_parser::{ScriptHint, YearAmbiguity};

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            [engine]
            extra_prefixes = ["watch online"]
            year_ambiguity = "prefer_first"
            crawl_default_season = 2

            [[sources]]
            name = "film2movie"
            script = "arabic"

            [[sources]]
            name = "nyaa"
            enabled = false

            [output]
            pretty = true
            "#,
        )
        .unwrap();

        assert_eq!(config.engine.extra_prefixes, vec!["watch online"]);
        assert_eq!(config.engine.year_ambiguity, YearAmbiguity::PreferFirst);
        assert_eq!(config.engine.crawl_default_season, 2);
        assert!(config.engine.extra_counter_phrases.is_empty());
        assert_eq!(config.sources.len(), 2);
        assert_eq!(config.sources[0].script, ScriptHint::Arabic);
        assert!(config.sources[0].enabled);
        assert!(!config.sources[1].enabled);
        assert!(config.output.pretty);
        assert!(!config.output.include_errors);
        validate_config(&config).unwrap();
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.engine.crawl_default_season, 1);
        assert!(config.sources.is_empty());
        validate_config(&config).unwrap();
    }

    #[test]
    fn test_hints_for_known_and_unknown_sources() {
        let config: Config = toml::from_str(
            r#"
            [[sources]]
            name = "site"
            script = "cjk"
            "#,
        )
        .unwrap();

        let hints = config.hints_for("site");
        assert_eq!(hints.source_name, "site");
        assert_eq!(hints.other_script, ScriptHint::Cjk);

        let hints = config.hints_for("other");
        assert_eq!(hints.source_name, "other");
        assert_eq!(hints.other_script, ScriptHint::Any);
        assert!(config.is_enabled("other"));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let zero_season: Config = toml::from_str("[engine]\ncrawl_default_season = 0").unwrap();
        assert!(validate_config(&zero_season).is_err());

        let blank_prefix: Config = toml::from_str("[engine]\nextra_prefixes = [\"  \"]").unwrap();
        assert!(validate_config(&blank_prefix).is_err());

        let duplicate: Config = toml::from_str(
            "[[sources]]\nname = \"a\"\n\n[[sources]]\nname = \"a\"",
        )
        .unwrap();
        let err = validate_config(&duplicate).unwrap_err();
        assert!(err.to_string().contains("more than once"));

        let unnamed: Config = toml::from_str("[[sources]]\nname = \"\"").unwrap();
        assert!(validate_config(&unnamed).is_err());
    }
}
