use mediacrawl_parser::{EngineConfig, ScriptHint, SourceHints};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,

    #[serde(default)]
    pub sources: Vec<SourceConfig>,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Hints for a source by name. Unknown sources get default hints.
    pub fn hints_for(&self, source_name: &str) -> SourceHints {
        match self.sources.iter().find(|s| s.name == source_name) {
            Some(source) => source.hints(),
            None => {
                tracing::debug!("No [[sources]] entry for {:?}, using default hints", source_name);
                SourceHints::new(source_name)
            }
        }
    }

    /// True unless the source is configured and disabled.
    pub fn is_enabled(&self, source_name: &str) -> bool {
        self.sources
            .iter()
            .find(|s| s.name == source_name)
            .map_or(true, |s| s.enabled)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceConfig {
    /// Source site name as it appears in page dumps
    pub name: String,

    /// Script the site writes translated titles in
    #[serde(default)]
    pub script: ScriptHint,

    /// Pages from disabled sources are skipped
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl SourceConfig {
    pub fn hints(&self) -> SourceHints {
        SourceHints::new(self.name.as_str()).with_script(self.script)
    }
}

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Pretty-print JSON output
    #[serde(default)]
    pub pretty: bool,

    /// Include reported anchor errors in `page` output
    #[serde(default)]
    pub include_errors: bool,
}
