//! Page processing: heading resolution, link extraction and merging for
//! scraped page dumps.

use anyhow::{Context, Result};
use mediacrawl_parser::{
    Engine, ErrorReporter, MediaType, RawAnchor, RawHeading, TitleYear, TorrentTitleGroup,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::Config;

/// One scraped page as written by a source scraper.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PageInput {
    /// Source site name, looked up in `[[sources]]`.
    pub source: String,
    pub heading: RawHeading,
    #[serde(default)]
    pub anchors: Vec<RawAnchor>,
    /// Page came from a search rather than a crawl.
    #[serde(default)]
    pub is_search_call: bool,
}

/// Canonical result for one page.
#[derive(Debug, Clone, Serialize)]
pub struct PageOutput {
    pub source: String,
    pub page: TitleYear,
    pub media_type: MediaType,
    pub titles: Vec<TorrentTitleGroup>,
    /// Anchors that failed to parse.
    pub skipped: usize,
}

/// A dump file holds a single page or an array of pages.
#[derive(Deserialize)]
#[serde(untagged)]
enum PageDump {
    Many(Vec<PageInput>),
    One(PageInput),
}

/// Read pages from a JSON dump file.
pub fn load_pages(path: &Path) -> Result<Vec<PageInput>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read page dump: {:?}", path))?;

    let dump: PageDump = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse page dump: {:?}", path))?;

    Ok(match dump {
        PageDump::Many(pages) => pages,
        PageDump::One(page) => vec![page],
    })
}

/// Runs the engine over whole pages.
pub struct PagePipeline {
    engine: Engine,
    config: Config,
}

impl PagePipeline {
    pub fn new(config: Config) -> Self {
        Self {
            engine: Engine::new(config.engine.clone()),
            config,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Resolve the heading, then extract and merge the page's links.
    pub fn process_page(&self, page: &PageInput, reporter: &dyn ErrorReporter) -> PageOutput {
        let hints = self.config.hints_for(&page.source);
        let title_year = self.engine.resolve_title_year(&page.heading);
        let media_type = page.heading.media_type;

        let titles = self
            .engine
            .link_extractor(&hints, title_year.clone(), media_type)
            .search_call(page.is_search_call)
            .extract(&page.anchors, reporter);

        let parsed: usize = titles.iter().map(|t| t.links.len()).sum();
        let skipped = page.anchors.len().saturating_sub(parsed);

        tracing::debug!(
            "{}: {:?} ({}) -> {} title groups, {} skipped",
            page.source,
            title_year.title,
            title_year.year_string(),
            titles.len(),
            skipped
        );

        PageOutput {
            source: page.source.clone(),
            page: title_year,
            media_type,
            titles,
            skipped,
        }
    }

    /// Process pages in parallel. Output order matches input order; pages
    /// from disabled sources are dropped.
    pub fn process_pages(
        &self,
        pages: &[PageInput],
        reporter: &dyn ErrorReporter,
    ) -> Vec<PageOutput> {
        let outputs: Vec<PageOutput> = pages
            .par_iter()
            .filter(|page| self.config.is_enabled(&page.source))
            .map(|page| self.process_page(page, reporter))
            .collect();

        tracing::info!("Processed {} of {} pages", outputs.len(), pages.len());
        outputs
    }
}
