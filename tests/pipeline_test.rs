//! Integration tests for the page pipeline.

use mediacrawl::config::Config;
use mediacrawl::pipeline::{load_pages, PagePipeline};
use mediacrawl::report::CollectingReporter;
use mediacrawl_parser::MediaType;
use std::path::PathBuf;

fn pages_fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/pages.json")
}

#[test]
fn fixture_pages_resolve_and_merge() {
    let pages = load_pages(&pages_fixture()).unwrap();
    let pipeline = PagePipeline::new(Config::default());
    let reporter = CollectingReporter::new();

    let outputs = pipeline.process_pages(&pages, &reporter);
    assert_eq!(outputs.len(), 2);

    let serial = &outputs[0];
    assert_eq!(serial.media_type, MediaType::Serial);
    assert_eq!(serial.page.title, "foo bar");
    assert_eq!(serial.titles.len(), 1);

    let links = &serial.titles[0].links;
    let episodes: Vec<_> = links.iter().map(|l| (l.season, l.episode)).collect();
    assert_eq!(episodes, vec![(1, 1), (1, 2)]);
    assert!(links.iter().all(|l| l.source_name == "film2movie"));
    assert_eq!(links[0].size_mb, 350);

    let anime = &outputs[1];
    assert_eq!(anime.media_type, MediaType::AnimeSerial);
    assert_eq!(anime.titles[0].title, "jujutsu kaisen");
    assert_eq!(anime.titles[0].links[0].link, "magnet:?xt=urn:btih:abcd");
    // Search results do not get a default season.
    assert_eq!(anime.titles[0].links[0].season, 0);

    let errors = reporter.drain();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].context, "/relative/foo.s01e03.mkv");
}

#[test]
fn crawl_default_season_comes_from_config() {
    let mut pages = load_pages(&pages_fixture()).unwrap();
    pages[1].is_search_call = false;

    let config: Config = toml::from_str("[engine]\ncrawl_default_season = 4\n").unwrap();
    let pipeline = PagePipeline::new(config);
    let reporter = CollectingReporter::new();

    let output = pipeline.process_page(&pages[1], &reporter);
    assert_eq!(output.titles[0].links[0].season, 4);
    assert_eq!(output.titles[0].links[0].episode, 24);
}

#[test]
fn merged_output_is_stable_across_runs() {
    let pages = load_pages(&pages_fixture()).unwrap();
    let pipeline = PagePipeline::new(Config::default());
    let reporter = CollectingReporter::new();

    let first = serde_json::to_string(&pipeline.process_pages(&pages, &reporter)).unwrap();
    let second = serde_json::to_string(&pipeline.process_pages(&pages, &reporter)).unwrap();
    assert_eq!(first, second);
}
