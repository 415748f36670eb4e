mod cli;

use mediacrawl::{
    config,
    pipeline::{self, PagePipeline},
    report::CollectingReporter,
};
use mediacrawl_parser::{Engine, MediaType, RawHeading};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use serde::Serialize;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "mediacrawl=debug,mediacrawl_parser=debug".to_string()
        } else {
            "mediacrawl=info,mediacrawl_parser=warn".to_string()
        }
    });

    // stdout carries JSON output, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Title {
            primary,
            secondary,
            media_type,
            json,
        } => resolve_title(&primary, &secondary, media_type, cli.config.as_deref(), json),
        Commands::Info {
            text,
            size,
            source,
            search,
            json,
        } => parse_info(&text, size.as_deref(), &source, search, cli.config.as_deref(), json),
        Commands::Size { text } => {
            println!("{}", mediacrawl_parser::parse_size(&text));
            Ok(())
        }
        Commands::Page {
            files,
            pretty,
            errors,
        } => process_pages(&files, cli.config.as_deref(), pretty, errors),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("mediacrawl {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json_str = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json_str);
    Ok(())
}

fn resolve_title(
    primary: &str,
    secondary: &str,
    media_type: MediaType,
    config_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let engine = Engine::new(config.engine);

    let heading = RawHeading::new(primary, media_type).with_secondary(secondary);
    let result = engine.resolve_title_year(&heading);

    if json {
        print_json(&result, false)?;
    } else {
        println!("Title: {}", result.title);
        println!("Year: {}", result.year_string());
    }

    Ok(())
}

fn parse_info(
    text: &str,
    size: Option<&str>,
    source: &str,
    search: bool,
    config_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let hints = config.hints_for(source);
    let engine = Engine::new(config.engine);

    let link = engine.parse_link(text, size, &hints, search)?;

    if json {
        print_json(&link, false)?;
    } else {
        println!("Title: {}", link.title);
        println!("Season: {}", link.season);
        println!("Episode: {}", link.episode);
        println!("Quality: {}", link.quality.as_deref().unwrap_or("-"));
        println!("Size: {} MB", link.size_mb);
    }

    Ok(())
}

#[derive(Serialize)]
struct PageReport {
    pages: Vec<pipeline::PageOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<mediacrawl::report::ReportedError>>,
}

fn process_pages(
    files: &[PathBuf],
    config_path: Option<&Path>,
    pretty: bool,
    errors: bool,
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let pretty = pretty || config.output.pretty;
    let include_errors = errors || config.output.include_errors;

    let mut pages = Vec::new();
    for file in files {
        let loaded = pipeline::load_pages(file)?;
        tracing::debug!("Loaded {} pages from {:?}", loaded.len(), file);
        pages.extend(loaded);
    }

    let pipeline = PagePipeline::new(config);
    let reporter = CollectingReporter::new();
    let outputs = pipeline.process_pages(&pages, &reporter);

    if !reporter.is_empty() {
        tracing::warn!("{} anchors could not be parsed", reporter.len());
    }

    let report = PageReport {
        pages: outputs,
        errors: include_errors.then(|| reporter.drain()),
    };
    print_json(&report, pretty)
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Extra prefixes: {}", config.engine.extra_prefixes.len());
            println!(
                "  Extra counter phrases: {}",
                config.engine.extra_counter_phrases.len()
            );
            println!("  Year ambiguity: {:?}", config.engine.year_ambiguity);
            println!(
                "  Crawl default season: {}",
                config.engine.crawl_default_season
            );
            println!("  Sources: {}", config.sources.len());
            println!(
                "    Enabled: {}",
                config.sources.iter().filter(|s| s.enabled).count()
            );
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!(
                "  Crawl default season: {}",
                config.engine.crawl_default_season
            );
        }
    }

    Ok(())
}
