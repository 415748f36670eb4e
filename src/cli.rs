use clap::{Parser, Subcommand};
use mediacrawl_parser::MediaType;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mediacrawl")]
#[command(author, version, about = "Canonical titles, years and download links from crawled media pages")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a page heading into a canonical title and year
    Title {
        /// Primary heading text
        #[arg(required = true)]
        primary: String,

        /// Secondary heading text (used when the primary has no title or year)
        #[arg(short, long, default_value = "")]
        secondary: String,

        /// Media type: movie, serial, anime_movie, anime_serial
        #[arg(short, long, default_value = "movie")]
        media_type: MediaType,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse torrent anchor text into a canonical link description
    Info {
        /// Anchor text
        #[arg(required = true)]
        text: String,

        /// Size label shown next to the anchor
        #[arg(long)]
        size: Option<String>,

        /// Source name (selects [[sources]] hints from the config)
        #[arg(long, default_value = "cli")]
        source: String,

        /// Treat the anchor as a search result
        #[arg(long)]
        search: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a size label to megabytes
    Size {
        /// Size label, e.g. "1.4 GB"
        #[arg(required = true)]
        text: String,
    },

    /// Process JSON page dumps and print merged title groups as JSON
    Page {
        /// Page dump files (a page object or an array of pages)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Include reported anchor errors in the output
        #[arg(long)]
        errors: bool,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
