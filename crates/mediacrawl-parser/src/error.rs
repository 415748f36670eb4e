//! Per-anchor errors and the reporting collaborator.

use thiserror::Error;

/// Why an anchor could not be turned into a download record.
///
/// These are recovered locally: the anchor is reported once and skipped,
/// sibling anchors continue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InfoError {
    /// Anchor text is empty or whitespace only.
    #[error("anchor text is empty")]
    Empty,

    /// Anchor text still contains HTML markup.
    #[error("anchor text contains markup: {0}")]
    Markup(String),

    /// Link is relative or not a URL.
    #[error("link is not absolute: {0}")]
    NonAbsoluteLink(String),
}

/// Sink for per-anchor failures.
///
/// Implementations must be shareable across the threads processing pages
/// in parallel.
pub trait ErrorReporter: Send + Sync {
    /// Record one failure. `source_name` identifies the crawled site and
    /// `context` the offending anchor.
    fn report_error(&self, source_name: &str, context: &str, error: &InfoError);
}

/// Reporter that drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl ErrorReporter for NoopReporter {
    fn report_error(&self, _source_name: &str, _context: &str, _error: &InfoError) {}
}
