//! Error reporters for anchor parse failures.

use mediacrawl_parser::{ErrorReporter, InfoError};
use parking_lot::Mutex;
use serde::Serialize;

/// One reported anchor failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportedError {
    pub source_name: String,
    pub context: String,
    pub message: String,
}

/// Collects reports from every page, across rayon workers.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    errors: Mutex<Vec<ReportedError>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.errors.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.lock().is_empty()
    }

    /// Take the collected errors, leaving the reporter empty.
    pub fn drain(&self) -> Vec<ReportedError> {
        std::mem::take(&mut *self.errors.lock())
    }
}

impl ErrorReporter for CollectingReporter {
    fn report_error(&self, source_name: &str, context: &str, error: &InfoError) {
        self.errors.lock().push(ReportedError {
            source_name: source_name.to_string(),
            context: context.to_string(),
            message: error.to_string(),
        });
    }
}
