//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::error::config::ConfigError;
use crate::error::{
    report_error, set_error_reporter, ErrorContext, ErrorReporter, LexiconError,
    TracingErrorReporter,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = LexiconError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that nested errors work correctly.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let lexicon_error = LexiconError::from(io_error);
    assert!(format!("{lexicon_error}").contains("file not found"));

    let config_error: LexiconError = ConfigError::ValueOutOfRange {
        key: "trie.suggestion_limit".to_string(),
        message: "must be greater than 0".to_string(),
    }
    .into();
    assert_eq!(
        config_error.to_string(),
        "Configuration error: Configuration value trie.suggestion_limit is out of valid range: must be greater than 0"
    );
}

/// Mock error reporter for testing.
#[derive(Debug)]
struct MockErrorReporter {
    reported_count: AtomicUsize,
}

impl MockErrorReporter {
    fn new() -> Self {
        Self {
            reported_count: AtomicUsize::new(0),
        }
    }

    fn reported_count(&self) -> usize {
        self.reported_count.load(Ordering::SeqCst)
    }
}

impl ErrorReporter for MockErrorReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that the global error reporter receives reported errors.
///
/// Other tests may report through the same global reporter, so only a lower
/// bound is asserted.
#[test]
fn test_global_error_reporter() {
    let reporter = Arc::new(MockErrorReporter::new());
    set_error_reporter(reporter.clone());

    let error = LexiconError::Custom("test error".to_string());
    report_error(ErrorContext::new(error, "test_component"));

    assert!(reporter.reported_count() >= 1);
}

/// Test that the default tracing error reporter can be created.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let error = LexiconError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_trace("frame 0");

    // Just make sure this doesn't panic
    reporter.report(context);
}
