//! Logging initialisation for Lanai Lexicon.
//!
//! Installs a `tracing-subscriber` fmt subscriber as the global default. The
//! `RUST_LOG` environment variable wins over the configured level.

use crate::config::LogConfig;
use crate::error::{LexiconError, LexiconResult};
use tracing_subscriber::EnvFilter;

/// Initialize the logging system from the log configuration.
///
/// # Returns
///
/// * `Ok(())` if the subscriber was installed
/// * `Err(LexiconError::Logging)` if a global subscriber is already set
pub fn init_logging(config: &LogConfig) -> LexiconResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(config.source_location)
        .with_line_number(config.source_location)
        .with_thread_names(true);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.pretty().try_init()
    };

    result.map_err(|e| {
        LexiconError::Logging(format!("Failed to set global tracing subscriber: {e}"))
    })
}
