//! Logging setup
//!
//! Human-readable or JSON log lines on stderr through `tracing-subscriber`.
//! Stdout is left to command output so `preview` and `entries --json` can be
//! piped.

use crate::config::LoggingConfig;
use anyhow::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive used when `RUST_LOG` is not set
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "foster_plea=debug"
    } else {
        "foster_plea=info"
    }
}

/// Initialize the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the default directive.
///
/// # Errors
///
/// Returns error if the filter is invalid or a subscriber is already set
pub fn init_logging(config: &LoggingConfig, verbose: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(verbose)))?;

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.json {
        let layer = fmt::layer()
            .json()
            .with_current_span(true)
            .with_writer(std::io::stderr);
        registry.with(layer).try_init()?;
    } else {
        let layer = fmt::layer()
            .with_target(false)
            .with_level(true)
            .with_writer(std::io::stderr);
        registry.with(layer).try_init()?;
    }

    Ok(())
}
