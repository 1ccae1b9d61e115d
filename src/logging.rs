//! Logging and tracing initialization.
//!
//! All logs go to stderr: stdout carries the report line(s) the
//! monitoring framework parses and must stay clean.

use tracing::Level;
use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Initialize the tracing subscriber.
///
/// Should be called once, early in main(). The log level can be
/// overridden at runtime via the `RUST_LOG` environment variable.
pub fn init(verbose: bool) {
    let default_level = if verbose { Level::DEBUG } else { Level::INFO };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "check_bareos={}",
            default_level.as_str().to_lowercase()
        ))
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_file(false)
                .with_line_number(false),
        )
        .init();
}
