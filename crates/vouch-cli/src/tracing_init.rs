//! Tracing/logging initialization for the CLI.
//!
//! Logs always go to stderr so stdout stays clean for safety numbers and
//! payloads that may be piped elsewhere.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialise the global tracing subscriber.
///
/// * `default_filter` -- default `RUST_LOG` value when the env-var is not set
///   (e.g. `"vouch=info"`).
/// * `log_json` -- when `true`, emit structured JSON log lines instead of the
///   human-readable format.
pub fn init_tracing(default_filter: &str, log_json: bool) {
    let env_filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
    );
    if log_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Subscriber used while configuration is still being loaded.
///
/// Install it with `tracing::dispatcher::with_default`; it only reports
/// warnings and errors.
pub fn bootstrap_subscriber(log_json: bool) -> tracing::Dispatch {
    let env_filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter("warn")),
    );
    if log_json {
        tracing::Dispatch::new(
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)),
        )
    } else {
        tracing::Dispatch::new(
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
        )
    }
}

/// Default filter string for a configured log level.
pub fn default_filter(level: &str) -> String {
    format!("vouch={level},vouch_crypto={level},vouch_cli={level}")
}
