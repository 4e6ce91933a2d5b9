//! Logging setup
//!
//! Events go to stderr so stdout carries nothing but the CSV summary.
//! `RUST_LOG` takes precedence over the `--log-level` flag.

use tracing_subscriber::EnvFilter;

const FALLBACK_FILTER: &str = "warn";

/// Install the global tracing subscriber
///
/// Must be called at most once per process.
pub fn init(log_level: &str) {
    let directives = select_directives(std::env::var(EnvFilter::DEFAULT_ENV).ok(), log_level);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directives))
        .with_writer(std::io::stderr)
        .init();
}

/// Pick the filter from the environment value, then the flag, then `warn`
///
/// Invalid directives fall through to the next source instead of failing.
fn select_directives(env_value: Option<String>, log_level: &str) -> String {
    env_value
        .into_iter()
        .chain(Some(log_level.to_string()))
        .find(|directives| EnvFilter::try_new(directives).is_ok())
        .unwrap_or_else(|| FALLBACK_FILTER.to_string())
}
