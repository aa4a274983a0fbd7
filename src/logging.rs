//! Diagnostic logging
//!
//! Diagnostics go to stderr through `tracing`. The filter comes from the
//! `PROMPTNOTE_LOG` environment variable (for example
//! `PROMPTNOTE_LOG=promptnote=debug`) and defaults to `warn`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "PROMPTNOTE_LOG";

/// Filter used when [`LOG_ENV`] is unset or invalid
pub const DEFAULT_FILTER: &str = "warn";

/// Build the filter from [`LOG_ENV`], falling back to [`DEFAULT_FILTER`]
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber
///
/// Calling it again after a subscriber is installed is a no-op.
pub fn init() {
    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if let Err(error) = result {
        tracing::debug!(%error, "tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_defaults_to_warn() {
        if std::env::var_os(LOG_ENV).is_none() {
            assert_eq!(env_filter().to_string(), DEFAULT_FILTER);
        }
    }
}
