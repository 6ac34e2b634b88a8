//! Logging setup for the driver.
//!
//! Events go to stderr so that stdout only ever carries results.

use tracing_subscriber::EnvFilter;

use crate::config::Config;

fn filter_from_config(config: &Config) -> EnvFilter {
    EnvFilter::new(config.log_level.as_filter_str())
}

/// Install the global subscriber.
///
/// A subscriber that is already installed is left in place, so calling this
/// more than once is harmless.
pub(crate) fn init_logging(config: &Config) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter_from_config(config))
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;

    #[test]
    fn init_logging_is_idempotent() {
        let config = Config::default();
        init_logging(&config);
        init_logging(&config);
    }

    #[test]
    fn filter_uses_config_log_level() {
        let config = Config::default().apply_overrides(Some(LogLevel::Debug));
        assert_eq!(filter_from_config(&config).to_string(), "debug");
    }
}
