use dnsconf_domain::config::logging::LOG_LEVELS;
use tracing::debug;

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Level used before a configuration is available, e.g. to report a load failure.
pub fn fallback_level(requested: Option<&str>) -> &str {
    requested
        .filter(|level| LOG_LEVELS.iter().any(|known| known.eq_ignore_ascii_case(level)))
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

/// Logs go to stderr so stdout carries only the generated configuration.
/// Unknown levels fall back to INFO.
pub fn init_logging(level: &str) {
    let log_level = level.parse().unwrap_or(tracing::Level::INFO);

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_max_level(log_level)
        .with_ansi(false)
        .init();

    debug!("Logging initialized at level: {}", level);
}
