use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber. `RUST_LOG` wins over `log_level`.
/// Calling this again once a subscriber is installed does nothing.
pub fn init(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    // Err only means a global subscriber is already set.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
