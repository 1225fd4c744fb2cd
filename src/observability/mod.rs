pub mod metrics;

use tracing_subscriber::EnvFilter;

/// Initializes the process-wide tracing subscriber. Intended to be called
/// once by the host binary, with the level from [`Config`](crate::config::Config).
pub fn init_tracing(log_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level.to_string()))
        .with_target(false)
        .compact()
        .init();
}
