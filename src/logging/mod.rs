//! Diagnostics logging.
//!
//! Diagnostics go to stderr through `tracing`, keeping stdout for chat.
//! The filter comes from `RUST_LOG` when set, otherwise from the given
//! level (default `warn`).

use tracing_subscriber::EnvFilter;

pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // A second init (e.g. in tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
