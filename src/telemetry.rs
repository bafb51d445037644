//! Log output for the binary.

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber. The filter comes from `LOG_LEVEL`
/// (default `info`). Calling this twice is harmless.
pub fn init() {
    let filter = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
