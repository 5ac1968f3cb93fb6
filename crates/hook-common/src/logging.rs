//! Tracing setup for hook binaries.

use tracing_subscriber::EnvFilter;

/// Install a stderr fmt subscriber.
///
/// Stdout is reserved for hook output. `RUST_LOG` overrides the default
/// level. Calling this twice is harmless.
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
