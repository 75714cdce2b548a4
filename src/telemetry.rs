//! Logging setup for the binaries.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset. Kept quiet so log lines do not
/// interleave with frames drawn on stdout.
pub const DEFAULT_FILTER: &str = "warn";

/// Install a `fmt` subscriber writing to stderr, filtered by `RUST_LOG`.
/// Calling it more than once is harmless.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
