//! Logging setup shared by the binaries

use tracing_subscriber::EnvFilter;

/// Initialize a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Output goes to stderr; stdout is reserved for the tools' own messages.
/// Call once, at the top of `main`.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
