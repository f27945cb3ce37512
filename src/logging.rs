//! Structured logging using **tracing**.
//!
//! The classifier and rewriter emit `debug!` events naming the reason a
//! declaration was rejected or left untouched; the driver emits an `info!`
//! summary per pass. The JSON subscriber provides machine-readable output
//! for observability platforms.

/// Initializes the global tracing collector (subscriber).
///
/// This should be called *once* at the beginning of the host's runtime.
/// It configures structured JSON output to stderr.
///
/// # Environment Variables
/// - `RUST_LOG`: Controls log filtering (e.g., `RUST_LOG=constify=debug`)
pub fn init_structured_logging() {
    tracing_subscriber::fmt()
        .json()
        .with_ansi(false)
        .with_level(true)
        .with_target(true)
        .with_current_span(true)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr) // keep stdout clean for host output
        .init();
}
