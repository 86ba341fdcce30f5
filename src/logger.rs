//! Logging setup for the apex-quaternion binary and benchmarks
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! executables, which call one of the functions below once at startup.

use tracing::Level;

/// Initialize the tracing subscriber with the standard configuration
///
/// Default log level: INFO (overrideable via RUST_LOG environment variable)
///
/// # Example
/// ```no_run
/// use apex_quaternion::init_logger;
///
/// fn main() {
///     init_logger();
///     tracing::info!("Propagation started");
/// }
/// ```
///
/// # Environment Variables
/// ```bash
/// RUST_LOG=debug cargo run --bin propagate_attitude
/// RUST_LOG=apex_quaternion=trace cargo run --bin propagate_attitude
/// ```
pub fn init_logger() {
    init_logger_with_level(Level::INFO)
}

/// Initialize the tracing subscriber with a custom default level
///
/// # Arguments
/// * `default_level` - The default log level (overrideable via RUST_LOG)
///
/// Only the first call installs a subscriber. Later calls, or a subscriber already set
/// by the host application, make `try_init` fail; that error is discarded and the
/// existing subscriber stays in place.
///
/// # Example
/// ```no_run
/// use apex_quaternion::init_logger_with_level;
/// use tracing::Level;
///
/// fn main() {
///     init_logger_with_level(Level::DEBUG);
///     tracing::debug!("Step size validated");
/// }
/// ```
pub fn init_logger_with_level(default_level: Level) {
    use tracing_subscriber::fmt::time::SystemTime;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_timer(SystemTime)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
