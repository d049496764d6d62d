use tracing_subscriber::EnvFilter;

/// Installs a stderr subscriber for the demo binaries.
///
/// Defaults to `warn`; `RUST_LOG=design_patterns=debug` shows cache
/// creation and undo traffic.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second call (tests, repeated init) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
