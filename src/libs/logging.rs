use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info,tower_http=info";

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over the built-in filter. Calling this more
/// than once (as tests may) is harmless: later calls leave the first
/// subscriber in place.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
