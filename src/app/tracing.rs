use tracing::Level;
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*, reload};

/// Initialize the tracing subscriber and hand back the reload handle the
/// logging resource uses to apply level updates at runtime.
/// Uses JSON format when `RUST_LOG_FORMAT=json` (default for production).
pub fn init_tracing() -> reload::Handle<EnvFilter, Registry> {
    let filter = EnvFilter::from_default_env().add_directive(Level::INFO.into());
    let (filter, handle) = reload::Layer::new(filter);

    let use_json = std::env::var("RUST_LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(true); // Default to JSON for production

    if use_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .init();
    }

    handle
}
