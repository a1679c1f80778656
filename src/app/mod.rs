pub mod router;
pub mod server;
pub mod state;
pub mod tracing;

use crate::config;
use crate::error::LevelCtlError;

pub use state::AppState;

/// Application entry point. Initializes tracing, configuration, and starts
/// the management server.
pub async fn run() -> Result<(), LevelCtlError> {
    // Handle healthcheck subcommand (for Docker healthcheck in distroless image)
    if std::env::args().nth(1).as_deref() == Some("healthcheck") {
        match crate::healthcheck().await {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("Healthcheck failed: {e:#}");
                std::process::exit(1)
            }
        }
    }

    let filter_handle = tracing::init_tracing();

    let settings =
        config::get_configuration().map_err(|e| LevelCtlError::Config(e.to_string()))?;
    ::tracing::info!("Loaded settings");

    let app_state = state::AppState::from_settings(&settings, filter_handle).await;
    let app = router::main_router(app_state);

    server::serve(app, settings.http_port).await
}
