use crate::adapter::TracingReloader;
use crate::config::Settings;
use crate::port::LogReloader;
use crate::store::LogConfigStore;
use std::sync::Arc;
use tracing::warn;
use tracing_subscriber::{EnvFilter, Registry, reload};

/// Shared application state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<LogConfigStore>,
    pub reloader: Arc<dyn LogReloader>,
}

impl AppState {
    /// Create `AppState` from configuration settings and the live filter
    /// handle.
    ///
    /// Applies the persisted levels once so the running filter matches the
    /// file from the first request on. A fresh deployment may not have a
    /// store yet, so startup apply failures are logged rather than fatal.
    pub async fn from_settings(
        settings: &Settings,
        filter_handle: reload::Handle<EnvFilter, Registry>,
    ) -> Self {
        let store = Arc::new(LogConfigStore::new(settings.log_config_path.clone()));
        let reloader: Arc<dyn LogReloader> = Arc::new(TracingReloader::new(filter_handle));

        match store.snapshot().await {
            Ok(snapshot) => {
                if let Err(e) = reloader.apply(snapshot).await {
                    warn!("Could not apply persisted log levels at startup: {e}");
                }
            }
            Err(e) => warn!("Could not load log config at startup: {e}"),
        }

        Self { store, reloader }
    }
}
