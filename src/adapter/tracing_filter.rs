//! Applies persisted logger levels to the process-wide `tracing` filter.
//!
//! The filter installed at startup sits behind a `reload::Layer`; this
//! adapter rebuilds an `EnvFilter` from a store snapshot and swaps it
//! through the handle, so new levels take effect without a restart.

use crate::domain::{LevelSnapshot, LogLevel, ROOT_LOGGER};
use crate::error::ReloadError;
use crate::port::LogReloader;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, Registry, reload};

pub struct TracingReloader {
    handle: reload::Handle<EnvFilter, Registry>,
    /// Directives most recently swapped in, as `(target, level)` pairs.
    active: Mutex<Vec<(String, String)>>,
}

impl TracingReloader {
    #[must_use]
    pub fn new(handle: reload::Handle<EnvFilter, Registry>) -> Self {
        Self {
            handle,
            active: Mutex::new(Vec::new()),
        }
    }

    /// Translate a snapshot into an `EnvFilter`: the root level becomes the
    /// default directive, each registered logger a `target=level` directive.
    /// Levels that do not parse are skipped; the file may have been edited
    /// by hand between requests.
    fn build_filter(
        snapshot: &LevelSnapshot,
    ) -> Result<Option<(EnvFilter, Vec<(String, String)>)>, ReloadError> {
        let mut directives = Vec::new();
        let mut applied = Vec::new();

        if let Some(root) = &snapshot.root_level {
            match LogLevel::parse(root) {
                Some(level) => {
                    directives.push(level.as_directive().to_string());
                    applied.push((ROOT_LOGGER.to_string(), level.as_str().to_string()));
                }
                None => {
                    warn!(logger = ROOT_LOGGER, level = %root, "Skipping stored level that does not parse");
                }
            }
        }

        for entry in &snapshot.loggers {
            if entry.level.is_empty() {
                continue;
            }
            match LogLevel::parse(&entry.level) {
                Some(level) => {
                    directives.push(format!("{}={}", entry.target, level.as_directive()));
                    applied.push((entry.target.clone(), level.as_str().to_string()));
                }
                None => {
                    warn!(logger = %entry.id, level = %entry.level, "Skipping stored level that does not parse");
                }
            }
        }

        if directives.is_empty() {
            return Ok(None);
        }

        let filter = EnvFilter::try_new(directives.join(","))
            .map_err(|e| ReloadError::Filter(e.to_string()))?;
        Ok(Some((filter, applied)))
    }
}

impl LogReloader for TracingReloader {
    fn apply(
        &self,
        snapshot: LevelSnapshot,
    ) -> Pin<Box<dyn Future<Output = Result<(), ReloadError>> + Send + '_>> {
        Box::pin(async move {
            let Some((filter, applied)) = Self::build_filter(&snapshot)? else {
                // Nothing parseable to apply; keep the current filter rather
                // than swapping in an empty one that silences the process.
                debug!("Snapshot carries no applicable levels, filter left unchanged");
                return Ok(());
            };

            self.handle
                .reload(filter)
                .map_err(|e| ReloadError::Swap(e.to_string()))?;

            *self
                .active
                .lock()
                .unwrap_or_else(PoisonError::into_inner) = applied;
            Ok(())
        })
    }

    fn active_levels(&self) -> Vec<(String, String)> {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LoggerLevel;
    use tracing_test::traced_test;

    fn detached_reloader() -> (reload::Layer<EnvFilter, Registry>, TracingReloader) {
        let (layer, handle) = reload::Layer::new(EnvFilter::new("info"));
        (layer, TracingReloader::new(handle))
    }

    fn snapshot(root: Option<&str>, loggers: Vec<(&str, &str, &str)>) -> LevelSnapshot {
        LevelSnapshot {
            root_level: root.map(str::to_string),
            loggers: loggers
                .into_iter()
                .map(|(id, target, level)| LoggerLevel {
                    id: id.to_string(),
                    target: target.to_string(),
                    level: level.to_string(),
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_apply_records_active_levels() {
        let (_layer, reloader) = detached_reloader();

        reloader
            .apply(snapshot(
                Some("DEBUG"),
                vec![("api", "demo::api", "WARN"), ("bare", "bare", "")],
            ))
            .await
            .unwrap();

        assert_eq!(
            reloader.active_levels(),
            vec![
                ("rootLogger".to_string(), "DEBUG".to_string()),
                ("demo::api".to_string(), "WARN".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_apply_normalizes_casing_into_directives() {
        let (_layer, reloader) = detached_reloader();

        reloader
            .apply(snapshot(Some("error"), vec![("api", "demo::api", "fatal")]))
            .await
            .unwrap();

        // FATAL collapses to error for tracing; active levels stay canonical.
        assert_eq!(
            reloader.active_levels(),
            vec![
                ("rootLogger".to_string(), "ERROR".to_string()),
                ("demo::api".to_string(), "FATAL".to_string()),
            ]
        );
    }

    #[traced_test]
    #[tokio::test]
    async fn test_unparseable_levels_are_skipped_with_warning() {
        let (_layer, reloader) = detached_reloader();

        reloader
            .apply(snapshot(Some("INFO"), vec![("api", "demo::api", "loud")]))
            .await
            .unwrap();

        assert_eq!(
            reloader.active_levels(),
            vec![("rootLogger".to_string(), "INFO".to_string())]
        );
        assert!(logs_contain("Skipping stored level that does not parse"));
    }

    #[tokio::test]
    async fn test_empty_snapshot_leaves_filter_unchanged() {
        let (_layer, reloader) = detached_reloader();

        reloader.apply(snapshot(None, vec![])).await.unwrap();
        assert!(reloader.active_levels().is_empty());
    }
}
