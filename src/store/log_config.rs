//! Accessor for the persisted logger configuration.
//!
//! The store is a property file: a `loggers` registry key listing every
//! non-root logger id, `logger.<id>.level` / `logger.<id>.name` pairs per
//! registered logger, and a `rootLogger.level` key for the default level.
//! The file is read on every lookup and read-modify-rewritten on every
//! update; entries are never deleted here, only levels change.

use crate::domain::{LevelSnapshot, LoggerData, LoggerLevel, ROOT_COMPONENT, ROOT_LOGGER};
use crate::error::StoreError;
use crate::store::properties::PropertiesFile;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Registry key listing every non-root logger id known to the store.
const LOGGERS_KEY: &str = "loggers";

fn level_key(logger_id: &str) -> String {
    format!("logger.{logger_id}.level")
}

fn name_key(logger_id: &str) -> String {
    format!("logger.{logger_id}.name")
}

fn root_level_key() -> String {
    format!("{ROOT_LOGGER}.level")
}

pub struct LogConfigStore {
    path: PathBuf,
    /// Serializes the read-modify-rewrite cycle so overlapping updates
    /// cannot interleave partial writes.
    write_lock: Mutex<()>,
}

impl LogConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve one logger's component label and level.
    ///
    /// The root logger bypasses the registry; any other id must appear in
    /// the registry listing. Registered loggers with missing keys report
    /// empty strings.
    pub async fn logger_data(&self, logger_name: &str) -> Result<LoggerData, StoreError> {
        let config = self.load().await?;

        if logger_name == ROOT_LOGGER {
            return Ok(LoggerData {
                logger_name: logger_name.to_string(),
                component_name: ROOT_COMPONENT.to_string(),
                level: config.get(&root_level_key()).unwrap_or_default().to_string(),
            });
        }

        if !registered(&config).any(|id| id == logger_name) {
            return Err(StoreError::UnknownLogger(logger_name.to_string()));
        }

        Ok(LoggerData {
            logger_name: logger_name.to_string(),
            component_name: config
                .get(&name_key(logger_name))
                .unwrap_or_default()
                .to_string(),
            level: config
                .get(&level_key(logger_name))
                .unwrap_or_default()
                .to_string(),
        })
    }

    /// Set one logger's level and durably rewrite the file.
    ///
    /// Holds the write lock across the whole read-modify-rewrite. The
    /// rewrite lands through a sibling temp file and a rename, so a failure
    /// at any point leaves the previous file intact. Returns the snapshot of
    /// the just-persisted configuration for the reload collaborator.
    pub async fn update_level(
        &self,
        logger_name: &str,
        level: &str,
    ) -> Result<LevelSnapshot, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut config = self.load().await?;
        let key = if logger_name == ROOT_LOGGER {
            root_level_key()
        } else if registered(&config).any(|id| id == logger_name) {
            level_key(logger_name)
        } else {
            return Err(StoreError::UnknownLogger(logger_name.to_string()));
        };

        config.set(&key, level);
        self.persist(&config).await?;

        Ok(snapshot_of(&config))
    }

    /// Parsed view of the currently persisted levels.
    pub async fn snapshot(&self) -> Result<LevelSnapshot, StoreError> {
        Ok(snapshot_of(&self.load().await?))
    }

    async fn load(&self) -> Result<PropertiesFile, StoreError> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| StoreError::Read {
                path: self.path.clone(),
                source,
            })?;
        Ok(PropertiesFile::parse(&text))
    }

    async fn persist(&self, config: &PropertiesFile) -> Result<(), StoreError> {
        let mut tmp_name = self.path.clone().into_os_string();
        tmp_name.push(".tmp");
        let tmp = PathBuf::from(tmp_name);

        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        let mut file = tokio::fs::File::create(&tmp).await.map_err(write_err)?;
        file.write_all(config.render().as_bytes())
            .await
            .map_err(write_err)?;
        file.sync_all().await.map_err(write_err)?;
        drop(file);

        tokio::fs::rename(&tmp, &self.path).await.map_err(write_err)
    }
}

/// Ids in the registry listing, comma-split and trimmed.
fn registered<'a>(config: &'a PropertiesFile) -> impl Iterator<Item = &'a str> {
    config
        .get(LOGGERS_KEY)
        .into_iter()
        .flat_map(|listing| listing.split(','))
        .map(str::trim)
        .filter(|id| !id.is_empty())
}

fn snapshot_of(config: &PropertiesFile) -> LevelSnapshot {
    let loggers = registered(config)
        .map(|id| LoggerLevel {
            id: id.to_string(),
            target: config.get(&name_key(id)).unwrap_or(id).to_string(),
            level: config.get(&level_key(id)).unwrap_or_default().to_string(),
        })
        .collect();

    LevelSnapshot {
        root_level: config.get(&root_level_key()).map(str::to_string),
        loggers,
    }
}
