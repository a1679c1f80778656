use std::env;
use std::path::{Path, PathBuf};

use crate::error::LevelCtlError;

/// Default location of the logger configuration store, relative to the
/// process working directory.
const DEFAULT_LOG_CONFIG_PATH: &str = "config/log-config.properties";

#[derive(Debug)]
pub struct Settings {
    /// Property file holding the logger registry and levels.
    pub log_config_path: PathBuf,
    /// Management HTTP server port.
    pub http_port: u16,
}

impl Settings {
    /// Validates the settings and returns an error if invalid.
    pub fn validate(&self) -> Result<(), LevelCtlError> {
        validate_log_config_path(&self.log_config_path)?;
        validate_port(self.http_port)?;
        Ok(())
    }
}

/// Validates that the store path is not empty.
fn validate_log_config_path(path: &Path) -> Result<(), LevelCtlError> {
    if path.as_os_str().is_empty() {
        return Err(LevelCtlError::Config(
            "Log config path cannot be empty".into(),
        ));
    }
    Ok(())
}

/// Validates that the port is in valid range (1-65535).
fn validate_port(port: u16) -> Result<(), LevelCtlError> {
    if port == 0 {
        return Err(LevelCtlError::Config("Port cannot be 0".into()));
    }
    Ok(())
}

pub fn get_configuration() -> Result<Settings, Box<dyn std::error::Error>> {
    let log_config_path = env::var("LOG_CONFIG_PATH")
        .unwrap_or_else(|_| DEFAULT_LOG_CONFIG_PATH.to_string())
        .into();

    // Server port with default
    let http_port = env::var("HTTP_PORT")
        .unwrap_or_else(|_| "9610".to_string())
        .parse::<u16>()?;

    let settings = Settings {
        log_config_path,
        http_port,
    };

    // Validate settings before returning
    settings.validate()?;

    Ok(settings)
}
