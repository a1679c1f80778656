pub mod log_config;
pub mod properties;

pub use log_config::LogConfigStore;
pub use properties::PropertiesFile;
