use serde::{Deserialize, Serialize};

/// Reserved identifier for the top-level default logger.
pub const ROOT_LOGGER: &str = "rootLogger";

/// Component label reported for the root logger, which has none of its own.
pub const ROOT_COMPONENT: &str = "Not available for rootLogger";

/// One logger as reported by the read path.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoggerData {
    pub logger_name: String,
    pub component_name: String,
    pub level: String,
}

/// Point-in-time view of the persisted levels, handed to the reload port
/// after every successful update.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LevelSnapshot {
    /// Value of the root level key, when present.
    pub root_level: Option<String>,
    /// Registered non-root loggers, in registry order.
    pub loggers: Vec<LoggerLevel>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggerLevel {
    /// Identifier as it appears in the registry listing.
    pub id: String,
    /// Module path the level applies to; falls back to the id when the
    /// store carries no name key for this logger.
    pub target: String,
    /// Stored level, verbatim. May be empty for a registry entry without a
    /// level key.
    pub level: String,
}
