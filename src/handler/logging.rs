//! The logging resource: query and update logger levels at runtime.
//!
//! GET  /v1/logging?loggerName=<id>  resolves one logger's label and level.
//! PATCH /v1/logging                 updates one logger's level and reloads
//!                                   the running subscriber.
//!
//! Every branch answers with a JSON body and a status code; lookup and
//! persistence failures all map to 400 with a descriptive message, and the
//! underlying detail is logged for operators, never echoed to the caller.

use crate::app::state::AppState;
use crate::domain::{ROOT_LOGGER, is_valid_level};
use crate::error::StoreError;
use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{error, info};

#[derive(Deserialize)]
pub struct LoggingQuery {
    #[serde(rename = "loggerName")]
    logger_name: Option<String>,
}

// The body is picked apart from a raw `Value` so a missing level is reported
// before the logger name is ever inspected.
const LEVEL_FIELD: &str = "loggingLevel";
const NAME_FIELD: &str = "loggerName";

/// Handler for GET /v1/logging
pub async fn get_logging_handler(
    State(state): State<AppState>,
    Query(query): Query<LoggingQuery>,
) -> (StatusCode, Json<Value>) {
    let Some(logger_name) = query.logger_name else {
        return bad_request("Logger Name is missing".to_string());
    };

    match state.store.logger_data(&logger_name).await {
        Ok(data) => (StatusCode::OK, Json(json!(data))),
        Err(StoreError::UnknownLogger(name)) => {
            error!("Specified logger {name} is not found");
            bad_request(format!("Invalid logger {name}"))
        }
        Err(e) => {
            error!("Failed to read logger {logger_name}: {e}");
            bad_request(format!("Error reading logger {logger_name}"))
        }
    }
}

/// Handler for PATCH /v1/logging
pub async fn update_logging_handler(
    State(state): State<AppState>,
    body: String,
) -> (StatusCode, Json<Value>) {
    let payload: Value = serde_json::from_str(&body).unwrap_or(Value::Null);

    let Some(level) = payload.get(LEVEL_FIELD).and_then(Value::as_str) else {
        return bad_request("Log level is missing".to_string());
    };
    if !is_valid_level(level) {
        return bad_request(format!("Invalid log level {level}"));
    }
    let Some(logger_name) = payload.get(NAME_FIELD).and_then(Value::as_str) else {
        return bad_request("Logger name is missing".to_string());
    };

    match state.store.update_level(logger_name, level).await {
        Ok(snapshot) => {
            if let Err(e) = state.reloader.apply(snapshot).await {
                error!("Failed to apply updated levels: {e}");
                return bad_request(format!("Error updating logger {logger_name}"));
            }
            info!("Updated log level of {logger_name} to {level}");
            let message = if logger_name == ROOT_LOGGER {
                format!("Successfully updated log level of rootLogger {level}")
            } else {
                format!("Successfully updated log level of logger {logger_name} to {level}")
            };
            (StatusCode::OK, Json(json!({ "message": message })))
        }
        Err(StoreError::UnknownLogger(name)) => {
            error!("Specified logger {name} is not found");
            bad_request(format!("Invalid logger {name}"))
        }
        Err(e) => {
            error!("Failed to update logger {logger_name}: {e}");
            bad_request(format!("Error updating logger {logger_name}"))
        }
    }
}

fn bad_request(message: String) -> (StatusCode, Json<Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}
