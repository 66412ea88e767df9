use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;

use crate::api::models::ErrorResponse;
use crate::config::settings::AppConfig;
use crate::database::SqliteStore;

pub mod alliances;
pub mod health;
pub mod import;
pub mod matches;
pub mod stats;
pub mod teams;

pub struct AppState {
    pub store: SqliteStore,
    pub config: AppConfig,
}

#[derive(Deserialize)]
pub struct AllianceParams {
    pub limit: Option<usize>,
}

pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse { error: message.into() })).into_response()
}

pub(crate) fn query_error(e: anyhow::Error) -> Response {
    log::error!("Query failed: {:?}", e);
    error_response(StatusCode::INTERNAL_SERVER_ERROR, format!("Query Error: {}", e))
}
