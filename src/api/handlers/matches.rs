use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::{Map, Value};
use std::sync::Arc;

use super::{query_error, AppState};
use crate::api::extract::ApiJson;
use crate::api::models::MatchResponse;

pub async fn get_matches(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.store.recent_matches(state.config.store.match_history_limit) {
        Ok(records) => {
            let matches: Vec<MatchResponse> = records.into_iter().map(MatchResponse::from).collect();
            Json(matches).into_response()
        }
        Err(e) => query_error(e),
    }
}

pub async fn create_match(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<Map<String, Value>>,
) -> impl IntoResponse {
    match state.store.insert_match(payload) {
        Ok(record) => (StatusCode::CREATED, Json(MatchResponse::from(record))).into_response(),
        Err(e) => query_error(e),
    }
}
