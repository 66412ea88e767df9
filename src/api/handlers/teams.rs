use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{error_response, query_error, AppState};
use crate::api::extract::{ApiJson, ApiPath};
use crate::api::models::TeamResponse;
use crate::domain::{TeamInput, TeamNumber};

pub async fn get_teams(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let stored = match state.store.list_teams() {
        Ok(stored) => stored,
        Err(e) => return query_error(e),
    };

    let teams: Vec<TeamResponse> = stored
        .into_iter()
        .map(|s| TeamResponse::from_stored(s, &state.config.rating))
        .collect();

    Json(teams).into_response()
}

pub async fn get_team(
    State(state): State<Arc<AppState>>,
    ApiPath(team_number): ApiPath<TeamNumber>,
) -> impl IntoResponse {
    match state.store.find_team(team_number) {
        Ok(Some(stored)) => Json(TeamResponse::from_stored(stored, &state.config.rating)).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, format!("Team {} not found", team_number)),
        Err(e) => query_error(e),
    }
}

pub async fn upsert_team(
    State(state): State<Arc<AppState>>,
    ApiJson(input): ApiJson<TeamInput>,
) -> impl IntoResponse {
    let team = match input.into_team() {
        Ok(team) => team,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };

    match state.store.upsert_team(&team) {
        Ok(stored) => (
            StatusCode::CREATED,
            Json(TeamResponse::from_stored(stored, &state.config.rating)),
        )
            .into_response(),
        Err(e) => query_error(e),
    }
}
