use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

use super::{error_response, query_error, AllianceParams, AppState};
use crate::api::extract::{ApiJson, ApiQuery};
use crate::api::models::AllianceCalcRequest;
use crate::database::SqliteStore;
use crate::services::ranking::RankingService;

fn ranking_service(state: &AppState) -> RankingService<SqliteStore> {
    RankingService::new(state.store.clone(), state.config.alliance.clone())
}

/// Runs a ranking query on the blocking pool; rosters make the work cubic.
async fn run_blocking<T, F>(job: F) -> Result<T, Response>
where
    T: Send + 'static,
    F: FnOnce() -> anyhow::Result<T> + Send + 'static,
{
    match tokio::task::spawn_blocking(job).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(query_error(e)),
        Err(e) => {
            log::error!("Ranking task failed: {:?}", e);
            Err(error_response(StatusCode::INTERNAL_SERVER_ERROR, "Ranking task failed"))
        }
    }
}

pub async fn get_top_alliances(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<AllianceParams>,
) -> impl IntoResponse {
    let service = ranking_service(&state);

    match run_blocking(move || service.top(params.limit)).await {
        Ok(alliances) => Json(alliances).into_response(),
        Err(response) => response,
    }
}

pub async fn calculate_alliance(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<AllianceCalcRequest>,
) -> impl IntoResponse {
    let service = ranking_service(&state);

    match run_blocking(move || service.for_team_numbers(&request.team_numbers)).await {
        Ok(Some(alliance)) => Json(alliance).into_response(),
        Ok(None) => error_response(StatusCode::BAD_REQUEST, "Three valid teams required"),
        Err(response) => response,
    }
}
