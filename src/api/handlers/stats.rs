use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{query_error, AppState};
use crate::api::models::OverviewResponse;

pub async fn get_overview(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.store.overview() {
        Ok(overview) => Json(OverviewResponse::from(overview)).into_response(),
        Err(e) => query_error(e),
    }
}
