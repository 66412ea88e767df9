use axum::response::Json;

use crate::api::models::HealthResponse;

pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        version: env!("CARGO_PKG_VERSION"),
    })
}
