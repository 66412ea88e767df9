use axum::{
    body::Bytes,
    extract::{
        multipart::{Multipart, MultipartError, MultipartRejection},
        State,
    },
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{error_response, AppState};
use crate::api::models::ImportResponse;
use crate::services::import::ImportService;

const FILE_FIELD: &str = "file";

async fn read_file_field(multipart: &mut Multipart) -> Result<Option<Bytes>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(FILE_FIELD) {
            return field.bytes().await.map(Some);
        }
    }
    Ok(None)
}

/// Imports a CSV roster uploaded as the `file` field of a multipart form.
pub async fn import_file(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> impl IntoResponse {
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => return error_response(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    let upload = match read_file_field(&mut multipart).await {
        Ok(Some(upload)) => upload,
        Ok(None) => return error_response(StatusCode::BAD_REQUEST, "No file uploaded"),
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };
    log::info!("Received roster upload ({} bytes)", upload.len());

    let service = ImportService::new(state.store.clone());
    match tokio::task::spawn_blocking(move || service.import_reader(upload.as_ref())).await {
        Ok(Ok(inserted)) => Json(ImportResponse { ok: true, inserted }).into_response(),
        Ok(Err(e)) => {
            log::error!("Roster import failed: {:?}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Import failed")
        }
        Err(e) => {
            log::error!("Import task failed: {:?}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Import failed")
        }
    }
}
