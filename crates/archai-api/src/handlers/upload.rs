use std::sync::Arc;

use archai_core::formats::BoundaryImport;
use axum::{
    extract::{Multipart, Path, State},
    Json,
};

use crate::error::ApiError;
use crate::services::BoundaryService;
use crate::state::AppState;

pub async fn upload_boundary(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<BoundaryImport>, ApiError> {
    let (filename, data) = extract_file(&mut multipart).await?;

    tracing::info!(
        project_id = %project_id,
        filename = %filename,
        size = data.len(),
        "Received site boundary"
    );

    if !state.importer.accepts(&filename) {
        return Err(ApiError::bad_request("Only DXF files are supported")
            .with_details(format!("Received '{}'", filename)));
    }

    let result = BoundaryService::import(&state, &project_id, &filename, &data).await?;
    Ok(Json(result))
}

async fn extract_file(multipart: &mut Multipart) -> Result<(String, Vec<u8>), ApiError> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        ApiError::bad_request("Failed to parse multipart form").with_details(e.to_string())
    })? {
        let name = field.name().unwrap_or("").to_string();

        if name == "file" {
            let filename = field.file_name().unwrap_or("").to_string();
            let data = field.bytes().await.map_err(|e| {
                ApiError::bad_request("Failed to read file data").with_details(e.to_string())
            })?;
            return Ok((filename, data.to_vec()));
        }
    }

    Err(ApiError::bad_request("No file provided")
        .with_details("Expected a 'file' field in the multipart form"))
}
