use actix_multipart::Multipart;
use actix_web::{HttpResponse, web};
use futures_util::TryStreamExt;

use crate::errors::app_error::AppError;
use crate::state::app_state::AppState;
use crate::structs::upload_response::{DeleteUploadResponse, UploadListResponse};

const UPLOAD_LIST_LIMIT: i64 = 100;

fn multipart_error(e: actix_multipart::MultipartError) -> AppError {
    AppError::BadRequest(format!("Invalid multipart payload: {}", e))
}

/// Accept a multipart form with a `file` field and store it
pub async fn upload_file(
    app_state: web::Data<AppState>,
    mut payload: Multipart,
) -> Result<HttpResponse, AppError> {
    while let Some(mut field) = payload.try_next().await.map_err(multipart_error)? {
        if field.name() != Some("file") {
            // drain and skip anything else in the form
            while field.try_next().await.map_err(multipart_error)?.is_some() {}
            continue;
        }

        let content_type = field
            .content_type()
            .map(|m| m.essence_str().to_string())
            .unwrap_or_else(|| String::from("application/octet-stream"));
        let original_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .unwrap_or("upload")
            .to_string();

        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await.map_err(multipart_error)? {
            bytes.extend_from_slice(&chunk);
        }

        let response = app_state
            .files
            .store(app_state.store.as_ref(), &bytes, &content_type, &original_name)
            .await?;
        return Ok(HttpResponse::Ok().json(response));
    }

    Err(AppError::BadRequest(String::from("No file provided")))
}

/// List uploaded files, newest first
pub async fn list_uploads(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let uploads = app_state.store.recent_uploads(UPLOAD_LIST_LIMIT).await?;
    Ok(HttpResponse::Ok().json(UploadListResponse { uploads }))
}

pub async fn delete_upload(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let filename = path.into_inner();
    app_state
        .files
        .delete(app_state.store.as_ref(), &filename)
        .await?;

    Ok(HttpResponse::Ok().json(DeleteUploadResponse {
        success: true,
        message: String::from("File deleted"),
    }))
}
