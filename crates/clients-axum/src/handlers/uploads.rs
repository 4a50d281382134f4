//! Photo upload and retrieval handlers.

use axum::Json;
use axum::body::Body;
use axum::extract::rejection::PathRejection;
use axum::extract::{Multipart, Path, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use tokio_util::io::ReaderStream;

use clients_core::PhotoUpload;

use crate::dto::UploadResponse;
use crate::error::HttpError;
use crate::state::AppState;

/// Accept a multipart form with a `file` part and the client `id`.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), HttpError> {
    let mut file: Option<PhotoUpload> = None;
    let mut id: Option<i64> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| HttpError::BadRequest(e.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let original_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| HttpError::BadRequest(e.body_text()))?;
                file = Some(PhotoUpload {
                    original_name,
                    bytes: bytes.to_vec(),
                });
            }
            "id" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| HttpError::BadRequest(e.body_text()))?;
                let parsed = text
                    .trim()
                    .parse()
                    .map_err(|_| HttpError::BadRequest(format!("Invalid client id: {text}")))?;
                id = Some(parsed);
            }
            _ => {}
        }
    }

    let file = file.ok_or_else(|| missing_part("file"))?;
    let id = id.ok_or_else(|| missing_part("id"))?;

    let body = match state.core.clients().upload_photo(id, file).await? {
        Some(uploaded) => UploadResponse {
            message: Some(format!(
                "The photo was uploaded successfully: {}",
                uploaded.file_name
            )),
            client: Some(uploaded.client),
        },
        None => UploadResponse::default(),
    };

    Ok((StatusCode::CREATED, Json(body)))
}

/// Stream a stored photo back as an attachment.
pub async fn photo(
    State(state): State<AppState>,
    photo_name: Result<Path<String>, PathRejection>,
) -> Result<Response, HttpError> {
    let Path(photo_name) = photo_name?;
    let path = state.core.clients().locate_photo(&photo_name).await?;

    let file = tokio::fs::File::open(&path)
        .await
        .map_err(|_| HttpError::NotFound(format!("Error, could not load the image: {photo_name}")))?;

    let content_type = mime_guess::from_path(&path).first_or_octet_stream();
    let content_type = HeaderValue::from_str(content_type.as_ref())
        .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream"));
    let disposition = format!(
        "attachment; filename=\"{}\"",
        photo_name.replace('"', "\\\"")
    );
    let disposition = HeaderValue::from_bytes(disposition.as_bytes())
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"));

    let body = Body::from_stream(ReaderStream::new(file));
    Ok((
        [
            (header::CONTENT_TYPE, content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}

fn missing_part(name: &str) -> HttpError {
    HttpError::BadRequest(format!("Required part '{name}' is not present"))
}
