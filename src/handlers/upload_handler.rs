use actix_web::{http::header, post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::{AppError, AppResult},
    models::dto::response::SessionView,
    models::UploadedFile,
};

/// Header carrying the uploaded file's name; the body is the raw file bytes
/// and `Content-Type` its declared MIME type.
pub const FILE_NAME_HEADER: &str = "X-File-Name";

#[post("/api/documents")]
pub async fn upload_document(
    state: web::Data<AppState>,
    request: HttpRequest,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let file = uploaded_file_from_request(&request, body)?;

    state.ingest.ingest(&state.session, file).await?;

    let store = state.session.read().await;
    Ok(HttpResponse::Created().json(SessionView::from(store.session())))
}

fn uploaded_file_from_request(request: &HttpRequest, body: web::Bytes) -> AppResult<UploadedFile> {
    let name = request
        .headers()
        .get(FILE_NAME_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .ok_or_else(|| {
            AppError::Validation(format!("missing or unreadable {} header", FILE_NAME_HEADER))
        })?;

    let mime_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        // Parameters like `; charset=utf-8` are not part of the media type.
        .map(|value| value.split(';').next().unwrap_or(value).trim().to_string())
        .ok_or_else(|| AppError::Validation("missing Content-Type header".to_string()))?;

    Ok(UploadedFile::new(name, mime_type, body.to_vec()))
}
