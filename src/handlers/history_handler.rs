use actix_web::{delete, get, post, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::response::SessionView};

#[get("/api/history")]
pub async fn list_history(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let entries = state.history.entries()?;
    Ok(HttpResponse::Ok().json(entries))
}

#[delete("/api/history")]
pub async fn clear_history(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    state.history.clear()?;
    Ok(HttpResponse::NoContent().finish())
}

/// Start a past quiz over: same questions in a fresh random order, answers
/// and score cleared, adopted as the active session.
#[post("/api/history/{id}/replay")]
pub async fn replay_quiz(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let entry = state.history.find(&id)?;
    let session = state.history.replay(&entry);

    let mut store = state.session.write().await;
    store.adopt(session);

    Ok(HttpResponse::Ok().json(SessionView::from(store.session())))
}
