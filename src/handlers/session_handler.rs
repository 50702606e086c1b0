use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::RecordAnswerRequest,
    models::dto::response::{RestoreResponse, ResultsView, SessionView},
    models::SessionState,
};

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

#[get("/api/session")]
pub async fn get_session(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let store = state.session.read().await;
    Ok(HttpResponse::Ok().json(SessionView::from(store.session())))
}

#[post("/api/session/answers")]
pub async fn record_answer(
    state: web::Data<AppState>,
    request: web::Json<RecordAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let mut store = state.session.write().await;

    store.record_answer(request.question_index, request.answer)?;
    // The first recorded answer is what moves a ready quiz into progress.
    if store.session().state == SessionState::Ready {
        store.set_state(SessionState::InProgress);
    }

    Ok(HttpResponse::Ok().json(SessionView::from(store.session())))
}

/// Move forward one question; completing the quiz also writes its history
/// entry, exactly once per completion.
#[post("/api/session/advance")]
pub async fn advance_question(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let mut store = state.session.write().await;

    let was_completed = store.session().state == SessionState::Completed;
    store.advance();
    if !was_completed && store.session().state == SessionState::Completed {
        state.history.append(store.session())?;
    }

    Ok(HttpResponse::Ok().json(SessionView::from(store.session())))
}

#[post("/api/session/retreat")]
pub async fn retreat_question(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let mut store = state.session.write().await;
    store.retreat();
    Ok(HttpResponse::Ok().json(SessionView::from(store.session())))
}

#[post("/api/session/restore")]
pub async fn restore_session(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let mut store = state.session.write().await;
    let restored = store.load_saved()?;
    Ok(HttpResponse::Ok().json(RestoreResponse { restored }))
}

#[post("/api/session/reset")]
pub async fn reset_session(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let mut store = state.session.write().await;
    store.reset();
    Ok(HttpResponse::Ok().json(SessionView::from(store.session())))
}

#[get("/api/session/results")]
pub async fn get_results(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let store = state.session.read().await;

    if store.session().state != SessionState::Completed {
        return Err(AppError::Validation(
            "there is no completed quiz to summarize".to_string(),
        ));
    }

    Ok(HttpResponse::Ok().json(ResultsView::from(store.session())))
}
