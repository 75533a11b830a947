use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::application::errors::ApplicationError;
use crate::core::model::TestResult;
use crate::shell::state::AppState;

pub async fn submit(
    State(state): State<AppState>,
    body: Result<Json<TestResult>, JsonRejection>,
) -> impl IntoResponse {
    let Json(result) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.submit_handler.handle(result).await {
        Ok(stored) => Json(stored).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn list_by_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.results.list_by_student(id).await {
        Ok(results) => Json(results).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn list_by_test(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match state.results.list_by_test(id).await {
        Ok(results) => Json(results).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn average(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match state.results.average(id).await {
        Ok(mean) => Json(mean).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn highest(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match state.results.highest(id).await {
        Ok(score) => Json(score).into_response(),
        Err(err) => err.into_response(),
    }
}
