use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::application::errors::ApplicationError;
use crate::core::model::Student;
use crate::core::ports::StudentRegistry;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct StudentDeletedResponse {
    pub message: String,
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Student>, JsonRejection>,
) -> impl IntoResponse {
    let Json(student) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.students.insert(student).await {
        Ok(created) => Json(created).into_response(),
        Err(err) => ApplicationError::from(err).into_response(),
    }
}

pub async fn fetch(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match state.students.get(id).await {
        Ok(student) => Json(student).into_response(),
        Err(err) => ApplicationError::from(err).into_response(),
    }
}

pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    match state.students.list().await {
        Ok(students) => Json(students).into_response(),
        Err(err) => ApplicationError::from(err).into_response(),
    }
}

pub async fn remove(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    match state.students.remove(id).await {
        Ok(()) => Json(StudentDeletedResponse {
            message: format!("student {id} deleted"),
        })
        .into_response(),
        Err(err) => ApplicationError::from(err).into_response(),
    }
}
