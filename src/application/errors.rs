// Application error kinds and their HTTP mapping.
//
// Responsibilities
// - Collect the terminal failure kinds every handler can produce.
// - Map each kind to a status code and a structured error body in one place.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::core::decide::DecideError;
use crate::core::ports::RegistryError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("id {0} is already registered")]
    DuplicateKey(i64),

    #[error("id {0} is not registered")]
    NotFound(i64),

    #[error("score {score} exceeds max score {max_score}")]
    InvalidScore { score: i64, max_score: i64 },

    #[error("no results recorded for test {0}")]
    NoData(i64),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl From<RegistryError> for ApplicationError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::DuplicateKey(id) => Self::DuplicateKey(id),
            RegistryError::NotFound(id) => Self::NotFound(id),
        }
    }
}

impl From<DecideError> for ApplicationError {
    fn from(err: DecideError) -> Self {
        match err {
            DecideError::ScoreExceedsMax { score, max_score } => {
                Self::InvalidScore { score, max_score }
            }
        }
    }
}

impl From<anyhow::Error> for ApplicationError {
    fn from(err: anyhow::Error) -> Self {
        Self::Unexpected(err.to_string())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::DuplicateKey(_) | Self::InvalidScore { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound(_) | Self::NoData(_) => StatusCode::NOT_FOUND,
            Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
